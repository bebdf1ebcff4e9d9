//! Seeded layout generation
//!
//! One pass over `0..count`, drawing each region's fields from a fresh
//! stream in a fixed order. Nothing here reads time, entropy or globals.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::fingerprint::{fingerprint, layouts_match};
use super::params::{GenerationVersion, LayoutParams, Placement, ShapeMode};
use super::region::{Region, Shape};
use crate::consts::MAX_ROTATION;
use crate::error::{LayoutError, Result};
use crate::seed::Seed;
use crate::stream::Stream;

/// Output of one generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub seed: Seed,
    pub version: GenerationVersion,
    /// Generation order, ids `0..count`
    pub regions: Vec<Region>,
    pub fingerprint: u32,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Topmost (last generated) region whose outline contains `point`
    pub fn region_at(&self, point: DVec2) -> Option<&Region> {
        self.regions.iter().rev().find(|region| {
            region.bounding_box().contains_point(point) && region.contains_point(point)
        })
    }

    /// Regenerate from this result's seed and compare
    pub fn verify(&self, params: &LayoutParams) -> Result<bool> {
        let params = params.clone().with_version(self.version);
        let fresh = generate(self.seed, &params)?;
        let ok = layouts_match(self, &fresh);
        if !ok {
            log::warn!(
                "Layout mismatch for seed {}: stored {:08x}, regenerated {:08x}",
                self.seed,
                self.fingerprint,
                fresh.fingerprint
            );
        }
        Ok(ok)
    }
}

/// Generate `params.count` regions from `seed`
pub fn generate(seed: impl Into<Seed>, params: &LayoutParams) -> Result<LayoutResult> {
    let seed = seed.into();
    params.validate()?;

    let mut stream = Stream::new(seed);
    let count = params.count as usize;
    let mut regions = Vec::with_capacity(count);

    log::debug!(
        "Generating {} regions (seed {}, {:?}, {:?})",
        count,
        seed,
        params.version,
        params.placement
    );

    for i in 0..count {
        let id = i as u32;
        let region = match params.version {
            GenerationVersion::V1 => draw_region(&mut stream, params, id)?,
            GenerationVersion::V2 => place_without_overlap(&mut stream, params, id, &regions)?,
        };
        regions.push(region);
    }

    let fingerprint = fingerprint(&regions);
    log::debug!("Layout seed {} -> fingerprint {:08x}", seed, fingerprint);

    Ok(LayoutResult {
        seed,
        version: params.version,
        regions,
        fingerprint,
    })
}

/// Draw one region's fields in their fixed order
fn draw_region(stream: &mut Stream, params: &LayoutParams, id: u32) -> Result<Region> {
    let width = i64::from(params.bounds.width);
    let height = i64::from(params.bounds.height);
    let margin = i64::from(params.margin);
    let top = margin + i64::from(params.header_margin);
    let min_size = i64::from(params.size_range.min);
    let max_size = i64::from(params.size_range.max);

    let (x, y, w, h) = match params.placement {
        Placement::Anchor => {
            let x = stream.between(margin, width - margin)?;
            let y = stream.between(top, height - margin)?;
            let w = stream.between(min_size, max_size)?;
            let h = stream.between(min_size, max_size)?;
            (x, y, w, h)
        }
        Placement::Contained => {
            let w = stream.between(min_size, max_size)?;
            let h = stream.between(min_size, max_size)?;
            let x = stream.between(margin, width - margin - w)?;
            let y = stream.between(top, height - margin - h)?;
            (x, y, w, h)
        }
    };

    let rotation = if params.rotation {
        Some(stream.between(0, i64::from(MAX_ROTATION))? as i32)
    } else {
        None
    };

    let shape = match params.shape {
        ShapeMode::Rect => Shape::Rect,
        ShapeMode::Circle => Shape::Circle,
        ShapeMode::Mixed => {
            if stream.between(0, 1)? == 0 {
                Shape::Rect
            } else {
                Shape::Circle
            }
        }
    };

    // All draws are bounded by validated i32 inputs
    Ok(Region {
        id,
        x: x as i32,
        y: y as i32,
        width: w as i32,
        height: h as i32,
        rotation,
        shape,
    })
}

/// Rejection sampling: keep the first candidate whose bounding box clears
/// every earlier region
fn place_without_overlap(
    stream: &mut Stream,
    params: &LayoutParams,
    id: u32,
    placed: &[Region],
) -> Result<Region> {
    for attempt in 0..params.max_attempts {
        let candidate = draw_region(stream, params, id)?;
        let bounds = candidate.bounding_box();
        if placed
            .iter()
            .all(|other| !other.bounding_box().intersects(&bounds))
        {
            return Ok(candidate);
        }
        log::trace!("Region {} attempt {} overlaps, redrawing", id, attempt);
    }

    log::debug!(
        "Gave up placing region {} after {} attempts",
        id,
        params.max_attempts
    );
    Err(LayoutError::PlacementExhausted {
        placed: placed.len(),
        requested: params.count as usize,
    })
}
