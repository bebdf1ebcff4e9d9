//! Generation parameters
//!
//! Everything besides the seed that influences a layout lives here. Two
//! layouts are reproducible only if seed *and* parameters match, so the
//! whole struct is serialized next to saved fingerprints.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{LayoutError, Result};

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Inclusive range for region width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: i32,
    pub max: i32,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SIZE,
            max: DEFAULT_MAX_SIZE,
        }
    }
}

/// Which shapes the generator emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    #[default]
    Rect,
    Circle,
    /// One extra draw per region picks rect (0) or circle (1)
    Mixed,
}

/// How the drawn position relates to the margin box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Position drawn first; only the reference corner is kept inside the margins
    #[default]
    Anchor,
    /// Size drawn first; the whole region is kept inside the margins
    Contained,
}

/// Generation algorithm version.
///
/// Changing what a seed produces requires a new version so saved
/// fingerprints for existing seeds keep verifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationVersion {
    /// Independent draws per region, overlaps allowed
    #[default]
    V1,
    /// Rejection sampling against earlier regions' bounding boxes
    V2,
}

/// Full parameter set for `generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Number of regions (must be >= 0)
    pub count: i32,
    pub bounds: Bounds,
    /// Minimum distance from every canvas edge
    pub margin: i32,
    /// Reserved strip at the top of the canvas (HUD space)
    pub header_margin: i32,
    pub size_range: SizeRange,
    /// Draw a rotation in `0..=359` degrees per region
    pub rotation: bool,
    pub shape: ShapeMode,
    pub placement: Placement,
    pub version: GenerationVersion,
    /// Candidate draws per region (V2 only)
    pub max_attempts: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            bounds: Bounds::default(),
            margin: DEFAULT_MARGIN,
            header_margin: 0,
            size_range: SizeRange::default(),
            rotation: false,
            shape: ShapeMode::Rect,
            placement: Placement::Anchor,
            version: GenerationVersion::V1,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl LayoutParams {
    /// Parameters with every optional knob at its default
    pub fn new(count: i32, bounds: Bounds, margin: i32, size_range: SizeRange) -> Self {
        Self {
            count,
            bounds,
            margin,
            size_range,
            ..Self::default()
        }
    }

    pub fn with_header_margin(mut self, header_margin: i32) -> Self {
        self.header_margin = header_margin;
        self
    }

    pub fn with_version(mut self, version: GenerationVersion) -> Self {
        self.version = version;
        self
    }

    /// Check every input without drawing anything.
    ///
    /// Order: count, size range, bounds, attempts.
    pub fn validate(&self) -> Result<()> {
        if self.count < 0 {
            return Err(LayoutError::InvalidCount(i64::from(self.count)));
        }

        let SizeRange { min, max } = self.size_range;
        if min < 0 || min > max {
            return Err(LayoutError::InvalidSizeRange {
                min: i64::from(min),
                max: i64::from(max),
            });
        }

        let width = i64::from(self.bounds.width);
        let height = i64::from(self.bounds.height);
        let margin = i64::from(self.margin);
        let header = i64::from(self.header_margin);

        if width <= 0 || height <= 0 {
            return Err(LayoutError::InvalidBounds(format!(
                "canvas {width}x{height} has no area"
            )));
        }
        if margin < 0 || header < 0 {
            return Err(LayoutError::InvalidBounds(format!(
                "negative margin ({margin}) or header margin ({header})"
            )));
        }
        if margin * 2 >= width {
            return Err(LayoutError::InvalidBounds(format!(
                "margin {margin} leaves no horizontal room in width {width}"
            )));
        }
        if margin * 2 + header >= height {
            return Err(LayoutError::InvalidBounds(format!(
                "margin {margin} and header {header} leave no vertical room in height {height}"
            )));
        }

        if self.placement == Placement::Contained {
            let max = i64::from(max);
            if max > width - margin * 2 || max > height - margin * 2 - header {
                return Err(LayoutError::InvalidBounds(format!(
                    "regions up to {max}px do not fit inside the margins"
                )));
            }
        }

        if self.version == GenerationVersion::V2 && self.max_attempts == 0 {
            return Err(LayoutError::InvalidAttempts);
        }

        Ok(())
    }
}
