//! Placed regions and their geometry
//!
//! A region's `(x, y)` is the top-left corner of its unrotated bounding box,
//! the same convention a host uses for `fillRect(x, y, w, h)`. Rotation is
//! about the box center, in whole degrees.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Region outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Rect,
    /// Ellipse inscribed in the region's box
    Circle,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Rect => "rect",
            Shape::Circle => "circle",
        }
    }
}

/// One placed shape in a generated layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Insertion order within the layout
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Degrees, present only when the layout draws rotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    #[serde(default)]
    pub shape: Shape,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn from_center(center: DVec2, half_extents: DVec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Interiors intersect (shared edges do not count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn contains_point(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl Region {
    /// Unrotated rectangle at the given position
    pub fn rect(id: u32, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            rotation: None,
            shape: Shape::Rect,
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(f64::from(self.width), f64::from(self.height))
    }

    /// Center of the region's box
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(f64::from(self.x), f64::from(self.y)) + self.size() * 0.5
    }

    /// Conservative world-space bounding box.
    ///
    /// Quarter turns swap the extents; any other angle falls back to the
    /// circumscribed circle. Only `sqrt` is used so the result is identical
    /// on every IEEE 754 platform.
    pub fn bounding_box(&self) -> Aabb {
        let half = self.size() * 0.5;
        let half_extents = match self.rotation.map(|r| r.rem_euclid(180)) {
            None | Some(0) => half,
            Some(90) => DVec2::new(half.y, half.x),
            Some(_) => DVec2::splat(half.length()),
        };
        Aabb::from_center(self.center(), half_extents)
    }

    /// Hit test against the region's actual outline
    pub fn contains_point(&self, point: DVec2) -> bool {
        let mut local = point - self.center();
        if let Some(degrees) = self.rotation {
            let angle = -f64::from(degrees).to_radians();
            local = DVec2::from_angle(angle).rotate(local);
        }
        let half = self.size() * 0.5;
        match self.shape {
            Shape::Rect => local.abs().cmple(half).all(),
            Shape::Circle => {
                if half.x <= 0.0 || half.y <= 0.0 {
                    return false;
                }
                (local / half).length_squared() <= 1.0
            }
        }
    }

    /// Numeric fields in fingerprint order
    pub(crate) fn fingerprint_fields(&self) -> impl Iterator<Item = i32> + '_ {
        const CIRCLE_SENTINEL: i32 = -1;

        [self.x, self.y, self.width, self.height]
            .into_iter()
            .chain(self.rotation)
            .chain((self.shape == Shape::Circle).then_some(CIRCLE_SENTINEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_box() {
        let r = Region::rect(0, 10, 20, 40, 10);
        assert_eq!(r.center(), DVec2::new(30.0, 25.0));
        let b = r.bounding_box();
        assert_eq!(b.min, DVec2::new(10.0, 20.0));
        assert_eq!(b.max, DVec2::new(50.0, 30.0));
    }

    #[test]
    fn test_quarter_turn_swaps_extents() {
        let mut r = Region::rect(0, 0, 0, 40, 10);
        r.rotation = Some(270);
        let b = r.bounding_box();
        assert_eq!(b.max - b.min, DVec2::new(10.0, 40.0));
        assert_eq!(b.min, DVec2::new(15.0, -15.0));
    }

    #[test]
    fn test_oblique_rotation_uses_circumcircle() {
        let mut r = Region::rect(0, 0, 0, 30, 40);
        r.rotation = Some(45);
        let b = r.bounding_box();
        // Half diagonal of a 30x40 box is 25
        assert_eq!(b.max - b.min, DVec2::splat(50.0));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_intersect() {
        let a = Region::rect(0, 0, 0, 10, 10).bounding_box();
        let b = Region::rect(1, 10, 0, 10, 10).bounding_box();
        let c = Region::rect(2, 9, 9, 10, 10).bounding_box();
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_contains_point_rect_and_circle() {
        let rect = Region::rect(0, 0, 0, 100, 50);
        assert!(rect.contains_point(DVec2::new(1.0, 1.0)));
        assert!(!rect.contains_point(DVec2::new(101.0, 1.0)));

        let circle = Region {
            shape: Shape::Circle,
            ..Region::rect(1, 0, 0, 100, 50)
        };
        assert!(circle.contains_point(DVec2::new(50.0, 25.0)));
        // Box corner lies outside the inscribed ellipse
        assert!(!circle.contains_point(DVec2::new(1.0, 1.0)));
        assert!(circle.bounding_box().contains_point(DVec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_contains_point_rotated() {
        let mut r = Region::rect(0, 0, 0, 100, 10);
        // Long axis becomes vertical, centered at (50, 5)
        r.rotation = Some(90);
        assert!(r.contains_point(DVec2::new(50.0, 40.0)));
        assert!(!r.contains_point(DVec2::new(90.0, 5.0)));
    }

    #[test]
    fn test_fingerprint_fields() {
        let mut r = Region::rect(3, 1, 2, 3, 4);
        assert_eq!(r.fingerprint_fields().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        r.rotation = Some(90);
        r.shape = Shape::Circle;
        assert_eq!(
            r.fingerprint_fields().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 90, -1]
        );
    }
}
