//! Layout fingerprints
//!
//! 32-bit rolling hash `h = h * 31 + field (mod 2^32)` over every region's
//! fields in list order. Fields are folded as two's-complement `u32`, so the
//! value matches `((h << 5) - h + field) & 0xFFFFFFFF` computed in any
//! language.

use super::generate::LayoutResult;
use super::region::Region;

/// Fingerprint of a layout with no regions
pub const EMPTY_FINGERPRINT: u32 = 0;

#[inline]
fn fold(hash: u32, field: i32) -> u32 {
    (hash << 5).wrapping_sub(hash).wrapping_add(field as u32)
}

/// Order-sensitive fingerprint of `(x, y, width, height[, rotation][, shape])`
pub fn fingerprint(regions: &[Region]) -> u32 {
    regions
        .iter()
        .flat_map(Region::fingerprint_fields)
        .fold(EMPTY_FINGERPRINT, fold)
}

/// Same fingerprint and same region list
pub fn layouts_match(a: &LayoutResult, b: &LayoutResult) -> bool {
    a.fingerprint == b.fingerprint && a.regions == b.regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Shape;

    #[test]
    fn test_empty_fingerprint() {
        assert_eq!(fingerprint(&[]), EMPTY_FINGERPRINT);
    }

    #[test]
    fn test_known_value() {
        // ((((0*31+1)*31+2)*31+3)*31+4) = 1*29791 + 2*961 + 3*31 + 4
        let regions = [Region::rect(0, 1, 2, 3, 4)];
        assert_eq!(fingerprint(&regions), 29791 + 1922 + 93 + 4);
    }

    #[test]
    fn test_negative_fields_wrap() {
        let regions = [Region::rect(0, 0, 0, 0, -1)];
        assert_eq!(fingerprint(&regions), u32::MAX);
    }

    #[test]
    fn test_order_sensitive() {
        let a = Region::rect(0, 10, 20, 30, 40);
        let b = Region::rect(1, 50, 60, 70, 80);
        assert_ne!(
            fingerprint(&[a.clone(), b.clone()]),
            fingerprint(&[b, a])
        );
    }

    #[test]
    fn test_every_field_matters() {
        let base = Region::rect(0, 100, 200, 60, 80);
        let fp = fingerprint(std::slice::from_ref(&base));

        let mutations: [fn(&mut Region); 6] = [
            |r| r.x += 1,
            |r| r.y += 1,
            |r| r.width += 1,
            |r| r.height += 1,
            |r| r.rotation = Some(0),
            |r| r.shape = Shape::Circle,
        ];
        for mutate in mutations {
            let mut changed = base.clone();
            mutate(&mut changed);
            assert_ne!(fingerprint(&[changed]), fp);
        }
    }
}
