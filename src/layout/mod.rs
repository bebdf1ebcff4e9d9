//! Deterministic layout module
//!
//! Turns a seed into a list of placed regions plus a fingerprint:
//! - Single generation pass, no feedback
//! - Fixed draw order per region
//! - Stable output order (by region id)
//! - No rendering or platform dependencies

pub mod fingerprint;
pub mod generate;
pub mod params;
pub mod region;

pub use fingerprint::{EMPTY_FINGERPRINT, fingerprint, layouts_match};
pub use generate::{LayoutResult, generate};
pub use params::{Bounds, GenerationVersion, LayoutParams, Placement, ShapeMode, SizeRange};
pub use region::{Aabb, Region, Shape};
