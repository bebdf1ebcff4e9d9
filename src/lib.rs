//! Seeded Layout - reproducible region placement for 2D scenes
//!
//! Core modules:
//! - `seed`: Seed values (integers, host floats, string parts)
//! - `stream`: Deterministic number stream (documented LCG)
//! - `layout`: Region generation and fingerprinting
//! - `settings`: Layout parameters, presets and JSON config
//! - `persistence`: Save/load with integrity verification
//! - `platform`: Browser bindings

pub mod error;
pub mod layout;
pub mod persistence;
pub mod platform;
pub mod seed;
pub mod settings;
pub mod stream;

pub use error::{LayoutError, PersistenceError, Result};
pub use layout::{
    Bounds, GenerationVersion, LayoutParams, LayoutResult, Placement, Region, Shape, ShapeMode,
    SizeRange, fingerprint, generate, layouts_match,
};
pub use seed::Seed;
pub use settings::Density;
pub use stream::Stream;

/// Generator configuration constants
pub mod consts {
    /// LCG multiplier `a`
    pub const LCG_MULTIPLIER: u64 = 9301;
    /// LCG increment `c`
    pub const LCG_INCREMENT: u64 = 49297;
    /// LCG modulus `M` (also the stream period upper bound)
    pub const LCG_MODULUS: u64 = 233_280;

    /// Default canvas dimensions
    pub const DEFAULT_WIDTH: i32 = 800;
    pub const DEFAULT_HEIGHT: i32 = 600;
    /// Default distance from the canvas edge for a region's reference point
    pub const DEFAULT_MARGIN: i32 = 50;
    /// Default region side length range (inclusive)
    pub const DEFAULT_MIN_SIZE: i32 = 60;
    pub const DEFAULT_MAX_SIZE: i32 = 150;
    /// Default region count
    pub const DEFAULT_COUNT: i32 = 5;

    /// Candidate draws per region before overlap-free placement gives up
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;
    /// Rotation is drawn in whole degrees from `0..=MAX_ROTATION`
    pub const MAX_ROTATION: i32 = 359;
}
