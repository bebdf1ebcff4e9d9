//! Layout settings and presets
//!
//! Parameters are stored as JSON next to the seed so a layout can be
//! reproduced across sessions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::layout::LayoutParams;

/// Region density presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Density {
    Sparse,
    #[default]
    Standard,
    Dense,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Sparse => "Sparse",
            Density::Standard => "Standard",
            Density::Dense => "Dense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sparse" | "low" => Some(Density::Sparse),
            "standard" | "std" | "medium" => Some(Density::Standard),
            "dense" | "high" => Some(Density::Dense),
            _ => None,
        }
    }

    /// Region count for this preset
    pub fn region_count(&self) -> i32 {
        match self {
            Density::Sparse => 5,
            Density::Standard => 10,
            Density::Dense => 20,
        }
    }
}

impl LayoutParams {
    /// Default parameters with the preset's region count
    pub fn from_preset(preset: Density) -> Self {
        Self {
            count: preset.region_count(),
            ..Self::default()
        }
    }

    /// Apply a density preset (only the count changes)
    pub fn apply_preset(&mut self, preset: Density) {
        self.count = preset.region_count();
    }

    /// Parse and validate; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load parameters from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let params = Self::from_json(&json)?;
        log::info!("Loaded layout parameters from {}", path.display());
        Ok(params)
    }

    /// Save parameters to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Layout parameters saved to {}", path.display());
        Ok(())
    }
}
