//! Platform abstraction layer
//!
//! Browser hosts call into the generator through `web` (wasm32 only).
//! Native hosts use the library API directly.

#[cfg(target_arch = "wasm32")]
pub mod web;
