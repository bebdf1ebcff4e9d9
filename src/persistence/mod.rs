//! Save/load persistence with integrity verification
//!
//! Features:
//! - Versioned JSON envelope
//! - BLAKE3 integrity digest
//! - Backup rotation (tmp → save, old save → backup)
//! - Corruption detection and recovery

pub mod envelope;

pub use envelope::{FORMAT_VERSION, SavedLayout};
