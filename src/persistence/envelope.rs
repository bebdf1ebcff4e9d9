//! Saved layout envelope
//!
//! Only the seed, parameters and fingerprint are stored. The regions are
//! regenerated on load, which is exactly what `verify` checks.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::layout::{LayoutParams, LayoutResult, generate};
use crate::seed::Seed;

/// Current envelope format
pub const FORMAT_VERSION: u32 = 1;

/// Fields covered by the digest, in serialization order
#[derive(Serialize)]
struct DigestInput<'a> {
    format_version: u32,
    params: &'a LayoutParams,
    seed: Seed,
    fingerprint: u32,
}

/// A stored layout reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLayout {
    pub format_version: u32,
    pub params: LayoutParams,
    pub seed: Seed,
    pub fingerprint: u32,
    /// BLAKE3 hex digest of the other fields
    pub digest: String,
}

fn compute_digest(
    format_version: u32,
    params: &LayoutParams,
    seed: Seed,
    fingerprint: u32,
) -> Result<String, PersistenceError> {
    let bytes = serde_json::to_vec(&DigestInput {
        format_version,
        params,
        seed,
        fingerprint,
    })?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

impl SavedLayout {
    /// Record a generated layout together with the parameters that produced it
    pub fn seal(result: &LayoutResult, params: &LayoutParams) -> Result<Self, PersistenceError> {
        let params = params.clone().with_version(result.version);
        let digest = compute_digest(FORMAT_VERSION, &params, result.seed, result.fingerprint)?;
        Ok(Self {
            format_version: FORMAT_VERSION,
            params,
            seed: result.seed,
            fingerprint: result.fingerprint,
            digest,
        })
    }

    /// Check the envelope version and digest
    pub fn validate(&self) -> Result<(), PersistenceError> {
        if self.format_version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(self.format_version));
        }
        let expected = compute_digest(
            self.format_version,
            &self.params,
            self.seed,
            self.fingerprint,
        )?;
        if expected != self.digest {
            return Err(PersistenceError::DigestMismatch {
                expected,
                found: self.digest.clone(),
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let saved: Self = serde_json::from_str(json)?;
        saved.validate()?;
        Ok(saved)
    }

    /// Regenerate the layout from the stored seed and parameters
    pub fn regenerate(&self) -> Result<LayoutResult, PersistenceError> {
        Ok(generate(self.seed, &self.params)?)
    }

    /// Regenerate and compare against the stored fingerprint
    pub fn verify(&self) -> Result<bool, PersistenceError> {
        let result = self.regenerate()?;
        let ok = result.fingerprint == self.fingerprint;
        if ok {
            log::info!("Layout seed {} verified ({:08x})", self.seed, self.fingerprint);
        } else {
            log::warn!(
                "Layout seed {} regenerated {:08x}, expected {:08x}",
                self.seed,
                result.fingerprint,
                self.fingerprint
            );
        }
        Ok(ok)
    }

    /// Write via `<path>.tmp`, keeping the previous save as `<path>.bak`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let tmp = tmp_path(path);
        std::fs::write(&tmp, self.to_json()?)?;
        if path.exists() {
            std::fs::rename(path, backup_path(path))?;
        }
        std::fs::rename(&tmp, path)?;
        log::info!("Layout saved to {} (seed {})", path.display(), self.seed);
        Ok(())
    }

    /// Load a save, falling back to the backup if the primary is corrupt
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        let primary = std::fs::read_to_string(path)
            .map_err(PersistenceError::from)
            .and_then(|json| Self::from_json(&json));

        match primary {
            Ok(saved) => Ok(saved),
            Err(err) => {
                let backup = backup_path(path);
                if !backup.exists() {
                    return Err(err);
                }
                log::warn!("Save at {} unusable ({err}), trying backup", path.display());
                let recovered = std::fs::read_to_string(&backup)
                    .map_err(PersistenceError::from)
                    .and_then(|json| Self::from_json(&json));
                match recovered {
                    Ok(saved) => {
                        log::info!("Recovered layout from {}", backup.display());
                        Ok(saved)
                    }
                    Err(backup_err) => {
                        log::warn!("Backup {} unusable too ({backup_err})", backup.display());
                        // The primary failure is the one the caller can act on
                        Err(err)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GenerationVersion;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("seeded_layout_{}_{}.json", name, std::process::id()))
    }

    fn cleanup(path: &Path) {
        let _ = std::fs::remove_file(path);
        let _ = std::fs::remove_file(backup_path(path));
        let _ = std::fs::remove_file(tmp_path(path));
    }

    fn sealed(seed: i64) -> SavedLayout {
        let params = LayoutParams::default();
        let result = generate(seed, &params).unwrap();
        SavedLayout::seal(&result, &params).unwrap()
    }

    #[test]
    fn test_seal_and_verify() {
        let saved = sealed(12345);
        assert_eq!(saved.format_version, FORMAT_VERSION);
        assert_eq!(saved.digest.len(), 64);
        assert!(saved.verify().unwrap());
    }

    #[test]
    fn test_seal_records_generation_version() {
        let params = LayoutParams::default().with_version(GenerationVersion::V2);
        let result = generate(5, &params).unwrap();
        let saved = SavedLayout::seal(&result, &LayoutParams::default()).unwrap();
        assert_eq!(saved.params.version, GenerationVersion::V2);
        assert!(saved.verify().unwrap());
    }

    #[test]
    fn test_tampering_is_detected() {
        let mut saved = sealed(1);
        saved.fingerprint ^= 1;
        let json = serde_json::to_string(&saved).unwrap();
        assert!(matches!(
            SavedLayout::from_json(&json),
            Err(PersistenceError::DigestMismatch { .. })
        ));
    }

    #[test]
    fn test_wrong_fingerprint_fails_verification() {
        let saved = sealed(1);
        let mut other = sealed(2);
        other.fingerprint = saved.fingerprint;
        // Re-seal the mismatched fingerprint so only verification can catch it
        other.digest = compute_digest(
            other.format_version,
            &other.params,
            other.seed,
            other.fingerprint,
        )
        .unwrap();
        assert!(other.validate().is_ok());
        assert!(!other.verify().unwrap());
    }

    #[test]
    fn test_unknown_format_version() {
        let mut saved = sealed(1);
        saved.format_version = 99;
        let json = serde_json::to_string(&saved).unwrap();
        assert!(matches!(
            SavedLayout::from_json(&json),
            Err(PersistenceError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn test_save_rotates_backup_and_recovers() {
        let path = temp_file("rotate");
        cleanup(&path);

        let first = sealed(10);
        let second = sealed(20);
        first.save(&path).unwrap();
        second.save(&path).unwrap();
        assert_eq!(SavedLayout::load(&path).unwrap(), second);
        assert!(backup_path(&path).exists());

        // Corrupt the primary; the backup (first save) is used instead
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(SavedLayout::load(&path).unwrap(), first);

        cleanup(&path);
    }

    #[test]
    fn test_primary_error_kept_when_backup_also_fails() {
        let path = temp_file("both_corrupt");
        cleanup(&path);

        let mut tampered = sealed(3);
        tampered.fingerprint ^= 1;
        std::fs::write(&path, serde_json::to_string(&tampered).unwrap()).unwrap();
        std::fs::write(backup_path(&path), "{ not json").unwrap();

        assert!(matches!(
            SavedLayout::load(&path),
            Err(PersistenceError::DigestMismatch { .. })
        ));

        cleanup(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_file("missing");
        cleanup(&path);
        assert!(matches!(
            SavedLayout::load(&path),
            Err(PersistenceError::Io(_))
        ));
    }
}
