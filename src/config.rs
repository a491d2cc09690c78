use std::path::{Path, PathBuf};

use crate::error::Result;

/// Longest string length accepted by legacy readers (signed 16-bit maximum).
pub const LEGACY_STRING_LIMIT: usize = i16::MAX as usize;

/// Default length of each record, one past the legacy limit.
pub const DEFAULT_RECORD_LENGTH: usize = LEGACY_STRING_LIMIT + 1;

pub const DEFAULT_RECORD_COUNT: usize = 2;

pub const DEFAULT_OUTPUT_PATH: &str = "t_big_str_dset.h5";

pub const DEFAULT_DATASET_NAME: &str = "arr_big_dset";

/// What to do with the output file if generation fails after it was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupPolicy {
    /// Leave the partially written file in place.
    Keep,
    /// Delete the partially written file.
    Remove,
}

impl Default for CleanupPolicy {
    fn default() -> Self {
        Self::Keep
    }
}

/// Fixture generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Length of each record in characters.
    pub length: usize,
    /// Destination file path; an existing file is truncated.
    pub path: PathBuf,
    /// Number of (identical) records in the dataset.
    pub record_count: usize,
    /// Name of the dataset inside the file.
    pub dataset: String,
    pub cleanup: CleanupPolicy,
    /// Seed for a reproducible payload; thread-local entropy is used if not set.
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_RECORD_LENGTH,
            path: DEFAULT_OUTPUT_PATH.into(),
            record_count: DEFAULT_RECORD_COUNT,
            dataset: DEFAULT_DATASET_NAME.into(),
            cleanup: CleanupPolicy::default(),
            seed: None,
        }
    }
}

impl FixtureConfig {
    pub fn builder() -> FixtureBuilder {
        FixtureBuilder::new()
    }

    /// Returns true if the records are longer than legacy readers allow.
    pub fn exceeds_legacy_limit(&self) -> bool {
        self.length > LEGACY_STRING_LIMIT
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.record_count > 0, "Record count must be positive");
        ensure!(!self.dataset.is_empty(), "Dataset name must not be empty");
        ensure!(!self.path.as_os_str().is_empty(), "Output path must not be empty");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixtureBuilder {
    config: FixtureConfig,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&mut self, length: usize) -> &mut Self {
        self.config.length = length;
        self
    }

    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        self.config.path = path.as_ref().into();
        self
    }

    pub fn record_count(&mut self, record_count: usize) -> &mut Self {
        self.config.record_count = record_count;
        self
    }

    pub fn dataset(&mut self, dataset: &str) -> &mut Self {
        self.config.dataset = dataset.into();
        self
    }

    pub fn cleanup(&mut self, cleanup: CleanupPolicy) -> &mut Self {
        self.config.cleanup = cleanup;
        self
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validates the settings and returns the resulting config.
    pub fn finish(&self) -> Result<FixtureConfig> {
        self.config.validate()?;
        Ok(self.config.clone())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_defaults() {
        let config = FixtureConfig::default();
        assert_eq!(config.length, 32768);
        assert_eq!(config.path, PathBuf::from("t_big_str_dset.h5"));
        assert_eq!(config.record_count, 2);
        assert_eq!(config.dataset, "arr_big_dset");
        assert_eq!(config.cleanup, CleanupPolicy::Keep);
        assert_eq!(config.seed, None);
        assert!(config.exceeds_legacy_limit());
        assert_eq!(FixtureBuilder::new().finish().unwrap(), config);
    }

    #[test]
    pub fn test_legacy_limit() {
        assert_eq!(LEGACY_STRING_LIMIT, 32767);
        let config = FixtureBuilder::new().length(32767).finish().unwrap();
        assert!(!config.exceeds_legacy_limit());
    }

    #[test]
    pub fn test_builder() {
        let config = FixtureBuilder::new()
            .length(10)
            .path("foo.h5")
            .dataset("bar")
            .cleanup(CleanupPolicy::Remove)
            .seed(42)
            .finish()
            .unwrap();
        assert_eq!(config.length, 10);
        assert_eq!(config.path, PathBuf::from("foo.h5"));
        assert_eq!(config.dataset, "bar");
        assert_eq!(config.cleanup, CleanupPolicy::Remove);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    pub fn test_invalid() {
        assert_err!(FixtureBuilder::new().record_count(0).finish(), "Record count must be positive");
        assert_err!(FixtureBuilder::new().dataset("").finish(), "Dataset name must not be empty");
        assert_err!(FixtureBuilder::new().path("").finish(), "Output path must not be empty");
    }
}
