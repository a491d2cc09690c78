use std::fs;
use std::path::Path;

use hdf5::types::VarLenUnicode;
use hdf5::File;
use log::{debug, info, warn};
use ndarray::Array1;
use rand::prelude::{Rng, SeedableRng, SmallRng};
use scopeguard::ScopeGuard;

use crate::config::{CleanupPolicy, FixtureConfig, LEGACY_STRING_LIMIT};
use crate::error::{Error, Result};
use crate::gen::gen_lowercase;

/// Writes a dataset of identical long variable-length strings into a fresh HDF5 file.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    config: FixtureConfig,
}

impl FixtureGenerator {
    pub fn new(config: FixtureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Generates a single random record of the configured length.
    pub fn record<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<VarLenUnicode> {
        gen_lowercase(rng, self.config.length)
            .parse::<VarLenUnicode>()
            .map_err(|err| Error::from(format!("Invalid record: {}", err)))
    }

    /// Generates the record set: one random record repeated `record_count` times.
    pub fn records<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Array1<VarLenUnicode>> {
        let record = self.record(rng)?;
        Ok(Array1::from_elem(self.config.record_count, record))
    }

    /// Generates the fixture, seeding the RNG from the config if a seed is set.
    pub fn generate(&self) -> Result<()> {
        match self.config.seed {
            Some(seed) => self.generate_with_rng(&mut SmallRng::seed_from_u64(seed)),
            None => self.generate_with_rng(&mut rand::thread_rng()),
        }
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        let config = &self.config;
        config.validate()?;
        if !config.exceeds_legacy_limit() {
            warn!(
                "Record length {} does not exceed the legacy limit of {}",
                config.length, LEGACY_STRING_LIMIT
            );
        }
        info!(
            "Generating {} records of {} characters into {}",
            config.record_count,
            config.length,
            config.path.display()
        );
        let records = self.records(rng)?;
        write_records(&config.path, &config.dataset, &records, config.cleanup)?;
        info!("Wrote dataset \"{}\" to {}", config.dataset, config.path.display());
        Ok(())
    }
}

/// Generates a fixture for the given config.
pub fn generate(config: &FixtureConfig) -> Result<()> {
    FixtureGenerator::new(config.clone()).generate()
}

fn write_records(
    path: &Path, dataset: &str, records: &Array1<VarLenUnicode>, cleanup: CleanupPolicy,
) -> Result<()> {
    // The guard owns the file so that the handle is released before any cleanup.
    let file = scopeguard::guard(File::create(path)?, |file| {
        drop(file);
        discard_partial(path, cleanup);
    });
    debug!("Created {}", path.display());
    {
        let ds = file.new_dataset::<VarLenUnicode>().shape(records.len()).create(dataset)?;
        debug!("Created dataset \"{}\" with shape {:?}", dataset, ds.shape());
        ds.write(records.view())?;
    }
    file.flush()?;
    close_or_discard(ScopeGuard::into_inner(file), path, cleanup, File::close)
}

/// Closes the file, applying the cleanup policy if the close itself fails.
fn close_or_discard<F>(file: File, path: &Path, cleanup: CleanupPolicy, close: F) -> Result<()>
where
    F: FnOnce(File) -> hdf5::Result<()>,
{
    if let Err(err) = close(file) {
        discard_partial(path, cleanup);
        return Err(err.into());
    }
    debug!("Closed {}", path.display());
    Ok(())
}

fn discard_partial(path: &Path, cleanup: CleanupPolicy) {
    match cleanup {
        CleanupPolicy::Keep => {
            warn!("Generation failed, leaving partially written {}", path.display());
        }
        CleanupPolicy::Remove => match fs::remove_file(path) {
            Ok(()) => warn!("Generation failed, removed partially written {}", path.display()),
            Err(err) => warn!("Unable to remove {}: {}", path.display(), err),
        },
    }
}
