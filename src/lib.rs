//! Generator for an HDF5 test fixture holding very long variable-length strings.
//!
//! The fixture contains a single one-dimensional dataset whose records are all the same
//! random lowercase string, longer than the signed 16-bit length limit that some legacy
//! readers impose on strings.

#[macro_use]
mod macros;

mod config;
mod error;
mod fixture;
mod gen;
mod inspect;


pub use crate::config::{
    CleanupPolicy, FixtureBuilder, FixtureConfig, DEFAULT_DATASET_NAME, DEFAULT_OUTPUT_PATH,
    DEFAULT_RECORD_COUNT, DEFAULT_RECORD_LENGTH, LEGACY_STRING_LIMIT,
};
pub use crate::error::{Error, Result};
pub use crate::fixture::{generate, FixtureGenerator};
pub use crate::gen::gen_lowercase;
pub use crate::inspect::{inspect, FixtureSummary};
