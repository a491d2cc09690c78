use std::path::{Path, PathBuf};

use hdf5_fixtures::{FixtureBuilder, FixtureConfig};

pub fn with_tmp_path<F: Fn(PathBuf)>(func: F) {
    let dir = tempfile::Builder::new().prefix("tmp").tempdir_in(".").unwrap();
    func(dir.path().join("t_big_str_dset.h5"))
}

pub fn config_at(path: &Path, length: usize) -> FixtureConfig {
    FixtureBuilder::new().path(path).length(length).finish().unwrap()
}
