use hdf5_fixtures::{FixtureConfig, FixtureGenerator, Result};

fn main() -> Result<()> {
    env_logger::init();
    FixtureGenerator::new(FixtureConfig::default()).generate()
}
