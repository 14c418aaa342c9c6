use std::path::Path;

use ::config::{Config as Sources, File, FileFormat};

use crate::config::Config;
use crate::errors::BrokerConfigResult;

/// Reads a broker configuration file, its format (JSON, TOML, YAML...) being guessed from its extension
pub fn from_file<P: AsRef<Path>>(path: P) -> BrokerConfigResult<Config> {
    let path = path.as_ref();
    log::debug!("Loading broker configuration from {:?}", path);
    let conf = Sources::builder()
        .add_source(File::from(path))
        .build()?
        .try_deserialize()?;
    Ok(conf)
}

/// Reads a broker configuration from an in-memory document in the given format
pub fn from_str(contents: &str, format: FileFormat) -> BrokerConfigResult<Config> {
    let conf = Sources::builder()
        .add_source(File::from_str(contents, format))
        .build()?
        .try_deserialize()?;
    Ok(conf)
}
