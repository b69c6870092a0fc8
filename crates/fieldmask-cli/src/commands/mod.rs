pub mod config;
pub mod fields;
pub mod mask;
pub mod obscure;

use anyhow::Result;
use fieldmask_config::Config;
use std::path::Path;

/// Load an explicit config file, or the user config when none is given
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
