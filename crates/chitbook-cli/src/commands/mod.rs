//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use chitbook_core::ChitConfig;

/// Load configuration from an explicit path, the default location, or
/// built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ChitConfig> {
    if let Some(path) = config_path {
        return Ok(ChitConfig::from_file(std::path::Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(ChitConfig::from_file(&default_path)?)
    } else {
        Ok(ChitConfig::default())
    }
}
