//! Configuration loaded from `.wheeldex.toml`.
//!
//! The file is looked up from the current directory upwards. Command line
//! flags take precedence over anything set here.

mod core;
mod loader;

pub use self::core::{OutputConfig, WheeldexConfig, DEFAULT_CONFIG};
pub use self::loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};
