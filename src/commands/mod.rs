//! CLI command implementations.
//!
//! Available commands:
//! - **show**: Classify a wheel and print one of its reports
//! - **init**: Write a default `.wheeldex.toml`

pub mod init;
pub mod show;

pub use init::init_config;
pub use show::{handle_show, ShowConfig};
