use crate::io::{OutputFormat, ReportKind};
use serde::{Deserialize, Serialize};

/// Root configuration structure for wheeldex
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WheeldexConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Default output format (terminal or json)
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Default report shown by `wheeldex show`
    #[serde(default)]
    pub report: Option<ReportKind>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl WheeldexConfig {
    pub fn format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    pub fn report(&self) -> ReportKind {
        self.output
            .as_ref()
            .and_then(|o| o.report)
            .unwrap_or_default()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}

/// Contents written by `wheeldex init`
pub const DEFAULT_CONFIG: &str = r#"# Wheeldex Configuration

[output]
# terminal or json
format = "terminal"
# summary, namespaces, reachable or modules
report = "summary"
"#;
