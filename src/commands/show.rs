use crate::config::WheeldexConfig;
use crate::io::{create_writer, ColorMode, OutputFormat, ReportKind};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ShowConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub report: ReportKind,
    pub output: Option<PathBuf>,
    pub color: ColorMode,
}

impl ShowConfig {
    /// Merge command line choices over the loaded configuration file
    pub fn resolve(
        path: PathBuf,
        format: Option<OutputFormat>,
        report: Option<ReportKind>,
        output: Option<PathBuf>,
        plain: bool,
        config: &WheeldexConfig,
    ) -> Self {
        let color = match (plain, config.use_color()) {
            (true, _) | (false, Some(false)) => ColorMode::Never,
            (false, Some(true)) => ColorMode::Always,
            (false, None) => ColorMode::Auto,
        };
        // Files never get escape codes
        let color = if output.is_some() {
            ColorMode::Never
        } else {
            color
        };

        Self {
            path,
            format: format.unwrap_or_else(|| config.format()),
            report: report.unwrap_or_else(|| config.report()),
            output,
            color,
        }
    }
}

pub fn handle_show(config: ShowConfig) -> Result<()> {
    let index = crate::index_wheel(&config.path)
        .with_context(|| format!("Failed to inspect {}", config.path.display()))?;

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    configure_output(config.color);
    let mut writer = create_writer(config.format, sink, config.color);
    writer.write_report(&index, config.report)?;
    writer.flush().with_context(|| match &config.output {
        Some(path) => format!("Failed to write {}", path.display()),
        None => "Failed to write to stdout".to_string(),
    })?;
    Ok(())
}

fn configure_output(color: ColorMode) {
    if color.should_use_color() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }
}
