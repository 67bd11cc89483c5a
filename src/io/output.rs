use crate::modules::ModuleRecord;
use crate::summary::WheelIndex;
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::io::{IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Which view of the wheel to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Top-level modules followed by the contents of each namespace package
    #[default]
    Summary,
    /// Only the namespace packages and their direct contents
    Namespaces,
    /// Everything importable from the archive root
    Reachable,
    /// Every classified module with its kind and archive path
    Modules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, index: &WheelIndex, report: ReportKind) -> anyhow::Result<()>;

    /// Push buffered output to the sink, surfacing any write error
    fn flush(&mut self) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, index: &WheelIndex, report: ReportKind) -> anyhow::Result<()> {
        let value = match report {
            ReportKind::Summary => json!({
                "top_level": index.top_level_modules(),
                "namespace_packages": index.namespace_contents(),
            }),
            ReportKind::Namespaces => json!({
                "namespace_packages": index.namespace_contents(),
            }),
            ReportKind::Reachable => json!({
                "reachable": index.reachable_modules(),
            }),
            ReportKind::Modules => json!({
                "modules": index.modules_by_path(),
                "namespace_packages": index.namespace_packages(),
            }),
        };
        serde_json::to_writer_pretty(&mut self.writer, &value)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    fn heading(&self, text: String) -> String {
        if self.color {
            text.as_str().bold().to_string()
        } else {
            text
        }
    }

    fn namespace_heading(&self, name: &str, count: usize) -> String {
        if self.color {
            format!("{} namespace package ({count}):", name.cyan().bold())
        } else {
            format!("{name} namespace package ({count}):")
        }
    }

    fn write_top_level(&mut self, index: &WheelIndex) -> anyhow::Result<()> {
        let top_level = index.top_level_modules();
        let heading = self.heading(format!("{} top-level modules:", top_level.len()));
        writeln!(self.writer, "{heading}")?;
        for name in &top_level {
            writeln!(self.writer, "  {name}")?;
        }
        Ok(())
    }

    fn write_namespaces(&mut self, index: &WheelIndex) -> anyhow::Result<()> {
        for (package, contents) in index.namespace_contents() {
            let heading = self.namespace_heading(&package, contents.len());
            writeln!(self.writer, "{heading}")?;
            for name in &contents {
                writeln!(self.writer, "  {name}")?;
            }
        }
        Ok(())
    }

    fn write_reachable(&mut self, index: &WheelIndex) -> anyhow::Result<()> {
        let names = index.reachable_names();
        let heading = self.heading(format!("{} importable names:", names.len()));
        writeln!(self.writer, "{heading}")?;
        for name in &names {
            writeln!(self.writer, "  {name}")?;
        }
        Ok(())
    }

    fn write_modules(&mut self, index: &WheelIndex) -> anyhow::Result<()> {
        let modules = index.modules_by_path();
        let heading = self.heading(format!("{} modules:", modules.len()));
        writeln!(self.writer, "{heading}")?;

        let width = modules
            .iter()
            .map(|m| m.module_name().len())
            .max()
            .unwrap_or(0);
        for module in modules {
            self.write_module_line(module, width)?;
        }
        Ok(())
    }

    fn write_module_line(&mut self, module: &ModuleRecord, width: usize) -> anyhow::Result<()> {
        let kind = module.kind().as_str();
        let kind = if self.color {
            kind.dimmed().to_string()
        } else {
            kind.to_string()
        };
        writeln!(
            self.writer,
            "  {:<width$}  {:<17}  {}",
            module.module_name(),
            kind,
            module.archive_path()
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, index: &WheelIndex, report: ReportKind) -> anyhow::Result<()> {
        match report {
            ReportKind::Summary => {
                self.write_top_level(index)?;
                self.write_namespaces(index)?;
            }
            ReportKind::Namespaces => self.write_namespaces(index)?,
            ReportKind::Reachable => self.write_reachable(index)?,
            ReportKind::Modules => self.write_modules(index)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    color: ColorMode,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, color.should_use_color())),
    }
}
