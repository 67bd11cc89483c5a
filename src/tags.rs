//! Wheel compatibility tags and filename parsing.
//!
//! A wheel is named `{name}-{version}-{tag}.whl` where the tag is itself the
//! dash-separated triple `interpreter-abi-platform`, e.g.
//! `cp36-cp36m-manylinux1_i686`. Only the tag influences classification; the
//! name and version are kept for reporting.

use crate::errors::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Interpreter, ABI and platform parts of a wheel compatibility tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CompatibilityTag {
    pub interpreter: String,
    pub abi: String,
    pub platform: String,
}

impl CompatibilityTag {
    pub fn new(
        interpreter: impl Into<String>,
        abi: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            abi: abi.into(),
            platform: platform.into(),
        }
    }
}

impl FromStr for CompatibilityTag {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split('-').collect();
        match parts.as_slice() {
            [interpreter, abi, platform] => Ok(Self::new(*interpreter, *abi, *platform)),
            _ => Err(Error::format(
                format!(
                    "compatibility tag must have exactly 3 dash-separated fields, found {}",
                    parts.len()
                ),
                tag,
            )),
        }
    }
}

impl fmt::Display for CompatibilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.interpreter, self.abi, self.platform)
    }
}

/// The fields encoded in a wheel's file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WheelFilename {
    pub name: String,
    pub version: String,
    pub tag: CompatibilityTag,
}

impl WheelFilename {
    /// Parse the final component of `path` as a wheel file name.
    ///
    /// The stem is split into at most three fields, so everything after the
    /// version becomes the compatibility tag and is validated as such.
    pub fn parse(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let fields: Vec<&str> = stem.splitn(3, '-').collect();
        let [name, version, tag] = fields.as_slice() else {
            return Err(Error::format(
                "wheel filename must look like {name}-{version}-{tag}.whl",
                file_name,
            ));
        };

        Ok(Self {
            name: (*name).to_string(),
            version: (*version).to_string(),
            tag: tag.parse()?,
        })
    }
}
