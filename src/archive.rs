//! Read access to wheel archives.
//!
//! Classification only ever needs the list of member names and the bytes of
//! individual `__init__.py` members, so that is all [`WheelArchive`] asks
//! for. [`ZipWheel`] reads real `.whl` files; [`MemoryArchive`] holds members
//! in memory for tests and synthetic layouts.

use crate::errors::{Error, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Source of wheel member names and contents
pub trait WheelArchive {
    /// Every member path in the archive, `/`-separated
    fn member_names(&self) -> Vec<String>;

    /// Raw bytes of the member at `name`
    ///
    /// # Errors
    ///
    /// Returns `Error::ArchiveRead` if the member is missing or unreadable.
    fn read_member(&mut self, name: &str) -> Result<Vec<u8>>;
}

/// A wheel backed by a zip container
pub struct ZipWheel<R: Read + Seek> {
    archive: ZipArchive<R>,
    path: PathBuf,
}

impl ZipWheel<BufReader<File>> {
    /// Open the wheel at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::archive_read_with_source("cannot open wheel", path, e))?;
        Self::new(BufReader::new(file), path)
    }
}

impl<R: Read + Seek> ZipWheel<R> {
    /// Wrap an already opened reader; `path` is only used in error messages
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let archive = ZipArchive::new(reader)
            .map_err(|e| Error::archive_read_with_source("not a valid zip archive", &path, e))?;
        log::debug!("Opened {} ({} members)", path.display(), archive.len());
        Ok(Self { archive, path })
    }
}

impl<R: Read + Seek> WheelArchive for ZipWheel<R> {
    fn member_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    fn read_member(&mut self, name: &str) -> Result<Vec<u8>> {
        let member_path = self.path.join(name);
        let mut member = self
            .archive
            .by_name(name)
            .map_err(|e| Error::archive_read_with_source("cannot find member", &member_path, e))?;

        let mut contents = Vec::new();
        member
            .read_to_end(&mut contents)
            .map_err(|e| Error::archive_read_with_source("cannot read member", &member_path, e))?;
        Ok(contents)
    }
}

/// Wheel members held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    members: BTreeMap<String, Vec<u8>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.members.insert(name.into(), contents.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryArchive
where
    K: Into<String>,
    V: Into<Vec<u8>>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut archive = Self::new();
        for (name, contents) in iter {
            archive.insert(name, contents);
        }
        archive
    }
}

impl WheelArchive for MemoryArchive {
    fn member_names(&self) -> Vec<String> {
        self.members.keys().cloned().collect()
    }

    fn read_member(&mut self, name: &str) -> Result<Vec<u8>> {
        self.members
            .get(name)
            .cloned()
            .ok_or_else(|| Error::archive_read("no such member", name))
    }
}
