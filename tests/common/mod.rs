// Test utility module for wheeldex integration tests
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use wheeldex::MemoryArchive;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// The standard declaration of a non PEP-420 namespace package
pub const NS_PKG_DECL: &str = "\
from pkgutil import extend_path
__path__ = extend_path(__path__, __name__)
";

/// Members of the reference wheel used across the classification tests
pub fn sample_members() -> Vec<(&'static str, &'static str)> {
    vec![
        ("top_level.cpython-36m-i386-linux-gnu.so", ""),
        ("top_level2.py", ""),
        ("apkg/__init__.py", ""),
        ("namespace1/foo.py", ""),
        ("namespace2/__init__.py", NS_PKG_DECL),
        ("namespace2/bar.py", ""),
    ]
}

pub fn sample_archive() -> MemoryArchive {
    MemoryArchive::from_iter(sample_members())
}

/// Write a zip wheel named `file_name` into `dir`
pub fn write_wheel(dir: &Path, file_name: &str, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(file_name);
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ZipWriter::new(file);
    for (name, contents) in members {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}
