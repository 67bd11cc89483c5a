//! Inspect Python wheels and report what installing them makes importable.
//!
//! Every member of a wheel is classified into a module record (source,
//! bytecode, extension, package, or namespace package) without executing or
//! importing anything. Namespace packages are then reconstructed from the
//! path layout, including PEP 420 implicit namespaces and `pkgutil`-style
//! declarations.
//!
//! ```no_run
//! let index = wheeldex::index_wheel("dist/pkg-1.0-py3-none-any.whl")?;
//! for name in index.reachable_names() {
//!     println!("{name}");
//! }
//! # Ok::<(), wheeldex::errors::Error>(())
//! ```

pub mod archive;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod modules;
pub mod namespace_decl;
pub mod namespaces;
pub mod paths;
pub mod suffixes;
pub mod summary;
pub mod tags;

pub use crate::archive::{MemoryArchive, WheelArchive, ZipWheel};
pub use crate::errors::{Error, Result};
pub use crate::modules::{find_module_files, ModuleKind, ModuleRecord};
pub use crate::namespace_decl::is_namespace_declaration;
pub use crate::namespaces::{find_namespace_packages, NamespacePackage};
pub use crate::paths::install_relative_path;
pub use crate::suffixes::{module_suffixes, SuffixRule};
pub use crate::summary::{summarise_modules, summarise_names, WheelIndex};
pub use crate::tags::{CompatibilityTag, WheelFilename};

use std::path::Path;

/// Classify every module in the wheel at `path`.
///
/// The compatibility tag is taken from the file name.
pub fn find_modules_in_wheel(path: impl AsRef<Path>) -> Result<Vec<ModuleRecord>> {
    let path = path.as_ref();
    let wheel = WheelFilename::parse(path)?;
    log::info!(
        "Inspecting {} {} ({})",
        wheel.name,
        wheel.version,
        wheel.tag
    );
    let mut archive = ZipWheel::open(path)?;
    find_module_files(&mut archive, &wheel.tag)
}

/// Classify the wheel at `path` and infer its namespace packages
pub fn index_wheel(path: impl AsRef<Path>) -> Result<WheelIndex> {
    find_modules_in_wheel(path).map(WheelIndex::new)
}
