//! Classification of wheel members into importable modules.

use crate::archive::WheelArchive;
use crate::errors::Result;
use crate::namespace_decl::is_namespace_declaration;
use crate::paths::install_relative_path;
use crate::suffixes::{match_suffix, module_suffixes, PACKAGE_INIT_SUFFIX};
use crate::tags::CompatibilityTag;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// What sort of importable unit a file provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// `.py` source module
    Source,
    /// `.pyc` without source
    Bytecode,
    /// Native extension module (`.so`, `.pyd`)
    Extension,
    /// Regular package with an `__init__.py`
    Package,
    /// Namespace package, either declared in `__init__.py` or implied by layout
    NamespacePackage,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Bytecode => "bytecode",
            Self::Extension => "extension",
            Self::Package => "package",
            Self::NamespacePackage => "namespace_package",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One importable module found in a wheel.
///
/// Two records are the same module iff they came from the same archive
/// member, so equality and hashing look at `archive_path` alone.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleRecord {
    archive_path: String,
    suffix: String,
    kind: ModuleKind,
    install_path: String,
    module_name: String,
}

impl ModuleRecord {
    /// Build a record for `archive_path` matched by `suffix`.
    ///
    /// Returns `None` for members that are not installed as library code
    /// (see [`install_relative_path`]).
    pub fn new(archive_path: &str, suffix: &str, kind: ModuleKind) -> Option<Self> {
        let install_path = install_relative_path(archive_path)?;
        let stem = install_path.strip_suffix(suffix)?;
        if stem.is_empty() {
            return None;
        }

        Some(Self {
            archive_path: archive_path.to_string(),
            suffix: suffix.to_string(),
            kind,
            install_path: install_path.to_string(),
            module_name: stem.replace('/', "."),
        })
    }

    pub fn archive_path(&self) -> &str {
        &self.archive_path
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// Path relative to the library directory the wheel installs into
    pub fn install_path(&self) -> &str {
        &self.install_path
    }

    /// Dotted import name, e.g. `pkg.sub.mod`
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Name of the containing package, empty at top level
    pub fn parent_package(&self) -> &str {
        parent_package(&self.module_name)
    }
}

impl PartialEq for ModuleRecord {
    fn eq(&self, other: &Self) -> bool {
        self.archive_path == other.archive_path
    }
}

impl Eq for ModuleRecord {}

impl Hash for ModuleRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.archive_path.hash(state);
    }
}

/// `a.b.c` -> `a.b`; `a` -> `` (top level)
pub fn parent_package(module_name: &str) -> &str {
    module_name
        .rsplit_once('.')
        .map(|(parent, _)| parent)
        .unwrap_or("")
}

/// Every proper ancestor package of `module_name`, innermost first
pub fn ancestor_packages(module_name: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(parent_package(module_name)), |&name| {
        Some(parent_package(name))
    })
    .take_while(|name| !name.is_empty())
}

/// Classify every member of `archive` under `tag`.
///
/// Members that match no suffix for the platform, or that are packaging
/// metadata, produce no record. Each `__init__.py` is read and checked for a
/// legacy namespace declaration; a failed read is fatal.
pub fn find_module_files<A>(archive: &mut A, tag: &CompatibilityTag) -> Result<Vec<ModuleRecord>>
where
    A: WheelArchive + ?Sized,
{
    let rules = module_suffixes(tag);
    let mut seen = HashSet::new();
    let mut modules = Vec::new();

    for path in archive.member_names() {
        let (suffix, kind) = if path.ends_with(PACKAGE_INIT_SUFFIX) {
            (PACKAGE_INIT_SUFFIX, ModuleKind::Package)
        } else if let Some(rule) = match_suffix(&rules, &path) {
            (rule.suffix.as_str(), rule.kind)
        } else {
            log::trace!("Skipping {}: no module suffix matches", path);
            continue;
        };

        let Some(record) = ModuleRecord::new(&path, suffix, kind) else {
            log::trace!("Skipping {}: not installed as library code", path);
            continue;
        };

        let record = if kind == ModuleKind::Package {
            let contents = archive.read_member(&path)?;
            if is_namespace_declaration(&contents) {
                log::debug!("{} declares a namespace package", record.module_name());
                ModuleRecord {
                    kind: ModuleKind::NamespacePackage,
                    ..record
                }
            } else {
                record
            }
        } else {
            record
        };

        if seen.insert(record.archive_path.clone()) {
            modules.push(record);
        }
    }

    log::debug!("Classified {} modules", modules.len());
    Ok(modules)
}
