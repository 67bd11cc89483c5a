//! Inference of namespace packages from classified modules.
//!
//! A package name is a namespace package when its `__init__.py` declares
//! itself one, or when modules live under it but no regular package of that
//! name exists (PEP 420). The second rule applies at every ancestor level,
//! so `a/b/c.py` alone implies both `a` and `a.b`.

use crate::modules::{ancestor_packages, ModuleKind, ModuleRecord};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A package that exists only as a namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NamespacePackage {
    module_name: String,
}

impl NamespacePackage {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn kind(&self) -> ModuleKind {
        ModuleKind::NamespacePackage
    }
}

impl fmt::Display for NamespacePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.module_name)
    }
}

/// Namespace packages implied by `modules`, sorted by name.
///
/// The result depends only on the set of modules, not the order they are
/// given in, and nothing is retained between calls.
pub fn find_namespace_packages<'a, I>(modules: I) -> impl Iterator<Item = NamespacePackage>
where
    I: IntoIterator<Item = &'a ModuleRecord>,
{
    let mut concrete: HashSet<&'a str> = HashSet::new();
    let mut declared: BTreeSet<&'a str> = BTreeSet::new();
    let mut implied: BTreeSet<&'a str> = BTreeSet::new();

    for module in modules {
        match module.kind() {
            ModuleKind::Package => {
                concrete.insert(module.module_name());
            }
            ModuleKind::NamespacePackage => {
                declared.insert(module.module_name());
            }
            _ => {}
        }
        implied.extend(ancestor_packages(module.module_name()));
    }

    let namespace: BTreeSet<String> = implied
        .into_iter()
        .filter(|name| !concrete.contains(name))
        .chain(declared)
        .map(str::to_string)
        .collect();

    log::debug!("Inferred {} namespace packages", namespace.len());
    namespace.into_iter().map(NamespacePackage::new)
}
