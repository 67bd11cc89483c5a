//! What a wheel makes importable once it is on `sys.path`.
//!
//! A module is reachable from the archive root when it is top level, or when
//! its parent is a namespace package. Anything below a regular package is
//! only reachable through that package and is left out.

use crate::modules::{ModuleKind, ModuleRecord};
use crate::namespaces::{find_namespace_packages, NamespacePackage};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Reachable modules, sorted by install-relative path
pub fn summarise_modules<'a>(
    modules: &'a [ModuleRecord],
    namespace_packages: &BTreeSet<String>,
) -> Vec<&'a ModuleRecord> {
    let mut reachable: Vec<&ModuleRecord> = modules
        .iter()
        .filter(|module| is_reachable(module, namespace_packages))
        .collect();
    reachable.sort_by(|a, b| a.install_path().cmp(b.install_path()));
    reachable
}

/// Reachable module names, sorted by dotted name
pub fn summarise_names(
    modules: &[ModuleRecord],
    namespace_packages: &BTreeSet<String>,
) -> Vec<String> {
    let names: BTreeSet<&str> = modules
        .iter()
        .filter(|module| is_reachable(module, namespace_packages))
        .map(ModuleRecord::module_name)
        .collect();
    names.into_iter().map(str::to_string).collect()
}

fn is_reachable(module: &ModuleRecord, namespace_packages: &BTreeSet<String>) -> bool {
    let parent = module.parent_package();
    parent.is_empty() || namespace_packages.contains(parent)
}

/// Classified modules of one wheel together with its namespace packages
#[derive(Debug, Clone, Serialize)]
pub struct WheelIndex {
    modules: Vec<ModuleRecord>,
    namespace_packages: Vec<NamespacePackage>,
}

impl WheelIndex {
    pub fn new(modules: Vec<ModuleRecord>) -> Self {
        let namespace_packages = find_namespace_packages(&modules).collect();
        Self {
            modules,
            namespace_packages,
        }
    }

    pub fn modules(&self) -> &[ModuleRecord] {
        &self.modules
    }

    /// All classified modules, sorted by install-relative path
    pub fn modules_by_path(&self) -> Vec<&ModuleRecord> {
        let mut modules: Vec<&ModuleRecord> = self.modules.iter().collect();
        modules.sort_by(|a, b| a.install_path().cmp(b.install_path()));
        modules
    }

    /// Namespace packages, sorted by name
    pub fn namespace_packages(&self) -> &[NamespacePackage] {
        &self.namespace_packages
    }

    fn namespace_names(&self) -> BTreeSet<String> {
        self.namespace_packages
            .iter()
            .map(|pkg| pkg.module_name().to_string())
            .collect()
    }

    pub fn reachable_modules(&self) -> Vec<&ModuleRecord> {
        summarise_modules(&self.modules, &self.namespace_names())
    }

    pub fn reachable_names(&self) -> Vec<String> {
        summarise_names(&self.modules, &self.namespace_names())
    }

    /// Top-level modules and regular packages, sorted by name.
    ///
    /// Declared namespace packages are listed with the namespace contents
    /// instead.
    pub fn top_level_modules(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .modules
            .iter()
            .filter(|m| m.parent_package().is_empty())
            .filter(|m| m.kind() != ModuleKind::NamespacePackage)
            .map(ModuleRecord::module_name)
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// Each namespace package with the sorted names of the modules directly
    /// inside it
    pub fn namespace_contents(&self) -> BTreeMap<String, Vec<String>> {
        let mut contents: BTreeMap<String, Vec<String>> = self
            .namespace_packages
            .iter()
            .map(|pkg| (pkg.module_name().to_string(), Vec::new()))
            .collect();

        for module in &self.modules {
            if let Some(members) = contents.get_mut(module.parent_package()) {
                members.push(module.module_name().to_string());
            }
        }
        for members in contents.values_mut() {
            members.sort();
        }
        contents
    }
}
