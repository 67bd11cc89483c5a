//! File suffixes that make a file importable on a given platform.
//!
//! The table is ordered and matched first-wins: `/__init__.py` has to be
//! tried before `.py`, and a fully qualified extension suffix such as
//! `.cpython-36m-x86_64-linux-gnu.so` before the bare `.so` fallback.

use crate::modules::ModuleKind;
use crate::tags::CompatibilityTag;

/// Suffix that marks a package's `__init__` module
pub const PACKAGE_INIT_SUFFIX: &str = "/__init__.py";

/// One (suffix, kind) entry of a suffix table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: String,
    pub kind: ModuleKind,
}

impl SuffixRule {
    pub fn new(suffix: impl Into<String>, kind: ModuleKind) -> Self {
        Self {
            suffix: suffix.into(),
            kind,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.ends_with(&self.suffix)
    }
}

/// Build the ordered suffix table for a wheel's compatibility tag.
///
/// Platform families other than `manylinux` and `win` contribute no
/// extension suffixes, so their native modules go unrecognised.
pub fn module_suffixes(tag: &CompatibilityTag) -> Vec<SuffixRule> {
    let mut rules = vec![
        SuffixRule::new(PACKAGE_INIT_SUFFIX, ModuleKind::Package),
        SuffixRule::new(".py", ModuleKind::Source),
        SuffixRule::new(".pyc", ModuleKind::Bytecode),
    ];

    if tag.platform.starts_with("manylinux") {
        rules.extend(manylinux_extension_suffixes(tag));
    } else if tag.platform.starts_with("win") {
        rules.extend(windows_extension_suffixes(tag));
    } else {
        log::debug!("No extension suffixes known for platform {}", tag.platform);
    }

    rules
}

fn manylinux_extension_suffixes(tag: &CompatibilityTag) -> Vec<SuffixRule> {
    let mut rules = Vec::with_capacity(2);

    if let Some(abi_version) = tag.abi.strip_prefix("cp") {
        // e.g. .cpython-35m-x86_64-linux-gnu.so
        let arch = if tag.platform.ends_with("x86_64") {
            "x86_64"
        } else {
            "i386"
        };
        rules.push(SuffixRule::new(
            format!(".cpython-{abi_version}-{arch}-linux-gnu.so"),
            ModuleKind::Extension,
        ));
    } else if tag.abi.starts_with("abi") {
        // e.g. .abi3.so
        rules.push(SuffixRule::new(
            format!(".{}.so", tag.abi),
            ModuleKind::Extension,
        ));
    }

    rules.push(SuffixRule::new(".so", ModuleKind::Extension));
    rules
}

fn windows_extension_suffixes(tag: &CompatibilityTag) -> Vec<SuffixRule> {
    let mut rules = Vec::with_capacity(2);

    if tag.interpreter.starts_with("cp") {
        rules.push(SuffixRule::new(
            format!(".{}-{}.pyd", tag.interpreter, tag.platform),
            ModuleKind::Extension,
        ));
    }

    rules.push(SuffixRule::new(".pyd", ModuleKind::Extension));
    rules
}

/// Return the first rule in `rules` whose suffix ends `path`
pub fn match_suffix<'a>(rules: &'a [SuffixRule], path: &str) -> Option<&'a SuffixRule> {
    rules.iter().find(|rule| rule.matches(path))
}
