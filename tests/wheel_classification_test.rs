mod common;

use common::{sample_archive, sample_members, write_wheel, NS_PKG_DECL};
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet};
use tempfile::TempDir;
use wheeldex::{
    find_module_files, find_namespace_packages, index_wheel, CompatibilityTag, Error,
    MemoryArchive, ModuleKind, ModuleRecord, WheelIndex,
};

fn tag(tag: &str) -> CompatibilityTag {
    tag.parse().unwrap()
}

fn kinds_by_name(modules: &[ModuleRecord]) -> BTreeMap<String, ModuleKind> {
    modules
        .iter()
        .map(|m| (m.module_name().to_string(), m.kind()))
        .collect()
}

fn namespace_names(modules: &[ModuleRecord]) -> BTreeSet<String> {
    find_namespace_packages(modules)
        .map(|pkg| pkg.module_name().to_string())
        .collect()
}

#[test]
fn test_find_modules() {
    let modules = find_module_files(&mut sample_archive(), &tag("cp36-cp36m-manylinux1_i686"))
        .unwrap();

    let expected: BTreeMap<String, ModuleKind> = [
        ("top_level", ModuleKind::Extension),
        ("top_level2", ModuleKind::Source),
        ("apkg", ModuleKind::Package),
        ("namespace1.foo", ModuleKind::Source),
        ("namespace2", ModuleKind::NamespacePackage),
        ("namespace2.bar", ModuleKind::Source),
    ]
    .into_iter()
    .map(|(name, kind)| (name.to_string(), kind))
    .collect();

    assert_eq!(kinds_by_name(&modules), expected);
}

#[test]
fn test_find_namespace_packages() {
    let modules = find_module_files(&mut sample_archive(), &tag("cp36-cp36m-manylinux1_i686"))
        .unwrap();
    let expected: BTreeSet<String> = ["namespace1", "namespace2"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(namespace_names(&modules), expected);
}

#[test]
fn test_extension_suffix_depends_on_platform() {
    // The i386 extension is not recognised on x86_64, but the generic .so is
    let modules = find_module_files(&mut sample_archive(), &tag("cp36-cp36m-manylinux1_x86_64"))
        .unwrap();
    let record = modules
        .iter()
        .find(|m| m.archive_path() == "top_level.cpython-36m-i386-linux-gnu.so")
        .unwrap();
    assert_eq!(record.suffix(), ".so");
    assert_eq!(record.module_name(), "top_level.cpython-36m-i386-linux-gnu");

    // Nothing native is recognised for macOS
    let modules = find_module_files(&mut sample_archive(), &tag("cp36-cp36m-macosx_10_9_x86_64"))
        .unwrap();
    assert!(modules.iter().all(|m| m.kind() != ModuleKind::Extension));
    assert_eq!(modules.len(), sample_members().len() - 1);
}

#[test]
fn test_plain_subpackage_under_implicit_namespace() {
    let mut archive = MemoryArchive::from_iter([("pkg/sub/__init__.py", ""), ("pkg/sub/mod.py", "")]);
    let modules = find_module_files(&mut archive, &tag("py3-none-any")).unwrap();
    let index = WheelIndex::new(modules);

    let namespaces: Vec<&str> = index
        .namespace_packages()
        .iter()
        .map(|pkg| pkg.module_name())
        .collect();
    assert_eq!(namespaces, vec!["pkg"]);

    // pkg.sub is a regular package, so pkg.sub.mod is only reachable through it
    assert_eq!(index.reachable_names(), vec!["pkg.sub"]);
    assert!(index.top_level_modules().is_empty());
}

#[test]
fn test_data_directories() {
    let mut archive = MemoryArchive::from_iter([
        ("demo-1.0.data/purelib/demo/__init__.py", ""),
        ("demo-1.0.data/platlib/demo/_speedups.so", ""),
        ("demo-1.0.data/scripts/demo-cli.py", ""),
        ("demo-1.0.data/headers/demo.h", ""),
        ("demo-1.0.dist-info/METADATA", ""),
        ("demo-1.0.dist-info/tools/helper.py", ""),
    ]);
    let modules = find_module_files(&mut archive, &tag("cp39-abi3-manylinux2014_x86_64")).unwrap();

    let mut names: Vec<(&str, &str)> = modules
        .iter()
        .map(|m| (m.module_name(), m.install_path()))
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            ("demo", "demo/__init__.py"),
            ("demo._speedups", "demo/_speedups.so"),
        ]
    );
}

#[test]
fn test_data_and_root_layouts_agree() {
    let root = find_module_files(
        &mut MemoryArchive::from_iter([("ns/mod.py", ""), ("ns/sub/__init__.py", NS_PKG_DECL)]),
        &tag("py3-none-any"),
    )
    .unwrap();
    let data = find_module_files(
        &mut MemoryArchive::from_iter([
            ("x-1.data/purelib/ns/mod.py", ""),
            ("x-1.data/platlib/ns/sub/__init__.py", NS_PKG_DECL),
        ]),
        &tag("py3-none-any"),
    )
    .unwrap();

    assert_eq!(kinds_by_name(&root), kinds_by_name(&data));
    assert_eq!(namespace_names(&root), namespace_names(&data));
}

#[test]
fn test_unparseable_init_is_a_regular_package() {
    let mut archive = MemoryArchive::from_iter([
        ("broken/__init__.py", "def (:\n"),
        ("broken/mod.py", ""),
    ]);
    let modules = find_module_files(&mut archive, &tag("py3-none-any")).unwrap();
    assert_eq!(kinds_by_name(&modules)["broken"], ModuleKind::Package);
    assert!(namespace_names(&modules).is_empty());
}

#[test]
fn test_index_wheel_from_disk() {
    let dir = TempDir::new().unwrap();
    let mut members = sample_members();
    members.push(("sample-1.0.dist-info/METADATA", "Name: sample\n"));
    let path = write_wheel(dir.path(), "sample-1.0-cp36-cp36m-manylinux1_i686.whl", &members);

    let index = index_wheel(&path).unwrap();
    assert_eq!(index.modules().len(), 6);
    assert_eq!(index.top_level_modules(), vec!["apkg", "top_level", "top_level2"]);

    let contents = index.namespace_contents();
    assert_eq!(contents["namespace1"], vec!["namespace1.foo"]);
    assert_eq!(contents["namespace2"], vec!["namespace2.bar"]);

    let reachable: Vec<&str> = index
        .reachable_modules()
        .into_iter()
        .map(|m| m.install_path())
        .collect();
    assert_eq!(
        reachable,
        vec![
            "apkg/__init__.py",
            "namespace1/foo.py",
            "namespace2/__init__.py",
            "namespace2/bar.py",
            "top_level.cpython-36m-i386-linux-gnu.so",
            "top_level2.py",
        ]
    );
}

#[test]
fn test_malformed_tag_in_filename() {
    let dir = TempDir::new().unwrap();
    let path = write_wheel(dir.path(), "sample-1.0-py3-none.whl", &[("a.py", "")]);
    let err = index_wheel(&path).unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
}

#[test]
fn test_unreadable_archive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample-1.0-py3-none-any.whl");
    std::fs::write(&path, b"definitely not a zip").unwrap();
    let err = index_wheel(&path).unwrap_err();
    assert!(matches!(err, Error::ArchiveRead { .. }));
}

#[test]
fn test_empty_wheel_is_fine() {
    let dir = TempDir::new().unwrap();
    let path = write_wheel(
        dir.path(),
        "empty-0.1-py3-none-any.whl",
        &[("empty-0.1.dist-info/RECORD", "")],
    );
    let index = index_wheel(&path).unwrap();
    assert!(index.modules().is_empty());
    assert!(index.namespace_packages().is_empty());
}
