//! Mapping archive member paths to where they land on install.

const DIST_INFO_SUFFIX: &str = ".dist-info";
const DATA_SUFFIX: &str = ".data";
const LIBRARY_SCHEMES: [&str; 2] = ["platlib", "purelib"];

/// Path of `archive_path` relative to the library directory it installs
/// into, or `None` if the member is not installed as importable code.
///
/// `*.dist-info/` members are metadata. Under `*.data/` only the `platlib`
/// and `purelib` schemes hold library code; `scripts`, `headers` and the
/// rest do not.
pub fn install_relative_path(archive_path: &str) -> Option<&str> {
    let (first, rest) = match archive_path.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (archive_path, None),
    };

    if first.ends_with(DIST_INFO_SUFFIX) {
        return None;
    }

    if first.ends_with(DATA_SUFFIX) {
        let (scheme, relative) = rest?.split_once('/')?;
        return LIBRARY_SCHEMES.contains(&scheme).then_some(relative);
    }

    Some(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_are_unchanged() {
        assert_eq!(install_relative_path("pkg/mod.py"), Some("pkg/mod.py"));
        assert_eq!(install_relative_path("toplevel.py"), Some("toplevel.py"));
    }

    #[test]
    fn test_dist_info_is_never_installed() {
        assert_eq!(install_relative_path("pkg-1.0.dist-info/METADATA"), None);
        assert_eq!(install_relative_path("pkg-1.0.dist-info/sub/x.py"), None);
        assert_eq!(install_relative_path("pkg-1.0.dist-info"), None);
    }

    #[test]
    fn test_data_library_schemes_are_unwrapped() {
        assert_eq!(
            install_relative_path("pkg-1.0.data/purelib/pkg/mod.py"),
            Some("pkg/mod.py")
        );
        assert_eq!(
            install_relative_path("pkg-1.0.data/platlib/fast.so"),
            Some("fast.so")
        );
    }

    #[test]
    fn test_other_data_schemes_are_not_installed() {
        assert_eq!(install_relative_path("pkg-1.0.data/scripts/tool.py"), None);
        assert_eq!(install_relative_path("pkg-1.0.data/headers/pkg.h"), None);
        assert_eq!(install_relative_path("pkg-1.0.data/purelib"), None);
        assert_eq!(install_relative_path("pkg-1.0.data"), None);
    }

    #[test]
    fn test_data_suffix_only_matters_on_first_segment() {
        assert_eq!(
            install_relative_path("pkg/things.data/x.py"),
            Some("pkg/things.data/x.py")
        );
    }
}
