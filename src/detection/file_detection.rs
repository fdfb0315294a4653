//! File-based detection helpers.

use std::path::{Path, PathBuf};

/// Check if a file exists relative to a directory.
pub fn file_exists(dir: &Path, file: &str) -> bool {
    dir.join(file).exists()
}

/// Return the first of `files` that exists in `dir`, in the given order.
pub fn any_file_exists<'a>(dir: &Path, files: &[&'a str]) -> Option<&'a str> {
    files.iter().copied().find(|f| file_exists(dir, f))
}

/// Find `relative` in `dir` or the nearest ancestor that contains it.
///
/// Returns the full path of the match.
pub fn find_in_parents(dir: &Path, relative: impl AsRef<Path>) -> Option<PathBuf> {
    let relative = relative.as_ref();
    dir.ancestors()
        .map(|ancestor| ancestor.join(relative))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_exists_helper() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test.txt"), "").unwrap();

        assert!(file_exists(temp.path(), "test.txt"));
        assert!(!file_exists(temp.path(), "missing.txt"));
    }

    #[test]
    fn any_file_exists_respects_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        fs::write(temp.path().join("package-lock.json"), "").unwrap();

        let found = any_file_exists(temp.path(), &["package-lock.json", "yarn.lock"]);
        assert_eq!(found, Some("package-lock.json"));
    }

    #[test]
    fn find_in_parents_in_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        assert_eq!(
            find_in_parents(temp.path(), "package.json"),
            Some(temp.path().join("package.json"))
        );
    }

    #[test]
    fn find_in_parents_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("packages/app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        assert_eq!(
            find_in_parents(&nested, "package.json"),
            Some(temp.path().join("package.json"))
        );
    }

    #[test]
    fn find_in_parents_nested_relative_path() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("node_modules/left-pad");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("package.json"), "{}").unwrap();
        let nested = temp.path().join("src");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_in_parents(&nested, Path::new("node_modules/left-pad/package.json")),
            Some(pkg.join("package.json"))
        );
    }

    #[test]
    fn find_in_parents_not_found() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            find_in_parents(temp.path(), "definitely-not-here-ny.json"),
            None
        );
    }
}
