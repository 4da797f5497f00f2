//! Path utilities

use std::path::Path;

/// Split a file name at its last `.` into stem and extension.
///
/// Dotfiles such as `.hidden` have no extension.
pub fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rfind('.') {
        Some(0) | None => (file_name, None),
        Some(i) => (&file_name[..i], Some(&file_name[i + 1..])),
    }
}

/// Whether `path` names an existing regular file (symlinks are followed)
pub fn is_regular_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("a.mkv"), ("a", Some("mkv")));
        assert_eq!(
            split_extension("2020-01-01 00-00-00.mkv"),
            ("2020-01-01 00-00-00", Some("mkv"))
        );
        assert_eq!(split_extension("a.b.mp4"), ("a.b", Some("mp4")));
        assert_eq!(split_extension("noext"), ("noext", None));
        assert_eq!(split_extension(".hidden"), (".hidden", None));
        assert_eq!(split_extension("trailing."), ("trailing", Some("")));
    }

    #[test]
    fn test_is_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.mkv");
        std::fs::write(&file, b"x").unwrap();
        assert!(is_regular_file(&file));
        assert!(!is_regular_file(dir.path()));
        assert!(!is_regular_file(&dir.path().join("missing.mkv")));
    }
}
