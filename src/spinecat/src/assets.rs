//! Filesystem probes for single-file asset lookups.
//!
//! All lookups are one-shot directory scans. When several entries
//! match a pattern the first one in enumeration order wins; that order
//! is whatever the filesystem yields and is not sorted.

use std::fs;
use std::path::{Path, PathBuf};

/// First file in `dir` whose name satisfies the predicate.
///
/// Returns `None` when the directory is missing or unreadable, or when
/// nothing matches.
pub fn find_first<P>(dir: &Path, predicate: P) -> Option<PathBuf>
where
    P: Fn(&str) -> bool,
{
    let entries = fs::read_dir(dir).ok()?;

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if predicate(name) {
            return Some(path);
        }
    }

    None
}

/// All files in `dir` whose names satisfy the predicate, in
/// enumeration order.
pub fn collect_matching<P>(dir: &Path, predicate: P) -> Vec<PathBuf>
where
    P: Fn(&str) -> bool,
{
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(&predicate)
        })
        .collect()
}

/// Check a file name's extension, case-insensitively.
///
/// Extension should not include the dot (e.g. "skel" not ".skel").
pub fn has_extension(name: &str, extension: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Locate a character image by the `*char<id>*.*` naming convention.
///
/// The returned path is relative to `root` with forward slashes. A
/// miss is expected for many characters and only logs a warning.
pub fn find_char_asset(dir: &Path, id: &str, root: &Path) -> Option<String> {
    let needle = format!("char{id}");

    // The `*.*` tail of the pattern puts a dot after the needle, so a
    // dot only before it (as in `a.char000001`) is not a match.
    let found = find_first(dir, |name| {
        name.find(&needle)
            .is_some_and(|i| name[i + needle.len()..].contains('.'))
    });

    match found {
        Some(path) => relative_path(&path, root),
        None => {
            log::warn!(
                "No file found in '{}' matching '*{}*.*'",
                dir.display(),
                needle
            );
            None
        }
    }
}

/// Render `path` relative to `root` using forward slashes.
pub fn relative_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_find_first_match() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(&temp_dir.path().join("other.png"));
        touch(&temp_dir.path().join("char000001.png"));

        let found = find_first(temp_dir.path(), |n| n.contains("char000001"));
        assert_eq!(
            found.as_deref().and_then(Path::file_name),
            Some("char000001.png".as_ref())
        );
    }

    #[test]
    fn test_find_first_none_and_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(&temp_dir.path().join("other.png"));

        assert!(find_first(temp_dir.path(), |n| n.contains("char9")).is_none());
        assert!(find_first(&temp_dir.path().join("gone"), |_| true).is_none());
    }

    #[test]
    fn test_find_first_skips_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("char000001")).unwrap();

        assert!(find_first(temp_dir.path(), |n| n.contains("char000001")).is_none());
    }

    #[test]
    fn test_collect_matching() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(&temp_dir.path().join("a.png"));
        touch(&temp_dir.path().join("b.png"));
        touch(&temp_dir.path().join("a.atlas"));

        let pngs = collect_matching(temp_dir.path(), |n| has_extension(n, "png"));
        assert_eq!(pngs.len(), 2);
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("a.skel", "skel"));
        assert!(has_extension("a.SKEL", "skel"));
        assert!(!has_extension("a.skeleton", "skel"));
        assert!(!has_extension("skel", "skel"));
    }

    #[test]
    fn test_find_char_asset_relative_to_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let thumbs = root.join("illust_inven_char");
        fs::create_dir(&thumbs).unwrap();
        touch(&thumbs.join("illust_char000001_a.webp"));

        let found = find_char_asset(&thumbs, "000001", root);
        assert_eq!(
            found.as_deref(),
            Some("illust_inven_char/illust_char000001_a.webp")
        );
    }

    #[test]
    fn test_find_char_asset_requires_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(&temp_dir.path().join("char000001"));

        assert!(find_char_asset(temp_dir.path(), "000001", temp_dir.path()).is_none());
    }

    #[test]
    fn test_find_char_asset_dot_must_follow_id() {
        let temp_dir = tempfile::tempdir().unwrap();
        // Dot only before the id: not a `*char000001*.*` match
        touch(&temp_dir.path().join("a.char000001"));

        assert!(find_char_asset(temp_dir.path(), "000001", temp_dir.path()).is_none());

        touch(&temp_dir.path().join("a.char000001.png"));
        let found = find_char_asset(temp_dir.path(), "000001", temp_dir.path());
        assert_eq!(found.as_deref(), Some("a.char000001.png"));
    }

    #[test]
    fn test_relative_path_forward_slashes() {
        let root = Path::new("/data/public");
        let path = Path::new("/data/public/datings/illust_dating1/a.skel");

        assert_eq!(
            relative_path(path, root).as_deref(),
            Some("datings/illust_dating1/a.skel")
        );
    }
}
