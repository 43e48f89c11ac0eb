//! Local path handling for file and directory pins.
//!
//! Destination paths name the folder content lands under in the pin
//! manager. Directory pins expand into one multipart part per file,
//! each with a logical path computed here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Normalize a destination folder path.
///
/// Spaces are stripped and a trailing `/` is appended unless the path
/// is exactly the root marker `/`, which is returned unchanged.
/// Normalization is idempotent.
pub fn normalize_destination(path: &str) -> String {
    if path == "/" {
        return path.to_owned();
    }
    let mut out: String = path.chars().filter(|c| *c != ' ').collect();
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Prefix a destination contributes to logical part names.
///
/// The root marker contributes nothing, so top-level files keep bare
/// names rather than gaining a leading separator.
pub(crate) fn destination_prefix(destination: &str) -> String {
    let normalized = normalize_destination(destination);
    if normalized == "/" {
        String::new()
    } else {
        normalized
    }
}

/// Recursively collect every regular file beneath `root`.
///
/// No filtering: hidden files and files of any size or extension are
/// all included. Order is not significant.
pub(crate) fn collect_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Compute the logical destination path for every discovered file.
///
/// With `preserve_full_paths` the hierarchy below `root` is kept as-is
/// beneath the destination. Without it, `root`'s own name becomes the
/// top path segment and the hierarchy below it is still kept, so
/// same-named files in sibling subdirectories never collide.
pub(crate) fn logical_destinations(
    files: &[PathBuf],
    root: &Path,
    destination: &str,
    preserve_full_paths: bool,
) -> Vec<(PathBuf, String)> {
    let prefix = destination_prefix(destination);
    let dir_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    files
        .iter()
        .map(|file| {
            let rel = file.strip_prefix(root).unwrap_or(file.as_path());
            let rel = slash_joined(rel);
            let logical = if preserve_full_paths || dir_name.is_empty() {
                format!("{prefix}{rel}")
            } else {
                format!("{prefix}{dir_name}/{rel}")
            };
            (file.clone(), logical)
        })
        .collect()
}

/// Join path components with `/` regardless of platform separator.
fn slash_joined(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_appends_separator() {
        assert_eq!(normalize_destination("animal-nfts"), "animal-nfts/");
        assert_eq!(
            normalize_destination("retro-nfts/animals"),
            "retro-nfts/animals/"
        );
    }

    #[test]
    fn test_normalize_strips_spaces() {
        assert_eq!(normalize_destination("my folder / art "), "myfolder/art/");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_destination("docs/images");
        assert_eq!(normalize_destination(&once), once);
    }

    #[test]
    fn test_normalize_leaves_root_alone() {
        assert_eq!(normalize_destination("/"), "/");
    }

    #[test]
    fn test_root_and_empty_destination_contribute_no_prefix() {
        assert_eq!(destination_prefix("/"), "");
        assert_eq!(destination_prefix(""), "");
        assert_eq!(destination_prefix("docs"), "docs/");
    }

    #[test]
    fn test_preserved_paths_are_relative_to_walked_root() {
        let root = Path::new("/data/site");
        let files = vec![
            PathBuf::from("/data/site/x.txt"),
            PathBuf::from("/data/site/assets/logo.png"),
        ];

        let resolved = logical_destinations(&files, root, "/", true);
        assert_eq!(resolved[0].1, "x.txt");
        assert_eq!(resolved[1].1, "assets/logo.png");

        let resolved = logical_destinations(&files, root, "docs/", true);
        assert_eq!(resolved[0].1, "docs/x.txt");
        assert_eq!(resolved[1].1, "docs/assets/logo.png");
    }

    #[test]
    fn test_unpreserved_paths_keep_directory_name_segment() {
        let root = Path::new("/data/site");
        let files = vec![
            PathBuf::from("/data/site/a/x.txt"),
            PathBuf::from("/data/site/b/x.txt"),
        ];

        let resolved = logical_destinations(&files, root, "/", false);
        let logical: Vec<&str> = resolved.iter().map(|(_, l)| l.as_str()).collect();

        // Same-named files in sibling subdirectories must not merge.
        assert_eq!(logical, vec!["site/a/x.txt", "site/b/x.txt"]);
    }

    #[test]
    fn test_unpreserved_paths_sit_under_destination() {
        let root = Path::new("/data/site");
        let files = vec![PathBuf::from("/data/site/a/x.txt")];

        let resolved = logical_destinations(&files, root, "backups/", false);
        assert_eq!(resolved[0].1, "backups/site/a/x.txt");
    }

    #[test]
    fn test_no_logical_path_collisions() {
        let root = Path::new("/data/site");
        let files = vec![
            PathBuf::from("/data/site/x.txt"),
            PathBuf::from("/data/site/a/x.txt"),
            PathBuf::from("/data/site/a/b/x.txt"),
        ];

        for preserve in [true, false] {
            let resolved = logical_destinations(&files, root, "/", preserve);
            let mut logical: Vec<&str> = resolved.iter().map(|(_, l)| l.as_str()).collect();
            logical.sort_unstable();
            logical.dedup();
            assert_eq!(logical.len(), files.len());
        }
    }

    #[test]
    fn test_collect_files_walks_recursively() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.txt"), b"top").unwrap();
        fs::write(root.join("a/mid.txt"), b"mid").unwrap();
        fs::write(root.join("a/b/deep.txt"), b"deep").unwrap();
        fs::write(root.join(".hidden"), b"hidden").unwrap();

        let mut found = collect_files(root).unwrap();
        found.sort();

        let mut expected = vec![
            root.join(".hidden"),
            root.join("a/b/deep.txt"),
            root.join("a/mid.txt"),
            root.join("top.txt"),
        ];
        expected.sort();
        assert_eq!(found, expected);
    }
}
