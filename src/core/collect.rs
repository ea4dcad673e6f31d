use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

/// Recursively list files under `root`.
///
/// Hidden entries (names starting with `.`) and entries whose name appears in
/// `exclude` are skipped; excluded directories are not descended into.
/// Symbolic links are not followed. When
/// `extension` is given, only file names ending with it are kept. A missing
/// root yields an empty list. The result is sorted lexicographically by the
/// full path string.
pub fn collect_files(root: &Path, extension: Option<&str>, exclude: &[&str]) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry, exclude))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                tracing::debug!("Cannot access path: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| match extension {
            Some(ext) => entry.file_name().to_string_lossy().ends_with(ext),
            None => true,
        })
        .map(DirEntry::into_path)
        .collect();

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}

/// Read a source file as text. Invalid UTF-8 sequences are replaced with
/// U+FFFD instead of failing the read.
pub fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            tracing::debug!("{} is not valid UTF-8, decoding lossily", path.display());
            text
        }
    })
}

fn is_skipped(entry: &DirEntry, exclude: &[&str]) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || exclude.contains(&name.as_ref())
}
