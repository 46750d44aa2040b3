use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::models::DirectoryEntry;

/// Recursively lists `root`, root first, in pre-order.
///
/// Siblings come out sorted by file name. Symlinks are reported but never
/// followed, so a link pointing back up the tree cannot make the walk loop.
/// The first unreadable node aborts the whole listing.
pub fn walk(root: &Path, max_depth: Option<usize>) -> Result<Vec<DirectoryEntry>> {
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        entries.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: relative,
            is_directory: entry.file_type().is_dir(),
            depth: entry.depth(),
        });
    }

    Ok(entries)
}
