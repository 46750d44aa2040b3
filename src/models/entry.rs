//! Listing DTOs.
//!
//! - `DirectoryEntry`: one node found by the recursive walk
//! - `Listing`: the full walk result together with the root path
//!
//! Used by: the HTML index page and `GET /api/entries`

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    /// Path relative to the root, `/`-separated. Empty for the root itself.
    pub path: String,
    pub is_directory: bool,
    pub depth: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub root: String,
    pub entries: Vec<DirectoryEntry>,
}
