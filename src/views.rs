//! HTML pages rendered with askama.
//!
//! - `IndexPage`: root path plus the flattened walk, one row per entry
//! - `RenamePage`: form pre-filled with the current name, posts to /renamed

use askama::Template;

use crate::error::Result;
use crate::models::DirectoryEntry;

const INDENT_PX: usize = 20;

/// One listing row with its link query precomputed.
pub struct EntryView {
    pub name: String,
    pub is_directory: bool,
    pub indent: usize,
    /// Url-encoded relative path. Empty for the root row, which gets no actions.
    pub query: String,
}

impl From<&DirectoryEntry> for EntryView {
    fn from(entry: &DirectoryEntry) -> Self {
        Self {
            name: entry.name.clone(),
            is_directory: entry.is_directory,
            indent: entry.depth * INDENT_PX,
            query: urlencoding::encode(&entry.path).into_owned(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    root: &'a str,
    entries: Vec<EntryView>,
}

#[derive(Template)]
#[template(path = "rename.html")]
struct RenamePage<'a> {
    name: &'a str,
}

pub fn render_index(root: &str, entries: &[DirectoryEntry]) -> Result<String> {
    let page = IndexPage {
        root,
        entries: entries.iter().map(EntryView::from).collect(),
    };
    Ok(page.render()?)
}

pub fn render_rename(name: &str) -> Result<String> {
    Ok(RenamePage { name }.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, path: &str, is_directory: bool, depth: usize) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: path.to_string(),
            is_directory,
            depth,
        }
    }

    #[test]
    fn test_index_lists_entries_with_links() {
        let entries = vec![
            entry("workDir", "", true, 0),
            entry("reports", "reports", true, 1),
            entry("q 1.csv", "reports/q 1.csv", false, 2),
        ];
        let html = render_index("/srv/workDir", &entries).unwrap();

        assert!(html.contains("/srv/workDir"));
        assert!(html.contains("reports/"));
        assert!(html.contains("/download?name=reports%2Fq%201.csv"));
        assert!(html.contains("/rename?name=reports"));
        assert!(!html.contains("/download?name=reports\""));
        assert!(html.contains("padding-left: 40px"));
    }

    #[test]
    fn test_index_escapes_names() {
        let entries = vec![entry("<b>bold</b>", "<b>bold</b>", false, 1)];
        let html = render_index("/srv", &entries).unwrap();

        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&#60;b&#62;bold&#60;/b&#62;"));
    }

    #[test]
    fn test_rename_prefills_name() {
        let html = render_rename("a.txt").unwrap();
        assert!(html.contains(r#"name="oldName" value="a.txt""#));
        assert!(html.contains(r#"name="newName" value="a.txt""#));
        assert!(html.contains(r#"action="/renamed""#));
    }
}
