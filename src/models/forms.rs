//! Query and form payloads accepted by the handlers.
//!
//! Field names follow the HTML forms rendered by the index and rename pages.
//! Missing fields deserialize to empty strings, which resolve to the root.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateForm {
    #[serde(rename = "newName", default)]
    pub new_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameForm {
    #[serde(rename = "oldName", default)]
    pub old_name: String,
    #[serde(rename = "newName", default)]
    pub new_name: String,
}
