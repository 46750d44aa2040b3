//! Data transfer objects for requests and responses.
//!
//! - `entry`: DirectoryEntry, Listing produced by the recursive walk
//! - `forms`: query strings and urlencoded form bodies

pub mod entry;
pub mod forms;

pub use entry::*;
pub use forms::*;
