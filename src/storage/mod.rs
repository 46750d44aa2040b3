pub mod listing;
pub mod ops;
pub mod root;

pub use root::{DEFAULT_ROOT_DIR, SharedRoot, WorkDir};
