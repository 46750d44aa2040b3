use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::error::{AppError, Result};

/// Subdirectory of the working directory exposed when no root is configured.
pub const DEFAULT_ROOT_DIR: &str = "workDir";

/// The directory tree served by the file manager.
///
/// Constructed once at startup and shared read-only between handlers; only
/// the contents of the directory change afterwards.
#[derive(Debug, Clone)]
pub struct WorkDir {
    path: PathBuf,
    max_depth: Option<usize>,
}

impl WorkDir {
    /// Makes sure `path` exists as a directory, creating it and any missing
    /// parents when absent. Any other stat failure is returned to the caller.
    pub fn bootstrap<P: AsRef<Path>>(path: P, max_depth: Option<usize>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(AppError::fs(
                    "stat",
                    &path,
                    io::Error::other("not a directory"),
                ));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                create_dir_all(&path).map_err(|e| AppError::fs("mkdir", &path, e))?;
                tracing::info!(path = %path.display(), "created root directory");
            }
            Err(e) => return Err(AppError::fs("stat", &path, e)),
        }

        Ok(Self { path, max_depth })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Joins a user supplied name onto the root with lexical cleaning.
    ///
    /// `.` segments vanish, `..` pops a preceding segment and leading
    /// separators are ignored. A `..` with nothing left to pop is kept, so
    /// names can still reach outside the root.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let mut segments: Vec<&str> = Vec::new();

        for component in Path::new(name).components() {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
                Component::ParentDir => match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    _ => segments.push(".."),
                },
                Component::Normal(segment) => {
                    if let Some(segment) = segment.to_str() {
                        segments.push(segment);
                    }
                }
            }
        }

        let mut resolved = self.path.clone();
        resolved.extend(segments);
        resolved
    }

    pub fn is_root(&self, path: &Path) -> bool {
        path == self.path
    }
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}

pub type SharedRoot = Arc<WorkDir>;
