use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};

use crate::error::{AppError, Result};
use crate::storage::listing;
use crate::storage::root::WorkDir;

impl WorkDir {
    /// Runs the recursive walk on the blocking pool.
    pub async fn list(&self) -> Result<Vec<crate::models::DirectoryEntry>> {
        let root = self.path().to_path_buf();
        let max_depth = self.max_depth();
        tokio::task::spawn_blocking(move || listing::walk(&root, max_depth))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Creates `name` and any missing parents. An existing directory is not an error.
    pub async fn create_dir(&self, name: &str) -> Result<PathBuf> {
        let path = self.resolve(name);

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(0o777);
        builder
            .create(&path)
            .await
            .map_err(|e| AppError::fs("mkdir", &path, e))?;

        tracing::info!(path = %path.display(), "created directory");
        Ok(path)
    }

    /// Removes a single file or empty directory.
    pub async fn remove(&self, name: &str) -> Result<PathBuf> {
        let path = self.resolve(name);
        self.refuse_root(&path, "remove")?;

        let meta = fs::symlink_metadata(&path)
            .await
            .map_err(|e| AppError::fs("remove", &path, e))?;
        let removed = if meta.is_dir() {
            fs::remove_dir(&path).await
        } else {
            fs::remove_file(&path).await
        };
        removed.map_err(|e| AppError::fs("remove", &path, e))?;

        tracing::info!(path = %path.display(), "removed");
        Ok(path)
    }

    /// Renames `old_name` to `new_name`, replacing the target if the platform allows it.
    pub async fn rename(&self, old_name: &str, new_name: &str) -> Result<PathBuf> {
        let from = self.resolve(old_name);
        let to = self.resolve(new_name);
        self.refuse_root(&from, "rename")?;
        self.refuse_root(&to, "rename")?;

        fs::rename(&from, &to).await.map_err(|source| AppError::Fs {
            op: "rename",
            path: format!("{} {}", from.display(), to.display()),
            source,
        })?;

        tracing::info!(from = %from.display(), to = %to.display(), "renamed");
        Ok(to)
    }

    /// Creates or truncates the upload target for `file_name`.
    pub async fn create_file(&self, file_name: &str) -> Result<(PathBuf, File)> {
        let path = self.resolve(file_name);
        let file = File::create(&path)
            .await
            .map_err(|e| AppError::fs("open", &path, e))?;
        Ok((path, file))
    }

    /// Opens `name` for download and returns it with its length.
    pub async fn open_file(&self, name: &str) -> Result<(PathBuf, File, u64)> {
        let path = self.resolve(name);
        let file = File::open(&path)
            .await
            .map_err(|e| AppError::fs("open", &path, e))?;
        let meta = file
            .metadata()
            .await
            .map_err(|e| AppError::fs("stat", &path, e))?;
        if meta.is_dir() {
            return Err(AppError::fs(
                "read",
                &path,
                io::Error::other("is a directory"),
            ));
        }
        Ok((path, file, meta.len()))
    }

    fn refuse_root(&self, path: &Path, op: &str) -> Result<()> {
        if self.is_root(path) {
            return Err(AppError::BadRequest(format!(
                "refusing to {} the root directory",
                op
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn scratch_root() -> (tempfile::TempDir, WorkDir) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = WorkDir::bootstrap(dir.path(), None).unwrap();
        (dir, root)
    }

    #[tokio::test]
    async fn test_create_dir_is_mkdir_all() {
        let (dir, root) = scratch_root();

        root.create_dir("reports/2024").await.unwrap();
        assert!(dir.path().join("reports/2024").is_dir());

        // Existing directory is fine.
        root.create_dir("reports").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_dir_over_file_fails() {
        let (dir, root) = scratch_root();
        std_fs::write(dir.path().join("notes"), b"x").unwrap();

        let err = root.create_dir("notes").await.unwrap_err();
        assert!(matches!(err, AppError::Fs { op: "mkdir", .. }));
    }

    #[tokio::test]
    async fn test_remove_only_named_node() {
        let (dir, root) = scratch_root();
        std_fs::write(dir.path().join("a.txt"), b"a").unwrap();
        std_fs::write(dir.path().join("b.txt"), b"b").unwrap();
        std_fs::create_dir(dir.path().join("empty")).unwrap();

        root.remove("a.txt").await.unwrap();
        root.remove("empty").await.unwrap();

        assert!(!dir.path().join("a.txt").exists());
        assert!(!dir.path().join("empty").exists());
        assert!(dir.path().join("b.txt").exists());
    }

    #[tokio::test]
    async fn test_remove_non_empty_dir_fails() {
        let (dir, root) = scratch_root();
        std_fs::create_dir(dir.path().join("full")).unwrap();
        std_fs::write(dir.path().join("full/inner.txt"), b"x").unwrap();

        let err = root.remove("full").await.unwrap_err();
        assert!(matches!(err, AppError::Fs { op: "remove", .. }));
        assert!(dir.path().join("full/inner.txt").exists());
    }

    #[tokio::test]
    async fn test_remove_missing_fails() {
        let (_dir, root) = scratch_root();
        let err = root.remove("missing.txt").await.unwrap_err();
        match err {
            AppError::Fs { source, .. } => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remove_root_is_rejected() {
        let (dir, root) = scratch_root();
        let err = root.remove("").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(dir.path().is_dir());
    }

    #[tokio::test]
    async fn test_rename_round_trip() {
        let (dir, root) = scratch_root();
        std_fs::write(dir.path().join("a.txt"), b"payload").unwrap();

        root.rename("a.txt", "b.txt").await.unwrap();
        assert!(!dir.path().join("a.txt").exists());
        assert_eq!(std_fs::read(dir.path().join("b.txt")).unwrap(), b"payload");

        root.rename("b.txt", "a.txt").await.unwrap();
        assert_eq!(std_fs::read(dir.path().join("a.txt")).unwrap(), b"payload");
        assert!(!dir.path().join("b.txt").exists());
    }

    #[tokio::test]
    async fn test_rename_missing_source_fails() {
        let (_dir, root) = scratch_root();
        let err = root.rename("nope", "still-nope").await.unwrap_err();
        assert!(matches!(err, AppError::Fs { op: "rename", .. }));
    }

    #[tokio::test]
    async fn test_open_file_rejects_directory() {
        let (dir, root) = scratch_root();
        std_fs::create_dir(dir.path().join("sub")).unwrap();

        let err = root.open_file("sub").await.unwrap_err();
        assert!(matches!(err, AppError::Fs { op: "read", .. }));
    }

    #[tokio::test]
    async fn test_list_runs_walk() {
        let (dir, root) = scratch_root();
        std_fs::write(dir.path().join("a.txt"), b"a").unwrap();

        let entries = root.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "a.txt");
    }
}
