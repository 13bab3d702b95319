//! File and directory utilities for the target project
//!
//! All paths are resolved against the project root held by [`ProjectFiles`]
//! rather than the process working directory. Every operation is safe to
//! repeat: files are overwritten, directories are created only when missing
//! and ignore entries are appended only when absent.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::constants::{
    FILE_GITIGNORE, MSG_DIRECTORY_CREATED, MSG_ENTRY_ADDED, MSG_ENTRY_EXISTS, MSG_FILE_CREATED,
};
use crate::filesystem::FileSystem;
use crate::utils::{fill, print_info, print_success};

/// File operations scoped to one project directory
pub struct ProjectFiles<F: FileSystem> {
    root: PathBuf,
    fs: F,
}

impl<F: FileSystem> ProjectFiles<F> {
    /// Creates the helper for `root`
    ///
    /// A relative root is made absolute against the current directory once,
    /// here, so every path handed back to callers is absolute. The process
    /// working directory itself is never changed.
    pub fn new(root: impl Into<PathBuf>, fs: F) -> Self {
        let root = root.into();
        let root = if root.is_absolute() {
            root
        } else {
            std::path::absolute(&root).unwrap_or(root)
        };
        Self { root, fs }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Resolves a project-relative name to a path under the root
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.fs.exists(&self.resolve(name))
    }

    /// Writes `content` to `name`, replacing any previous content
    ///
    /// Parent directories are not created; writing below a missing
    /// directory fails.
    ///
    /// # Returns
    ///
    /// The resolved path of the written file.
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.resolve(name);
        self.fs.write(&path, content)?;
        print_success(&fill(MSG_FILE_CREATED, name));
        Ok(path)
    }

    /// Creates `name` and any missing parents unless it already exists
    ///
    /// # Returns
    ///
    /// * `true` - the directory was created
    /// * `false` - it was already there and nothing was done
    pub fn ensure_directory_exists(&self, name: &str) -> Result<bool> {
        let path = self.resolve(name);
        if self.fs.exists(&path) {
            return Ok(false);
        }

        self.fs.create_dir_all(&path)?;
        print_success(&fill(MSG_DIRECTORY_CREATED, name));
        Ok(true)
    }

    /// Appends `entry` to the ignore file `file` unless a line equals it
    ///
    /// The file is created empty when missing. Lines are compared verbatim
    /// after splitting on `\n`, so `"dist/ "` or a CRLF line does not match
    /// `"dist/"`. The entry is appended as `"\n" + entry` in one write;
    /// existing lines are left untouched.
    ///
    /// # Returns
    ///
    /// * `true` - the entry was appended
    /// * `false` - the entry was already present and nothing was written
    pub fn add_ignore_entry(&self, file: &str, entry: &str) -> Result<bool> {
        let path = self.resolve(file);

        if !self.fs.exists(&path) {
            self.fs.write(&path, "")?;
        }

        let content = self.fs.read_to_string(&path)?;
        if content.split('\n').any(|line| line == entry) {
            print_info(&fill(MSG_ENTRY_EXISTS, entry));
            return Ok(false);
        }

        self.fs.append(&path, &format!("\n{entry}"))?;
        print_success(&fill(MSG_ENTRY_ADDED, entry));
        Ok(true)
    }

    /// [`add_ignore_entry`](Self::add_ignore_entry) on the project's `.gitignore`
    pub fn add_to_gitignore(&self, entry: &str) -> Result<bool> {
        self.add_ignore_entry(FILE_GITIGNORE, entry)
    }

    /// Marks `name` executable
    pub fn make_executable(&self, name: &str) -> Result<()> {
        let path = self.resolve(name);
        self.fs
            .set_executable(&path)
            .with_context(|| format!("Failed to make {name} executable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::filesystem::mock::MockFileSystem;

    const ROOT: &str = "/project";

    fn files(fs: MockFileSystem) -> ProjectFiles<MockFileSystem> {
        ProjectFiles::new(ROOT, fs.with_directory(ROOT))
    }

    fn at(name: &str) -> PathBuf {
        Path::new(ROOT).join(name)
    }

    #[test]
    fn test_create_file_writes_content_and_returns_path() -> Result<()> {
        let files = files(MockFileSystem::new());

        let path = files.create_file("test.js", "test content")?;

        assert_eq!(path, at("test.js"));
        assert_eq!(files.fs().writes(), vec![(at("test.js"), "test content".to_string())]);
        Ok(())
    }

    #[test]
    fn test_create_file_with_empty_content() -> Result<()> {
        let files = files(MockFileSystem::new());
        files.create_file("empty.txt", "")?;
        assert_eq!(files.fs().file(&at("empty.txt")).as_deref(), Some(""));
        Ok(())
    }

    #[test]
    fn test_create_file_overwrites() -> Result<()> {
        let files = files(MockFileSystem::new().with_file(at(".prettierrc"), "{\"semi\":false}"));
        files.create_file(".prettierrc", "{}")?;
        assert_eq!(files.fs().file(&at(".prettierrc")).as_deref(), Some("{}"));
        Ok(())
    }

    #[test]
    fn test_create_file_nested_without_parent_fails() {
        let files = files(MockFileSystem::new());
        let err = files.create_file("dir1/dir2/test.js", "x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SetupError>(),
            Some(SetupError::Io { .. })
        ));
    }

    #[test]
    fn test_create_file_propagates_write_error() {
        let files = files(MockFileSystem::new().with_failure(at("test.js"), "File creation failed"));
        let err = files.create_file("test.js", "x").unwrap_err();
        assert!(err.to_string().contains("File creation failed"));
    }

    #[test]
    fn test_add_to_gitignore_creates_missing_file() -> Result<()> {
        let files = files(MockFileSystem::new());

        assert!(files.add_to_gitignore("node_modules/")?);

        assert_eq!(files.fs().writes(), vec![(at(".gitignore"), String::new())]);
        assert_eq!(
            files.fs().appends(),
            vec![(at(".gitignore"), "\nnode_modules/".to_string())]
        );
        Ok(())
    }

    #[test]
    fn test_add_to_gitignore_create_write_error() {
        let files = files(MockFileSystem::new().with_failure(at(".gitignore"), "Write failed"));

        let err = files.add_to_gitignore("node_modules/").unwrap_err();

        assert!(err.to_string().contains("Write failed"));
        assert!(files.fs().appends().is_empty());
        assert!(files.fs().file(&at(".gitignore")).is_none());
    }

    #[test]
    fn test_relative_root_is_made_absolute() -> Result<()> {
        let files = ProjectFiles::new("relative/project", MockFileSystem::new());

        assert!(files.root().is_absolute());
        assert!(files.root().ends_with("relative/project"));
        assert!(files.resolve(".prettierrc").is_absolute());
        Ok(())
    }

    #[test]
    fn test_add_to_gitignore_appends_to_existing() -> Result<()> {
        let files = files(MockFileSystem::new().with_file(at(".gitignore"), "dist/\ncoverage/"));

        assert!(files.add_to_gitignore("node_modules/")?);

        assert!(files.fs().writes().is_empty());
        assert_eq!(
            files.fs().file(&at(".gitignore")).as_deref(),
            Some("dist/\ncoverage/\nnode_modules/")
        );
        Ok(())
    }

    #[test]
    fn test_add_to_gitignore_skips_duplicate() -> Result<()> {
        let files = files(MockFileSystem::new().with_file(at(".gitignore"), "node_modules/\ndist/"));

        assert!(!files.add_to_gitignore("node_modules/")?);
        assert!(files.fs().appends().is_empty());
        assert!(files.fs().writes().is_empty());
        Ok(())
    }

    #[test]
    fn test_add_to_gitignore_matches_whole_lines_only() -> Result<()> {
        let files = files(
            MockFileSystem::new().with_file(at(".gitignore"), "node_modules/extra\ndist/ \r\nbuild\r"),
        );

        assert!(files.add_to_gitignore("node_modules/")?);
        assert!(files.add_to_gitignore("dist/")?);
        assert!(files.add_to_gitignore("build")?);
        assert_eq!(files.fs().appends().len(), 3);
        Ok(())
    }

    #[test]
    fn test_add_to_gitignore_read_error() {
        let files = files(
            MockFileSystem::new()
                .with_file(at(".gitignore"), "")
                .with_failure(at(".gitignore"), "Read failed"),
        );
        let err = files.add_to_gitignore("node_modules/").unwrap_err();
        assert!(err.to_string().contains("Read failed"));
    }

    #[test]
    fn test_add_ignore_entry_custom_file() -> Result<()> {
        let files = files(MockFileSystem::new());
        assert!(files.add_ignore_entry(".prettierignore", "dist")?);
        assert_eq!(
            files.fs().file(&at(".prettierignore")).as_deref(),
            Some("\ndist")
        );
        Ok(())
    }

    #[test]
    fn test_ensure_directory_exists_creates_once() -> Result<()> {
        let files = files(MockFileSystem::new());

        assert!(files.ensure_directory_exists("test-dir")?);
        assert!(!files.ensure_directory_exists("test-dir")?);
        Ok(())
    }

    #[test]
    fn test_ensure_directory_exists_nested() -> Result<()> {
        let files = files(MockFileSystem::new());

        assert!(files.ensure_directory_exists("dir1/dir2/dir3")?);
        assert!(files.fs().is_dir(&at("dir1/dir2")));
        assert!(!files.ensure_directory_exists("dir1")?);
        Ok(())
    }

    #[test]
    fn test_ensure_directory_exists_error() {
        let files = files(MockFileSystem::new().with_failure(at("test-dir"), "Directory creation failed"));
        assert!(files.ensure_directory_exists("test-dir").is_err());
    }

    #[test]
    fn test_make_executable() -> Result<()> {
        let files = files(MockFileSystem::new().with_file(at("hook"), "#!/bin/sh"));
        files.make_executable("hook")?;
        assert!(files.fs().is_executable(&at("hook")));
        assert!(files.make_executable("missing").is_err());
        Ok(())
    }
}
