//! Filesystem operations abstraction layer
//!
//! This module provides an abstraction over the handful of filesystem
//! operations the setup run performs, so the file utilities can be tested
//! against an in-memory implementation as well as a real temp directory.

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::SetupError;

/// Trait for filesystem operations
///
/// Every failing operation of [`RealFileSystem`] produces a
/// [`SetupError::Io`] naming the path involved.
pub trait FileSystem {
    /// Create a directory and all its parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Read the entire contents of a file into a string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a string to a file, creating or truncating it
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Append a string to the end of an existing file
    fn append(&self, path: &Path, contents: &str) -> Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Set the permission bits used for hook scripts (`0o755` on unix)
    fn set_executable(&self, path: &Path) -> Result<()>;
}

/// Production implementation using std::fs
pub struct RealFileSystem;

impl RealFileSystem {
    /// Create a new RealFileSystem instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| SetupError::io(path, e))?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::io(path, e))?;
        Ok(content)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|e| SetupError::io(path, e))?;
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| SetupError::io(path, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| SetupError::io(path, e))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = std::fs::metadata(path)
            .map_err(|e| SetupError::io(path, e))?
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).map_err(|e| SetupError::io(path, e))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn set_executable(&self, path: &Path) -> Result<()> {
        // No permission bits to set, but the file must still be there
        std::fs::metadata(path).map_err(|e| SetupError::io(path, e))?;
        Ok(())
    }
}

pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;

    /// Mock filesystem for testing
    ///
    /// Records every write and append so tests can assert that an
    /// operation did or did not touch a file.
    pub struct MockFileSystem {
        files: RefCell<HashMap<PathBuf, String>>,
        directories: RefCell<HashSet<PathBuf>>,
        executables: RefCell<HashSet<PathBuf>>,
        writes: RefCell<Vec<(PathBuf, String)>>,
        appends: RefCell<Vec<(PathBuf, String)>>,
        should_fail: RefCell<HashMap<PathBuf, &'static str>>,
    }

    impl Default for MockFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockFileSystem {
        /// Create a new MockFileSystem instance
        pub fn new() -> Self {
            Self {
                files: RefCell::new(HashMap::new()),
                directories: RefCell::new(HashSet::new()),
                executables: RefCell::new(HashSet::new()),
                writes: RefCell::new(Vec::new()),
                appends: RefCell::new(Vec::new()),
                should_fail: RefCell::new(HashMap::new()),
            }
        }

        /// Add a file to the mock filesystem
        pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
            self.files
                .borrow_mut()
                .insert(path.into(), content.to_string());
            self
        }

        /// Add a directory to the mock filesystem
        pub fn with_directory(self, path: impl Into<PathBuf>) -> Self {
            self.directories.borrow_mut().insert(path.into());
            self
        }

        /// Make every operation on a specific path fail
        pub fn with_failure(self, path: impl Into<PathBuf>, error: &'static str) -> Self {
            self.should_fail.borrow_mut().insert(path.into(), error);
            self
        }

        /// Current content of a file, if present
        pub fn file(&self, path: &Path) -> Option<String> {
            self.files.borrow().get(path).cloned()
        }

        /// All `write` calls in order
        pub fn writes(&self) -> Vec<(PathBuf, String)> {
            self.writes.borrow().clone()
        }

        /// All `append` calls in order
        pub fn appends(&self) -> Vec<(PathBuf, String)> {
            self.appends.borrow().clone()
        }

        /// Whether `set_executable` was called for a path
        pub fn is_executable(&self, path: &Path) -> bool {
            self.executables.borrow().contains(path)
        }

        fn check_failure(&self, path: &Path) -> Result<()> {
            if let Some(error) = self.should_fail.borrow().get(path) {
                return Err(SetupError::io(path, std::io::Error::other(*error)).into());
            }
            Ok(())
        }

        fn parent_exists(&self, path: &Path) -> bool {
            match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => self.is_dir(parent),
                _ => true,
            }
        }
    }

    impl FileSystem for MockFileSystem {
        fn create_dir_all(&self, path: &Path) -> Result<()> {
            self.check_failure(path)?;
            let mut directories = self.directories.borrow_mut();
            for ancestor in path.ancestors() {
                if ancestor.as_os_str().is_empty() {
                    break;
                }
                directories.insert(ancestor.to_path_buf());
            }
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.check_failure(path)?;
            self.file(path).ok_or_else(|| {
                SetupError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                )
                .into()
            })
        }

        fn write(&self, path: &Path, contents: &str) -> Result<()> {
            self.check_failure(path)?;
            if !self.parent_exists(path) {
                return Err(SetupError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "parent directory missing"),
                )
                .into());
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_string());
            self.writes
                .borrow_mut()
                .push((path.to_path_buf(), contents.to_string()));
            Ok(())
        }

        fn append(&self, path: &Path, contents: &str) -> Result<()> {
            self.check_failure(path)?;
            let mut files = self.files.borrow_mut();
            let Some(existing) = files.get_mut(path) else {
                return Err(SetupError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                )
                .into());
            };
            existing.push_str(contents);
            self.appends
                .borrow_mut()
                .push((path.to_path_buf(), contents.to_string()));
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path) || self.directories.borrow().contains(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.directories.borrow().contains(path)
        }

        fn set_executable(&self, path: &Path) -> Result<()> {
            self.check_failure(path)?;
            if !self.files.borrow().contains_key(path) {
                return Err(SetupError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                )
                .into());
            }
            self.executables.borrow_mut().insert(path.to_path_buf());
            Ok(())
        }
    }
}
