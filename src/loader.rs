use super::error::{self, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was left untouched
    Skipped,
}

/// Filesystem access for template units. Relative paths resolve against
/// the base directory when one is set, and against the working directory
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    base: Option<PathBuf>,
}

impl Loader {
    pub fn new() -> Self {
        Self { base: None }
    }

    pub fn with_base<P: Into<PathBuf>>(base: P) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        match self.base {
            Some(ref base) => base.join(path),
            None => path.as_ref().to_path_buf(),
        }
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = self.resolve(path);

        debug!("Loading path: {}", path.to_string_lossy());

        fs::read_to_string(&path)
            .map_err(|e| error::file_error(format!("{}: {}", path.to_string_lossy(), e)))
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.resolve(path).exists()
    }

    pub fn store<P: AsRef<Path>>(&self, path: P, contents: &str) -> Result<()> {
        let path = self.resolve(path);

        debug!("Writing path: {}", path.to_string_lossy());

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    error::file_error(format!("{}: {}", parent.to_string_lossy(), e))
                })?;
            }
        }

        fs::write(&path, contents)
            .map_err(|e| error::file_error(format!("{}: {}", path.to_string_lossy(), e)))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_load_reads_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("t1.tera"), "fn t1() {}\n").unwrap();

        let loader = Loader::with_base(temp.path());

        assert_eq!(loader.load("t1.tera").unwrap(), "fn t1() {}\n");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let loader = Loader::with_base(temp.path());

        let err = loader.load("not-exist.tera").unwrap_err();

        match err.kind() {
            ErrorKind::FileError(msg) => assert!(msg.contains("not-exist.tera")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_store_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let loader = Loader::with_base(temp.path());

        loader.store("a/b/c/out.rs", "nested").unwrap();

        let path = temp.path().join("a").join("b").join("c").join("out.rs");
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_store_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let loader = Loader::with_base(temp.path());

        loader.store("out.rs", "first").unwrap();
        loader.store("out.rs", "second").unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("out.rs")).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_exists() {
        let temp = TempDir::new().unwrap();
        let loader = Loader::with_base(temp.path());

        assert!(!loader.exists("out.rs"));

        fs::write(temp.path().join("out.rs"), "content").unwrap();
        assert!(loader.exists("out.rs"));
    }

    #[test]
    fn test_resolve_absolute_path_ignores_base() {
        let temp = TempDir::new().unwrap();
        let loader = Loader::with_base("/nowhere");

        let abs = temp.path().join("x.rs");
        assert_eq!(loader.resolve(&abs), abs);
    }
}
