use std::{
    cell::RefCell,
    collections::BTreeSet,
    io,
    path::{Path, PathBuf},
};

/// Filesystem operations needed to persist generated files.
///
/// The exporter only talks to the disk through this trait so that runs can be
/// previewed in memory or redirected in tests.
pub trait Filesystem {
    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all of its missing parents.
    fn mkdir(&self, path: &Path) -> io::Result<()>;

    /// Write `content` to `path`, replacing any existing file. Returns the number of bytes written.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<usize>;
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn mkdir(&self, path: &Path) -> io::Result<()> {
        (**self).mkdir(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<usize> {
        (**self).write_file(path, content)
    }
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl Filesystem for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn mkdir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<usize> {
        std::fs::write(path, content)?;
        Ok(content.len())
    }
}

/// An in-memory filesystem that records writes in order.
///
/// Writing into a directory that was never created fails with
/// [`io::ErrorKind::NotFound`], like the real filesystem would.
#[derive(Debug, Default)]
pub struct MemoryFs {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<Vec<(PathBuf, String)>>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem where `root` already exists.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let fs = Self::new();
        fs.dirs.borrow_mut().insert(root.into());
        fs
    }

    /// Get the content of a written file.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .iter()
            .find(|(p, _)| p == path.as_ref())
            .map(|(_, content)| content.clone())
    }

    /// All written files, in write order.
    pub fn files(&self) -> Vec<(PathBuf, String)> {
        self.files.borrow().clone()
    }

    /// Consume the filesystem and return the written files, in write order.
    pub fn into_files(self) -> Vec<(PathBuf, String)> {
        self.files.into_inner()
    }
}

impl Filesystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path) || self.files.borrow().iter().any(|(p, _)| p == path)
    }

    fn mkdir(&self, path: &Path) -> io::Result<()> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<usize> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !self.dirs.borrow().contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory {} does not exist", parent.display()),
            ));
        }

        let mut files = self.files.borrow_mut();
        match files.iter_mut().find(|(p, _)| p == path) {
            Some((_, existing)) => *existing = content.to_string(),
            None => files.push((path.to_path_buf(), content.to_string())),
        }
        Ok(content.len())
    }
}
