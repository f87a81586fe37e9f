use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project name is empty")]
    EmptyName,
    #[error("project \"{0}\" is not empty")]
    NotEmpty(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// In-memory list of project names, backed 1:1 by the subdirectories of a
/// root folder. The cache is rebuilt by [`refresh`](Self::refresh) and kept in
/// sync incrementally by [`create`](Self::create) and [`delete`](Self::delete).
///
/// The cache is kept sorted by name so the listing is deterministic regardless
/// of directory enumeration order.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    root: PathBuf,
    projects: Vec<String>,
}

impl ProjectStore {
    /// Opens the store at `root`, creating the directory if it is missing,
    /// and scans it for existing projects.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        let mut store = Self {
            root,
            projects: Vec::new(),
        };
        store.refresh()?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project names, sorted.
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.iter().any(|p| p == name)
    }

    /// Rebuilds the cache from the immediate subdirectories of the root.
    /// Plain files are ignored; entries with non-UTF-8 names are skipped.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::debug!(?raw, "skipping non-UTF-8 directory name");
                }
            }
        }
        names.sort();
        self.projects = names;
        Ok(())
    }

    /// Creates the directory for `name` and adds it to the cache. Surrounding
    /// whitespace is stripped from the name. Creating a project whose
    /// directory already exists is not an error, and the cache entry is never
    /// duplicated.
    pub fn create(&mut self, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        fs::create_dir_all(self.root.join(name))?;
        if let Err(pos) = self.projects.binary_search_by(|p| p.as_str().cmp(name)) {
            self.projects.insert(pos, name.to_string());
        }
        Ok(())
    }

    /// Removes the directory for `name` and drops it from the cache. The
    /// directory must be empty; otherwise the cache is left untouched and
    /// [`StoreError::NotEmpty`] is returned.
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        if let Err(err) = fs::remove_dir(self.root.join(name)) {
            return Err(match err.kind() {
                io::ErrorKind::DirectoryNotEmpty => StoreError::NotEmpty(name.to_string()),
                _ => StoreError::Io(err),
            });
        }
        self.projects.retain(|p| p != name);
        Ok(())
    }
}
