//! File-access collaborator for clip and map resources.
//!
//! The core only ever asks for "the text behind this relative name"; how
//! the bytes are fetched (directory, packaged archive, network) is the
//! host's concern.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed clip subdirectory under the bundled-assets root.
pub const CLIP_SUBDIR: &str = "csv_unity_v2_rad";

/// Relative path of a clip file under the assets root.
pub fn clip_path(file: &str) -> String {
    format!("{CLIP_SUBDIR}/{file}")
}

/// Byte-producing collaborator resolving relative resource names to text.
pub trait ClipSource {
    fn read(&self, name: &str) -> io::Result<String>;
}

/// Clip source reading from a bundled-assets directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at the assets directory. Clip files are
    /// expected under [`CLIP_SUBDIR`]; the clip map sits at the root.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Assets root this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ClipSource for DirSource {
    fn read(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.root.join(name))
    }
}

/// In-memory clip source for tests and embedded resources.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under a relative name.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.resources.insert(name.into(), text.into());
    }

    /// Register a clip file under the clip subdirectory.
    pub fn insert_clip(&mut self, file: &str, text: impl Into<String>) {
        self.insert(clip_path(file), text);
    }
}

impl ClipSource for MemorySource {
    fn read(&self, name: &str) -> io::Result<String> {
        self.resources.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no resource {name:?}"))
        })
    }
}
