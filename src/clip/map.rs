//! Token-to-clip association map.
//!
//! Loaded once from the `gloss2anim.json` resource. Lookups for unmapped
//! tokens fall through to the `<token>_normalized.csv` naming convention,
//! so resolution is total: every token yields a candidate filename.

use std::collections::HashMap;

use log::{debug, warn};
use serde::Deserialize;

use super::source::ClipSource;

/// Resource name of the clip map, relative to the assets root.
pub const CLIP_MAP_RESOURCE: &str = "gloss2anim.json";

/// Suffix used to synthesize filenames for unmapped tokens.
pub const DEFAULT_CLIP_SUFFIX: &str = "_normalized.csv";

/// One record of the clip map resource. Only `key` and `path` are
/// consulted; `fps` and `tags` are carried by the authoring pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipMapEntry {
    pub key: String,
    pub path: String,
    #[serde(default)]
    pub fps: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ClipMapFile {
    entries: Vec<ClipMapEntry>,
}

/// Token → clip filename map with a deterministic fallback rule.
#[derive(Debug, Clone, Default)]
pub struct ClipMap {
    entries: HashMap<String, String>,
}

impl ClipMap {
    /// Empty map: every token resolves through the naming convention.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the map from its JSON resource text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let file: ClipMapFile = serde_json::from_str(text)?;
        let entries = file
            .entries
            .into_iter()
            .map(|e| (e.key, e.path))
            .collect::<HashMap<_, _>>();
        Ok(Self { entries })
    }

    /// Load the map through the clip source. Absence or a parse failure is
    /// non-fatal: resolution degrades to the naming convention for every
    /// token.
    pub fn load(source: &dyn ClipSource) -> Self {
        let text = match source.read(CLIP_MAP_RESOURCE) {
            Ok(text) => text,
            Err(err) => {
                warn!("{CLIP_MAP_RESOURCE} not available ({err}); using default clip names");
                return Self::empty();
            }
        };

        match Self::from_json(&text) {
            Ok(map) => {
                debug!("loaded {CLIP_MAP_RESOURCE} with {} entries", map.len());
                map
            }
            Err(err) => {
                warn!("{CLIP_MAP_RESOURCE} could not be parsed ({err}); using default clip names");
                Self::empty()
            }
        }
    }

    /// Resolve a token to a clip filename. Total and deterministic: mapped
    /// tokens return their table entry, everything else synthesizes
    /// `<token>_normalized.csv`.
    pub fn resolve(&self, token: &str) -> String {
        match self.entries.get(token) {
            Some(path) => path.clone(),
            None => format!("{token}{DEFAULT_CLIP_SUFFIX}"),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::source::MemorySource;

    #[test]
    fn test_resolve_mapped_and_fallback() {
        let map = ClipMap::from_json(
            r#"{"entries":[{"key":"hello","path":"hello_v3.csv","fps":30,"tags":["greeting"]}]}"#,
        )
        .unwrap();
        assert_eq!(map.resolve("hello"), "hello_v3.csv");
        assert_eq!(map.resolve("unknown"), "unknown_normalized.csv");
    }

    #[test]
    fn test_resolve_is_total_on_empty_map() {
        let map = ClipMap::empty();
        assert_eq!(map.resolve("안녕"), "안녕_normalized.csv");
        assert!(!map.resolve("x").is_empty());
    }

    #[test]
    fn test_load_missing_resource_degrades() {
        let source = MemorySource::new();
        let map = ClipMap::load(&source);
        assert!(map.is_empty());
        assert_eq!(map.resolve("t"), "t_normalized.csv");
    }

    #[test]
    fn test_load_malformed_resource_degrades() {
        let mut source = MemorySource::new();
        source.insert(CLIP_MAP_RESOURCE, "{not json");
        let map = ClipMap::load(&source);
        assert!(map.is_empty());
    }

    #[test]
    fn test_load_parses_entries() {
        let mut source = MemorySource::new();
        source.insert(
            CLIP_MAP_RESOURCE,
            r#"{"entries":[{"key":"a","path":"a.csv"},{"key":"b","path":"b.csv"}]}"#,
        );
        let map = ClipMap::load(&source);
        assert_eq!(map.len(), 2);
        assert_eq!(map.resolve("b"), "b.csv");
    }
}
