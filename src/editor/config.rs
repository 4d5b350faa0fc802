//! Editor configuration.

use std::path::PathBuf;

use crate::buffer::DEFAULT_CHUNK_CAPACITY;

/// Environment variable overriding [`EditorConfig::chunk_capacity`].
pub const CHUNK_CAPACITY_ENV: &str = "UNROLLED_CHUNK_CAPACITY";

/// Environment variable overriding [`EditorConfig::dictionary_path`].
pub const DICTIONARY_ENV: &str = "UNROLLED_DICTIONARY";

/// Word list consulted when no other path is configured.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Configuration for the text editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Characters per document chunk (0 = unbounded).
    pub chunk_capacity: usize,
    /// Word list used for spell checking, one word per line.
    pub dictionary_path: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
        }
    }
}

impl EditorConfig {
    /// Defaults, overridden by `UNROLLED_CHUNK_CAPACITY` and
    /// `UNROLLED_DICTIONARY` when they are set.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Set the chunk capacity.
    #[must_use]
    pub fn with_chunk_capacity(mut self, chunk_capacity: usize) -> Self {
        self.chunk_capacity = chunk_capacity;
        self
    }

    /// Set the dictionary path.
    #[must_use]
    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    /// Apply overrides looked up by environment variable name.
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(CHUNK_CAPACITY_ENV) {
            match raw.trim().parse() {
                Ok(capacity) => self.chunk_capacity = capacity,
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", CHUNK_CAPACITY_ENV, raw, e),
            }
        }
        if let Some(path) = lookup(DICTIONARY_ENV).filter(|p| !p.trim().is_empty()) {
            self.dictionary_path = PathBuf::from(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.chunk_capacity, 1500);
        assert_eq!(config.dictionary_path, PathBuf::from("/usr/share/dict/words"));
    }

    #[test]
    fn test_builders() {
        let config = EditorConfig::default()
            .with_chunk_capacity(64)
            .with_dictionary_path("/tmp/words");
        assert_eq!(config.chunk_capacity, 64);
        assert_eq!(config.dictionary_path, PathBuf::from("/tmp/words"));
    }

    #[test]
    fn test_overrides_apply() {
        let config = EditorConfig::default().with_overrides(lookup(&[
            (CHUNK_CAPACITY_ENV, " 32 "),
            (DICTIONARY_ENV, "/opt/words.txt"),
        ]));
        assert_eq!(config.chunk_capacity, 32);
        assert_eq!(config.dictionary_path, PathBuf::from("/opt/words.txt"));
    }

    #[test]
    fn test_from_env_without_variables() {
        if std::env::var_os(CHUNK_CAPACITY_ENV).is_none() && std::env::var_os(DICTIONARY_ENV).is_none() {
            assert_eq!(EditorConfig::from_env(), EditorConfig::default());
        }
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = EditorConfig::default()
            .with_overrides(lookup(&[(CHUNK_CAPACITY_ENV, "lots"), (DICTIONARY_ENV, "  ")]));
        assert_eq!(config, EditorConfig::default());
    }
}
