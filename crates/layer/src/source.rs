//! # Screen Sources
//!
//! Where screen payloads come from. A source hands back raw JSON; parsing
//! is the loader's job.

use crate::error::{SourceError, SourceResult};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Fetches raw screen payloads by key.
pub trait ScreenSource: Send + Sync {
    /// Returns the JSON payload stored under `key`.
    fn fetch_screen_config(&self, key: &str) -> impl Future<Output = SourceResult<String>> + Send;
}

/// In-memory payloads, for tests and embedded screens.
#[derive(Debug, Clone, Default)]
pub struct StaticScreenSource {
    screens: HashMap<String, String>,
}

impl StaticScreenSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a payload.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, json: impl Into<String>) -> Self {
        self.insert(key, json);
        self
    }

    /// Adds or replaces a payload.
    pub fn insert(&mut self, key: impl Into<String>, json: impl Into<String>) {
        self.screens.insert(key.into(), json.into());
    }

    /// Number of stored screens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// True if no screen is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

impl ScreenSource for StaticScreenSource {
    fn fetch_screen_config(&self, key: &str) -> impl Future<Output = SourceResult<String>> + Send {
        let result = self
            .screens
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_owned()));
        std::future::ready(result)
    }
}

/// Reads `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryScreenSource {
    root: PathBuf,
}

impl DirectoryScreenSource {
    /// Creates a source reading from `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the screens are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`. Keys must be plain file stems.
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidKey`] for empty keys and keys containing path
    /// separators or `..`.
    pub fn path_for(&self, key: &str) -> SourceResult<PathBuf> {
        let plain = !key.trim().is_empty()
            && !key.contains(['/', '\\'])
            && !key.contains("..");
        if !plain {
            return Err(SourceError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl ScreenSource for DirectoryScreenSource {
    fn fetch_screen_config(&self, key: &str) -> impl Future<Output = SourceResult<String>> + Send {
        let path = self.path_for(key);
        let key = key.to_owned();
        async move {
            let path = path?;
            match tokio::fs::read_to_string(&path).await {
                Ok(json) => {
                    tracing::debug!("Read screen '{}' from {}", key, path.display());
                    Ok(json)
                }
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    Err(SourceError::NotFound(key))
                }
                Err(source) => Err(SourceError::Io { path, source }),
            }
        }
    }
}
