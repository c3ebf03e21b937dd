//! # Screen Loader
//!
//! Fetch then parse, stamped with a generation token.
//!
//! Every `load` takes the next generation from a counter shared by all
//! clones of the loader. Only a result carrying the latest generation may
//! be shown, so a slow fetch can never overwrite a newer screen.

use crate::source::ScreenSource;
use layer_shared::{parse_screen, ScreenDefinition};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Message shown when a screen cannot be fetched or parsed.
pub const PROCESSING_ERROR: &str = "processing error";

/// What the host should display.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    /// A load is in flight.
    #[default]
    Loading,
    /// A parsed screen.
    Success(ScreenDefinition),
    /// The load failed.
    Error(String),
}

impl UiState {
    /// The screen, when loaded.
    #[must_use]
    pub fn screen(&self) -> Option<&ScreenDefinition> {
        match self {
            Self::Success(screen) => Some(screen),
            Self::Loading | Self::Error(_) => None,
        }
    }
}

/// Outcome of one load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedScreen {
    /// Generation taken when the load started.
    pub generation: u64,
    /// Requested key.
    pub key: String,
    /// Resulting state.
    pub state: UiState,
}

/// Loads screens and hands out generation tokens.
#[derive(Debug, Clone, Default)]
pub struct ScreenLoader {
    generation: Arc<AtomicU64>,
}

impl ScreenLoader {
    /// Creates a loader at generation 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the most recently started load.
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// True if no load started after the one stamped `generation`.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }

    /// Fetches and parses `key`.
    ///
    /// Never fails: fetch and parse failures come back as
    /// [`UiState::Error`].
    pub async fn load<S: ScreenSource>(&self, source: &S, key: &str) -> LoadedScreen {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!("Loading screen '{}' (generation {})", key, generation);

        let state = match source.fetch_screen_config(key).await {
            Ok(json) => match parse_screen(&json) {
                Some(screen) => UiState::Success(screen),
                None => {
                    tracing::warn!("Screen '{}' has no usable payload", key);
                    UiState::Error(PROCESSING_ERROR.to_owned())
                }
            },
            Err(err) => {
                tracing::warn!("Failed to fetch screen '{}': {}", key, err);
                UiState::Error(PROCESSING_ERROR.to_owned())
            }
        };

        LoadedScreen {
            generation,
            key: key.to_owned(),
            state,
        }
    }
}
