//! # Session
//!
//! One engine, one render target, one loader. Applies loaded screens in
//! the order they were requested and drops the ones that lost the race.

use crate::loader::{LoadedScreen, ScreenLoader, UiState};
use crate::source::ScreenSource;
use layer_ui::{ElementId, EngineConfig, RenderReport, RuntimeEngine, ScreenRenderer};

/// What `Session::apply` did with a loaded screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The screen replaced the container's content.
    Applied(RenderReport),
    /// The result still reports a load in flight; nothing changed.
    Pending,
    /// A newer load has started; the result was dropped.
    Stale,
    /// The load failed; the container was emptied.
    Failed(String),
}

/// A live screen host.
#[derive(Debug)]
pub struct Session {
    engine: RuntimeEngine,
    container: ElementId,
    loader: ScreenLoader,
    state: UiState,
}

impl Session {
    /// Creates a session with an empty render target.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_engine(RuntimeEngine::new(config))
    }

    /// Wraps an existing engine, adding a render target to its tree.
    #[must_use]
    pub fn with_engine(mut engine: RuntimeEngine) -> Self {
        let container = engine.create_root_container();
        Self {
            engine,
            container,
            loader: ScreenLoader::new(),
            state: UiState::Loading,
        }
    }

    /// The engine.
    #[must_use]
    pub fn engine(&self) -> &RuntimeEngine {
        &self.engine
    }

    /// Mutable engine, for input and validation.
    pub fn engine_mut(&mut self) -> &mut RuntimeEngine {
        &mut self.engine
    }

    /// The render target.
    #[must_use]
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// A handle to this session's loader. Loads started through any clone
    /// count toward staleness.
    #[must_use]
    pub fn loader(&self) -> ScreenLoader {
        self.loader.clone()
    }

    /// Last applied state.
    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Shows a loaded screen unless a newer load has started since.
    pub fn apply(&mut self, loaded: LoadedScreen) -> ApplyOutcome {
        if !self.loader.is_current(loaded.generation) {
            tracing::debug!(
                "Dropping stale screen '{}' (generation {}, current {})",
                loaded.key,
                loaded.generation,
                self.loader.current_generation()
            );
            return ApplyOutcome::Stale;
        }

        let outcome = match &loaded.state {
            UiState::Loading => ApplyOutcome::Pending,
            UiState::Success(screen) => {
                self.engine.clear();
                ApplyOutcome::Applied(ScreenRenderer::render(&mut self.engine, self.container, screen))
            }
            UiState::Error(message) => {
                self.engine.clear();
                let removed = self.engine.tree_mut().clear_children(self.container);
                tracing::debug!("Screen '{}' failed, {} elements removed", loaded.key, removed);
                ApplyOutcome::Failed(message.clone())
            }
        };
        self.state = loaded.state;
        outcome
    }

    /// Loads `key` from `source` and applies it. The state only changes
    /// if the result is applied.
    pub async fn load_and_apply<S: ScreenSource>(&mut self, source: &S, key: &str) -> ApplyOutcome {
        let loaded = self.loader.load(source, key).await;
        self.apply(loaded)
    }
}
