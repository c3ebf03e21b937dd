//! # LAYER
//!
//! Host shell for the server-driven UI engine.
//!
//! ```text
//! ScreenSource ──> ScreenLoader ──> Session ──> RuntimeEngine ──> ElementTree
//!   (JSON)          (parse, token)   (stale?)     (render)
//! ```
//!
//! ## Modules
//!
//! - `source`: where screen payloads come from
//! - `loader`: fetch, parse and generation tokens
//! - `session`: applies the latest load to a render target
//! - `config`: TOML host settings
//! - `outline`: text dump of a rendered tree

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod loader;
pub mod outline;
pub mod session;
pub mod source;

// Re-export the engine crates
pub use layer_shared as shared;
pub use layer_ui as ui;

pub use config::LayerConfig;
pub use error::{ConfigError, LayerError, LayerResult, SourceError, SourceResult};
pub use loader::{LoadedScreen, ScreenLoader, UiState, PROCESSING_ERROR};
pub use outline::outline;
pub use session::{ApplyOutcome, Session};
pub use source::{DirectoryScreenSource, ScreenSource, StaticScreenSource};
