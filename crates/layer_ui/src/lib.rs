//! # LAYER UI Runtime
//!
//! Interprets server-described screens into a live, headless element tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        UI PIPELINE                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Screen JSON → Factory → Engine → Renderer → Element Tree    │
//! │                             ↑                     │          │
//! │                        host input            host widgets    │
//! │                             ↓                                │
//! │                        EventStream → host app                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine computes no geometry and draws nothing. The host maps each
//! [`Element`] onto a native widget and reports taps and edits back as
//! [`UserInput`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod element;
pub mod error;
pub mod events;
pub mod factory;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod runtime;
pub mod style;

pub use config::EngineConfig;
pub use element::{Element, ElementId, ElementKind, ElementTree};
pub use error::{StyleError, StyleResult};
pub use events::{EventStats, EventStream, EventSubscription};
pub use factory::{Behavior, Built, ComponentFactory, ElementFactory};
pub use input::{Region, UserInput};
pub use layout::{Density, LayoutParams};
pub use renderer::{RenderReport, ScreenRenderer};
pub use runtime::{cpf_check_digits, is_valid_cpf, RuntimeEngine};
pub use style::{Color, Style};
