//! # LAYER Shared
//!
//! The contract between a backend that describes screens and the engine
//! that interprets them:
//!
//! - [`schema`] - the screen payload (`ScreenDefinition`, `Component`)
//! - [`props`] - the loosely-typed property bag and its fail-soft accessors
//! - [`rules`] - validation rule model and aggregated results
//! - [`events`] - semantic events emitted back to the host
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on element, style or view types.
//! If you need those, put them in `layer_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod constants;
pub mod error;
pub mod events;
pub mod props;
pub mod rules;
pub mod schema;

pub use error::{SchemaError, SchemaResult};
pub use events::{EventType, UiEvent};
pub use props::{PropValue, Props};
pub use rules::{RuleKind, ValidationErrors, ValidationResult, ValidationRule};
pub use schema::{parse_screen, Component, ScreenDefinition};
