//! Runtime engine: registries, validation and behavior wiring.

mod engine;
pub mod registry;
pub mod validation;

pub use engine::RuntimeEngine;
pub use registry::{Registries, Registry};
pub use validation::{cpf_check_digits, evaluate, is_valid_cpf, CompiledRule};
