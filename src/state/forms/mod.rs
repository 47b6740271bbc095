//! Form domain layer
//!
//! Field values, the intake snapshot, the rules table and the engine that
//! applies it. Everything here is synchronous and free of UI concerns.

mod catalog;
mod engine;
mod field;
mod form_state;
mod rules;

pub use catalog::Catalog;
pub use engine::FormValidationEngine;
pub use field::{FieldName, FieldState, FieldValue};
pub use form_state::FormSnapshot;
pub use rules::ReservedValues;
