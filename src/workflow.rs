//! Presentation workflow over generated content.
//!
//! Generator types are view routing over the single startup-idea schema: each tag
//! selects a fixed subset of fields from one static table. Form sessions hold a prompt
//! and the latest result, allow local edits and regenerate by re-running generation.

pub mod form;
pub mod generator_type;

pub use form::{GenerationState, GeneratorForm};
pub use generator_type::{GeneratorType, GENERATOR_FIELDS};
