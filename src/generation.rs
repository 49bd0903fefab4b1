//! Content generation
//!
//! The path from a user prompt to a typed result:
//!
//! * [`capability`]: the seam to the external generative model and its provider adapter.
//! * [`invoker`]: validates the prompt, issues exactly one capability call and validates
//!   the response against the content kind's output schema.
//! * [`envelope`]: the `{success, data | error}` shape handed to callers.
//! * [`service`]: caller-facing wrappers that never fail, only return envelopes.

pub mod capability;
pub mod envelope;
pub mod invoker;
pub mod service;

pub use capability::{
    GenerationRequest, GenerationResponse, GenerativeCapability, ProviderCapability,
};
pub use envelope::{failure_message, Envelope};
pub use invoker::GenerationInvoker;
pub use service::ContentService;
