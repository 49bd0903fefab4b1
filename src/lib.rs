//! ideaforge: schema-constrained AI content generation
//!
//! A typed prompt contract per content kind, a generation invoker that issues one
//! structured-output request per prompt and validates the reply, and a workflow that
//! presents startup-idea results through generator-type views.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod generation;
pub mod library;
pub mod logging;
pub mod provider;
pub mod schema;
pub mod workflow;
