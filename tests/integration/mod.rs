//! Integration tests for ideaforge

mod config_loading;
mod generation_contract;
mod provider_http;
mod startup_workflow;
mod test_utils;
