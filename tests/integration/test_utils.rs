//! Shared test utilities for integration tests
//!
//! A scripted generative capability that counts calls, canned model outputs, and
//! isolation of the environment variables the config loader reads.

use async_trait::async_trait;
use ideaforge::error::ApiError;
use ideaforge::generation::{
    ContentService, GenerationInvoker, GenerationRequest, GenerationResponse,
    GenerativeCapability,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// One scripted reply of the capability.
pub enum Reply {
    Output(Value),
    NoOutput,
    Error(ApiError),
}

/// Replays scripted replies in order and records every request.
pub struct ScriptedCapability {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<GenerationRequest>>,
    calls: AtomicUsize,
}

impl ScriptedCapability {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl GenerativeCapability for ScriptedCapability {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request);
        match self.replies.lock().pop_front() {
            Some(Reply::Output(value)) => Ok(GenerationResponse {
                output: Some(value),
            }),
            Some(Reply::NoOutput) | None => Ok(GenerationResponse { output: None }),
            Some(Reply::Error(e)) => Err(e),
        }
    }
}

/// Content service backed by the given capability.
pub fn service_with(capability: Arc<ScriptedCapability>) -> ContentService {
    ContentService::new(GenerationInvoker::new(capability))
}

/// A conforming startup-idea output for the mentor-matching prompt.
pub fn mentor_match_output() -> Value {
    json!({
        "startupName": "MentorMatch",
        "tagline": "Find the mentor who gets you",
        "pitch": "MentorMatch pairs students with mentors who share their goals.",
        "problemStatement": "Students struggle to find relevant mentors.",
        "solutionStatement": "A matching engine based on goals and interests.",
        "targetAudience": "University students and early-career professionals.",
        "uniqueValueProposition": "Matches on goals, not just fields of study.",
        "heroCopy": "Your next breakthrough starts with the right mentor.",
        "colorPalette": ["#1A73E8", "#34A853", "#FBBC05"],
        "logoConcept": "Two overlapping speech bubbles forming a bridge."
    })
}

/// A second, different conforming output.
pub fn alternate_output() -> Value {
    json!({
        "startupName": "GuideWire",
        "tagline": "Mentorship, wired in",
        "pitch": "GuideWire connects learners with guides.",
        "problemStatement": "Mentorship is hard to access.",
        "solutionStatement": "An always-on mentor network.",
        "targetAudience": "Self-taught developers.",
        "uniqueValueProposition": "Mentors vetted by outcomes.",
        "heroCopy": "Learn faster with a guide.",
        "colorPalette": ["#000000", "#FFFFFF"],
        "logoConcept": "A compass needle."
    })
}

static ENV_MUTEX: Mutex<()> = parking_lot::const_mutex(());

/// Run `f` with HOME and XDG directories pointed into a fresh temp dir and all
/// `IDEAFORGE*` variables cleared, restoring the environment afterwards.
pub fn with_isolated_env<F, R>(f: F) -> R
where
    F: FnOnce(&TempDir) -> R,
{
    let _guard = ENV_MUTEX.lock();
    let temp = TempDir::new().unwrap();

    let tracked = [
        "HOME",
        "XDG_CONFIG_HOME",
        "XDG_DATA_HOME",
        "IDEAFORGE_ENV",
        "IDEAFORGE__PROVIDER__MODEL",
        "IDEAFORGE__PROVIDER__PROVIDER_TYPE",
        "IDEAFORGE__LIBRARY__USER",
    ];
    let saved: Vec<(&str, Option<String>)> =
        tracked.iter().map(|k| (*k, std::env::var(k).ok())).collect();

    for key in &tracked {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", temp.path().join("home"));
    std::env::set_var("XDG_CONFIG_HOME", temp.path().join("config-home"));
    std::env::set_var("XDG_DATA_HOME", temp.path().join("data-home"));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(&temp)));

    for (key, value) in saved {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    match result {
        Ok(r) => r,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
