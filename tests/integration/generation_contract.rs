//! End-to-end behavior of the content handlers against a scripted capability.

use crate::integration::test_utils::{mentor_match_output, service_with, Reply, ScriptedCapability};
use ideaforge::content::{ContentContract, ContentKind, GeneratedContent, PromptInput, StartupIdeaResult};
use ideaforge::error::{ApiError, GenerationError};
use ideaforge::generation::GenerationInvoker;
use serde_json::json;

#[tokio::test]
async fn conforming_output_is_returned_with_every_field() {
    let capability = ScriptedCapability::new(vec![Reply::Output(mentor_match_output())]);
    let service = service_with(capability.clone());

    let envelope = service
        .handle_startup_idea_generation("a mentor-matching app for students")
        .await;

    assert!(envelope.is_success());
    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["success"], true);
    for key in StartupIdeaResult::output_schema().field_names() {
        assert!(value["data"].get(key).is_some(), "missing {}", key);
    }
    assert_eq!(capability.calls(), 1);
}

#[tokio::test]
async fn mentor_matching_scenario_returns_mocked_fields_unchanged() {
    let capability = ScriptedCapability::new(vec![Reply::Output(mentor_match_output())]);
    let service = service_with(capability.clone());

    let envelope = service
        .handle_startup_idea_generation("a mentor-matching app for students")
        .await;

    let data = serde_json::to_value(envelope.data().unwrap()).unwrap();
    assert_eq!(data, mentor_match_output());

    let requests = capability.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .instruction
        .contains("\"a mentor-matching app for students\""));
    assert_eq!(requests[0].output_schema.name, "GenerateStartupIdeasOutput");
}

#[tokio::test]
async fn empty_prompt_gives_exact_envelope_and_no_call() {
    let capability = ScriptedCapability::new(vec![Reply::Output(json!({ "text": "x" }))]);
    let service = service_with(capability.clone());

    let envelope = service.handle_text_generation("").await;
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({ "success": false, "error": "Prompt cannot be empty." })
    );
    assert_eq!(capability.calls(), 0);
}

#[tokio::test]
async fn whitespace_prompt_is_rejected_for_both_kinds() {
    let capability = ScriptedCapability::new(vec![]);
    let service = service_with(capability.clone());

    let text = service.handle_text_generation("   \n\t").await;
    let idea = service.handle_startup_idea_generation("  ").await;

    assert_eq!(text.error(), Some("Prompt cannot be empty."));
    assert_eq!(idea.error(), Some("Prompt cannot be empty."));
    assert_eq!(capability.calls(), 0);
}

#[tokio::test]
async fn output_missing_tagline_is_a_failure() {
    let mut output = mentor_match_output();
    output.as_object_mut().unwrap().remove("tagline");
    let capability = ScriptedCapability::new(vec![Reply::Output(output)]);
    let service = service_with(capability);

    let envelope = service.handle_startup_idea_generation("anything").await;
    assert!(!envelope.is_success());
    let error = envelope.error().unwrap();
    assert!(error.starts_with("Failed to generate startup ideas. Please try again later."));
    assert!(error.contains("/tagline"));
}

#[tokio::test]
async fn invalid_palette_entry_is_a_failure() {
    let mut output = mentor_match_output();
    output["colorPalette"] = json!(["#1A73E8", "blue"]);
    let capability = ScriptedCapability::new(vec![Reply::Output(output)]);

    let result = GenerationInvoker::new(capability)
        .generate_as::<StartupIdeaResult>(&PromptInput::new("anything"))
        .await;

    match result {
        Err(GenerationError::SchemaValidation(e)) => assert_eq!(e.path, "/colorPalette/1"),
        other => panic!("expected schema validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn capability_error_cause_is_surfaced() {
    let capability = ScriptedCapability::new(vec![Reply::Error(ApiError::ProviderRateLimit(
        "quota exhausted".to_string(),
    ))]);
    let service = service_with(capability.clone());

    let envelope = service.handle_text_generation("write a haiku").await;
    let error = envelope.error().unwrap();
    assert!(error.starts_with("Failed to generate text. Please try again later."));
    assert!(error.contains("quota exhausted"));
    assert_eq!(capability.calls(), 1);
}

#[tokio::test]
async fn absent_output_is_a_failure() {
    let capability = ScriptedCapability::new(vec![Reply::NoOutput]);
    let service = service_with(capability);

    let envelope = service.handle_text_generation("write a haiku").await;
    assert!(envelope.error().unwrap().contains("no output"));
}

#[tokio::test]
async fn text_kind_uses_verbatim_prompt_in_instruction() {
    let capability = ScriptedCapability::new(vec![Reply::Output(json!({ "text": "Roses" }))]);
    let invoker = GenerationInvoker::new(capability.clone());

    let content = invoker
        .generate(ContentKind::Text, &PromptInput::new("  a poem about {{prompt}}  "))
        .await
        .unwrap();

    assert_eq!(content.kind(), ContentKind::Text);
    match content {
        GeneratedContent::Text(result) => assert_eq!(result.text, "Roses"),
        other => panic!("unexpected content: {:?}", other),
    }
    assert_eq!(
        capability.requests()[0].instruction,
        "Generate text from the following prompt:   a poem about {{prompt}}  "
    );
}

#[tokio::test]
async fn every_invocation_is_exactly_one_call() {
    let capability = ScriptedCapability::new(vec![
        Reply::Output(json!({ "text": "one" })),
        Reply::Output(json!({ "text": "two" })),
    ]);
    let service = service_with(capability.clone());

    let first = service.handle_text_generation("same prompt").await;
    let second = service.handle_text_generation("same prompt").await;

    assert_eq!(first.data().unwrap().text, "one");
    assert_eq!(second.data().unwrap().text, "two");
    assert_eq!(capability.calls(), 2);
}
