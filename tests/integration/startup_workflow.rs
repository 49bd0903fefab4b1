//! Generator form sessions: submit, regenerate, local edits and view selection.

use crate::integration::test_utils::{
    alternate_output, mentor_match_output, service_with, Reply, ScriptedCapability,
};
use ideaforge::content::{FieldValue, StartupField, StartupIdeaResult, TextResult};
use ideaforge::error::ApiError;
use ideaforge::generation::Envelope;
use ideaforge::workflow::{GenerationState, GeneratorForm, GeneratorType};
use serde_json::json;

#[tokio::test]
async fn submit_populates_result() {
    let capability = ScriptedCapability::new(vec![Reply::Output(mentor_match_output())]);
    let service = service_with(capability.clone());
    let mut form = GeneratorForm::<StartupIdeaResult>::new();

    assert_eq!(form.state(), GenerationState::Idle);
    assert!(form.envelope().is_none());

    let state = form.submit(&service, "a mentor-matching app for students").await;

    assert_eq!(state, GenerationState::Succeeded);
    assert_eq!(form.prompt(), "a mentor-matching app for students");
    assert_eq!(form.result().unwrap().startup_name, "MentorMatch");
    assert!(form.error().is_none());
    assert!(matches!(form.envelope(), Some(Envelope::Success(_))));
}

#[tokio::test]
async fn regenerate_makes_one_new_call_and_replaces_result() {
    let capability = ScriptedCapability::new(vec![
        Reply::Output(mentor_match_output()),
        Reply::Output(alternate_output()),
    ]);
    let service = service_with(capability.clone());
    let mut form = GeneratorForm::<StartupIdeaResult>::new();

    form.submit(&service, "a mentor-matching app for students").await;
    form.edit_field(StartupField::Tagline, FieldValue::Text("edited".into()))
        .unwrap();
    assert_eq!(capability.calls(), 1);

    let state = form.regenerate(&service).await;

    assert_eq!(state, GenerationState::Succeeded);
    assert_eq!(capability.calls(), 2);
    assert_eq!(form.runs(), 2);
    let expected: StartupIdeaResult = serde_json::from_value(alternate_output()).unwrap();
    assert_eq!(form.result(), Some(&expected));

    let requests = capability.requests();
    assert_eq!(requests[0].instruction, requests[1].instruction);
}

#[tokio::test]
async fn failed_regenerate_discards_previous_result() {
    let capability = ScriptedCapability::new(vec![
        Reply::Output(mentor_match_output()),
        Reply::Error(ApiError::ProviderRequestFailed("upstream down".into())),
    ]);
    let service = service_with(capability.clone());
    let mut form = GeneratorForm::<StartupIdeaResult>::new();

    form.submit(&service, "idea").await;
    let state = form.regenerate(&service).await;

    assert_eq!(state, GenerationState::Failed);
    assert!(form.result().is_none());
    assert!(form.error().unwrap().contains("upstream down"));
}

#[tokio::test]
async fn empty_submit_fails_without_calling_capability() {
    let capability = ScriptedCapability::new(vec![]);
    let service = service_with(capability.clone());
    let mut form = GeneratorForm::<TextResult>::new();

    let state = form.submit(&service, "").await;

    assert_eq!(state, GenerationState::Failed);
    assert_eq!(form.error(), Some("Prompt cannot be empty."));
    assert_eq!(capability.calls(), 0);
}

#[tokio::test]
async fn edits_are_local_and_type_checked() {
    let capability = ScriptedCapability::new(vec![Reply::Output(mentor_match_output())]);
    let service = service_with(capability.clone());
    let mut form = GeneratorForm::<StartupIdeaResult>::new();

    assert_eq!(
        form.edit_field(StartupField::Pitch, FieldValue::Text("early".into())),
        Ok(false)
    );

    form.submit(&service, "idea").await;
    assert_eq!(
        form.edit_field(StartupField::Pitch, FieldValue::Text("A sharper pitch".into())),
        Ok(true)
    );
    assert!(form
        .edit_field(
            StartupField::ColorPalette,
            FieldValue::Palette(vec!["#ABC".into(), "teal".into()])
        )
        .is_err());
    assert!(form
        .edit_field(StartupField::HeroCopy, FieldValue::Palette(vec!["#ABC".into()]))
        .is_err());

    let result = form.result().unwrap();
    assert_eq!(result.pitch, "A sharper pitch");
    assert_eq!(result.color_palette.len(), 3);
    assert_eq!(capability.calls(), 1);
}

#[tokio::test]
async fn selected_fields_follow_generator_type() {
    let capability = ScriptedCapability::new(vec![Reply::Output(mentor_match_output())]);
    let service = service_with(capability);
    let mut form = GeneratorForm::<StartupIdeaResult>::new();

    assert!(form.selected(GeneratorType::NamesTaglines).is_empty());
    form.submit(&service, "a mentor-matching app for students").await;

    let selected = form.selected(GeneratorType::NamesTaglines);
    assert_eq!(
        selected,
        vec![
            (
                StartupField::StartupName,
                FieldValue::Text("MentorMatch".into())
            ),
            (
                StartupField::Tagline,
                FieldValue::Text("Find the mentor who gets you".into())
            ),
        ]
    );

    let logo = form.selected(GeneratorType::LogoColors);
    assert_eq!(logo[0].0, StartupField::LogoConcept);
    assert_eq!(logo[1].1.copy_text(), "#1A73E8, #34A853, #FBBC05");

    let (problem, solution) = form.result().unwrap().problem_solution();
    assert_eq!(problem, "Students struggle to find relevant mentors.");
    assert_eq!(solution, "A matching engine based on goals and interests.");
}

#[tokio::test]
async fn text_form_edit() {
    let capability = ScriptedCapability::new(vec![Reply::Output(json!({ "text": "draft" }))]);
    let service = service_with(capability);
    let mut form = GeneratorForm::<TextResult>::new();

    assert!(!form.edit_text("nothing yet"));
    form.submit(&service, "write something").await;
    assert!(form.edit_text("final"));
    assert_eq!(form.result().unwrap().text, "final");
}
