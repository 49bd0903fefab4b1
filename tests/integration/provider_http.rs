//! Provider wire formats against a mock HTTP server.

use crate::integration::test_utils::mentor_match_output;
use ideaforge::content::{PromptInput, StartupIdeaResult, TextResult};
use ideaforge::error::ApiError;
use ideaforge::generation::{ContentService, GenerationInvoker, ProviderCapability};
use ideaforge::provider::commands::ProviderCommandService;
use ideaforge::provider::{
    ChatMessage, CompletionOptions, GeminiClient, ModelProviderClient, OllamaClient,
    OpenAIClient, ProviderConfig, ProviderType,
};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

fn service_for(client: Box<dyn ModelProviderClient>) -> ContentService {
    let capability = ProviderCapability::new(client, CompletionOptions::default());
    ContentService::new(GenerationInvoker::new(Arc::new(capability)))
}

fn openai_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20 }
    })
    .to_string()
}

#[tokio::test]
async fn openai_request_carries_json_schema_response_format() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "stream": false,
            "response_format": {
                "type": "json_schema",
                "json_schema": { "name": "GenerateTextFromPromptOutput", "strict": true }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(openai_body(r#"{"text":"A short poem"}"#))
        .expect(1)
        .create_async()
        .await;

    let client = OpenAIClient::new(
        "gpt-4o-mini".to_string(),
        "test-key".to_string(),
        Some(server.url()),
    )
    .unwrap();
    let envelope = service_for(Box::new(client))
        .handle_text_generation("write a poem")
        .await;

    mock.assert_async().await;
    assert_eq!(envelope.data().unwrap().text, "A short poem");
}

#[tokio::test]
async fn openai_fenced_output_is_accepted() {
    let mut server = mockito::Server::new_async().await;
    let fenced = format!("```json\n{}\n```", mentor_match_output());
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(openai_body(&fenced))
        .create_async()
        .await;

    let client = OpenAIClient::new("gpt-4o-mini".into(), "k".into(), Some(server.url())).unwrap();
    let envelope = service_for(Box::new(client))
        .handle_startup_idea_generation("a mentor-matching app for students")
        .await;

    assert_eq!(envelope.data().unwrap().startup_name, "MentorMatch");
}

#[tokio::test]
async fn openai_rate_limit_becomes_failure_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"quota exhausted"}}"#)
        .create_async()
        .await;

    let client = OpenAIClient::new("gpt-4o-mini".into(), "k".into(), Some(server.url())).unwrap();
    let envelope = service_for(Box::new(client))
        .handle_text_generation("write a poem")
        .await;

    let error = envelope.error().unwrap();
    assert!(error.starts_with("Failed to generate text. Please try again later."));
    assert!(error.contains("quota exhausted"));
}

#[tokio::test]
async fn status_codes_map_to_provider_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body("bad key")
        .create_async()
        .await;
    let client = OpenAIClient::new("m".into(), "k".into(), Some(server.url())).unwrap();
    let err = client
        .complete(vec![ChatMessage::user("hi")], CompletionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ProviderAuthFailed(_)));

    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(404)
        .create_async()
        .await;
    let client = OpenAIClient::new("m".into(), "k".into(), Some(server.url())).unwrap();
    let err = client
        .complete(vec![ChatMessage::user("hi")], CompletionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ProviderModelNotFound(_)));
}

#[tokio::test]
async fn gemini_request_carries_response_schema() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .match_header("x-goog-api-key", "gemini-key")
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "required": [
                        "startupName", "tagline", "pitch", "problemStatement",
                        "solutionStatement", "targetAudience", "uniqueValueProposition",
                        "heroCopy", "colorPalette", "logoConcept"
                    ]
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": mentor_match_output().to_string() }]
                    },
                    "finishReason": "STOP"
                }],
                "usageMetadata": {
                    "promptTokenCount": 100,
                    "candidatesTokenCount": 80,
                    "totalTokenCount": 180
                },
                "modelVersion": "gemini-2.0-flash"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = GeminiClient::new(
        "gemini-2.0-flash".to_string(),
        "gemini-key".to_string(),
        Some(server.url()),
    )
    .unwrap();
    let capability = ProviderCapability::new(Box::new(client), CompletionOptions::default());
    let result = GenerationInvoker::new(Arc::new(capability))
        .generate_as::<StartupIdeaResult>(&PromptInput::new("a mentor-matching app for students"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(serde_json::to_value(&result).unwrap(), mentor_match_output());
}

#[tokio::test]
async fn gemini_blocked_prompt_is_a_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .with_status(200)
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let client =
        GeminiClient::new("gemini-2.0-flash".into(), "k".into(), Some(server.url())).unwrap();
    let envelope = service_for(Box::new(client))
        .handle_text_generation("something")
        .await;

    assert!(envelope.error().unwrap().contains("SAFETY"));
}

#[tokio::test]
async fn gemini_empty_candidate_is_no_output() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .with_status(200)
        .with_body(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#)
        .create_async()
        .await;

    let client =
        GeminiClient::new("gemini-2.0-flash".into(), "k".into(), Some(server.url())).unwrap();
    let result = GenerationInvoker::new(Arc::new(ProviderCapability::new(
        Box::new(client),
        CompletionOptions::default(),
    )))
    .generate_as::<TextResult>(&PromptInput::new("something"))
    .await;

    assert!(result.unwrap_err().cause().contains("no output"));
}

#[tokio::test]
async fn gemini_models_listing_strips_prefix() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/models")
        .match_header("x-goog-api-key", "gemini-key")
        .with_status(200)
        .with_body(
            r#"{"models":[{"name":"models/gemini-1.5-pro"},{"name":"models/gemini-2.0-flash"}]}"#,
        )
        .create_async()
        .await;

    let config = ProviderConfig {
        provider_type: ProviderType::Gemini,
        model: "gemini-2.0-flash".to_string(),
        api_key: Some("gemini-key".to_string()),
        endpoint: Some(server.url()),
        ..ProviderConfig::default()
    };
    let result = ProviderCommandService::run_models(&config).await.unwrap();

    assert_eq!(
        result.available_models,
        vec!["gemini-1.5-pro".to_string(), "gemini-2.0-flash".to_string()]
    );
    assert!(result.model_available);
}

#[tokio::test]
async fn ollama_uses_openai_compatible_path_without_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(openai_body(r#"{"text":"local reply"}"#))
        .expect(1)
        .create_async()
        .await;

    let client = OllamaClient::new("llama3".to_string(), Some(server.url())).unwrap();
    let envelope = service_for(Box::new(client))
        .handle_text_generation("hello")
        .await;

    mock.assert_async().await;
    assert_eq!(envelope.data().unwrap().text, "local reply");
}
