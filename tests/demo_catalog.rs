//! Integration test: load prompts from the bundled demo catalog through the public API.

use mcp_prompt_adapter::{AdapterError, ChatMessage, RecordedPromptSession, load_prompt};
use std::path::PathBuf;

fn demo_session() -> RecordedPromptSession {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/prompts.json");
    RecordedPromptSession::from_file(&path).expect("load demo catalog")
}

#[tokio::test]
async fn greeting_converts_to_human_then_ai() {
    let session = demo_session();
    let messages = load_prompt(&session, "greeting", None).await.unwrap();
    assert_eq!(
        messages,
        vec![ChatMessage::human("Hi"), ChatMessage::ai("Hello")]
    );
}

#[tokio::test]
async fn system_role_fails_whole_prompt() {
    let session = demo_session();
    let err = load_prompt(&session, "with_system", None).await.unwrap_err();
    assert_eq!(err.to_string(), "Unsupported prompt message role: system");
}

#[tokio::test]
async fn image_content_is_rejected() {
    let session = demo_session();
    let err = load_prompt(&session, "with_image", None).await.unwrap_err();
    assert!(matches!(err, AdapterError::UnsupportedContentType(ref t) if t == "image"));
}

#[tokio::test]
async fn unknown_prompt_is_not_found() {
    let session = demo_session();
    let err = load_prompt(&session, "does_not_exist", None).await.unwrap_err();
    assert!(err.is_client_error());
    assert!(matches!(err, AdapterError::PromptNotFound(_)));
}

#[test]
fn demo_catalog_lists_all_prompts() {
    let session = demo_session();
    assert_eq!(
        session.prompt_names().collect::<Vec<_>>(),
        vec!["code_review", "greeting", "with_image", "with_system"]
    );
}
