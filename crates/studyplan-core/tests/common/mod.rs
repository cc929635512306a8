use jiff::civil::date;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use studyplan_core::{Orchestrator, OrchestratorBuilder};

/// Helper function to create an orchestrator talking to a mock backend
pub fn create_test_orchestrator(server: &ServerGuard) -> Orchestrator {
    OrchestratorBuilder::new()
        .with_base_url(server.url())
        .with_reference_date(Some(date(2026, 10, 19)))
        .build()
        .expect("Failed to create orchestrator")
}

/// Chat reply body carrying `content`
pub fn chat_reply(content: &str) -> String {
    json!({
        "model": "llama3.1:8b",
        "message": { "role": "assistant", "content": content },
        "done": true
    })
    .to_string()
}

/// Mock answering chat calls whose body matches `pattern`
pub async fn mock_chat(server: &mut ServerGuard, pattern: &str, content: &str) -> Mock {
    server
        .mock("POST", "/api/chat")
        .match_body(Matcher::Regex(pattern.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_reply(content))
        .create_async()
        .await
}
