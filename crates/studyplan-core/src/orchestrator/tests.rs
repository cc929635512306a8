//! Tests for the orchestrator module.

use std::{
    collections::VecDeque,
    io::{Cursor, Write},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use jiff::civil::date;
use zip::{write::SimpleFileOptions, ZipWriter};

use super::*;
use crate::{
    error::{PlanError, Result},
    generation::GenerationRequest,
    params::{AskQuestion, GeneratePlan, SessionRef},
};

/// One scripted backend reply
enum Step {
    Reply(&'static str),
    Owned(String),
    Timeout,
}

/// Backend that replays scripted replies and records every request
struct ScriptedBackend {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedBackend {
    fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.calls.lock().unwrap().push(request.clone());
        match self.steps.lock().unwrap().pop_front() {
            Some(Step::Reply(text)) => Ok(text.to_string()),
            Some(Step::Owned(text)) => Ok(text),
            Some(Step::Timeout) => Err(PlanError::Timeout { seconds: 360 }),
            None => Err(PlanError::InvalidResponse("no scripted reply left".to_string())),
        }
    }
}

fn orchestrator_with(backend: Arc<ScriptedBackend>) -> Orchestrator {
    OrchestratorBuilder::new()
        .with_backend(backend)
        .with_reference_date(Some(date(2026, 10, 19)))
        .build()
        .expect("Failed to build orchestrator")
}

fn day_array(days: u32) -> String {
    let entries: Vec<String> = (1..=days)
        .map(|day| {
            format!(
                r#"{{"day": {day}, "todos": [
                    {{"title": "학습 {day}", "content": "개념 정리", "status_id": "NOT_STARTED", "end_time": "2026-10-19 23:59", "accumulated_time": 0}},
                    {{"title": "실습 {day}", "content": "예제 풀이", "status_id": "NOT_STARTED", "end_time": "2026-10-19 23:59", "accumulated_time": 0}}
                ]}}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

#[tokio::test]
async fn test_generate_plan_five_day_scenario() {
    let backend = ScriptedBackend::new(vec![
        Step::Reply("1일차: 파이썬 설치와 기본 문법..."),
        Step::Owned(day_array(5)),
    ]);
    let orchestrator = orchestrator_with(backend.clone());

    let plan = orchestrator
        .generate_plan(&GeneratePlan::new("5일 동안 파이썬 공부 계획 짜줘"))
        .await
        .expect("Failed to generate plan");

    assert_eq!(plan.answer, "1일차: 파이썬 설치와 기본 문법...");
    assert_eq!(plan.todo_count, 5);
    assert_eq!(plan.todos.len(), 5);
    assert_eq!(plan.todos[4].day, 5);

    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].system_prompt.contains("exactly 5 days"));
    assert!(calls[1].system_prompt.contains("exactly 5 day entries"));
    assert!(calls[1].system_prompt.contains("2026-10-19 23:59"));
    assert_eq!(calls[0].user_message, "5일 동안 파이썬 공부 계획 짜줘");
    assert_eq!(calls[1].user_message, "5일 동안 파이썬 공부 계획 짜줘");
}

#[tokio::test]
async fn test_narrative_call_precedes_structured_call() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Reply("[]")]);
    let orchestrator = orchestrator_with(backend.clone());

    orchestrator
        .generate_plan(&GeneratePlan::new("3 days of rust"))
        .await
        .expect("Failed to generate plan");

    let calls = backend.calls();
    assert!(calls[0].system_prompt.contains("Never output JSON"));
    assert!(calls[1].system_prompt.contains("Output ONLY a JSON array"));
}

#[tokio::test]
async fn test_generated_plan_is_stored_in_session() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Owned(day_array(2))]);
    let orchestrator = orchestrator_with(backend);

    let plan = orchestrator
        .generate_plan(&GeneratePlan::new("2일 계획"))
        .await
        .expect("Failed to generate plan");

    let session = orchestrator
        .sessions()
        .get(&plan.session_id.to_string())
        .expect("session should be stored");
    assert_eq!(session.narrative, "prose");
    assert_eq!(session.tasks, plan.todos);

    let tasks = orchestrator
        .session_tasks(&SessionRef {
            session_id: plan.session_id.to_string(),
        })
        .expect("Failed to get tasks");
    assert_eq!(tasks, plan.todos);
}

#[tokio::test]
async fn test_invalid_structured_output_yields_empty_plan() {
    let backend = ScriptedBackend::new(vec![
        Step::Reply("prose"),
        Step::Reply("```json\n[{\"day\": 1, \"todos\": []}]\n```"),
    ]);
    let orchestrator = orchestrator_with(backend);

    let plan = orchestrator
        .generate_plan(&GeneratePlan::new("7일 계획"))
        .await
        .expect("decode failure must not fail the request");

    assert_eq!(plan.todo_count, 0);
    assert!(plan.todos.is_empty());
    assert!(!plan.session_id.is_nil());
    assert_eq!(orchestrator.sessions().len(), 1);
}

#[tokio::test]
async fn test_narrative_timeout_fails_without_session() {
    let backend = ScriptedBackend::new(vec![Step::Timeout, Step::Owned(day_array(5))]);
    let orchestrator = orchestrator_with(backend.clone());

    let err = orchestrator
        .generate_plan(&GeneratePlan::new("5일 계획"))
        .await
        .unwrap_err();

    assert!(matches!(err, PlanError::Timeout { seconds: 360 }));
    assert!(orchestrator.sessions().is_empty());
    // The structured call is never issued after the narrative call failed.
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn test_structured_call_failure_fails_request() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Timeout]);
    let orchestrator = orchestrator_with(backend.clone());

    let err = orchestrator
        .generate_plan(&GeneratePlan::new("5일 동안 파이썬 공부 계획 짜줘"))
        .await
        .unwrap_err();

    assert!(matches!(err, PlanError::Timeout { seconds: 360 }));
    assert!(err.is_backend_failure());
    assert!(orchestrator.sessions().is_empty());
    assert_eq!(backend.calls().len(), 2);
}

#[tokio::test]
async fn test_day_count_mismatch_is_kept_as_returned() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Owned(day_array(3))]);
    let orchestrator = orchestrator_with(backend);

    let plan = orchestrator
        .generate_plan(&GeneratePlan::new("5일 계획"))
        .await
        .expect("Failed to generate plan");
    assert_eq!(plan.todo_count, 3);
}

#[tokio::test]
async fn test_default_day_count_when_unspecified() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Reply("[]")]);
    let orchestrator = orchestrator_with(backend.clone());

    orchestrator
        .generate_plan(&GeneratePlan::new("파이썬 공부 계획 짜줘"))
        .await
        .expect("Failed to generate plan");

    assert!(backend.calls()[0].system_prompt.contains("exactly 7 days"));
}

#[tokio::test]
async fn test_identical_requests_create_distinct_sessions() {
    let backend = ScriptedBackend::new(vec![
        Step::Reply("a"),
        Step::Reply("[]"),
        Step::Reply("a"),
        Step::Reply("[]"),
    ]);
    let orchestrator = orchestrator_with(backend);
    let params = GeneratePlan::new("3일 계획");

    let first = orchestrator.generate_plan(&params).await.unwrap();
    let second = orchestrator.generate_plan(&params).await.unwrap();
    assert_ne!(first.session_id, second.session_id);
    assert_eq!(orchestrator.sessions().len(), 2);
}

#[tokio::test]
async fn test_supplementary_text_reaches_both_prompts() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Reply("[]")]);
    let orchestrator = orchestrator_with(backend.clone());

    let params = GeneratePlan::new("3일 복습 계획")
        .with_supplementary_text(Some("Chapter 4: Traits".to_string()));
    orchestrator.generate_plan(&params).await.unwrap();

    let calls = backend.calls();
    assert!(calls[0].system_prompt.contains("Chapter 4: Traits"));
    assert!(calls[1].system_prompt.contains("Chapter 4: Traits"));
}

fn slide_deck(text: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("ppt/slides/slide1.xml", SimpleFileOptions::default())
        .unwrap();
    write!(writer, "<p:sld><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:sld>").unwrap();
    writer.finish().unwrap().into_inner()
}

#[tokio::test]
async fn test_document_text_grounds_the_plan() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Reply("[]")]);
    let orchestrator = orchestrator_with(backend.clone());

    orchestrator
        .generate_plan_with_document("3일 복습", slide_deck("Lifetimes and generics"))
        .await
        .expect("Failed to generate plan");

    let calls = backend.calls();
    assert!(calls[0].system_prompt.contains("Lifetimes and generics"));
    assert!(calls[1].system_prompt.contains("Lifetimes and generics"));
}

#[tokio::test]
async fn test_unreadable_document_is_ignored() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Owned(day_array(3))]);
    let orchestrator = orchestrator_with(backend.clone());

    let plan = orchestrator
        .generate_plan_with_document("3일 복습", b"not a deck".to_vec())
        .await
        .expect("bad attachment must not fail the request");

    assert_eq!(plan.todo_count, 3);
    assert!(!backend.calls()[0]
        .system_prompt
        .contains("[Reference material]"));
}

#[tokio::test]
async fn test_document_text_is_bounded() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Reply("[]")]);
    let orchestrator = OrchestratorBuilder::new()
        .with_backend(backend.clone())
        .with_supplementary_limit(5)
        .build()
        .unwrap();

    orchestrator
        .generate_plan_with_document("1일", slide_deck("abcdefghij"))
        .await
        .unwrap();

    let prompt = &backend.calls()[0].system_prompt;
    assert!(prompt.contains("[Reference material]\nabcde\n"));
    assert!(!prompt.contains("abcdef"));
}

#[tokio::test]
async fn test_answer_open_domain_trims_and_skips_sessions() {
    let backend = ScriptedBackend::new(vec![Step::Reply("\n  오늘은 맑을 것으로 보여요.  \n")]);
    let orchestrator = orchestrator_with(backend.clone());

    let answer = orchestrator
        .answer_open_domain(&AskQuestion {
            message: "오늘 날씨 어때?".to_string(),
        })
        .await
        .expect("Failed to answer");

    assert_eq!(answer.answer, "오늘은 맑을 것으로 보여요.");
    assert_eq!(backend.calls().len(), 1);
    assert!(backend.calls()[0].system_prompt.contains("투두"));
    assert!(orchestrator.sessions().is_empty());
}

#[tokio::test]
async fn test_answer_open_domain_propagates_backend_failure() {
    let backend = ScriptedBackend::new(vec![Step::Timeout]);
    let orchestrator = orchestrator_with(backend);

    let err = orchestrator
        .answer_open_domain(&AskQuestion {
            message: "질문".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_backend_failure());
}

#[tokio::test]
async fn test_confirm_plan_discards_session() {
    let backend = ScriptedBackend::new(vec![Step::Reply("prose"), Step::Owned(day_array(1))]);
    let orchestrator = orchestrator_with(backend);

    let plan = orchestrator
        .generate_plan(&GeneratePlan::new("1일"))
        .await
        .unwrap();
    let params = SessionRef {
        session_id: plan.session_id.to_string(),
    };

    let removed = orchestrator.confirm_plan(&params).expect("Failed to confirm");
    assert_eq!(removed.id, plan.session_id);

    assert!(matches!(
        orchestrator.session_tasks(&params),
        Err(PlanError::SessionNotFound { .. })
    ));
    assert!(matches!(
        orchestrator.confirm_plan(&params),
        Err(PlanError::SessionNotFound { .. })
    ));
}

#[test]
fn test_reference_date_defaults_to_today() {
    let orchestrator = OrchestratorBuilder::new()
        .with_backend(ScriptedBackend::new(vec![]))
        .build()
        .unwrap();
    assert_eq!(orchestrator.reference_date(), jiff::Zoned::now().date());
}
