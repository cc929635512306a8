//! HTTP transport for web and mobile clients
//!
//! | Route | Operation |
//! |---|---|
//! | `GET /` | liveness |
//! | `POST /chat` | plan generation |
//! | `POST /chat-with-file` | plan generation grounded in a slide deck |
//! | `GET /get-json` | session task list |
//! | `POST /ask` | open-domain question |
//! | `POST /save-plan` | plan confirmation |
//!
//! Unknown sessions are reported in-band with HTTP 200 and
//! `{"success": false, "error": "Session not found"}`; backend failures map to
//! HTTP 500 with an [`ErrorBody`].

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{DefaultBodyLimit, FromRequest, Multipart, Query, Request, State},
    http::{header, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use studyplan_core::{
    params::{AskQuestion, GeneratePlan, SessionRef},
    GeneratedPlan, Orchestrator, PlanError,
};
use tokio::signal::unix::{signal, SignalKind};
use tower_http::cors::CorsLayer;

const SESSION_NOT_FOUND: &str = "Session not found";

#[derive(Clone)]
struct AppState {
    orchestrator: Arc<Orchestrator>,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    code: String,
    message: String,
}

/// Plan response of the upload route, which carries a success flag
#[derive(Debug, Serialize)]
struct UploadedPlan {
    success: bool,
    #[serde(flatten)]
    plan: GeneratedPlan,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// Session reference posted as a form, either url-encoded or multipart
struct SessionForm(SessionRef);

impl<S> FromRequest<S> for SessionForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(params) = Form::<SessionRef>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    (
                        rejection.status(),
                        Json(ErrorBody {
                            code: "invalid_form".to_string(),
                            message: rejection.body_text(),
                        }),
                    )
                })?;
            return Ok(Self(params));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| {
                (
                    rejection.status(),
                    Json(ErrorBody {
                        code: "invalid_multipart".to_string(),
                        message: rejection.body_text(),
                    }),
                )
            })?;

        while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
            if field.name() == Some("session_id") {
                let session_id = field.text().await.map_err(map_multipart_error)?;
                return Ok(Self(SessionRef { session_id }));
            }
        }
        Err(bad_request(
            "missing_field",
            "form field `session_id` is required",
        ))
    }
}

/// Build the application router around a shared orchestrator.
pub fn router(orchestrator: Arc<Orchestrator>, max_upload_bytes: usize) -> Router {
    let state = AppState { orchestrator };

    Router::new()
        .route("/", get(root))
        .route("/chat", post(chat))
        .route("/chat-with-file", post(chat_with_file))
        .route("/get-json", get(get_json))
        .route("/ask", post(ask))
        .route("/save-plan", post(save_plan))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the HTTP API until SIGINT or SIGTERM.
pub async fn run_http_server(
    orchestrator: Orchestrator,
    listen: SocketAddr,
    max_upload_bytes: usize,
) -> anyhow::Result<()> {
    let app = router(Arc::new(orchestrator), max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("Failed to bind {listen}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with error")?;

    info!("HTTP server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let (mut sigint, mut sigterm) = match (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) {
        (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to install signal handlers: {e}");
            return std::future::pending().await;
        }
    };

    tokio::select! {
        _ = sigint.recv() => info!("Received SIGINT, shutting down gracefully..."),
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down gracefully..."),
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Unified AI Server Running" }))
}

async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<GeneratedPlan>, ApiError> {
    let plan = state
        .orchestrator
        .generate_plan(&GeneratePlan::new(payload.message))
        .await
        .map_err(map_plan_error)?;
    Ok(Json(plan))
}

async fn chat_with_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedPlan>, ApiError> {
    let mut message = None;
    let mut document = None;

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        match field.name() {
            Some("message") => {
                message = Some(field.text().await.map_err(map_multipart_error)?);
            }
            Some("file") => {
                let bytes = field.bytes().await.map_err(map_multipart_error)?;
                debug!("Received {}-byte attachment", bytes.len());
                document = Some(bytes.to_vec());
            }
            other => debug!("Ignoring multipart field {other:?}"),
        }
    }

    let message = message.ok_or_else(|| {
        bad_request("missing_field", "multipart field `message` is required")
    })?;

    let plan = match document {
        Some(document) => {
            state
                .orchestrator
                .generate_plan_with_document(&message, document)
                .await
        }
        None => state.orchestrator.generate_plan(&GeneratePlan::new(message)).await,
    }
    .map_err(map_plan_error)?;

    Ok(Json(UploadedPlan {
        success: true,
        plan,
    }))
}

async fn get_json(
    State(state): State<AppState>,
    Query(params): Query<SessionRef>,
) -> Result<Json<Value>, ApiError> {
    match state.orchestrator.session_tasks(&params) {
        Ok(todos) => Ok(Json(json!({ "success": true, "todos": todos }))),
        Err(PlanError::SessionNotFound { .. }) => Ok(session_not_found()),
        Err(e) => Err(map_plan_error(e)),
    }
}

async fn ask(
    State(state): State<AppState>,
    Json(params): Json<AskQuestion>,
) -> Result<Json<Value>, ApiError> {
    let answer = state
        .orchestrator
        .answer_open_domain(&params)
        .await
        .map_err(map_plan_error)?;
    Ok(Json(json!({ "success": true, "answer": answer.answer })))
}

async fn save_plan(
    State(state): State<AppState>,
    SessionForm(params): SessionForm,
) -> Result<Json<Value>, ApiError> {
    match state.orchestrator.confirm_plan(&params) {
        Ok(_) => Ok(Json(json!({ "success": true }))),
        Err(PlanError::SessionNotFound { .. }) => Ok(session_not_found()),
        Err(e) => Err(map_plan_error(e)),
    }
}

fn session_not_found() -> Json<Value> {
    Json(json!({ "success": false, "error": SESSION_NOT_FOUND }))
}

fn bad_request(code: &str, message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            code: code.to_string(),
            message: message.into(),
        }),
    )
}

fn map_multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    (
        err.status(),
        Json(ErrorBody {
            code: "invalid_multipart".to_string(),
            message: err.body_text(),
        }),
    )
}

fn map_plan_error(err: PlanError) -> ApiError {
    let (status, code) = match &err {
        e if e.is_backend_failure() => (StatusCode::INTERNAL_SERVER_ERROR, "backend_failure"),
        PlanError::SessionNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        PlanError::Document { .. } => (StatusCode::BAD_REQUEST, "invalid_document"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };
    error!("Request failed: {err}");
    (
        status,
        Json(ErrorBody {
            code: code.to_string(),
            message: err.to_string(),
        }),
    )
}
