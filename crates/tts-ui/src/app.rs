//! HTTP assembly around the input panel.
//!
//! Wires the panel's controls to [`InputState`]: choosing a file or
//! uploading one fills the preview, typing fills the direct text. Events are
//! applied one at a time under a single lock.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{UiError, UiResult};
use crate::files::InputFiles;
use crate::panel::{accepts_upload, create_input_column, Column, InputComponents};
use crate::render::render_page;
use crate::state::{FileSource, InputMode, InputState};

/// Shared state of the UI process.
#[derive(Clone)]
pub struct UiState {
    files: InputFiles,
    input: Arc<Mutex<InputState>>,
}

impl UiState {
    pub fn new(files: InputFiles) -> Self {
        Self {
            files,
            input: Arc::new(Mutex::new(InputState::new())),
        }
    }

    /// Snapshot of the current input state.
    pub async fn input(&self) -> InputState {
        self.input.lock().await.clone()
    }

    /// Build the panel with the current list of input files.
    pub fn panel(&self) -> UiResult<(Column, InputComponents)> {
        Ok(create_input_column(self.files.list_input_files()?))
    }
}

/// Layout plus component references, as served to clients.
#[derive(Debug, Serialize)]
pub struct PanelView {
    pub layout: Column,
    pub components: InputComponents,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub mode: InputMode,
}

/// Preview after a selection or upload.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub file: Option<String>,
    pub preview: String,
}

/// What would be submitted for synthesis right now.
#[derive(Debug, Serialize, Deserialize)]
pub struct InputView {
    pub mode: InputMode,
    pub file: Option<FileSource>,
    pub payload: Option<String>,
}

impl From<&InputState> for InputView {
    fn from(state: &InputState) -> Self {
        Self {
            mode: state.mode,
            file: state.file.clone(),
            payload: state.payload().map(str::to_string),
        }
    }
}

pub fn create_router(state: UiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/panel", get(panel))
        .route("/select", post(select_file))
        .route("/upload", post(upload_file))
        .route("/text", post(set_text))
        .route("/mode", post(set_mode))
        .route("/input", get(current_input))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<UiState>) -> UiResult<Html<String>> {
    let (column, ids) = state.panel()?;
    let input = state.input.lock().await;
    Ok(Html(render_page(&column, &ids, &input)))
}

async fn panel(State(state): State<UiState>) -> UiResult<Json<PanelView>> {
    let (layout, components) = state.panel()?;
    Ok(Json(PanelView { layout, components }))
}

async fn select_file(
    State(state): State<UiState>,
    Json(request): Json<SelectRequest>,
) -> UiResult<Json<PreviewResponse>> {
    let mut input = state.input.lock().await;

    match request.file {
        Some(name) => {
            let content = state.files.read_file_content(&name)?;
            input.select_file(name.clone(), content);
            Ok(Json(PreviewResponse {
                file: Some(name),
                preview: input.preview.clone(),
            }))
        }
        None => {
            input.clear_file();
            Ok(Json(PreviewResponse {
                file: None,
                preview: String::new(),
            }))
        }
    }
}

async fn upload_file(
    State(state): State<UiState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> UiResult<Json<PreviewResponse>> {
    if !accepts_upload(&params.name) {
        return Err(UiError::UnsupportedFileType(params.name));
    }

    let mut input = state.input.lock().await;
    let (stored, content) = state.files.save_uploaded_file(&params.name, &body)?;
    info!(file = %stored, "Previewing uploaded file");
    input.upload_file(stored.clone(), content);

    Ok(Json(PreviewResponse {
        file: Some(stored),
        preview: input.preview.clone(),
    }))
}

async fn set_text(
    State(state): State<UiState>,
    Json(request): Json<TextRequest>,
) -> Json<InputView> {
    let mut input = state.input.lock().await;
    input.set_text(request.text);
    Json(InputView::from(&*input))
}

async fn set_mode(
    State(state): State<UiState>,
    Json(request): Json<ModeRequest>,
) -> Json<InputView> {
    let mut input = state.input.lock().await;
    input.select_mode(request.mode);
    Json(InputView::from(&*input))
}

async fn current_input(State(state): State<UiState>) -> Json<InputView> {
    let input = state.input.lock().await;
    Json(InputView::from(&*input))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
