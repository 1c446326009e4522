//! Axum route handlers for the Render API.
//!
//! Bodies are taken as raw text and decoded by `ResumeRecord::from_json` so a
//! malformed document surfaces as our own `PARSE_ERROR`, not an extractor
//! rejection.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::export::{write_outputs, ExportPaths};
use crate::models::resume::ResumeRecord;
use crate::render::{render_all, render_html, render_markdown, RenderedResume};
use crate::state::AppState;

const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// POST /api/v1/render
///
/// Returns both renderings in one JSON object.
pub async fn handle_render(body: String) -> Result<Json<RenderedResume>, AppError> {
    let record = ResumeRecord::from_json(&body)?;
    Ok(Json(render_all(&record)))
}

/// POST /api/v1/render/markdown
pub async fn handle_render_markdown(body: String) -> Result<impl IntoResponse, AppError> {
    let record = ResumeRecord::from_json(&body)?;
    Ok((
        [(header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE)],
        render_markdown(&record),
    ))
}

/// POST /api/v1/render/html
pub async fn handle_render_html(body: String) -> Result<Html<String>, AppError> {
    let record = ResumeRecord::from_json(&body)?;
    Ok(Html(render_html(&record)))
}

/// POST /api/v1/export
///
/// Renders both formats and writes them into the configured output directory.
pub async fn handle_export(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ExportPaths>, AppError> {
    let record = ResumeRecord::from_json(&body)?;
    let paths = write_outputs(&state.config.output_dir, &render_all(&record)).await?;
    info!("Exported resume to {}", state.config.output_dir.display());
    Ok(Json(paths))
}
