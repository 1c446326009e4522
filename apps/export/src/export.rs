//! Writes rendered résumés to disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::render::{render_all, RenderedResume};

pub const MARKDOWN_FILE: &str = "resume.md";
pub const HTML_FILE: &str = "resume.html";

#[derive(Debug, Clone, Serialize)]
pub struct ExportPaths {
    pub markdown_path: PathBuf,
    pub html_path: PathBuf,
}

/// Writes `resume.md` and `resume.html` into `dir`, creating it if needed.
/// Both files are UTF-8; existing files are overwritten.
pub async fn write_outputs(
    dir: &Path,
    rendered: &RenderedResume,
) -> Result<ExportPaths, AppError> {
    tokio::fs::create_dir_all(dir).await?;

    let markdown_path = dir.join(MARKDOWN_FILE);
    tokio::fs::write(&markdown_path, rendered.markdown.as_bytes()).await?;
    info!("Generated {}", markdown_path.display());

    let html_path = dir.join(HTML_FILE);
    tokio::fs::write(&html_path, rendered.html.as_bytes()).await?;
    info!("Generated {}", html_path.display());

    Ok(ExportPaths {
        markdown_path,
        html_path,
    })
}

/// Reads a JSON record from `input` and writes both renderings into `dir`.
pub async fn convert_file(input: &Path, dir: &Path) -> Result<ExportPaths, AppError> {
    let text = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("failed to read resume input {}", input.display()))?;

    let record = ResumeRecord::from_json(&text)?;
    write_outputs(dir, &render_all(&record)).await
}
