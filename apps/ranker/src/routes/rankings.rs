use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::ExtractionPreview;
use crate::models::RankingReport;
use crate::output::render_csv;
use crate::pipeline::text_source::{Document, DocumentKind};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// POST /api/v1/rankings
pub async fn handle_rank(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RankingReport>, AppError> {
    let report = rank_upload(&state, multipart).await?;
    Ok(Json(report))
}

/// POST /api/v1/rankings/csv
pub async fn handle_rank_csv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let report = rank_upload(&state, multipart).await?;
    let body = render_csv(&report.candidates)?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body))
}

/// POST /api/v1/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractionPreview>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("text must not be blank".to_string()));
    }
    let extractor = Arc::clone(state.pipeline.extractor());
    let preview = tokio::task::spawn_blocking(move || extractor.preview(&req.text))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })?;
    Ok(Json(preview))
}

async fn rank_upload(state: &AppState, multipart: Multipart) -> Result<RankingReport, AppError> {
    let documents = collect_documents(multipart).await?;
    info!("Received {} uploaded resumes", documents.len());
    Ok(state
        .pipeline
        .run(state.text_source.as_ref(), documents)
        .await)
}

/// Every part carrying a file name becomes one document, in upload order.
async fn collect_documents(mut multipart: Multipart) -> Result<Vec<Document>, AppError> {
    let mut documents = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let kind = upload_kind(&file_name, field.content_type());
        let bytes = field.bytes().await.map_err(multipart_error)?;
        documents.push(Document::inline(file_name, kind, bytes));
    }

    if documents.is_empty() {
        return Err(AppError::Validation(
            "No resume files were uploaded".to_string(),
        ));
    }
    Ok(documents)
}

/// Plain text when the part says so by name or content type; PDF otherwise.
fn upload_kind(file_name: &str, content_type: Option<&str>) -> DocumentKind {
    let is_text = content_type.is_some_and(|ct| ct.starts_with("text/plain"))
        || file_name.to_ascii_lowercase().ends_with(".txt");
    if is_text {
        DocumentKind::PlainText
    } else {
        DocumentKind::Pdf
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_kind() {
        assert_eq!(upload_kind("cv.txt", None), DocumentKind::PlainText);
        assert_eq!(upload_kind("CV.TXT", None), DocumentKind::PlainText);
        assert_eq!(
            upload_kind("cv", Some("text/plain; charset=utf-8")),
            DocumentKind::PlainText
        );
        assert_eq!(upload_kind("cv.pdf", Some("application/pdf")), DocumentKind::Pdf);
        assert_eq!(upload_kind("scan", None), DocumentKind::Pdf);
    }
}
