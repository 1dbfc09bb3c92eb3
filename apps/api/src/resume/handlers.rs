//! Axum route handler for the resume upload endpoint.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::{debug, Instrument};
use uuid::Uuid;

use crate::errors::{AppError, ErrorBody};
use crate::resume::analyze::parse_resume;
use crate::resume::models::{ParseResumeForm, ParseResumeResponse, ResumeUpload};
use crate::state::AppState;

/// POST /parse-resume/
///
/// Multipart fields: `file` (a `.pdf` upload) and `job_description` (text).
/// Returns extracted candidate fields plus the skill match against the JD.
#[utoipa::path(
    post,
    path = "/parse-resume/",
    request_body(content = ParseResumeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Extracted fields and skill match", body = ParseResumeResponse),
        (status = 400, description = "Rejected PDF upload", body = ErrorBody),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorBody),
        (status = 422, description = "Missing or malformed form field", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tag = "Resume"
)]
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("parse_resume", %request_id);

    async move {
        let multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
        let upload = read_upload(multipart).await?;
        debug!(
            filename = %upload.filename,
            bytes = upload.bytes.len(),
            "Upload received"
        );

        let response = parse_resume(&state, upload).await.inspect_err(|e| {
            debug!("Resume rejected: {e}");
        })?;
        Ok::<_, AppError>(Json(response))
    }
    .instrument(span)
    .await
}

/// Reads the whole multipart body. Unknown fields are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((filename, bytes));
            }
            Some("job_description") => {
                job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing form field `file`".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("Missing form field `job_description`".to_string()))?;

    Ok(ResumeUpload {
        filename,
        bytes,
        job_description,
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(err.body_text())
    }
}
