use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

use crate::matching::skill_match::MatchResult;

/// One multipart submission, fully read into memory.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Bytes,
    pub job_description: String,
}

/// Fields pulled out of the resume text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub candidate_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Vocabulary order, no duplicates.
    pub skills: Vec<String>,
}

/// Multipart form accepted by `POST /parse-resume/`. Only describes the
/// request in the OpenAPI document; the handler reads fields directly.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct ParseResumeForm {
    /// The resume. The filename must end in `.pdf`.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub job_description: String,
}

/// Response body for `POST /parse-resume/`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ParseResumeResponse {
    pub candidate_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills_found: Vec<String>,
    pub job_required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    /// Share of job-required skills found in the resume, 0 to 100.
    pub match_score_percent: f64,
}

impl ParseResumeResponse {
    pub fn new(extraction: ExtractionResult, fit: MatchResult) -> Self {
        Self {
            candidate_name: extraction.candidate_name,
            email: extraction.email,
            phone: extraction.phone,
            skills_found: extraction.skills,
            job_required_skills: fit.job_required_skills,
            matched_skills: fit.matched_skills,
            match_score_percent: fit.score,
        }
    }
}
