use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::fields::{extract_email, extract_phone};
use crate::extraction::name::{extract_name, PersonRecognizer};
use crate::extraction::skills::extract_skills;
use crate::matching::skill_match::calculate_match;
use crate::resume::models::{ExtractionResult, ParseResumeResponse, ResumeUpload};
use crate::resume::upload::{ensure_pdf_filename, stage_upload};
use crate::state::AppState;

/// Full pipeline for one upload: validate → stage → extract text → analyze.
///
/// The staged file is gone by the time this returns, whatever the outcome.
pub async fn parse_resume(
    state: &AppState,
    upload: ResumeUpload,
) -> Result<ParseResumeResponse, AppError> {
    ensure_pdf_filename(&upload.filename)?;

    let staged = stage_upload(&state.config.upload_dir, upload.bytes).await?;
    let extracted = state.text_extractor.extract_text(staged.path()).await;
    if let Err(e) = staged.close() {
        warn!("Failed to remove staged upload: {e}");
    }

    let text = extracted?;
    if text.is_empty() {
        return Err(AppError::NoTextFound);
    }

    let response = analyze_text(
        &text,
        &upload.job_description,
        state.name_recognizer.as_ref(),
    );

    info!(
        chars = text.chars().count(),
        skills = response.skills_found.len(),
        job_required = response.job_required_skills.len(),
        score = response.match_score_percent,
        "Resume parsed"
    );

    Ok(response)
}

/// Field extraction and skill matching over already-extracted resume text.
pub fn analyze_text(
    text: &str,
    job_description: &str,
    recognizer: &dyn PersonRecognizer,
) -> ParseResumeResponse {
    let extraction = ExtractionResult {
        candidate_name: extract_name(recognizer, text),
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text),
    };
    let fit = calculate_match(&extraction.skills, job_description);

    ParseResumeResponse::new(extraction, fit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::name::CapitalizedNameRecognizer;

    const RESUME: &str = "Jane Doe\n\
        jane.doe+hr@example.co.uk | +44 20 7946 0958\n\
        Summary\n\
        Data engineer with Python, SQL and AWS experience. Built Docker pipelines.";

    #[test]
    fn test_all_fields_are_extracted() {
        let recognizer = CapitalizedNameRecognizer::new();
        let response = analyze_text(RESUME, "python, react, sql", &recognizer);

        assert_eq!(response.candidate_name.as_deref(), Some("Jane Doe"));
        assert_eq!(response.email.as_deref(), Some("jane.doe+hr@example.co.uk"));
        assert_eq!(response.phone.as_deref(), Some("+44 20 7946 0958"));
        assert_eq!(response.skills_found, vec!["python", "sql", "aws", "docker"]);
        assert_eq!(response.job_required_skills, vec!["python", "sql", "react"]);
        assert_eq!(response.matched_skills, vec!["python", "sql"]);
        assert_eq!(response.match_score_percent, 66.67);
    }

    #[test]
    fn test_matched_skills_are_subset_of_found_skills() {
        let recognizer = CapitalizedNameRecognizer::new();
        let response = analyze_text(RESUME, "aws docker flask pandas numpy", &recognizer);
        for skill in &response.matched_skills {
            assert!(response.skills_found.contains(skill));
            assert!(response.job_required_skills.contains(skill));
        }
        assert_eq!(response.match_score_percent, 40.0);
    }

    #[test]
    fn test_job_without_vocabulary_scores_zero() {
        let recognizer = CapitalizedNameRecognizer::new();
        let response = analyze_text(RESUME, "Strong communication skills", &recognizer);
        assert_eq!(response.match_score_percent, 0.0);
        assert!(response.job_required_skills.is_empty());
        assert!(response.matched_skills.is_empty());
    }

    #[test]
    fn test_same_input_gives_same_output() {
        let recognizer = CapitalizedNameRecognizer::new();
        let first = analyze_text(RESUME, "python, react, sql", &recognizer);
        let second = analyze_text(RESUME, "python, react, sql", &recognizer);
        assert_eq!(first, second);
    }
}
