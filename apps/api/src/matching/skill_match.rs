//! Skill match scoring: resume skills vs. the vocabulary terms a job description mentions.
//!
//! Algorithm:
//! 1. job_required = vocabulary terms that are substrings of the lower-cased JD
//! 2. matched = job_required ∩ resume skills
//! 3. score = |matched| / |job_required| × 100, rounded to two decimals
//!
//! A JD that mentions no vocabulary term scores 0 with both lists empty.

use crate::extraction::skills::vocabulary_terms_in;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub score: f64, // 0.0 to 100.0
    pub job_required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            score: 0.0,
            job_required_skills: vec![],
            matched_skills: vec![],
        }
    }
}

pub fn calculate_match(resume_skills: &[String], job_description: &str) -> MatchResult {
    let job_required_skills = vocabulary_terms_in(&job_description.to_lowercase());

    if job_required_skills.is_empty() {
        return MatchResult::empty();
    }

    let matched_skills: Vec<String> = job_required_skills
        .iter()
        .filter(|skill| resume_skills.contains(skill))
        .cloned()
        .collect();

    let ratio = matched_skills.len() as f64 / job_required_skills.len() as f64;

    MatchResult {
        score: round_to_hundredths(ratio * 100.0),
        job_required_skills,
        matched_skills,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
