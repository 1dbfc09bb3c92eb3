//! Candidate name extraction.
//!
//! The candidate's name is assumed to sit near the top of the resume, so only
//! the first `NAME_WINDOW_CHARS` characters are handed to the recognizer.
//! Results are heuristic: ordering and recognizer quality decide the answer.
//!
//! `AppState` carries an `Arc<dyn PersonRecognizer>` built once at startup.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::extraction::skills::SKILL_VOCABULARY;

/// How much of the resume text the recognizer sees.
pub const NAME_WINDOW_CHARS: usize = 1000;

/// Person-entity recognition over a slice of text.
pub trait PersonRecognizer: Send + Sync {
    /// Text of the first entity recognised as a person, in document order.
    fn first_person(&self, text: &str) -> Option<String>;
}

/// Runs the recognizer over the head of the resume.
pub fn extract_name(recognizer: &dyn PersonRecognizer, text: &str) -> Option<String> {
    recognizer.first_person(leading_chars(text, NAME_WINDOW_CHARS))
}

/// The first `n` characters of `text`, never splitting a code point.
fn leading_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CapitalizedNameRecognizer
// ────────────────────────────────────────────────────────────────────────────

/// Title-case ("Jane", "McKay", "O'Neil", "Smith-Jones") or ALL-CAPS ("DOE") word.
static NAME_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\p{Lu}\p{Ll}*(?:\p{Lu}\p{Ll}+)?(?:['’-]\p{Lu}?\p{Ll}+(?:\p{Lu}\p{Ll}+)?)*|\p{Lu}{2,}(?:['’-]\p{Lu}+)*)$",
    )
    .expect("name word pattern")
});

/// Single-letter initial, with or without a period.
static INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Lu}\.?$").expect("initial pattern"));

const MIN_NAME_TOKENS: usize = 2;
const MAX_NAME_TOKENS: usize = 4;

/// Words that start lines of a resume header but are never part of a name.
const NON_NAME_WORDS: &[&str] = &[
    // section headings
    "resume", "résumé", "curriculum", "vitae", "cv", "profile", "summary", "objective",
    "experience", "education", "skills", "projects", "certifications", "references",
    "contact", "details", "personal", "information", "about", "languages", "interests",
    "achievements", "awards", "publications", "work", "history", "employment", "career",
    "professional", "technical", "qualifications",
    // contact labels
    "email", "e-mail", "phone", "mobile", "tel", "address", "linkedin", "github",
    "portfolio", "website",
    // job titles and seniority
    "senior", "junior", "lead", "principal", "staff", "chief", "head", "engineer",
    "engineering", "developer", "development", "manager", "analyst", "scientist",
    "consultant", "designer", "intern", "architect", "administrator", "specialist",
    "officer", "director", "associate", "assistant", "software", "data", "full",
    "stack", "backend", "frontend", "web", "cloud", "devops", "research", "product",
    "project", "team", "student", "graduate", "freelance",
    // organisations and places
    "university", "college", "institute", "school", "academy", "inc", "llc", "ltd",
    "corp", "corporation", "company", "technologies", "solutions", "systems", "labs",
    "group", "street", "avenue", "road", "city", "new", "york", "san", "francisco",
    "los", "angeles", "united", "states", "kingdom", "remote",
    // dates
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december", "present", "current",
    // degrees
    "bachelor", "master", "bsc", "msc", "phd", "mba", "science", "arts", "computer",
];

/// Deterministic person tagger for resume headers.
///
/// A person is a run of 2–4 name-shaped tokens on one line, at least one of
/// them a full word, none of them a known non-name word. Punctuation after a
/// word ends the run; initials keep their period.
pub struct CapitalizedNameRecognizer {
    stopwords: HashSet<String>,
}

impl CapitalizedNameRecognizer {
    /// Built-in non-name words plus every word of the skill vocabulary.
    pub fn new() -> Self {
        let mut stopwords: HashSet<String> =
            NON_NAME_WORDS.iter().map(|w| w.to_string()).collect();
        for term in SKILL_VOCABULARY {
            stopwords.extend(term.split_whitespace().map(str::to_string));
        }
        Self { stopwords }
    }

    /// Adds non-name words from a file: one word per line, `#` starts a comment.
    pub fn with_stopwords_file(mut self, path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read name stopwords from {}", path.display()))?;
        self.stopwords.extend(parse_stopwords(&raw));
        Ok(self)
    }

    fn is_stopword(&self, token: &str) -> bool {
        let key = token.trim_end_matches('.').to_lowercase();
        self.stopwords.contains(&key)
    }

    fn first_person_on_line(&self, line: &str) -> Option<String> {
        let mut run: Vec<&str> = Vec::new();

        for raw in line.split_whitespace() {
            let token = raw.trim_start_matches(|c: char| !c.is_alphanumeric());
            let core = token.trim_end_matches(|c: char| !c.is_alphanumeric() && c != '.');
            let word = if INITIAL.is_match(core) {
                core
            } else {
                core.trim_end_matches('.')
            };
            // "Doe," or "Doe." closes the run after including "Doe".
            let closes_run = word.len() != token.len();

            let shaped = (INITIAL.is_match(word) || NAME_WORD.is_match(word))
                && !self.is_stopword(word);

            if shaped {
                run.push(word);
            } else if let Some(name) = accept_run(&run) {
                return Some(name);
            } else {
                run.clear();
            }

            if closes_run && shaped {
                if let Some(name) = accept_run(&run) {
                    return Some(name);
                }
                run.clear();
            }
        }

        accept_run(&run)
    }
}

impl Default for CapitalizedNameRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRecognizer for CapitalizedNameRecognizer {
    fn first_person(&self, text: &str) -> Option<String> {
        text.lines().find_map(|line| self.first_person_on_line(line))
    }
}

fn accept_run(run: &[&str]) -> Option<String> {
    if run.len() < MIN_NAME_TOKENS || run.len() > MAX_NAME_TOKENS {
        return None;
    }
    if run.iter().all(|t| INITIAL.is_match(t)) {
        return None;
    }
    Some(run.join(" "))
}

fn parse_stopwords(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}
