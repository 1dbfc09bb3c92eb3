/// Known skills, matched case-insensitively as plain substrings.
///
/// Order matters: every skill list in a response follows this order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "machine learning",
    "deep learning",
    "nlp",
    "fastapi",
    "django",
    "react",
    "node",
    "aws",
    "docker",
    "flask",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
];

/// Vocabulary terms appearing anywhere in `text`.
///
/// No tokenization or word boundaries: "java" matches inside "javascript".
pub fn extract_skills(text: &str) -> Vec<String> {
    vocabulary_terms_in(&text.to_lowercase())
}

/// Vocabulary terms that are substrings of an already lower-cased text.
pub(crate) fn vocabulary_terms_in(lowered: &str) -> Vec<String> {
    SKILL_VOCABULARY
        .iter()
        .filter(|term| lowered.contains(*term))
        .map(|term| term.to_string())
        .collect()
}
