use std::sync::Arc;

use crate::config::Config;
use crate::extraction::name::PersonRecognizer;
use crate::extraction::pdf::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub text_extractor: Arc<dyn TextExtractor>,
    /// Person recognizer, initialised once at startup and shared by all requests.
    pub name_recognizer: Arc<dyn PersonRecognizer>,
}
