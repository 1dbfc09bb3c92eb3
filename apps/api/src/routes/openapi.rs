//! OpenAPI document and a Swagger UI page for trying the API from a browser.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use utoipa::OpenApi;

use crate::errors::{ErrorBody, ErrorDetail};
use crate::resume::handlers;
use crate::resume::models::{ParseResumeForm, ParseResumeResponse};
use crate::routes::health;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resume Parser API",
        description = "Extracts candidate details from a PDF resume and scores its skills against a job description."
    ),
    paths(health::health_handler, handlers::handle_parse_resume),
    components(schemas(ParseResumeForm, ParseResumeResponse, ErrorBody, ErrorDetail)),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Resume", description = "Resume parsing and skill matching")
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_spec() -> impl IntoResponse {
    match ApiDoc::openapi().to_json() {
        Ok(spec) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            spec,
        ),
        Err(e) => {
            tracing::error!("Failed to render OpenAPI document: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"error":{"code":"INTERNAL_ERROR","message":"An internal server error occurred"}}"#
                    .to_string(),
            )
        }
    }
}

/// GET /docs
pub async fn docs_handler() -> Html<&'static str> {
    Html(DOCS_HTML)
}

const DOCS_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>Resume Parser API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
        };
    </script>
</body>
</html>
"##;
