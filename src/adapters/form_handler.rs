//! HTTP handler for `POST /api/forms/generate`
//!
//! The raw request body is taken as the form description. A successful
//! generation answers 200 with the markup; any failure answers 400 with
//! `Invalid JSON format: <cause>` as plain text.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::adapters::metrics_handler::MetricsCollector;
use crate::domain::{FormGeneratorPort, FormResult, FormSchema};

/// Prefix of every 400 response body
pub const ERROR_PREFIX: &str = "Invalid JSON format: ";

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Shared state for the form API
#[derive(Clone)]
pub struct FormApiState {
    pub generator: Arc<dyn FormGeneratorPort>,
    pub metrics: Arc<MetricsCollector>,
}

/// Parse and render in one step; the schema is returned alongside the markup
/// so callers can inspect what was generated.
pub fn generate_html_form(
    generator: &dyn FormGeneratorPort,
    body: &[u8],
) -> FormResult<(FormSchema, String)> {
    let schema = FormSchema::from_slice(body)?;
    let html = generator.generate(&schema);
    Ok((schema, html))
}

pub async fn generate_form(State(state): State<FormApiState>, body: Bytes) -> Response {
    let timer = state.metrics.generation_duration.start_timer();
    let result = generate_html_form(state.generator.as_ref(), &body);
    timer.observe_duration();

    match result {
        Ok((schema, html)) => {
            state.metrics.record_success(&schema);
            tracing::debug!(
                form_id = %schema.form_id(),
                fields = schema.fields.len(),
                bytes = html.len(),
                "Generated form"
            );
            (StatusCode::OK, [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], html).into_response()
        }
        Err(e) => {
            state.metrics.record_failure(&e);
            tracing::warn!(kind = e.kind(), "Rejected form description: {}", e);
            (StatusCode::BAD_REQUEST, format!("{}{}", ERROR_PREFIX, e)).into_response()
        }
    }
}
