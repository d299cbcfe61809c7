//! # Formsmith - JSON to HTML form generator
//!
//! Formsmith is a small HTTP service that accepts a JSON description of a form
//! (name, fields, field types, options and validation flags) and answers with a
//! ready-to-embed HTML fragment: a fixed style block followed by a `<form>`.
//!
//! ## Example
//!
//! ```rust
//! use formsmith::adapters::html_generator::HtmlFormGenerator;
//! use formsmith::domain::{FormGeneratorPort, FormSchema};
//!
//! let schema = FormSchema::from_json(
//!     r#"{"formName":"Sign Up","fields":[{"type":"text","name":"email","label":"Email","required":true}]}"#,
//! ).unwrap();
//! let html = HtmlFormGenerator::default().generate(&schema);
//! assert!(html.contains(r#"<form id="sign-up">"#));
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: form schema types, parsing, errors and the generator port
//! - **Adapters**: HTML generator, HTTP handlers, metrics, rate limiting
//! - **Config**: layered configuration and validation

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::form_handler::{self, FormApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::metrics_handler::MetricsHandler;
use crate::config::Settings;
use crate::domain::FormGeneratorPort;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Application settings (body limit, rate limiting)
/// * `generator` - Form generator shared by all requests
/// * `health_handler` - Health check handler
/// * `metrics_handler` - Metrics handler; its collector also records form requests
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(
    settings: &Settings,
    generator: Arc<dyn FormGeneratorPort>,
    health_handler: Arc<HealthHandler>,
    metrics_handler: Arc<MetricsHandler>,
) -> Router {
    let public_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .route("/metrics", get({
            let handler = metrics_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.metrics().await }
            }
        }));

    let form_state = FormApiState {
        generator,
        metrics: metrics_handler.collector(),
    };

    let mut api_router = Router::new()
        .route("/forms/generate", post(form_handler::generate_form))
        .layer(DefaultBodyLimit::max(settings.server.max_body_bytes))
        .with_state(form_state);

    if let Some(rate_limit) = &settings.rate_limit {
        if rate_limit.enabled {
            tracing::info!(
                "Rate limiting enabled: {} req/s, burst {}",
                rate_limit.requests_per_second,
                rate_limit.burst_size
            );
            let limiter = crate::adapters::rate_limit::create_limiter(rate_limit);
            api_router = api_router.layer(axum::middleware::from_fn_with_state(
                limiter,
                crate::adapters::rate_limit::rate_limit_middleware,
            ));
        }
    }

    public_router
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
