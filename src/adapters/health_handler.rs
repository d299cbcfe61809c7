use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{FieldKind, FieldSchema, FieldType, FormGeneratorPort, FormSchema};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub generator: String,
}

pub struct HealthHandler {
    generator: Arc<dyn FormGeneratorPort>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(generator: Arc<dyn FormGeneratorPort>) -> Self {
        Self {
            generator,
            start_time: std::time::Instant::now(),
        }
    }

    fn probe_schema() -> FormSchema {
        FormSchema {
            form_name: "Readiness Probe".to_string(),
            submit_button: true,
            fields: vec![FieldSchema {
                name: "probe".to_string(),
                label: None,
                required: false,
                kind: FieldKind::Input {
                    input_type: FieldType::Hidden,
                    placeholder: None,
                    min: None,
                    max: None,
                },
            }],
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let uptime = self.start_time.elapsed().as_secs();
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            checks: HealthChecks {
                generator: "ok".to_string(),
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - renders a probe form and verifies the result
    pub async fn ready(&self) -> impl IntoResponse {
        let html = self.generator.generate(&Self::probe_schema());

        if html.contains("<form id=\"readiness-probe\">") && html.ends_with("</form>") {
            (StatusCode::OK, Json(serde_json::json!({
                "status": "ready",
                "message": "Server is ready to accept requests"
            })))
        } else {
            tracing::warn!("Readiness probe produced unexpected markup");
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
                "status": "not_ready",
                "message": "Form generator returned unexpected markup"
            })))
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}
