use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use formsmith::adapters::health_handler::HealthHandler;
use formsmith::adapters::html_generator::HtmlFormGenerator;
use formsmith::adapters::metrics_handler::{MetricsCollector, MetricsHandler};
use formsmith::config::{RateLimitConfig, Settings};
use formsmith::domain::FormGeneratorPort;
use http_body_util::BodyExt;
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

fn app_with(settings: Settings) -> Router {
    let generator: Arc<dyn FormGeneratorPort> =
        Arc::new(HtmlFormGenerator::new(settings.generator.escape_html));
    let health_handler = Arc::new(HealthHandler::new(generator.clone()));
    let metrics_handler = Arc::new(MetricsHandler::new(Arc::new(MetricsCollector::new().unwrap())));
    formsmith::create_app(&settings, generator, health_handler, metrics_handler)
}

fn app() -> Router {
    app_with(Settings::default())
}

fn generate_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri("/api/forms/generate")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_generate_sign_up_form() {
    let body = json!({
        "formName": "Sign Up",
        "fields": [
            {"type": "text", "name": "email", "label": "Email", "required": true}
        ]
    });

    let response = app().oneshot(generate_request(body.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = body_string(response).await;
    assert!(html.contains("<form id=\"sign-up\">"));
    assert!(html.contains("<label for=\"email\">Email</label>"));
    assert!(html.contains("<input type=\"text\" name=\"email\" id=\"email\" required />"));
    assert!(html.contains("<button type=\"submit\">Submit</button>"));
    assert!(!html.contains("<html"));
}

#[tokio::test]
async fn test_full_form_with_every_family() {
    let body = json!({
        "formName": "Event Registration",
        "submitButton": true,
        "fields": [
            {"type": "text", "name": "fullName", "label": "Full Name", "placeholder": "Jane Doe", "required": true},
            {"type": "number", "name": "guests", "label": "Guests", "min": "1", "max": "5"},
            {"type": "textarea", "name": "notes", "label": "Notes", "defaultValue": "None"},
            {"type": "dropdown", "name": "ticket", "label": "Ticket", "options": ["Standard", "VIP"]},
            {"type": "radio", "name": "meal", "label": "Meal", "options": ["Veg", "Fish"], "required": true},
            {"type": "checkbox", "name": "terms", "label": "Accept terms", "required": true},
            {"type": "button", "name": "reset", "buttonType": "reset", "label": "Reset"}
        ]
    });

    let response = app().oneshot(generate_request(body.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    assert!(html.contains("<form id=\"event-registration\">"));
    assert!(html.contains("placeholder=\"Jane Doe\""));
    assert!(html.contains("min=\"1\" max=\"5\""));
    assert!(html.contains(">None</textarea>"));
    assert!(html.contains("<option value=\"Standard\">Standard</option><option value=\"VIP\">VIP</option>"));
    assert!(html.contains("id=\"meal-veg\""));
    assert!(html.contains("id=\"meal-fish\""));
    assert!(html.contains("<label for=\"terms\"><input type=\"checkbox\""));
    assert!(html.contains("<button type=\"reset\" name=\"reset\">Reset</button><br>"));
    // seven fields, each followed by a line break, plus the one after the reset button
    assert_eq!(html.matches("<br>").count(), 8);
}

#[tokio::test]
async fn test_empty_form_without_submit_button() {
    let body = json!({"formName": "X", "submitButton": false, "fields": []});

    let response = app().oneshot(generate_request(body.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.ends_with("<form id=\"x\"></form>"));
    assert!(!html.contains("<button"));
}

#[tokio::test]
async fn test_rejections_are_bad_requests() {
    let cases = [
        ("{not json".to_string(), "Invalid JSON format: "),
        (
            json!({"formName": "X", "fields": [{"type": "unsupported", "name": "y"}]}).to_string(),
            "Invalid JSON format: Unsupported field type: unsupported",
        ),
        (
            json!({"fields": []}).to_string(),
            "Invalid JSON format: Missing required field: formName",
        ),
        (
            json!({"formName": "X", "fields": [{"type": "radio", "name": "r"}]}).to_string(),
            "Invalid JSON format: Missing options for radio field 'r'",
        ),
    ];

    let app = app();
    for (body, expected) in cases {
        let response = app.clone().oneshot(generate_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let text = body_string(response).await;
        assert!(text.starts_with(expected), "{} does not start with {}", text, expected);
    }
}

#[tokio::test]
async fn test_non_utf8_body_is_rejected() {
    let response = app()
        .oneshot(generate_request(vec![b'{', 0xff, b'}']))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("not valid UTF-8"));
}

#[tokio::test]
async fn test_body_limit() {
    let mut settings = Settings::default();
    settings.server.max_body_bytes = 64;

    let body = json!({"formName": "X".repeat(200), "fields": []}).to_string();
    let response = app_with(settings).oneshot(generate_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_rate_limit() {
    let mut settings = Settings::default();
    settings.rate_limit = Some(RateLimitConfig {
        enabled: true,
        requests_per_second: 1,
        burst_size: 1,
    });

    let app = app_with(settings);
    let body = json!({"formName": "X", "fields": []}).to_string();

    let first = app.clone().oneshot(generate_request(body.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.clone().oneshot(generate_request(body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

    // health endpoints are outside the limiter
    let health = app
        .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_record_generation() {
    let app = app();
    let body = json!({"formName": "X", "fields": [{"type": "email", "name": "e"}]}).to_string();
    app.clone().oneshot(generate_request(body)).await.unwrap();

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_string(response).await;
    assert!(text.contains("formsmith_requests_total{status=\"200\"} 1"));
    assert!(text.contains("formsmith_fields_rendered_total{field_type=\"email\"} 1"));
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let response = app()
        .oneshot(Request::builder().uri("/api/forms/generate").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
