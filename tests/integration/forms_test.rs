use super::common;

use common::test_server::TestServer;

#[tokio::test]
async fn test_generate_form_over_http() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/api/forms/generate"))
        .header("Content-Type", "application/json")
        .body(r#"{"formName":"Contact Us","fields":[{"type":"email","name":"email","label":"Email","required":true},{"type":"textarea","name":"message","label":"Message"}]}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.unwrap();
    assert!(html.contains("<form id=\"contact-us\">"));
    assert!(html.contains("<input type=\"email\" name=\"email\" id=\"email\" required />"));
    assert!(html.contains("<textarea name=\"message\" id=\"message\"></textarea>"));
}

#[tokio::test]
async fn test_unsupported_type_over_http() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/api/forms/generate"))
        .body(r#"{"formName":"X","fields":[{"type":"unsupported","name":"y"}]}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "Invalid JSON format: Unsupported field type: unsupported"
    );
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let requests = (0..8).map(|i| {
        let client = client.clone();
        let url = server.url("/api/forms/generate");
        async move {
            let body = format!(
                r#"{{"formName":"Form {}","submitButton":false,"fields":[]}}"#,
                i
            );
            let html = client.post(url).body(body).send().await.unwrap().text().await.unwrap();
            (i, html)
        }
    });

    let handles: Vec<_> = requests.map(tokio::spawn).collect();
    for handle in handles {
        let (i, html) = handle.await.unwrap();
        assert!(html.ends_with(&format!("<form id=\"form-{}\"></form>", i)));
    }
}
