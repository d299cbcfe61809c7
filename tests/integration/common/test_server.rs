use formsmith::adapters::{
    health_handler::HealthHandler,
    html_generator::HtmlFormGenerator,
    metrics_handler::{MetricsCollector, MetricsHandler},
};
use formsmith::config::Settings;
use formsmith::domain::FormGeneratorPort;
use std::net::SocketAddr;
use std::sync::Arc;

pub struct TestServer {
    #[allow(dead_code)]
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    pub async fn new() -> Self {
        let settings = Settings::default();

        let generator: Arc<dyn FormGeneratorPort> =
            Arc::new(HtmlFormGenerator::new(settings.generator.escape_html));
        let health_handler = Arc::new(HealthHandler::new(generator.clone()));
        let metrics_collector = Arc::new(MetricsCollector::new().unwrap());
        let metrics_handler = Arc::new(MetricsHandler::new(metrics_collector));

        let app = formsmith::create_app(&settings, generator, health_handler, metrics_handler);

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
