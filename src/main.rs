use clap::Parser;
use formsmith::adapters::health_handler::HealthHandler;
use formsmith::adapters::html_generator::HtmlFormGenerator;
use formsmith::adapters::metrics_handler::{MetricsCollector, MetricsHandler};
use formsmith::cli::Cli;
use formsmith::config::Settings;
use formsmith::domain::FormGeneratorPort;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting Formsmith on {}:{}", host, port);
    if !settings.generator.escape_html {
        info!("HTML escaping disabled; schema values are emitted verbatim");
    }

    let generator: Arc<dyn FormGeneratorPort> =
        Arc::new(HtmlFormGenerator::new(settings.generator.escape_html));
    let health_handler = Arc::new(HealthHandler::new(generator.clone()));
    let metrics_collector = Arc::new(MetricsCollector::new()?);
    let metrics_handler = Arc::new(MetricsHandler::new(metrics_collector));

    let app = formsmith::create_app(&settings, generator, health_handler, metrics_handler);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
