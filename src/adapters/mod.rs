pub mod form_handler;
pub mod health_handler;
pub mod html_generator;
pub mod markup;
pub mod metrics_handler;
pub mod rate_limit;
