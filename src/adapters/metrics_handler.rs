use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

use crate::domain::{FormError, FormSchema};

pub struct MetricsCollector {
    registry: Registry,

    // Request metrics
    pub requests_total: IntCounterVec,
    pub generation_duration: Histogram,

    // Generation metrics
    pub generation_errors: IntCounterVec,
    pub fields_rendered: IntCounterVec,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("formsmith_requests_total", "Total number of form generation requests"),
            &["status"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let generation_duration = Histogram::with_opts(
            HistogramOpts::new(
                "formsmith_generation_duration_seconds",
                "Time spent parsing and rendering a form",
            )
            .buckets(vec![0.00005, 0.0001, 0.00025, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.05]),
        )?;
        registry.register(Box::new(generation_duration.clone()))?;

        let generation_errors = IntCounterVec::new(
            Opts::new("formsmith_generation_errors_total", "Rejected form descriptions by error kind"),
            &["kind"],
        )?;
        registry.register(Box::new(generation_errors.clone()))?;

        let fields_rendered = IntCounterVec::new(
            Opts::new("formsmith_fields_rendered_total", "Rendered fields by field type"),
            &["field_type"],
        )?;
        registry.register(Box::new(fields_rendered.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            generation_duration,
            generation_errors,
            fields_rendered,
        })
    }

    pub fn record_success(&self, schema: &FormSchema) {
        self.requests_total.with_label_values(&["200"]).inc();
        for field in &schema.fields {
            self.fields_rendered
                .with_label_values(&[field.field_type().as_str()])
                .inc();
        }
    }

    pub fn record_failure(&self, error: &FormError) {
        self.requests_total.with_label_values(&["400"]).inc();
        self.generation_errors.with_label_values(&[error.kind()]).inc();
    }

    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct MetricsHandler {
    collector: Arc<MetricsCollector>,
}

impl MetricsHandler {
    pub fn new(collector: Arc<MetricsCollector>) -> Self {
        Self { collector }
    }

    pub fn collector(&self) -> Arc<MetricsCollector> {
        self.collector.clone()
    }

    pub async fn metrics(&self) -> String {
        self.collector.encode().unwrap_or_else(|e| {
            tracing::error!("Failed to encode metrics: {}", e);
            String::from("# Error encoding metrics\n")
        })
    }
}
