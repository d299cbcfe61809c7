use thiserror::Error;

use crate::config::{RateLimitConfig, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Collects every problem instead of stopping at the first one
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Some(rate_limit) = &settings.rate_limit {
            if let Err(e) = Self::validate_rate_limit(rate_limit) {
                errors.extend(e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if server.max_body_bytes == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.max_body_bytes".to_string(),
                reason: "Body limit must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_rate_limit(rate_limit: &RateLimitConfig) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // A disabled limiter may carry placeholder values
        if !rate_limit.enabled {
            return Ok(());
        }

        if rate_limit.requests_per_second == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "rate_limit.requests_per_second".to_string(),
                reason: "Must be greater than 0 when rate limiting is enabled".to_string(),
            });
        }

        if rate_limit.burst_size == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "rate_limit.burst_size".to_string(),
                reason: "Must be greater than 0 when rate limiting is enabled".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
