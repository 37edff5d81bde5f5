//! Webhook delivery configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// HMAC-SHA256 key; requests are unsigned when absent
    pub signing_secret: Option<SecretString>,
}

impl WebhookConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidWebhookTimeout);
        }
        if let Some(secret) = &self.signing_secret {
            if secret.expose_secret().len() < 16 {
                return Err(ValidationError::WeakSigningSecret);
            }
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            signing_secret: None,
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_unsigned() {
        let config = WebhookConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert!(config.signing_secret.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn short_secret_is_rejected() {
        let config = WebhookConfig {
            signing_secret: Some(SecretString::new("short".to_string())),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::WeakSigningSecret));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = WebhookConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidWebhookTimeout));
    }
}
