//! Webhook notifier adapter.
//!
//! POSTs the JSON report to a caller-supplied URL. When a signing secret is
//! configured, the request carries
//! `X-Scor-Signature: t=<unix seconds>,v1=<hex hmac-sha256>` computed over
//! `"<t>.<body>"`.

use std::time::Duration;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use tracing::{debug, warn};

use crate::domain::report::AssessmentReport;
use crate::ports::{DeliveryReceipt, NotifyError, ReportNotifier};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Scor-Signature";

/// Computes the signature header value for `body` at `timestamp`.
pub fn sign_payload(secret: &str, timestamp: i64, body: &[u8]) -> Result<String, NotifyError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| NotifyError::Serialization(e.to_string()))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(body);
    let digest = mac.finalize().into_bytes();
    Ok(format!("t={},v1={}", timestamp, hex::encode(digest)))
}

pub struct WebhookNotifier {
    http_client: reqwest::Client,
    signing_secret: Option<SecretString>,
    timeout_secs: u64,
}

impl WebhookNotifier {
    /// Creates a notifier whose requests time out after `timeout_secs`.
    pub fn new(timeout_secs: u64) -> Result<Self, NotifyError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(Self {
            http_client,
            signing_secret: None,
            timeout_secs,
        })
    }

    pub fn with_signing_secret(mut self, secret: SecretString) -> Self {
        self.signing_secret = Some(secret);
        self
    }
}

#[async_trait]
impl ReportNotifier for WebhookNotifier {
    async fn deliver(
        &self,
        target_url: &str,
        report: &AssessmentReport,
    ) -> Result<DeliveryReceipt, NotifyError> {
        let url = reqwest::Url::parse(target_url)
            .map_err(|e| NotifyError::InvalidTarget(format!("{}: {}", target_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(NotifyError::InvalidTarget(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let body = serde_json::to_vec(report).map_err(|e| NotifyError::Serialization(e.to_string()))?;

        let mut request = self
            .http_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(secret) = &self.signing_secret {
            let signature = sign_payload(secret.expose_secret(), chrono::Utc::now().timestamp(), &body)?;
            request = request.header(SIGNATURE_HEADER, signature);
        }

        let response = request.body(body).send().await.map_err(|e| {
            if e.is_timeout() {
                warn!(timeout_secs = self.timeout_secs, "Webhook delivery timed out");
                NotifyError::Timeout
            } else {
                warn!(error = %e, "Webhook delivery failed");
                NotifyError::Transport(e.to_string())
            }
        })?;

        let status_code = response.status().as_u16();
        debug!(
            assessment_id = %report.assessment_id,
            status_code,
            "Webhook responded"
        );
        Ok(DeliveryReceipt { status_code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::benchmark::DispatchStatus;
    use crate::domain::report::sample_state;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn report() -> AssessmentReport {
        AssessmentReport::build(&sample_state()).unwrap()
    }

    /// Serves `status` on `/hook` and records received signature headers.
    async fn serve(status: StatusCode) -> (String, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let app = Router::new().route(
            "/hook",
            post(move |headers: HeaderMap| {
                let recorder = Arc::clone(&recorder);
                async move {
                    if let Some(sig) = headers.get(SIGNATURE_HEADER) {
                        recorder.lock().await.push(sig.to_str().unwrap().to_string());
                    }
                    status
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/hook", addr), seen)
    }

    #[test]
    fn signature_is_deterministic() {
        let a = sign_payload("secret", 1_700_000_000, b"{}").unwrap();
        let b = sign_payload("secret", 1_700_000_000, b"{}").unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("t=1700000000,v1="));
        assert_eq!(a.len(), "t=1700000000,v1=".len() + 64);
        assert_ne!(a, sign_payload("other", 1_700_000_000, b"{}").unwrap());
    }

    #[tokio::test]
    async fn ok_response_is_success() {
        let (url, seen) = serve(StatusCode::OK).await;
        let notifier = WebhookNotifier::new(5)
            .unwrap()
            .with_signing_secret(SecretString::new("s3cret".to_string()));

        let receipt = notifier.deliver(&url, &report()).await.unwrap();
        assert_eq!(receipt.status(), DispatchStatus::Success);
        assert_eq!(seen.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn non_200_response_is_failure() {
        let (url, seen) = serve(StatusCode::ACCEPTED).await;
        let notifier = WebhookNotifier::new(5).unwrap();

        let receipt = notifier.deliver(&url, &report()).await.unwrap();
        assert_eq!(receipt.status_code, 202);
        assert_eq!(receipt.status(), DispatchStatus::Failure);
        assert!(seen.lock().await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_target_is_an_error() {
        let notifier = WebhookNotifier::new(2).unwrap();
        let result = notifier.deliver("http://127.0.0.1:1/hook", &report()).await;
        assert!(matches!(result, Err(NotifyError::Transport(_)) | Err(NotifyError::Timeout)));
    }

    #[tokio::test]
    async fn invalid_url_is_rejected() {
        let notifier = WebhookNotifier::new(2).unwrap();
        let result = notifier.deliver("ftp://example.com", &report()).await;
        assert!(matches!(result, Err(NotifyError::InvalidTarget(_))));
        let result = notifier.deliver("not a url", &report()).await;
        assert!(matches!(result, Err(NotifyError::InvalidTarget(_))));
    }
}
