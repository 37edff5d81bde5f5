//! Webhook Adapter
//!
//! Outbound delivery of report payloads over HTTP using `reqwest`.

mod notifier;

pub use notifier::{sign_payload, WebhookNotifier, SIGNATURE_HEADER};
