/*
[INPUT]:  Webhook token, raw request body, X-Webhook-Signature header
[OUTPUT]: Whether the request was signed by BuyCoins, and the parsed event
[POS]:    Webhook layer - HMAC-SHA1 signature verification
[UPDATE]: When the signing scheme or header changes
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::http::{BuycoinsError, Result};
use crate::types::WebhookEvent;

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the hex HMAC-SHA1 of the request body
pub const WEBHOOK_SIGNATURE_HEADER: &str = "X-Webhook-Signature";

/// Verifies webhook deliveries against the account's webhook token
#[derive(Clone)]
pub struct WebhookVerifier {
    mac: HmacSha1,
}

impl WebhookVerifier {
    pub fn new(token: impl AsRef<[u8]>) -> Result<Self> {
        let mac = HmacSha1::new_from_slice(token.as_ref())
            .map_err(|err| BuycoinsError::Config(format!("invalid webhook token: {err}")))?;
        Ok(Self { mac })
    }

    /// Lowercase hex HMAC-SHA1 of `body`
    pub fn compute(&self, body: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Constant-time comparison of `signature` against the computed digest
    pub fn verify(&self, body: &[u8], signature: &str) -> bool {
        let expected = self.compute(body);
        expected.as_bytes().ct_eq(signature.as_bytes()).into()
    }

    /// Verify the delivery, then parse the body into a `WebhookEvent`
    pub fn parse(&self, body: &[u8], signature: &str) -> Result<WebhookEvent> {
        if !self.verify(body, signature) {
            warn!("webhook signature mismatch");
            return Err(BuycoinsError::InvalidWebhookSignature);
        }
        let event = WebhookEvent::from_request_body(body)?;
        debug!(hook_id = event.hook_id, event = ?event.payload.event, "webhook verified");
        Ok(event)
    }
}

impl fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Check a webhook delivery: `signature` is the `X-Webhook-Signature` header value
pub fn is_valid_webhook_request(token: &str, body: &str, signature: &str) -> bool {
    WebhookVerifier::new(token)
        .map(|verifier| verifier.verify(body.as_bytes(), signature))
        .unwrap_or(false)
}
