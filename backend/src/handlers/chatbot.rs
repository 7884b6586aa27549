//! HTTP handler for the WhatsApp messaging webhook
//!
//! The gateway delivers each inbound message as a form-encoded POST. The
//! handler verifies the webhook signature over the raw body, parses the form,
//! and answers with a TwiML document. Every request that passes the signature
//! check gets a 200 with some reply; the grammar has no failure mode.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::AppState;

/// Inbound message fields we care about
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "From")]
    pub from: Option<String>,
}

/// Handle inbound WhatsApp messages
/// POST /webhook/whatsapp
pub async fn handle_whatsapp_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(e) = verify_webhook_signature(&state.config.messaging.webhook_secret, &headers, &body)
    {
        tracing::warn!("Webhook signature verification failed: {}", e);
        return (StatusCode::UNAUTHORIZED, "Invalid signature").into_response();
    }

    let message: InboundMessage = match serde_urlencoded::from_bytes(&body) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!("Unparseable webhook form body: {}", e);
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };

    tracing::debug!(
        from = message.from.as_deref().unwrap_or("unknown"),
        "inbound chat message"
    );

    let twiml = state.chatbot.reply_twiml(&message.body);

    ([(header::CONTENT_TYPE, "text/xml")], twiml).into_response()
}

/// Verify the HMAC-SHA256 signature the gateway attaches to each delivery
fn verify_webhook_signature(
    secret: &str,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), String> {
    if secret.is_empty() {
        return Err("Webhook secret not configured".to_string());
    }

    let signature = headers
        .get("x-webhook-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or("Missing x-webhook-signature header")?;

    type HmacSha256 = Hmac<Sha256>;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| "Failed to create HMAC")?;
    mac.update(body);
    let expected = BASE64.encode(mac.finalize().into_bytes());

    if signature != expected {
        return Err("Signature mismatch".to_string());
    }

    Ok(())
}
