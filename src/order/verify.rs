//! Turnstile token verification client.
//!
//! One form-encoded POST against the siteverify endpoint. The secret is sent
//! as configured (empty when unset, matching siteverify's own rejection).

use serde::Deserialize;

use super::error::OrderError;
use crate::config::OrderConfig;
use crate::logger;

/// Verification service reply
#[derive(Debug, Deserialize)]
struct VerifyReply {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Check the submitted token with the verification service
///
/// A transport failure and a substantive rejection both surface as a 403 to
/// the client; they are logged as distinct events here.
pub async fn verify_token(
    client: &reqwest::Client,
    config: &OrderConfig,
    token: &str,
) -> Result<(), OrderError> {
    let secret = config.turnstile_secret.as_deref().unwrap_or_default();

    let response = client
        .post(&config.verify_url)
        .form(&[("secret", secret), ("response", token)])
        .send()
        .await
        .map_err(OrderError::VerificationUnreachable)?;

    let reply: VerifyReply = response
        .json()
        .await
        .map_err(OrderError::VerificationUnreachable)?;

    if reply.success {
        Ok(())
    } else {
        logger::log_order_event(&format!(
            "token rejected by verification service (codes: {:?})",
            reply.error_codes
        ));
        Err(OrderError::VerificationRejected)
    }
}
