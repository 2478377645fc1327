//! Transactional email dispatch client (Resend-style API).
//!
//! Bearer-authenticated JSON POST. A non-success reply becomes an
//! `EmailDispatch` error carrying the service's diagnostic text so the
//! client can see why the order did not go out.

use serde::Serialize;

use super::error::OrderError;
use crate::config::OrderConfig;

/// Dispatch request body: `{from, to, subject, text}`
#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Send the rendered order notification
pub async fn send(
    client: &reqwest::Client,
    config: &OrderConfig,
    api_key: &str,
    from: &str,
    text: &str,
) -> Result<(), OrderError> {
    let request = EmailRequest {
        from,
        to: [config.order_to.as_str()],
        subject: &config.subject,
        text,
    };

    let response = client
        .post(&config.email_url)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| OrderError::Unexpected(format!("email request failed: {e}")))?;

    if response.status().is_success() {
        Ok(())
    } else {
        let diagnostic = response.text().await.unwrap_or_default();
        Err(OrderError::EmailDispatch(diagnostic))
    }
}
