//! Order intake endpoint
//!
//! Receives a JSON submission, verifies the anti-automation token, renders
//! the notification text, and dispatches it as an email. The flow is a
//! linear sequence: each step short-circuits with a typed [`OrderError`]
//! that maps to its own HTTP status, and email dispatch is only reachable
//! after verification has succeeded.

pub mod email;
mod error;
pub mod message;
mod types;
pub mod verify;

use http_body_util::{BodyExt, Full, Limited};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::sync::Arc;

use crate::config::AppState;
use crate::http;
use crate::logger;

pub use error::OrderError;
pub use types::{OrderResponse, Submission};

/// Path the order form posts to
pub const ORDER_PATH: &str = "/api/order";

/// Handle `POST /api/order`
pub async fn handle(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<Full<Bytes>> {
    let body = match read_body(req, state.config.http.max_body_size).await {
        Ok(bytes) => bytes,
        Err(e) => {
            logger::log_order_failure(e.kind(), &e.to_string());
            return failure_response(&e);
        }
    };

    match process(&body, &state).await {
        Ok(()) => {
            logger::log_order_event("order forwarded to workshop inbox");
            http::build_json_response(StatusCode::OK, &OrderResponse::success())
        }
        Err(e) => {
            logger::log_order_failure(e.kind(), &e.to_string());
            failure_response(&e)
        }
    }
}

/// Run the submission through the intake sequence
///
/// Step order is a hard requirement: token presence, verification, message
/// rendering, credential check, dispatch. Nothing is retried and no state
/// outlives the request.
async fn process(body: &[u8], state: &AppState) -> Result<(), OrderError> {
    let submission = parse_submission(body)?;

    if submission.turnstile_token.is_empty() {
        return Err(OrderError::MissingToken);
    }

    verify::verify_token(
        &state.http_client,
        &state.config.order,
        &submission.turnstile_token,
    )
    .await?;

    let text = message::render(&submission);

    let (api_key, from) = state
        .config
        .order
        .email_credentials()
        .ok_or(OrderError::Misconfigured)?;

    email::send(&state.http_client, &state.config.order, api_key, from, &text).await?;

    Ok(())
}

/// Deserialize the submission from the raw body
///
/// A body that is valid JSON but not an object (`null`, a string, an
/// array) carries no token and is treated as an empty submission, so it
/// lands on the missing-token path rather than a server error.
fn parse_submission(body: &[u8]) -> Result<Submission, OrderError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| OrderError::Unexpected(format!("invalid JSON body: {e}")))?;

    match value {
        serde_json::Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| OrderError::Unexpected(format!("invalid JSON body: {e}"))),
        _ => Ok(Submission::default()),
    }
}

/// Collect the request body under the configured size limit
///
/// The router rejects oversized Content-Length up front; the limit here
/// holds for chunked bodies that carry no length.
async fn read_body(
    req: Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Result<Bytes, OrderError> {
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    Limited::new(req.into_body(), limit)
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| {
            if e.is::<http_body_util::LengthLimitError>() {
                OrderError::PayloadTooLarge
            } else {
                OrderError::Unexpected(format!("failed to read request body: {e}"))
            }
        })
}

fn failure_response(error: &OrderError) -> Response<Full<Bytes>> {
    http::build_json_response(error.status(), &OrderResponse::failure(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_response_carries_status_and_message() {
        let response = failure_response(&OrderError::MissingToken);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = failure_response(&OrderError::EmailDispatch("quota exceeded".to_string()));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn non_object_json_parses_as_an_empty_submission() {
        for body in [&b"null"[..], b"\"text\"", b"[1,2]", b"42"] {
            let submission = parse_submission(body).expect("parses");
            assert!(submission.turnstile_token.is_empty());
        }
    }

    #[test]
    fn object_with_wrong_field_types_is_still_an_error() {
        let err = parse_submission(br#"{"turnstileToken":[1]}"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn garbage_body_is_an_error() {
        let err = parse_submission(b"not json").unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
