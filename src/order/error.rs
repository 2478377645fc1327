//! Error types for the order intake flow.
//!
//! Every failure is a typed value mapped to one distinct HTTP status; the
//! `Display` text is what the client sees in the response body.

use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// Submission carried no verification token.
    #[error("Missing verification token.")]
    MissingToken,
    /// Request body exceeded the configured size limit.
    #[error("Request body too large.")]
    PayloadTooLarge,
    /// Verification service judged the token invalid.
    #[error("Verification failed.")]
    VerificationRejected,
    /// Verification service could not be reached or answered garbage.
    ///
    /// Deliberately indistinguishable from a rejection on the wire, but
    /// logged as its own event.
    #[error("Verification failed.")]
    VerificationUnreachable(#[source] reqwest::Error),
    /// Email credentials or sender address are not configured.
    #[error("Server email is not configured yet (missing resend_api_key/resend_from).")]
    Misconfigured,
    /// Email service returned a non-success status; carries its diagnostic.
    #[error("Email send failed. {0}")]
    EmailDispatch(String),
    /// Anything else: unreadable body, invalid JSON, transport failure
    /// while dispatching mail.
    #[error("{0}")]
    Unexpected(String),
}

impl OrderError {
    /// HTTP status this failure maps to
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::VerificationRejected | Self::VerificationUnreachable(_) => StatusCode::FORBIDDEN,
            Self::Misconfigured | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EmailDispatch(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short machine-checkable name for error logging
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::PayloadTooLarge => "payload_too_large",
            Self::VerificationRejected => "verification_rejected",
            Self::VerificationUnreachable(_) => "verification_unreachable",
            Self::Misconfigured => "misconfigured",
            Self::EmailDispatch(_) => "email_dispatch",
            Self::Unexpected(_) => "unexpected",
        }
    }
}
