//! Wire types for the order intake endpoint.

use serde::{Deserialize, Serialize};

/// Inbound order/contact submission
///
/// Only the verification token is required; every other field is optional
/// free-form input from the order form and defaults to empty/false. Unknown
/// fields are ignored so the form can evolve ahead of the server.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    pub turnstile_token: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub species: String,
    pub circumference: String,
    pub tree_dry: bool,
    pub tree_green: bool,
    pub description: String,
}

/// Outbound response body: `{ ok, error? }`
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderResponse {
    pub const fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub const fn failure(error: String) -> Self {
        Self {
            ok: false,
            error: Some(error),
        }
    }
}
