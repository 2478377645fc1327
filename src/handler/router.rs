//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body size
//! guard, route matching, and access logging.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::order;
use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{HeaderMap, Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context for static file serving
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let referer = header_value(req.headers(), "referer");
    let user_agent = header_value(req.headers(), "user-agent");

    let response = route(req, &state).await;

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: remote_addr.ip().to_string(),
            time: Local::now(),
            method,
            path,
            query,
            http_version: http_version.to_string(),
            status: response.status().as_u16(),
            body_bytes: body_size(&response),
            referer,
            user_agent,
            request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method, path, and configuration
async fn route(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    // Reject oversized payloads before touching the body
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let enable_cors = state.config.http.enable_cors;

    // 1. Order intake endpoint
    if path == order::ORDER_PATH {
        return match method {
            Method::POST => order::handle(req, Arc::clone(state)).await,
            Method::OPTIONS => http::build_options_response(enable_cors, "POST, OPTIONS"),
            _ => {
                logger::log_warning(&format!("Method not allowed on {path}: {method}"));
                http::build_405_response("POST, OPTIONS")
            }
        };
    }

    // 2. Health check endpoints
    let health = &state.config.site.health;
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        return http::build_health_response();
    }

    // 3. Static site
    match method {
        Method::GET | Method::HEAD => {
            let ctx = RequestContext {
                path: &path,
                is_head: method == Method::HEAD,
                if_none_match: header_value(req.headers(), "if-none-match"),
            };
            static_files::serve(&ctx, &state.config.site).await
        }
        Method::OPTIONS => http::build_options_response(enable_cors, "GET, HEAD, OPTIONS"),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response("GET, HEAD, OPTIONS")
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

fn body_size(response: &Response<Full<Bytes>>) -> usize {
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}
