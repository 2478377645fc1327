//! Shared helpers for integration tests: the real server on an ephemeral
//! port plus an in-process stub standing in for the verification and email
//! services.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use chisel_site::config::{AppState, Config};
use chisel_site::server;

/// Scripted behavior and call recording for the upstream stub
pub struct Upstream {
    pub verify_success: bool,
    pub email_status: u16,
    pub email_body: String,
    pub verify_calls: AtomicUsize,
    pub email_calls: AtomicUsize,
    pub last_email: Mutex<Option<serde_json::Value>>,
}

impl Upstream {
    pub fn new(verify_success: bool, email_status: u16, email_body: &str) -> Arc<Self> {
        Arc::new(Self {
            verify_success,
            email_status,
            email_body: email_body.to_string(),
            verify_calls: AtomicUsize::new(0),
            email_calls: AtomicUsize::new(0),
            last_email: Mutex::new(None),
        })
    }
}

/// Spawn the upstream stub, returning the address it listens on
pub async fn spawn_upstream(upstream: Arc<Upstream>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream listener");
    let addr = listener.local_addr().expect("upstream local addr");

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let upstream = Arc::clone(&upstream);
            tokio::spawn(async move {
                let service = service_fn(move |req| handle_upstream(req, Arc::clone(&upstream)));
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    addr
}

async fn handle_upstream(
    req: Request<Incoming>,
    upstream: Arc<Upstream>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let path = req.uri().path().to_string();
    let body = req.into_body().collect().await?.to_bytes();

    let response = match path.as_str() {
        "/siteverify" => {
            upstream.verify_calls.fetch_add(1, Ordering::SeqCst);
            let reply = serde_json::json!({ "success": upstream.verify_success }).to_string();
            stub_response(StatusCode::OK, reply)
        }
        "/emails" => {
            upstream.email_calls.fetch_add(1, Ordering::SeqCst);
            *upstream.last_email.lock().unwrap() = serde_json::from_slice(&body).ok();
            let status =
                StatusCode::from_u16(upstream.email_status).expect("valid scripted status");
            stub_response(status, upstream.email_body.clone())
        }
        _ => stub_response(StatusCode::NOT_FOUND, String::new()),
    };

    Ok(response)
}

fn stub_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .expect("stub response")
}

/// Test configuration pointing at the upstream stub
pub fn test_config(upstream_addr: SocketAddr, with_email_credentials: bool) -> Config {
    let mut cfg = Config::load_from("this-file-does-not-exist").expect("default config");
    cfg.logging.access_log = false;
    cfg.order.turnstile_secret = Some("test-secret".to_string());
    cfg.order.verify_url = format!("http://{upstream_addr}/siteverify");
    cfg.order.email_url = format!("http://{upstream_addr}/emails");
    if with_email_credentials {
        cfg.order.resend_api_key = Some("re_test".to_string());
        cfg.order.resend_from = Some("orders@chainandchisel.art".to_string());
    }
    cfg
}

/// Spawn the real server with the given configuration
pub async fn spawn_app_with(cfg: Config) -> SocketAddr {
    let listener = server::bind("127.0.0.1:0".parse().expect("loopback addr"))
        .expect("bind app listener");
    let addr = listener.local_addr().expect("app local addr");
    let state = Arc::new(AppState::new(cfg).expect("app state"));
    tokio::spawn(server::serve(listener, state));
    addr
}

/// Spawn the real server on an ephemeral port with test configuration
pub async fn spawn_app(upstream_addr: SocketAddr, with_email_credentials: bool) -> SocketAddr {
    spawn_app_with(test_config(upstream_addr, with_email_credentials)).await
}
