use std::net::SocketAddr;
use std::sync::Arc;

use lumen_waitlist_api::{build_router, AppState, WaitlistStore};
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

async fn spawn_app(store: Arc<WaitlistStore>) -> SocketAddr {
    let app = build_router(AppState { store });
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(payload) = body {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", payload.len()));
    }
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    req.push_str("\r\n");
    if let Some(payload) = body {
        req.push_str(payload);
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, body.to_string())
}

async fn post_waitlist(addr: SocketAddr, headers: &[(&str, &str)], body: &str) -> (u16, String) {
    send_raw(addr, "POST", "/api/waitlist", headers, Some(body)).await
}

#[tokio::test]
async fn signup_records_email_and_provenance() {
    let dir = tempdir().expect("tempdir");
    let store = Arc::new(WaitlistStore::open(&dir.path().join("waitlist.sqlite")).expect("open"));
    let addr = spawn_app(store.clone()).await;

    let (status, body) = post_waitlist(
        addr,
        &[
            ("x-forwarded-for", "203.0.113.9, 10.0.0.1"),
            ("user-agent", "contract-test/1.0"),
        ],
        r#"{"email": "  Ada@Example.COM ", "source": "hero-cta"}"#,
    )
    .await;

    assert_eq!(status, 201);
    assert!(body.contains("You're on the waitlist"));

    let row = store
        .find_by_email("ada@example.com")
        .await
        .expect("query")
        .expect("stored row");
    assert_eq!(row.source.as_deref(), Some("hero-cta"));
    assert_eq!(row.ip_address.as_deref(), Some("203.0.113.9"));
    assert_eq!(row.user_agent.as_deref(), Some("contract-test/1.0"));
}

#[tokio::test]
async fn duplicate_signup_reads_as_success_without_second_row() {
    let store = Arc::new(WaitlistStore::open_in_memory().expect("open"));
    let addr = spawn_app(store.clone()).await;
    let body = r#"{"email": "repeat@example.com"}"#;

    let (first, _) = post_waitlist(addr, &[], body).await;
    assert_eq!(first, 201);

    let (second, message) = post_waitlist(addr, &[], body).await;
    assert_eq!(second, 200);
    assert!(message.contains("already on the waitlist"));

    assert_eq!(store.signup_count().await.expect("count"), 1);
}

#[tokio::test]
async fn missing_email_is_rejected() {
    let addr = spawn_app(Arc::new(WaitlistStore::open_in_memory().expect("open"))).await;

    let (status, body) = post_waitlist(addr, &[], "{}").await;
    assert_eq!(status, 400);
    assert!(body.contains("Email is required."));

    let (status, body) = post_waitlist(addr, &[], r#"{"email": "   "}"#).await;
    assert_eq!(status, 400);
    assert!(body.contains("Email is required."));
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let addr = spawn_app(Arc::new(WaitlistStore::open_in_memory().expect("open"))).await;

    let (status, body) = post_waitlist(addr, &[], r#"{"email": "not-an-email"}"#).await;
    assert_eq!(status, 400);
    assert!(body.contains("Please provide a valid email address."));
}

#[tokio::test]
async fn malformed_body_gets_the_generic_error() {
    let addr = spawn_app(Arc::new(WaitlistStore::open_in_memory().expect("open"))).await;

    let (status, body) = post_waitlist(addr, &[], "{not json").await;
    assert_eq!(status, 500);
    assert!(body.contains("Something went wrong."));
}

#[tokio::test]
async fn long_source_is_truncated_to_limit() {
    let store = Arc::new(WaitlistStore::open_in_memory().expect("open"));
    let addr = spawn_app(store.clone()).await;

    let long_source = "s".repeat(300);
    let body = format!(r#"{{"email": "trunc@example.com", "source": "{long_source}"}}"#);
    let (status, _) = post_waitlist(addr, &[], &body).await;
    assert_eq!(status, 201);

    let row = store
        .find_by_email("trunc@example.com")
        .await
        .expect("query")
        .expect("stored row");
    assert_eq!(row.source.map(|s| s.len()), Some(120));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let addr = spawn_app(Arc::new(WaitlistStore::open_in_memory().expect("open"))).await;

    let (status, body) = send_raw(addr, "GET", "/healthz", &[], None).await;
    assert_eq!(status, 200);
    assert!(body.contains("ok"));
}
