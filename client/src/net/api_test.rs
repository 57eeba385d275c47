use super::*;
use crate::net::errors::GENERIC_FAILURE;
use crate::test_support::Harness;

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Ping {
    ok: bool,
}

// =============================================================
// Request interceptor
// =============================================================

#[tokio::test]
async fn attaches_bearer_when_token_present() {
    let h = Harness::signed_in("tok-1");
    h.transport.push_json(200, serde_json::json!({ "ok": true }));

    let ping: Ping = h.api.get("/ping").await.unwrap();
    assert_eq!(ping, Ping { ok: true });

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/ping");
    assert_eq!(requests[0].bearer.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn omits_bearer_when_signed_out() {
    let h = Harness::signed_out();
    h.transport.push_json(200, serde_json::json!({ "ok": true }));
    let _: Ping = h.api.get("/ping").await.unwrap();
    assert_eq!(h.transport.requests()[0].bearer, None);
}

#[tokio::test]
async fn reads_token_per_request() {
    let h = Harness::signed_in("old");
    h.transport.push_json(200, serde_json::json!({ "ok": true }));
    h.transport.push_json(200, serde_json::json!({ "ok": true }));
    h.transport.push_json(200, serde_json::json!({ "ok": true }));

    let _: Ping = h.api.get("/a").await.unwrap();
    h.session.store_token("new").unwrap();
    let _: Ping = h.api.get("/b").await.unwrap();
    h.session.clear().unwrap();
    let _: Ping = h.api.get("/c").await.unwrap();

    let bearers: Vec<Option<String>> = h.transport.requests().into_iter().map(|r| r.bearer).collect();
    assert_eq!(bearers, vec![Some("old".to_owned()), Some("new".to_owned()), None]);
}

#[tokio::test]
async fn anonymous_calls_never_carry_bearer() {
    let h = Harness::signed_in("tok");
    h.transport.push_json(200, serde_json::json!({ "ok": true }));
    let _: Ping = h.api.post_anonymous("/login", Body::Empty).await.unwrap();
    assert_eq!(h.transport.requests()[0].bearer, None);
}

#[tokio::test]
async fn post_json_sends_serialized_body() {
    let h = Harness::signed_in("tok");
    h.transport.push_json(201, serde_json::json!({ "ok": true }));
    let _: Ping = h
        .api
        .post_json("/groups/create", &serde_json::json!({ "name": "Flat" }))
        .await
        .unwrap();
    let request = &h.transport.requests()[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.body, Body::Json(serde_json::json!({ "name": "Flat" })));
}

// =============================================================
// Response interceptor
// =============================================================

#[tokio::test]
async fn unauthorized_clears_session_and_redirects() {
    let h = Harness::signed_in("expired");
    h.transport.push_json(401, serde_json::json!({ "detail": "Could not validate credentials" }));

    let err = h.api.get::<Ping>("/groups/all").await.unwrap_err();
    assert!(matches!(&err, ApiError::Unauthorized { message } if message == "Could not validate credentials"));
    assert_eq!(err.status(), Some(401));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.history.current(), Route::LOGIN_ENTRY);
}

#[tokio::test]
async fn unauthorized_redirects_even_without_token() {
    let h = Harness::signed_out();
    h.transport.push_raw(401, "");
    let _ = h.api.get::<Ping>("/groups/all").await.unwrap_err();
    assert_eq!(h.history.current(), Route::Login);
}

#[tokio::test]
async fn anonymous_unauthorized_leaves_session_alone() {
    let h = Harness::signed_in("keep-me");
    h.transport.push_json(401, serde_json::json!({ "detail": "Incorrect username or password" }));

    let err = h.api.post_anonymous::<Ping>("/login", Body::Empty).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(h.session.token().as_deref(), Some("keep-me"));
    assert_eq!(h.history.entries(), vec![Route::Landing]);
}

#[tokio::test]
async fn other_statuses_do_not_touch_session() {
    for status in [400_u16, 403, 404, 500] {
        let h = Harness::signed_in("tok");
        h.transport.push_json(status, serde_json::json!({ "detail": "nope" }));
        let err = h.api.get::<Ping>("/x").await.unwrap_err();
        assert!(matches!(&err, ApiError::Status { status: s, message } if *s == status && message == "nope"));
        assert!(h.session.is_authenticated(), "status {status} must not sign out");
        assert_eq!(h.history.entries(), vec![Route::Landing]);
    }
}

// =============================================================
// Classification
// =============================================================

#[tokio::test]
async fn network_failure_is_distinct_from_status() {
    let h = Harness::signed_in("tok");
    h.transport.push_network_error();
    let err = h.api.get::<Ping>("/x").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
    assert!(h.session.is_authenticated());
}

#[tokio::test]
async fn unreadable_body_keeps_received_status() {
    let h = Harness::signed_in("tok");
    h.transport.push_error(TransportError::Body { status: 200, message: "connection reset".into() });
    let err = h.api.get::<Ping>("/x").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(ref m) if m == "connection reset"));

    h.transport.push_error(TransportError::Body { status: 500, message: "connection reset".into() });
    let err = h.api.get::<Ping>("/x").await.unwrap_err();
    assert!(matches!(&err, ApiError::Status { status: 500, message } if message == GENERIC_FAILURE));
    assert!(h.session.is_authenticated());
}

#[tokio::test]
async fn unreadable_unauthorized_body_still_signs_out() {
    let h = Harness::signed_in("tok");
    h.transport.push_error(TransportError::Body { status: 401, message: "truncated".into() });
    let err = h.api.get::<Ping>("/groups/all").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.history.current(), Route::LOGIN_ENTRY);
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let h = Harness::signed_in("tok");
    h.transport.push_raw(200, "<html>");
    let err = h.api.get::<Ping>("/x").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn empty_success_body_decodes_as_unit() {
    let h = Harness::signed_in("tok");
    h.transport.push_raw(204, "");
    h.api.get::<()>("/x").await.unwrap();
}

#[test]
fn api_error_message_strips_prefix() {
    let err = ApiError::Status { status: 500, message: "boom".into() };
    assert_eq!(err.message(), "boom");
    assert_eq!(err.to_string(), "server returned 500: boom");
}
