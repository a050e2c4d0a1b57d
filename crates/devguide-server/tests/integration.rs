use axum::http::StatusCode;
use devguide_core::GuideService;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Drives one request through the router and decodes the JSON reply.
async fn send(
    app: axum::Router,
    req: axum::http::Request<axum::body::Body>,
) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    send(app, req).await
}

async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, req).await
}

/// Call one tool against a router built over `service`.
async fn call(
    service: &GuideService,
    name: &str,
    arguments: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let app = devguide_server::build_router(service.clone());
    post_json(
        app,
        "/tools/call",
        serde_json::json!({ "name": name, "arguments": arguments }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_ok() {
    let app = devguide_server::build_router(GuideService::builtin());
    let (status, json) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "devguide");
}

#[tokio::test]
async fn tools_list_returns_all_descriptors() {
    let app = devguide_server::build_router(GuideService::builtin());
    let (status, json) = post_json(app, "/tools/list", serde_json::json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let tools = json["tools"].as_array().expect("tools is array");
    assert_eq!(tools.len(), 7);
    assert_eq!(tools[0]["name"], "initiate_session");
    assert_eq!(tools[0]["inputSchema"]["required"][0], "question");
}

#[tokio::test]
async fn full_pipeline_over_http() {
    let service = GuideService::builtin();

    let (status, init) = call(
        &service,
        "initiate_session",
        serde_json::json!({"question": "Create a sandbox from snapshot my_snapshot"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let sid = init["session_id"].as_str().unwrap().to_string();

    let (_, wf) = call(
        &service,
        "get_workflow",
        serde_json::json!({"session_id": sid}),
    )
    .await;
    assert_eq!(wf["selected_workflow"], "Development Environment Setup");

    let (_, tc) = call(
        &service,
        "get_toolchain",
        serde_json::json!({"session_id": sid, "selected_workflow": wf["selected_workflow"]}),
    )
    .await;
    let (_, tool) = call(
        &service,
        "get_tool",
        serde_json::json!({"session_id": sid, "selected_toolchain": tc["selected_toolchain"]}),
    )
    .await;
    assert_eq!(tool["selected_tool"], "mw_create_sandbox");

    let (_, cmd) = call(
        &service,
        "generate_command",
        serde_json::json!({"session_id": sid, "selected_tool": tool["selected_tool"]}),
    )
    .await;
    assert_eq!(cmd["command"], "mw_create_sandbox --snapshot my_snapshot");

    let (_, confirm) = call(
        &service,
        "confirm_command",
        serde_json::json!({"session_id": sid, "user_response": "yes"}),
    )
    .await;
    assert_eq!(confirm["status"], "approved");

    let (status, snap) = call(
        &service,
        "get_session_status",
        serde_json::json!({"session_id": sid}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snap["stage"], "command_generated");
    assert_eq!(snap["cursor"], 4);
}

#[tokio::test]
async fn missing_tool_name_returns_400() {
    let app = devguide_server::build_router(GuideService::builtin());
    let (status, json) = post_json(app, "/tools/call", serde_json::json!({"arguments": {}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "tool name is required");
}

#[tokio::test]
async fn unknown_tool_returns_404() {
    let service = GuideService::builtin();
    let (status, json) = call(&service, "bogus_tool", serde_json::json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("bogus_tool"));
}

#[tokio::test]
async fn unknown_session_returns_404() {
    let service = GuideService::builtin();
    let (status, json) = call(
        &service,
        "get_workflow",
        serde_json::json!({"session_id": "session_404"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("session not found"));
}

#[tokio::test]
async fn missing_argument_returns_400() {
    let service = GuideService::builtin();
    let (status, json) = call(&service, "initiate_session", serde_json::json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("missing required argument: question"));
}

#[tokio::test]
async fn early_confirmation_returns_422() {
    let service = GuideService::builtin();
    let sid = service.initiate_session("build it").session_id;

    let (status, json) = call(
        &service,
        "confirm_command",
        serde_json::json!({"session_id": sid, "user_response": "yes"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("no command generated"));
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = devguide_server::build_router(GuideService::builtin());
    let req = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/tools/call")
        .header("origin", "http://example.com")
        .header("access-control-request-method", "POST")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let app = devguide_server::build_router(GuideService::builtin());
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/tools/call")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("this is not json"))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert!(response.status().is_client_error());
}
