use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::tools;

// ---------------------------------------------------------------------------
// POST /tools/list
// ---------------------------------------------------------------------------

/// Returns all tool descriptors in the MCP wire shape, so HTTP
/// clients and the stdio proxy see the same catalog.
pub async fn list_tools() -> Json<serde_json::Value> {
    let tools = tools::all_tools();
    Json(serde_json::json!({ "tools": tools::descriptors(&tools) }))
}

// ---------------------------------------------------------------------------
// POST /tools/call
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CallRequest {
    name: Option<String>,
    #[serde(default)]
    arguments: serde_json::Value,
}

/// Runs the named tool against the shared session table and returns its
/// JSON payload.
///
/// Returns 400 when the tool name or a required argument is missing.
/// Returns 404 for an unknown tool or an unknown session.
/// Returns 422 when confirmation arrives before a command was generated.
pub async fn call_tool(
    State(app): State<AppState>,
    Json(req): Json<CallRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Some(name) = req.name else {
        return Err(AppError::bad_request("tool name is required"));
    };

    let tools = tools::all_tools();
    let Some(tool) = tools.iter().find(|t| t.name() == name) else {
        return Err(AppError::not_found(format!("tool not found: {name}")));
    };

    let result = tool.call(&req.arguments, &app.service)?;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use devguide_core::GuideService;

    fn app_state() -> AppState {
        AppState::new(GuideService::builtin())
    }

    fn call_req(body: serde_json::Value) -> CallRequest {
        serde_json::from_value(body).unwrap()
    }

    fn status_of(result: Result<Json<serde_json::Value>, AppError>) -> StatusCode {
        result.unwrap_err().into_response().status()
    }

    #[tokio::test]
    async fn list_tools_returns_all_seven() {
        let body = list_tools().await.0;
        let tools = body["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 7);
        assert_eq!(tools[0]["name"], "initiate_session");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn call_tool_runs_initiate_session() {
        let app = app_state();
        let result = call_tool(
            State(app),
            Json(call_req(serde_json::json!({
                "name": "initiate_session",
                "arguments": {"question": "run the unit tests"}
            }))),
        )
        .await
        .unwrap();

        assert_eq!(result.0["session_id"], "session_1");
        assert_eq!(result.0["question"], "run the unit tests");
    }

    #[tokio::test]
    async fn sessions_persist_across_calls() {
        let app = app_state();

        let init = call_tool(
            State(app.clone()),
            Json(call_req(serde_json::json!({
                "name": "initiate_session",
                "arguments": {"question": "Create a sandbox from snapshot my_snapshot"}
            }))),
        )
        .await
        .unwrap();
        let sid = init.0["session_id"].as_str().unwrap().to_string();

        let wf = call_tool(
            State(app.clone()),
            Json(call_req(serde_json::json!({
                "name": "get_workflow",
                "arguments": {"session_id": sid}
            }))),
        )
        .await
        .unwrap();
        assert_eq!(wf.0["selected_workflow"], "Development Environment Setup");

        let status = call_tool(
            State(app),
            Json(call_req(serde_json::json!({
                "name": "get_session_status",
                "arguments": {"session_id": sid}
            }))),
        )
        .await
        .unwrap();
        assert_eq!(status.0["cursor"], 1);
    }

    #[tokio::test]
    async fn missing_name_returns_400() {
        let app = app_state();
        let result = call_tool(
            State(app),
            Json(call_req(serde_json::json!({"arguments": {}}))),
        )
        .await;
        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_tool_returns_404() {
        let app = app_state();
        let result = call_tool(
            State(app),
            Json(call_req(serde_json::json!({"name": "bogus_tool"}))),
        )
        .await;
        assert_eq!(status_of(result), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_session_returns_404() {
        let app = app_state();
        let result = call_tool(
            State(app),
            Json(call_req(serde_json::json!({
                "name": "get_workflow",
                "arguments": {"session_id": "session_404"}
            }))),
        )
        .await;
        assert_eq!(status_of(result), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_argument_returns_400() {
        let app = app_state();
        let result = call_tool(
            State(app),
            Json(call_req(serde_json::json!({
                "name": "initiate_session",
                "arguments": {}
            }))),
        )
        .await;
        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn early_confirmation_returns_422() {
        let app = app_state();
        let sid = app.service.initiate_session("build it").session_id;

        let result = call_tool(
            State(app),
            Json(call_req(serde_json::json!({
                "name": "confirm_command",
                "arguments": {"session_id": sid, "user_response": "yes"}
            }))),
        )
        .await;
        assert_eq!(status_of(result), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
