use super::mcp::{self, JsonRpcRequest, JsonRpcResponse};
use serde_json::Value;
use std::time::Duration;

// ---------------------------------------------------------------------------
// stdio → HTTP bridge
// ---------------------------------------------------------------------------

/// Speaks MCP on stdin/stdout and forwards tool traffic to a running HTTP
/// instance, so several MCP clients can share one session table.
pub fn run(endpoint: &str) -> anyhow::Result<()> {
    let endpoint = endpoint.trim_end_matches('/').to_string();
    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(30))
        .build();

    tracing::info!("proxying MCP stdio to {endpoint}");
    mcp::serve_lines(|req| handle_request(&agent, &endpoint, req))
}

// ---------------------------------------------------------------------------
// Request dispatch, pub so unit tests can drive it without a server
// ---------------------------------------------------------------------------

pub fn handle_request(
    agent: &ureq::Agent,
    endpoint: &str,
    req: &JsonRpcRequest,
) -> JsonRpcResponse {
    let id = req.id.clone();
    match req.method.as_str() {
        // Answered locally; the HTTP side has no initialize notion.
        "initialize" => JsonRpcResponse::result(
            id,
            serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": "devguide",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),

        "tools/list" => match fetch_list(agent, endpoint) {
            Ok(body) => JsonRpcResponse::result(id, body),
            Err(msg) => JsonRpcResponse::error(id, -32603, msg),
        },

        "tools/call" => {
            let Some(params) = &req.params else {
                return JsonRpcResponse::error(id, -32602, "missing params");
            };
            if params["name"].as_str().is_none() {
                return JsonRpcResponse::error(id, -32602, "missing tool name in params");
            }

            let posted = agent
                .post(&format!("{endpoint}/tools/call"))
                .send_json(params);
            let (text, is_error) = match posted {
                Ok(resp) => match resp.into_json::<Value>() {
                    Ok(body) => match serde_json::to_string_pretty(&body) {
                        Ok(text) => (text, false),
                        Err(e) => (format!("serialization error: {e}"), true),
                    },
                    Err(e) => (format!("invalid response body: {e}"), true),
                },
                // Operation errors arrive as HTTP statuses; carry them
                // in-band per the MCP convention.
                Err(ureq::Error::Status(_, resp)) => (error_body_text(resp), true),
                Err(e) => (describe_http_error(e), true),
            };

            JsonRpcResponse::result(
                id,
                serde_json::json!({
                    "content": [{ "type": "text", "text": text }],
                    "isError": is_error
                }),
            )
        }

        other => JsonRpcResponse::error(id, -32601, format!("method not found: {other}")),
    }
}

fn fetch_list(agent: &ureq::Agent, endpoint: &str) -> Result<Value, String> {
    let resp = agent
        .post(&format!("{endpoint}/tools/list"))
        .send_json(serde_json::json!({}))
        .map_err(describe_http_error)?;
    resp.into_json::<Value>()
        .map_err(|e| format!("invalid response body: {e}"))
}

/// Pulls the `error` field out of a non-2xx JSON body, keeping the raw body
/// as a fallback.
fn error_body_text(resp: ureq::Response) -> String {
    let status = resp.status();
    match resp.into_json::<Value>() {
        Ok(body) => body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => format!("request failed with status {status}"),
    }
}

fn describe_http_error(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(code, resp) => {
            format!("upstream returned {code}: {}", error_body_text(resp))
        }
        other => format!("cannot reach upstream: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Tests (local paths only; forwarding is covered by the HTTP router tests)
// ---------------------------------------------------------------------------
