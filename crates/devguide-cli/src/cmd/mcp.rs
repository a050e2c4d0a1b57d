use devguide_core::GuideService;
use devguide_server::tools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, Write};

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    pub(crate) fn result(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub(crate) fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// stdio frame loop
// ---------------------------------------------------------------------------

fn write_frame(stdout: &std::io::Stdout, resp: &JsonRpcResponse) -> anyhow::Result<()> {
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, resp)?;
    writeln!(out)?;
    Ok(())
}

/// Reads line-delimited JSON-RPC frames from stdin and answers each request
/// through `dispatch`. Shared by the local MCP server and the HTTP proxy.
pub(crate) fn serve_lines(
    mut dispatch: impl FnMut(&JsonRpcRequest) -> JsonRpcResponse,
) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let resp = JsonRpcResponse::error(None, -32700, format!("parse error: {e}"));
                write_frame(&stdout, &resp)?;
                continue;
            }
        };

        // Notifications carry no "id" key and get no reply.
        if raw.get("id").is_none() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                let resp = JsonRpcResponse::error(None, -32600, format!("invalid request: {e}"));
                write_frame(&stdout, &resp)?;
                continue;
            }
        };

        write_frame(&stdout, &dispatch(&request))?;
    }

    Ok(())
}

pub fn run(service: &GuideService) -> anyhow::Result<()> {
    let tools = tools::all_tools();
    tracing::info!("MCP stdio server ready ({} tools)", tools.len());
    serve_lines(|req| handle_request(req, &tools, service))
}

// ---------------------------------------------------------------------------
// Request dispatch, pub so unit tests can drive it without a process
// ---------------------------------------------------------------------------

pub fn handle_request(
    req: &JsonRpcRequest,
    tools: &[Box<dyn tools::GuideTool>],
    service: &GuideService,
) -> JsonRpcResponse {
    let id = req.id.clone();
    match req.method.as_str() {
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

        "tools/list" => JsonRpcResponse::result(
            id,
            serde_json::json!({ "tools": tools::descriptors(tools) }),
        ),

        "tools/call" => {
            let Some(params) = &req.params else {
                return JsonRpcResponse::error(id, -32602, "missing params");
            };
            let Some(tool_name) = params["name"].as_str() else {
                return JsonRpcResponse::error(id, -32602, "missing tool name in params");
            };
            let Some(tool) = tools.iter().find(|t| t.name() == tool_name) else {
                return JsonRpcResponse::error(id, -32601, format!("tool not found: {tool_name}"));
            };

            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            // Tool-level failures ride in-band as isError content, not as
            // JSON-RPC errors.
            let (text, is_error) = match tool.call(&args, service) {
                Ok(v) => match serde_json::to_string_pretty(&v) {
                    Ok(text) => (text, false),
                    Err(e) => (format!("serialization error: {e}"), true),
                },
                Err(e) => (e.to_string(), true),
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
