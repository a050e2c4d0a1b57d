use devguide_core::error::GuideError;
use devguide_core::GuideService;
use serde_json::Value;
use thiserror::Error;

pub mod confirm_command;
pub mod generate_command;
pub mod get_session_status;
pub mod get_tool;
pub mod get_toolchain;
pub mod get_workflow;
pub mod initiate_session;

/// Failure of a single tool invocation. Both transports consume this: the
/// MCP stdio loop flattens it into `isError` content, the HTTP routes map
/// it to a status code.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Guide(#[from] GuideError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub trait GuideTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn schema(&self) -> Value;
    fn call(&self, args: &Value, service: &GuideService) -> Result<Value, ToolError>;
}

/// All tools in pipeline order.
pub fn all_tools() -> Vec<Box<dyn GuideTool>> {
    vec![
        Box::new(initiate_session::InitiateSessionTool),
        Box::new(get_workflow::GetWorkflowTool),
        Box::new(get_toolchain::GetToolchainTool),
        Box::new(get_tool::GetToolTool),
        Box::new(generate_command::GenerateCommandTool),
        Box::new(confirm_command::ConfirmCommandTool),
        Box::new(get_session_status::GetSessionStatusTool),
    ]
}

/// Tool metadata in the `tools/list` wire shape.
pub fn descriptors(tools: &[Box<dyn GuideTool>]) -> Vec<Value> {
    tools
        .iter()
        .map(|t| {
            serde_json::json!({
                "name": t.name(),
                "description": t.description(),
                "inputSchema": t.schema()
            })
        })
        .collect()
}

/// Required string argument from a tool-call payload. Absent and non-string
/// values are the same failure.
fn require_str<'a>(args: &'a Value, key: &'static str) -> Result<&'a str, ToolError> {
    args[key].as_str().ok_or(ToolError::MissingArgument(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_tools_in_pipeline_order() {
        let names: Vec<String> = all_tools().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "initiate_session",
                "get_workflow",
                "get_toolchain",
                "get_tool",
                "generate_command",
                "confirm_command",
                "get_session_status",
            ]
        );
    }

    #[test]
    fn descriptors_carry_schema_fields() {
        let tools = all_tools();
        for d in descriptors(&tools) {
            assert!(d["name"].is_string());
            assert!(d["description"].is_string());
            assert_eq!(d["inputSchema"]["type"], "object");
            assert!(d["inputSchema"]["required"].is_array());
        }
    }

    #[test]
    fn require_str_rejects_absent_and_non_string() {
        let args = serde_json::json!({"session_id": 7});
        let err = require_str(&args, "session_id").unwrap_err();
        assert_eq!(err.to_string(), "missing required argument: session_id");
        assert!(require_str(&serde_json::json!(null), "question").is_err());
    }
}
