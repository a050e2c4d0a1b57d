use super::{require_str, GuideTool, ToolError};
use devguide_core::GuideService;
use serde_json::Value;

pub struct GetToolchainTool;

impl GuideTool for GetToolchainTool {
    fn name(&self) -> &str {
        "get_toolchain"
    }

    fn description(&self) -> &str {
        "Get toolchain options for the selected workflow"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "session_id": {
                    "type": "string",
                    "description": "Session ID"
                },
                "selected_workflow": {
                    "type": "string",
                    "description": "The selected workflow name"
                }
            },
            "required": ["session_id", "selected_workflow"]
        })
    }

    fn call(&self, args: &Value, service: &GuideService) -> Result<Value, ToolError> {
        let session_id = require_str(args, "session_id")?;
        let selected_workflow = require_str(args, "selected_workflow")?;
        let response = service.get_toolchain(session_id, selected_workflow)?;
        Ok(serde_json::to_value(response)?)
    }
}
