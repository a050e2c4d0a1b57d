use super::{require_str, GuideTool, ToolError};
use devguide_core::GuideService;
use serde_json::Value;

pub struct GenerateCommandTool;

impl GuideTool for GenerateCommandTool {
    fn name(&self) -> &str {
        "generate_command"
    }

    fn description(&self) -> &str {
        "Generate a CLI command for the selected tool"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "session_id": {
                    "type": "string",
                    "description": "Session ID"
                },
                "selected_tool": {
                    "type": "string",
                    "description": "The selected tool name"
                }
            },
            "required": ["session_id", "selected_tool"]
        })
    }

    fn call(&self, args: &Value, service: &GuideService) -> Result<Value, ToolError> {
        let session_id = require_str(args, "session_id")?;
        let selected_tool = require_str(args, "selected_tool")?;
        let response = service.generate_command(session_id, selected_tool)?;
        Ok(serde_json::to_value(response)?)
    }
}
