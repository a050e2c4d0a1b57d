use super::{require_str, GuideTool, ToolError};
use devguide_core::GuideService;
use serde_json::Value;

pub struct GetToolTool;

impl GuideTool for GetToolTool {
    fn name(&self) -> &str {
        "get_tool"
    }

    fn description(&self) -> &str {
        "Get tool options for the selected toolchain"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "session_id": {
                    "type": "string",
                    "description": "Session ID"
                },
                "selected_toolchain": {
                    "type": "string",
                    "description": "The selected toolchain name"
                }
            },
            "required": ["session_id", "selected_toolchain"]
        })
    }

    fn call(&self, args: &Value, service: &GuideService) -> Result<Value, ToolError> {
        let session_id = require_str(args, "session_id")?;
        let selected_toolchain = require_str(args, "selected_toolchain")?;
        let response = service.get_tool(session_id, selected_toolchain)?;
        Ok(serde_json::to_value(response)?)
    }
}
