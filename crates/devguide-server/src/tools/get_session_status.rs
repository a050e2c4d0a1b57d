use super::{require_str, GuideTool, ToolError};
use devguide_core::GuideService;
use serde_json::Value;

pub struct GetSessionStatusTool;

impl GuideTool for GetSessionStatusTool {
    fn name(&self) -> &str {
        "get_session_status"
    }

    fn description(&self) -> &str {
        "Get the current status and history of a session"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "session_id": {
                    "type": "string",
                    "description": "Session ID"
                }
            },
            "required": ["session_id"]
        })
    }

    fn call(&self, args: &Value, service: &GuideService) -> Result<Value, ToolError> {
        let session_id = require_str(args, "session_id")?;
        let snapshot = service.session_status(session_id)?;
        Ok(serde_json::to_value(snapshot)?)
    }
}
