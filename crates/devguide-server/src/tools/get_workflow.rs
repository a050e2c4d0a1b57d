use super::{require_str, GuideTool, ToolError};
use devguide_core::GuideService;
use serde_json::Value;

pub struct GetWorkflowTool;

impl GuideTool for GetWorkflowTool {
    fn name(&self) -> &str {
        "get_workflow"
    }

    fn description(&self) -> &str {
        "Get workflow options based on the user's question"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "session_id": {
                    "type": "string",
                    "description": "Session ID from initiate_session"
                }
            },
            "required": ["session_id"]
        })
    }

    fn call(&self, args: &Value, service: &GuideService) -> Result<Value, ToolError> {
        let session_id = require_str(args, "session_id")?;
        let response = service.get_workflow(session_id)?;
        Ok(serde_json::to_value(response)?)
    }
}
