use super::{require_str, GuideTool, ToolError};
use devguide_core::GuideService;
use serde_json::Value;

pub struct InitiateSessionTool;

impl GuideTool for InitiateSessionTool {
    fn name(&self) -> &str {
        "initiate_session"
    }

    fn description(&self) -> &str {
        "Start a new guided session with a user question"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "The user's development question or request"
                }
            },
            "required": ["question"]
        })
    }

    fn call(&self, args: &Value, service: &GuideService) -> Result<Value, ToolError> {
        let question = require_str(args, "question")?;
        let response = service.initiate_session(question);
        Ok(serde_json::to_value(response)?)
    }
}
