use super::{require_str, GuideTool, ToolError};
use devguide_core::GuideService;
use serde_json::Value;

pub struct ConfirmCommandTool;

impl GuideTool for ConfirmCommandTool {
    fn name(&self) -> &str {
        "confirm_command"
    }

    fn description(&self) -> &str {
        "Handle user confirmation of the generated command"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "session_id": {
                    "type": "string",
                    "description": "Session ID"
                },
                "user_response": {
                    "type": "string",
                    "description": "User's confirmation response"
                }
            },
            "required": ["session_id", "user_response"]
        })
    }

    fn call(&self, args: &Value, service: &GuideService) -> Result<Value, ToolError> {
        let session_id = require_str(args, "session_id")?;
        let user_response = require_str(args, "user_response")?;
        let response = service.confirm_command(session_id, user_response)?;
        Ok(serde_json::to_value(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_command(service: &GuideService) -> String {
        let sid = service.initiate_session("build the project").session_id;
        service.generate_command(&sid, "mw_build").unwrap();
        sid
    }

    #[test]
    fn approval_reports_the_command() {
        let service = GuideService::builtin();
        let sid = session_with_command(&service);

        let tool = ConfirmCommandTool;
        let result = tool
            .call(
                &serde_json::json!({"session_id": sid, "user_response": "yes"}),
                &service,
            )
            .unwrap();

        assert_eq!(result["status"], "approved");
        assert!(result["text"].as_str().unwrap().contains("mw_build"));
    }

    #[test]
    fn rejection_rewinds_the_session() {
        let service = GuideService::builtin();
        let sid = session_with_command(&service);

        let tool = ConfirmCommandTool;
        let result = tool
            .call(
                &serde_json::json!({
                    "session_id": sid,
                    "user_response": "no, the tool is wrong"
                }),
                &service,
            )
            .unwrap();

        assert_eq!(result["status"], "rewind_requested");
        assert_eq!(service.session_status(&sid).unwrap().cursor, 2);
    }

    #[test]
    fn vague_reply_reports_unclear() {
        let service = GuideService::builtin();
        let sid = session_with_command(&service);

        let tool = ConfirmCommandTool;
        let result = tool
            .call(
                &serde_json::json!({"session_id": sid, "user_response": "perhaps"}),
                &service,
            )
            .unwrap();

        assert_eq!(result["status"], "unclear");
    }

    #[test]
    fn confirmation_before_generation_errors() {
        let service = GuideService::builtin();
        let sid = service.initiate_session("build it").session_id;

        let tool = ConfirmCommandTool;
        let err = tool
            .call(
                &serde_json::json!({"session_id": sid, "user_response": "yes"}),
                &service,
            )
            .unwrap_err();
        assert!(err.to_string().contains("no command generated"));
    }
}
