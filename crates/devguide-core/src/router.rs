use crate::types::{ConfirmStatus, Stage};

// ---------------------------------------------------------------------------
// Keyword sets
// ---------------------------------------------------------------------------

pub const APPROVAL_WORDS: &[&str] = &["yes", "ok", "correct", "good", "approve", "confirm"];
pub const REJECTION_WORDS: &[&str] = &["no", "wrong", "incorrect", "change"];

struct RewindRule {
    keywords: &'static [&'static str],
    target: Stage,
    label: &'static str,
}

// Checked in order; "toolchain" must come before "tool" since the former
// contains the latter.
const REWIND_RULES: &[RewindRule] = &[
    RewindRule {
        keywords: &["workflow", "different task"],
        target: Stage::Created,
        label: "workflow",
    },
    RewindRule {
        keywords: &["toolchain", "different tool"],
        target: Stage::WorkflowSelected,
        label: "toolchain",
    },
    RewindRule {
        keywords: &["tool", "specific tool"],
        target: Stage::ToolchainSelected,
        label: "tool",
    },
];

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Routing {
    pub status: ConfirmStatus,
    pub text: String,
    /// Stage to move the session back to; set only for a rejection.
    pub rewind_to: Option<Stage>,
}

/// Classifies a confirmation response. Approval is checked before rejection,
/// so a reply containing words from both sets approves; all matching is
/// substring membership on the lower-cased reply, exactly like the stage
/// classifier.
pub fn route(user_response: &str, command: &str) -> Routing {
    let reply = user_response.to_lowercase();

    if APPROVAL_WORDS.iter().any(|w| reply.contains(w)) {
        return Routing {
            status: ConfirmStatus::Approved,
            text: format!(
                "Command approved!\n\
                 Final command: {command}\n\
                 You can now copy and execute this command in your terminal.\n\
                 Session completed successfully."
            ),
            rewind_to: None,
        };
    }

    if REJECTION_WORDS.iter().any(|w| reply.contains(w)) {
        let (target, label) = REWIND_RULES
            .iter()
            .find(|r| r.keywords.iter().any(|k| reply.contains(k)))
            .map(|r| (r.target, r.label))
            .unwrap_or((Stage::ToolSelected, "command"));
        return Routing {
            status: ConfirmStatus::RewindRequested,
            text: format!(
                "I understand you'd like to make changes. Let me adjust the {label} selection.\n\
                 Please provide more specific feedback about what you'd like to change."
            ),
            rewind_to: Some(target),
        };
    }

    Routing {
        status: ConfirmStatus::Unclear,
        text: "I'm not sure about your response. Please clearly indicate:\n\
               - 'yes' or 'approve' to confirm the command\n\
               - 'no' or 'change' to modify the command\n\
               - Provide specific feedback about what needs to be changed"
            .to_string(),
        rewind_to: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
