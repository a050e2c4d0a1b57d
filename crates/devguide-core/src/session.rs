use crate::types::{SelectionKey, Stage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NOT_SELECTED: &str = "Not selected";

// ---------------------------------------------------------------------------
// GeneratedCommand
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCommand {
    pub command: String,
    pub justification: String,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The unit of state for one user interaction, from initiating question to
/// confirmed command. Mutated in place through `SessionStore`; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// Original free-text question; set once at creation, never modified.
    pub question: String,
    pub stage: Stage,
    pub selections: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<GeneratedCommand>,
    pub created_at: DateTime<Utc>,
    /// Raw question strings supplied across the session's life. Only the
    /// initial question today; the slot exists for multi-turn input.
    pub history: Vec<String>,
}

impl Session {
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        let question = question.into();
        Self {
            id: id.into(),
            question: question.clone(),
            stage: Stage::Created,
            selections: BTreeMap::new(),
            generated: None,
            created_at: Utc::now(),
            history: vec![question],
        }
    }

    /// Cursor reported on the wire. Derived from the stage so the two can
    /// never drift apart.
    pub fn cursor(&self) -> usize {
        self.stage.index()
    }

    /// Records a stage's choice and moves the stage to that stage's ordinal.
    /// Assignment is unconditional: re-running an earlier stage after a later
    /// one moves the session backward and overwrites the prior choice.
    pub fn select(&mut self, key: SelectionKey, value: impl Into<String>, stage: Stage) {
        self.selections.insert(key.as_str().to_string(), value.into());
        self.stage = stage;
    }

    pub fn selection(&self, key: SelectionKey) -> Option<&str> {
        self.selections.get(key.as_str()).map(String::as_str)
    }

    pub fn set_generated(&mut self, command: impl Into<String>, justification: impl Into<String>) {
        self.generated = Some(GeneratedCommand {
            command: command.into(),
            justification: justification.into(),
        });
        self.stage = Stage::CommandGenerated;
    }

    /// Moves the stage marker backward for a rewind. Selections and the
    /// generated command are kept; the redone stage overwrites them.
    pub fn rewind_to(&mut self, stage: Stage) {
        self.stage = stage;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let pick = |key: SelectionKey| {
            self.selection(key)
                .unwrap_or(NOT_SELECTED)
                .to_string()
        };
        SessionSnapshot {
            session_id: self.id.clone(),
            question: self.question.clone(),
            stage: self.stage,
            cursor: self.cursor(),
            selected_workflow: pick(SelectionKey::Workflow),
            selected_toolchain: pick(SelectionKey::Toolchain),
            selected_tool: pick(SelectionKey::Tool),
            generated_command: self.generated.clone(),
            created_at: self.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionSnapshot
// ---------------------------------------------------------------------------

/// Read-only status projection of a session, as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub question: String,
    pub stage: Stage,
    pub cursor: usize,
    pub selected_workflow: String,
    pub selected_toolchain: String,
    pub selected_tool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_command: Option<GeneratedCommand>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
