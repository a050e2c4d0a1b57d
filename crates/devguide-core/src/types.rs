use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Created,
    WorkflowSelected,
    ToolchainSelected,
    ToolSelected,
    CommandGenerated,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Created,
            Stage::WorkflowSelected,
            Stage::ToolchainSelected,
            Stage::ToolSelected,
            Stage::CommandGenerated,
        ]
    }

    /// Ordinal position in the pipeline; reported externally as the cursor.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Stage> {
        Stage::all().get(i).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Created => "created",
            Stage::WorkflowSelected => "workflow_selected",
            Stage::ToolchainSelected => "toolchain_selected",
            Stage::ToolSelected => "tool_selected",
            Stage::CommandGenerated => "command_generated",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = crate::error::GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Stage::Created),
            "workflow_selected" => Ok(Stage::WorkflowSelected),
            "toolchain_selected" => Ok(Stage::ToolchainSelected),
            "tool_selected" => Ok(Stage::ToolSelected),
            "command_generated" => Ok(Stage::CommandGenerated),
            _ => Err(crate::error::GuideError::InvalidStage(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SelectionKey
// ---------------------------------------------------------------------------

/// Key under which a stage's choice is stored in the session's selections map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKey {
    Workflow,
    Toolchain,
    Tool,
}

impl SelectionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionKey::Workflow => "workflow",
            SelectionKey::Toolchain => "toolchain",
            SelectionKey::Tool => "tool",
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConfirmStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmStatus {
    Approved,
    RewindRequested,
    Unclear,
}

impl ConfirmStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfirmStatus::Approved => "approved",
            ConfirmStatus::RewindRequested => "rewind_requested",
            ConfirmStatus::Unclear => "unclear",
        }
    }
}

impl fmt::Display for ConfirmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
