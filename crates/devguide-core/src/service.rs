use crate::catalog::Catalog;
use crate::error::{GuideError, Result};
use crate::resolver;
use crate::router;
use crate::session::SessionSnapshot;
use crate::store::SessionStore;
use crate::synthesizer;
use crate::types::{ConfirmStatus, SelectionKey, Stage};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiateResponse {
    pub session_id: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowResponse {
    pub selected_workflow: String,
    pub description: String,
    pub common_tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainResponse {
    pub selected_toolchain: String,
    pub description: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    pub selected_tool: String,
    pub description: String,
    pub usage: String,
    pub doc_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub command: String,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResponse {
    pub status: ConfirmStatus,
    pub text: String,
}

// ---------------------------------------------------------------------------
// GuideService
// ---------------------------------------------------------------------------

/// The guidance pipeline behind every transport: owns the catalog and the
/// session table and exposes one method per operation. Cheap to clone and
/// safe to share across threads.
#[derive(Clone)]
pub struct GuideService {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    catalog: Catalog,
    store: SessionStore,
}

impl GuideService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(ServiceInner {
                catalog,
                store: SessionStore::new(),
            }),
        }
    }

    /// Service over the built-in mock catalog.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Opens a session for a question and echoes it back. Never fails.
    pub fn initiate_session(&self, question: impl Into<String>) -> InitiateResponse {
        let session = self.inner.store.create(question);
        InitiateResponse {
            session_id: session.id,
            question: session.question,
        }
    }

    /// Classifies the session's question into a workflow and records the
    /// choice. The stage moves to `WorkflowSelected` unconditionally, also
    /// when the session was already further along.
    pub fn get_workflow(&self, session_id: &str) -> Result<WorkflowResponse> {
        let inner = &self.inner;
        inner.store.with_session(session_id, |s| {
            let selected = resolver::resolve_workflow(&inner.catalog, &s.question);
            s.select(SelectionKey::Workflow, selected.clone(), Stage::WorkflowSelected);
            let (description, common_tasks) = match inner.catalog.workflow(&selected) {
                Some(w) => (w.description.clone(), w.common_tasks.clone()),
                None => (String::new(), Vec::new()),
            };
            Ok(WorkflowResponse {
                selected_workflow: selected,
                description,
                common_tasks,
            })
        })
    }

    /// Picks a toolchain out of the caller-supplied workflow's candidates.
    /// The workflow argument, not the stored selection, scopes the universe;
    /// callers pass back what `get_workflow` returned.
    pub fn get_toolchain(
        &self,
        session_id: &str,
        selected_workflow: &str,
    ) -> Result<ToolchainResponse> {
        let inner = &self.inner;
        inner.store.with_session(session_id, |s| {
            let selected =
                resolver::resolve_toolchain(&inner.catalog, &s.question, selected_workflow);
            s.select(SelectionKey::Toolchain, selected.clone(), Stage::ToolchainSelected);
            let (description, tools) = match inner.catalog.toolchain(&selected) {
                Some(t) => (t.description.clone(), t.tools.clone()),
                None => (String::new(), Vec::new()),
            };
            Ok(ToolchainResponse {
                selected_toolchain: selected,
                description,
                tools,
            })
        })
    }

    /// Picks a tool out of the caller-supplied toolchain's candidates.
    pub fn get_tool(&self, session_id: &str, selected_toolchain: &str) -> Result<ToolResponse> {
        let inner = &self.inner;
        inner.store.with_session(session_id, |s| {
            let selected = resolver::resolve_tool(&inner.catalog, &s.question, selected_toolchain);
            s.select(SelectionKey::Tool, selected.clone(), Stage::ToolSelected);
            let (description, usage, doc_url) = match inner.catalog.tool(&selected) {
                Some(t) => (t.description.clone(), t.usage.clone(), t.doc_url.clone()),
                None => (String::new(), String::new(), String::new()),
            };
            Ok(ToolResponse {
                selected_tool: selected,
                description,
                usage,
                doc_url,
            })
        })
    }

    /// Renders the command line for the caller-supplied tool and stores it
    /// on the session, overwriting any earlier generation.
    pub fn generate_command(&self, session_id: &str, selected_tool: &str) -> Result<CommandResponse> {
        let inner = &self.inner;
        inner.store.with_session(session_id, |s| {
            let synthesis = synthesizer::synthesize(&inner.catalog, &s.question, selected_tool);
            s.set_generated(synthesis.command.clone(), synthesis.justification.clone());
            Ok(CommandResponse {
                command: synthesis.command,
                justification: synthesis.justification,
            })
        })
    }

    /// Routes a confirmation reply: approval terminates, rejection rewinds
    /// the stage for the named selection, anything else asks again.
    pub fn confirm_command(&self, session_id: &str, user_response: &str) -> Result<ConfirmResponse> {
        self.inner.store.with_session(session_id, |s| {
            let Some(generated) = s.generated.clone() else {
                return Err(GuideError::NoCommandGenerated(s.id.clone()));
            };
            let routing = router::route(user_response, &generated.command);
            if let Some(target) = routing.rewind_to {
                s.rewind_to(target);
            }
            Ok(ConfirmResponse {
                status: routing.status,
                text: routing.text,
            })
        })
    }

    /// Read-only status projection; mutates nothing.
    pub fn session_status(&self, session_id: &str) -> Result<SessionSnapshot> {
        self.inner.store.snapshot(session_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
