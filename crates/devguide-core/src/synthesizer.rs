use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synthesis {
    pub command: String,
    pub justification: String,
}

/// Pulls a snapshot name out of the question: the token following a
/// `snapshot` or `named` marker word, with trailing `,`/`.` punctuation
/// removed. First marker wins; a marker as the last word yields nothing.
pub fn extract_snapshot_param(question: &str) -> Option<String> {
    let words: Vec<&str> = question.split_whitespace().collect();
    for (i, word) in words.iter().enumerate() {
        let marker = word.to_lowercase();
        if marker == "snapshot" || marker == "named" {
            if let Some(next) = words.get(i + 1) {
                return Some(next.trim_end_matches(|c| c == ',' || c == '.').to_string());
            }
        }
    }
    None
}

/// Renders the command line and its justification for the selected tool.
///
/// A tool with no template set (or no fitting variant) falls back to a
/// trivially constructed command; synthesis never fails on unknown tools.
pub fn synthesize(catalog: &Catalog, question: &str, tool: &str) -> Synthesis {
    let templates = catalog.command_set(tool);

    if let Some(name) = extract_snapshot_param(question) {
        let command = templates
            .and_then(|t| t.variant("with_snapshot"))
            .map(|t| t.replace("{snapshot_name}", &name))
            .unwrap_or_else(|| format!("{tool} --snapshot {name}"));
        return Synthesis {
            command,
            justification: format!(
                "Creating a sandbox from the specified snapshot '{name}' as requested."
            ),
        };
    }

    let command = templates
        .and_then(|t| t.variant("default"))
        .map(str::to_string)
        .unwrap_or_else(|| tool.to_string());
    let justification = if question.to_lowercase().contains("snapshot") {
        // snapshot was mentioned but no usable name followed it
        "Creating a standard sandbox environment.".to_string()
    } else {
        format!("Using the standard {tool} command based on your request.")
    };
    Synthesis {
        command,
        justification,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
