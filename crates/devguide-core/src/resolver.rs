use crate::catalog::Catalog;
use crate::rules::{TOOLCHAIN_RULES, TOOL_RULES, WORKFLOW_RULES};

// ---------------------------------------------------------------------------
// StageRule
// ---------------------------------------------------------------------------

/// One ordered classification rule for a stage.
///
/// `keywords` trigger the rule when any of them appears as a substring of the
/// lower-cased question; an empty set always matches (the stage default).
/// `preferred` then picks the first candidate whose name contains any of the
/// fragments (case-insensitive, candidate order); with no hit, or no
/// fragments at all, the first candidate wins. `fallback` only applies when
/// the candidate universe is empty.
pub struct StageRule {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    pub preferred: &'static [&'static str],
    pub fallback: &'static str,
}

impl StageRule {
    fn matches(&self, question_lc: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|k| question_lc.contains(k))
    }

    fn pick(&self, universe: &[String]) -> String {
        for candidate in universe {
            let lc = candidate.to_lowercase();
            if self.preferred.iter().any(|f| lc.contains(&f.to_lowercase())) {
                return candidate.clone();
            }
        }
        match universe.first() {
            Some(first) => first.clone(),
            None => self.fallback.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification engine
// ---------------------------------------------------------------------------

/// Walks a priority-ordered rule table and resolves the winning rule against
/// the candidate universe. Never fails: an unmatched question falls to the
/// table's catch-all rule, an empty universe to the rule's fixed literal.
pub fn classify(question: &str, rules: &[StageRule], universe: &[String]) -> String {
    let q = question.to_lowercase();
    for rule in rules {
        if rule.matches(&q) {
            return rule.pick(universe);
        }
    }
    // tables carry a catch-all, so this is only reachable with a custom
    // (misconfigured) rule set
    universe.first().cloned().unwrap_or_default()
}

/// Resolves the workflow stage: universe is the whole workflow catalog.
pub fn resolve_workflow(catalog: &Catalog, question: &str) -> String {
    classify(question, WORKFLOW_RULES, &catalog.workflow_names())
}

/// Resolves the toolchain stage. The universe is narrowed to the toolchains
/// of the caller-supplied workflow; an unknown workflow name leaves it empty
/// and the fallback chain applies.
pub fn resolve_toolchain(catalog: &Catalog, question: &str, workflow: &str) -> String {
    let universe = catalog
        .workflow(workflow)
        .map(|w| w.toolchains.as_slice())
        .unwrap_or(&[]);
    classify(question, TOOLCHAIN_RULES, universe)
}

/// Resolves the tool stage against the caller-supplied toolchain's tools.
pub fn resolve_tool(catalog: &Catalog, question: &str, toolchain: &str) -> String {
    let universe = catalog
        .toolchain(toolchain)
        .map(|t| t.tools.as_slice())
        .unwrap_or(&[]);
    classify(question, TOOL_RULES, universe)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    // -- workflow stage ------------------------------------------------------

    #[test]
    fn workflow_keywords_select_their_workflow() {
        let c = catalog();
        let cases = [
            ("I need a new sandbox", "Development Environment Setup"),
            ("please verify the results", "Testing and Validation"),
            ("publish the app", "Deployment and Release"),
            ("there is an error in my script", "Debugging and Troubleshooting"),
            ("write some documentation", "General Development"),
        ];
        for (question, expected) in cases {
            assert_eq!(resolve_workflow(&c, question), expected, "{question}");
        }
    }

    #[test]
    fn earlier_workflow_rule_wins_on_overlap() {
        // "environment" (rule 1) outranks "test" (rule 2)
        let c = catalog();
        assert_eq!(
            resolve_workflow(&c, "set up a test environment"),
            "Development Environment Setup"
        );
    }

    #[test]
    fn workflow_matching_is_case_insensitive() {
        let c = catalog();
        assert_eq!(
            resolve_workflow(&c, "DEPLOY the release NOW"),
            "Deployment and Release"
        );
    }

    // -- toolchain stage -----------------------------------------------------

    #[test]
    fn toolchain_prefers_fragment_within_workflow() {
        let c = catalog();
        let tc = resolve_toolchain(
            &c,
            "build a matlab sandbox",
            "Development Environment Setup",
        );
        assert_eq!(tc, "MATLAB Build Tools");
    }

    #[test]
    fn toolchain_falls_back_to_first_of_workflow() {
        // no keyword match: first toolchain of the workflow wins
        let c = catalog();
        let tc = resolve_toolchain(&c, "help me publish", "Deployment and Release");
        assert_eq!(tc, "Deployment Tools");
    }

    #[test]
    fn toolchain_fragment_miss_falls_to_first() {
        // "git" triggers the source-control rule but Deployment and Release
        // offers no Source toolchain
        let c = catalog();
        let tc = resolve_toolchain(&c, "publish the git changes", "Deployment and Release");
        assert_eq!(tc, "Deployment Tools");
    }

    #[test]
    fn unknown_workflow_gives_empty_universe_literal() {
        let c = catalog();
        let tc = resolve_toolchain(&c, "anything at all", "No Such Workflow");
        assert_eq!(tc, "General Development Tools");
        let tc = resolve_toolchain(&c, "unit tests please", "No Such Workflow");
        assert_eq!(tc, "Testing Framework");
    }

    // -- tool stage ----------------------------------------------------------

    #[test]
    fn tool_prefers_fragment_within_toolchain() {
        let c = catalog();
        let t = resolve_tool(&c, "create a sandbox for me", "MATLAB Build Tools");
        assert_eq!(t, "mw_create_sandbox");
        let t = resolve_tool(&c, "compile and build it", "MATLAB Build Tools");
        assert_eq!(t, "mw_build");
    }

    #[test]
    fn tool_candidate_order_beats_fragment_order() {
        // both "test" and "run" fragments are in play; the first candidate
        // matching either wins
        let c = catalog();
        let t = resolve_tool(&c, "run the tests", "Testing Framework");
        assert_eq!(t, "mw_test");
    }

    #[test]
    fn tool_defaults_to_first_of_toolchain() {
        let c = catalog();
        let t = resolve_tool(&c, "what should I do here", "Development Utilities");
        assert_eq!(t, "mw_help");
        let t = resolve_tool(&c, "what should I do here", "Source Control Tools");
        assert_eq!(t, "mw_git");
    }

    #[test]
    fn unknown_toolchain_gives_default_tool_literal() {
        let c = catalog();
        assert_eq!(resolve_tool(&c, "no keywords here", "Imaginary Tools"), "mw_help");
        assert_eq!(
            resolve_tool(&c, "create something", "Imaginary Tools"),
            "mw_create_sandbox"
        );
        assert_eq!(resolve_tool(&c, "build it", "Imaginary Tools"), "mw_build");
        assert_eq!(resolve_tool(&c, "run it", "Imaginary Tools"), "mw_test");
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "testing" contains "test"; substring semantics are intentional
        let c = catalog();
        assert_eq!(resolve_workflow(&c, "attesting quality"), "Testing and Validation");
    }

    #[test]
    fn classify_without_catch_all_is_total() {
        let rules = [StageRule {
            id: "narrow",
            keywords: &["nevermatches"],
            preferred: &[],
            fallback: "x",
        }];
        assert_eq!(classify("q", &rules, &["A".to_string()]), "A");
        assert_eq!(classify("q", &rules, &[]), "");
    }
}
