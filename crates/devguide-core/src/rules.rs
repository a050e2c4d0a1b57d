use crate::resolver::StageRule;

// ---------------------------------------------------------------------------
// Stage rule tables (priority-ordered)
// ---------------------------------------------------------------------------
//
// Each table is walked top to bottom and the first rule whose keyword set
// matches the question wins; table order is the documented tie-break policy.
// A trailing rule with an empty keyword set is the stage default.

pub const WORKFLOW_RULES: &[StageRule] = &[
    // 1. Environment work: sandboxes, builds, workspace setup
    StageRule {
        id: "environment",
        keywords: &["sandbox", "build", "environment"],
        preferred: &["Development Environment Setup"],
        fallback: "Development Environment Setup",
    },
    // 2. Testing and validation
    StageRule {
        id: "testing",
        keywords: &["test", "testing", "verify"],
        preferred: &["Testing and Validation"],
        fallback: "Testing and Validation",
    },
    // 3. Shipping: deploys, releases, publishing
    StageRule {
        id: "deployment",
        keywords: &["deploy", "release", "publish"],
        preferred: &["Deployment and Release"],
        fallback: "Deployment and Release",
    },
    // 4. Problem hunting
    StageRule {
        id: "debugging",
        keywords: &["debug", "troubleshoot", "fix", "error"],
        preferred: &["Debugging and Troubleshooting"],
        fallback: "Debugging and Troubleshooting",
    },
    // 5. Everything else
    StageRule {
        id: "general",
        keywords: &[],
        preferred: &["General Development"],
        fallback: "General Development",
    },
];

pub const TOOLCHAIN_RULES: &[StageRule] = &[
    // 1. MATLAB/Simulink work prefers the MATLAB toolchain of the workflow
    StageRule {
        id: "matlab",
        keywords: &["matlab", "simulink"],
        preferred: &["MATLAB"],
        fallback: "MATLAB Build Tools",
    },
    // 2. Version control
    StageRule {
        id: "source_control",
        keywords: &["git", "version", "source"],
        preferred: &["Source"],
        fallback: "Source Control Tools",
    },
    // 3. Test tooling
    StageRule {
        id: "testing",
        keywords: &["test", "unit", "integration"],
        preferred: &["Test"],
        fallback: "Testing Framework",
    },
    // 4. Default: first toolchain the workflow offers
    StageRule {
        id: "default",
        keywords: &[],
        preferred: &[],
        fallback: "General Development Tools",
    },
];

pub const TOOL_RULES: &[StageRule] = &[
    // 1. Creating something new
    StageRule {
        id: "create",
        keywords: &["create", "new", "setup"],
        preferred: &["create", "new"],
        fallback: "mw_create_sandbox",
    },
    // 2. Building
    StageRule {
        id: "build",
        keywords: &["build", "compile"],
        preferred: &["build"],
        fallback: "mw_build",
    },
    // 3. Running tests
    StageRule {
        id: "test",
        keywords: &["test", "run"],
        preferred: &["test", "run"],
        fallback: "mw_test",
    },
    // 4. Default: first tool the toolchain offers
    StageRule {
        id: "default",
        keywords: &[],
        preferred: &[],
        fallback: "mw_help",
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
