use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub description: String,
    pub common_tasks: Vec<String>,
    pub toolchains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toolchain {
    pub name: String,
    pub description: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub doc_url: String,
}

/// Named command-template variants for one tool. Templates may carry
/// `{snapshot_name}`-style placeholders filled in at synthesis time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSet {
    pub tool: String,
    pub variants: BTreeMap<String, String>,
}

impl CommandSet {
    pub fn variant(&self, name: &str) -> Option<&str> {
        self.variants.get(name).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Static reference data describing the mocked development environment.
/// Loaded once at startup and shared read-only by every session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub workflows: Vec<Workflow>,
    pub toolchains: Vec<Toolchain>,
    pub tools: Vec<ToolInfo>,
    pub commands: Vec<CommandSet>,
}

impl Catalog {
    pub fn workflow(&self, name: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.name == name)
    }

    pub fn toolchain(&self, name: &str) -> Option<&Toolchain> {
        self.toolchains.iter().find(|t| t.name == name)
    }

    pub fn tool(&self, name: &str) -> Option<&ToolInfo> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn command_set(&self, tool: &str) -> Option<&CommandSet> {
        self.commands.iter().find(|c| c.tool == tool)
    }

    pub fn workflow_names(&self) -> Vec<String> {
        self.workflows.iter().map(|w| w.name.clone()).collect()
    }

    /// Replaces the built-in data with a YAML catalog of the same shape.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_yaml::from_str(&data)?;
        Ok(catalog)
    }

    /// The built-in mock dataset: a MATLAB-flavored development environment
    /// with `mw_`-prefixed command-line tools.
    pub fn builtin() -> Self {
        Self {
            workflows: builtin_workflows(),
            toolchains: builtin_toolchains(),
            tools: builtin_tools(),
            commands: builtin_commands(),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

fn wf(name: &str, description: &str, common_tasks: &[&str], toolchains: &[&str]) -> Workflow {
    Workflow {
        name: name.to_string(),
        description: description.to_string(),
        common_tasks: common_tasks.iter().map(|s| s.to_string()).collect(),
        toolchains: toolchains.iter().map(|s| s.to_string()).collect(),
    }
}

fn tc(name: &str, description: &str, tools: &[&str]) -> Toolchain {
    Toolchain {
        name: name.to_string(),
        description: description.to_string(),
        tools: tools.iter().map(|s| s.to_string()).collect(),
    }
}

fn tool(name: &str, description: &str, usage: &str, doc_url: &str) -> ToolInfo {
    ToolInfo {
        name: name.to_string(),
        description: description.to_string(),
        usage: usage.to_string(),
        doc_url: doc_url.to_string(),
    }
}

fn cmds(tool: &str, variants: &[(&str, &str)]) -> CommandSet {
    CommandSet {
        tool: tool.to_string(),
        variants: variants
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

fn builtin_workflows() -> Vec<Workflow> {
    vec![
        wf(
            "Development Environment Setup",
            "Set up development environments, sandboxes, and workspaces",
            &[
                "Create new sandbox",
                "Set up development environment",
                "Configure workspace",
                "Initialize project structure",
            ],
            &[
                "MATLAB Build Tools",
                "Source Control Tools",
                "Environment Setup Tools",
            ],
        ),
        wf(
            "Testing and Validation",
            "Run tests, validate code, and ensure quality",
            &[
                "Run unit tests",
                "Execute integration tests",
                "Validate code quality",
                "Generate test reports",
            ],
            &[
                "Testing Framework",
                "Quality Assurance Tools",
                "MATLAB Test Tools",
            ],
        ),
        wf(
            "Deployment and Release",
            "Deploy applications and manage releases",
            &[
                "Deploy to staging",
                "Create release packages",
                "Publish applications",
                "Manage versions",
            ],
            &["Deployment Tools", "Release Management", "Package Management"],
        ),
        wf(
            "Debugging and Troubleshooting",
            "Debug issues and troubleshoot problems",
            &[
                "Debug applications",
                "Analyze logs",
                "Profile performance",
                "Fix runtime issues",
            ],
            &["Debugging Tools", "Analysis Tools", "Profiling Tools"],
        ),
        wf(
            "General Development",
            "General development tasks and utilities",
            &[
                "Code compilation",
                "Documentation generation",
                "File management",
                "General utilities",
            ],
            &[
                "Development Utilities",
                "MATLAB Build Tools",
                "Documentation Tools",
            ],
        ),
    ]
}

fn builtin_toolchains() -> Vec<Toolchain> {
    vec![
        tc(
            "MATLAB Build Tools",
            "Tools for building and compiling MATLAB applications",
            &["mw_build", "mw_compile", "mw_package", "mw_create_sandbox"],
        ),
        tc(
            "Source Control Tools",
            "Version control and source code management tools",
            &["mw_git", "mw_branch", "mw_merge", "mw_commit"],
        ),
        tc(
            "Environment Setup Tools",
            "Tools for setting up development environments",
            &[
                "mw_create_sandbox",
                "mw_setup_env",
                "mw_configure",
                "mw_init_workspace",
            ],
        ),
        tc(
            "Testing Framework",
            "Comprehensive testing tools and frameworks",
            &[
                "mw_test",
                "mw_unit_test",
                "mw_integration_test",
                "mw_test_report",
            ],
        ),
        tc(
            "Quality Assurance Tools",
            "Code quality and analysis tools",
            &["mw_lint", "mw_analyze", "mw_quality_check", "mw_code_review"],
        ),
        tc(
            "MATLAB Test Tools",
            "MATLAB-specific testing utilities",
            &[
                "mw_matlab_test",
                "mw_simulink_test",
                "mw_test_coverage",
                "mw_test_harness",
            ],
        ),
        tc(
            "Deployment Tools",
            "Application deployment and distribution tools",
            &["mw_deploy", "mw_distribute", "mw_publish", "mw_stage"],
        ),
        tc(
            "Release Management",
            "Release planning and management tools",
            &["mw_release", "mw_version", "mw_tag", "mw_package_release"],
        ),
        tc(
            "Package Management",
            "Package creation and management tools",
            &[
                "mw_create_package",
                "mw_install_package",
                "mw_update_package",
                "mw_list_packages",
            ],
        ),
        tc(
            "Debugging Tools",
            "Debugging and diagnostic tools",
            &["mw_debug", "mw_trace", "mw_breakpoint", "mw_inspect"],
        ),
        tc(
            "Analysis Tools",
            "Code and performance analysis tools",
            &["mw_analyze", "mw_profile", "mw_metrics", "mw_dependency_check"],
        ),
        tc(
            "Profiling Tools",
            "Performance profiling and optimization tools",
            &[
                "mw_profile",
                "mw_benchmark",
                "mw_memory_check",
                "mw_performance_test",
            ],
        ),
        tc(
            "Development Utilities",
            "General development utilities and helpers",
            &["mw_help", "mw_info", "mw_clean", "mw_utilities"],
        ),
        tc(
            "Documentation Tools",
            "Documentation generation and management tools",
            &["mw_doc_gen", "mw_help_gen", "mw_api_doc", "mw_user_guide"],
        ),
    ]
}

fn builtin_tools() -> Vec<ToolInfo> {
    vec![
        tool(
            "mw_create_sandbox",
            "Create a new development sandbox environment",
            "mw_create_sandbox [options] [snapshot_name]",
            "https://example.com/help/mw_create_sandbox",
        ),
        tool(
            "mw_build",
            "Build and compile MATLAB applications",
            "mw_build [target] [options]",
            "https://example.com/help/mw_build",
        ),
        tool(
            "mw_test",
            "Run tests for MATLAB applications",
            "mw_test [test_suite] [options]",
            "https://example.com/help/mw_test",
        ),
        tool(
            "mw_deploy",
            "Deploy applications to target environments",
            "mw_deploy [environment] [options]",
            "https://example.com/help/mw_deploy",
        ),
        tool(
            "mw_git",
            "Git operations integrated with MathWorks tools",
            "mw_git [git_command] [options]",
            "https://example.com/help/mw_git",
        ),
        tool(
            "mw_analyze",
            "Analyze code quality and performance",
            "mw_analyze [target] [options]",
            "https://example.com/help/mw_analyze",
        ),
        tool(
            "mw_help",
            "Get help for MathWorks tools",
            "mw_help [tool_name]",
            "https://example.com/help/mw_help",
        ),
        tool(
            "mw_compile",
            "Compile MATLAB code and dependencies",
            "mw_compile [source] [options]",
            "https://example.com/help/mw_compile",
        ),
        tool(
            "mw_setup_env",
            "Set up development environment and paths",
            "mw_setup_env [profile] [options]",
            "https://example.com/help/mw_setup_env",
        ),
        tool(
            "mw_profile",
            "Profile application performance",
            "mw_profile [target] [options]",
            "https://example.com/help/mw_profile",
        ),
        tool(
            "mw_package",
            "Package MATLAB applications for distribution",
            "mw_package [source] [options]",
            "https://example.com/help/mw_package",
        ),
        tool(
            "mw_branch",
            "Branch management for MathWorks repositories",
            "mw_branch [action] [branch_name]",
            "https://example.com/help/mw_branch",
        ),
        tool(
            "mw_merge",
            "Merge branches in MathWorks repositories",
            "mw_merge [source_branch] [options]",
            "https://mathworks.com/help/mw_merge",
        ),
        tool(
            "mw_commit",
            "Commit changes with MathWorks standards",
            "mw_commit [options] [message]",
            "https://example.com/help/mw_commit",
        ),
        tool(
            "mw_configure",
            "Configure MathWorks development environment",
            "mw_configure [component] [options]",
            "https://example.com/help/mw_configure",
        ),
        tool(
            "mw_init_workspace",
            "Initialize a new MathWorks workspace",
            "mw_init_workspace [workspace_name] [options]",
            "https://example.com/help/mw_init_workspace",
        ),
        tool(
            "mw_unit_test",
            "Run unit tests for MATLAB code",
            "mw_unit_test [test_path] [options]",
            "https://example.com/help/mw_unit_test",
        ),
        tool(
            "mw_integration_test",
            "Run integration tests",
            "mw_integration_test [test_suite] [options]",
            "https://example.com/help/mw_integration_test",
        ),
        tool(
            "mw_test_report",
            "Generate test reports and coverage",
            "mw_test_report [options]",
            "https://example.com/help/mw_test_report",
        ),
    ]
}

fn builtin_commands() -> Vec<CommandSet> {
    vec![
        cmds(
            "mw_create_sandbox",
            &[
                ("default", "mw_create_sandbox"),
                ("with_snapshot", "mw_create_sandbox --snapshot {snapshot_name}"),
                ("clean", "mw_create_sandbox --clean"),
                (
                    "with_options",
                    "mw_create_sandbox --snapshot {snapshot_name} --clean --verbose",
                ),
            ],
        ),
        cmds(
            "mw_build",
            &[
                ("default", "mw_build"),
                ("release", "mw_build --target release"),
                ("debug", "mw_build --target debug"),
                ("clean", "mw_build --clean --parallel"),
            ],
        ),
        cmds(
            "mw_test",
            &[
                ("default", "mw_test"),
                ("unit", "mw_test --suite unit"),
                ("integration", "mw_test --suite integration"),
                ("coverage", "mw_test --coverage --report"),
                ("parallel", "mw_test --parallel --verbose"),
            ],
        ),
        cmds(
            "mw_deploy",
            &[
                ("default", "mw_deploy"),
                ("staging", "mw_deploy staging"),
                ("production", "mw_deploy production --validate"),
                ("dry_run", "mw_deploy --dry-run staging"),
            ],
        ),
        cmds(
            "mw_git",
            &[
                ("default", "mw_git status"),
                ("commit", "mw_git commit -m '{message}'"),
                ("push", "mw_git push origin {branch}"),
                ("pull", "mw_git pull origin {branch}"),
            ],
        ),
        cmds(
            "mw_analyze",
            &[
                ("default", "mw_analyze ."),
                ("performance", "mw_analyze --performance {target}"),
                ("quality", "mw_analyze --quality --report"),
                ("detailed", "mw_analyze --detailed --output reports/"),
            ],
        ),
        cmds(
            "mw_help",
            &[
                ("default", "mw_help"),
                ("tool_specific", "mw_help {tool_name}"),
                ("list_tools", "mw_help --list-tools"),
                ("verbose", "mw_help --verbose {tool_name}"),
            ],
        ),
        cmds(
            "mw_compile",
            &[
                ("default", "mw_compile {source}"),
                ("optimize", "mw_compile --optimize {source}"),
                ("mex", "mw_compile --target mex {source}"),
                ("parallel", "mw_compile --parallel {source}"),
            ],
        ),
        cmds(
            "mw_setup_env",
            &[
                ("default", "mw_setup_env"),
                ("profile", "mw_setup_env --profile {profile_name}"),
                ("reset", "mw_setup_env --reset --clean"),
                ("configure", "mw_setup_env --configure {component}"),
            ],
        ),
        cmds(
            "mw_profile",
            &[
                ("default", "mw_profile {target}"),
                ("memory", "mw_profile --memory --detailed {target}"),
                ("benchmark", "mw_profile --benchmark {target}"),
                ("report", "mw_profile --report --output {output_dir} {target}"),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
