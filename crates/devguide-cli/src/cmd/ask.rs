use crate::output;
use anyhow::Result;
use devguide_core::GuideService;

/// Runs the whole pipeline for one question, feeding each stage's selection
/// into the next the way a transport caller would.
pub fn run(service: &GuideService, question: &str, json: bool) -> Result<()> {
    let init = service.initiate_session(question);
    let workflow = service.get_workflow(&init.session_id)?;
    let toolchain = service.get_toolchain(&init.session_id, &workflow.selected_workflow)?;
    let tool = service.get_tool(&init.session_id, &toolchain.selected_toolchain)?;
    let command = service.generate_command(&init.session_id, &tool.selected_tool)?;

    if json {
        let snapshot = service.session_status(&init.session_id)?;
        return output::print_json(&snapshot);
    }

    output::print_kv(&[
        ("Session", init.session_id),
        ("Question", init.question),
        ("Workflow", workflow.selected_workflow),
        ("", workflow.description),
        ("Toolchain", toolchain.selected_toolchain),
        ("", toolchain.description),
        ("Tool", tool.selected_tool),
        ("", tool.description),
        ("Command", command.command),
        ("Why", command.justification),
    ]);
    Ok(())
}
