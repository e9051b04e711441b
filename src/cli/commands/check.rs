//! Check command implementation
//!
//! Implements `crossroot check`: run the workspace-tree validation and
//! report the resolved configuration without invoking Docker.

use anyhow::Result;

use super::WorkspaceArgs;
use crate::cli::output::status;
use crate::core::orchestrator::SysrootOrchestrator;

/// Execute the check command
pub fn execute(args: &WorkspaceArgs) -> Result<()> {
    let orchestrator = SysrootOrchestrator::new(
        &args.sysroot_path,
        &args.ros_workspace,
        args.platform(),
        args.docker_config(),
        args.custom_setup_script.as_deref(),
    )?;

    println!("{} Workspace tree is valid", status::SUCCESS);
    println!("  Sysroot:             {}", orchestrator.sysroot_dir().display());
    println!(
        "  Build setup script:  {}",
        orchestrator.build_setup_script_path().display()
    );
    println!(
        "  System setup script: {}",
        orchestrator.system_setup_script_path().display()
    );
    println!("  Image tag:           {}", orchestrator.platform().workspace_image_tag());
    for line in orchestrator.docker_config().to_string().lines() {
        println!("  {line}");
    }

    Ok(())
}
