//! Build command implementation
//!
//! Implements `crossroot build`: validate the workspace tree, build the
//! workspace image through Docker, export the sysroot archive, and persist
//! the collected metrics.

use anyhow::Result;

use super::WorkspaceArgs;
use crate::cli::output::{self, status};
use crate::core::orchestrator::SysrootOrchestrator;
use crate::infra::docker::DockerCli;
use crate::metrics::writer::MetricsWriter;
use crate::metrics::MetricsCollector;

/// Execute the build command
pub fn execute(args: &WorkspaceArgs, print_metrics: bool, metrics_file: &str) -> Result<()> {
    let platform = args.platform();
    let docker_config = args.docker_config();
    tracing::info!("Target platform: {platform}");
    tracing::debug!("Docker configuration:\n{docker_config}");

    // Validation only; no build work happens here
    let orchestrator = SysrootOrchestrator::new(
        &args.sysroot_path,
        &args.ros_workspace,
        platform,
        docker_config,
        args.custom_setup_script.as_deref(),
    )?;

    let backend = DockerCli::new()?;
    let writer = MetricsWriter::new(orchestrator.ros_workspace_dir(), metrics_file)?;
    let mut collector = MetricsCollector::new();

    let spinner = output::create_spinner("Building sysroot image...");
    let outcome = orchestrator.build_sysroot(&backend, &mut collector);
    spinner.finish_and_clear();

    // Flush metrics before surfacing a phase failure, so a failed run still
    // leaves a file describing how far it got.
    writer.write(&collector, print_metrics)?;
    let outcome = outcome?;

    println!("{} Sysroot build complete", status::SUCCESS);
    println!(
        "  Image:   {} ({} bytes)",
        outcome.image_tag, outcome.image_size
    );
    println!("  Archive: {}", outcome.archive_path.display());
    println!("  Metrics: {}", writer.write_file().display());

    Ok(())
}
