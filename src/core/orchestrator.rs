//! Sysroot build orchestration
//!
//! Validates the on-disk workspace tree at construction, then drives the
//! Docker backend through the build phases, recording telemetry for each.
//!
//! The workspace tree is a precondition, not something the orchestrator
//! creates: an external preparation step populates it beforehand.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults::{
    BUILD_SETUP_SCRIPT_NAME, QEMU_BINARY_NAME, QEMU_DIR_NAME, SYSROOT_ARCHIVE_NAME,
    SYSROOT_DIR_NAME, SYSTEM_SETUP_SCRIPT_NAME, WORKSPACE_DOCKERFILE_NAME,
};
use crate::core::docker::DockerBuildConfig;
use crate::core::platform::PlatformConfig;
use crate::error::{CrossrootError, WorkspaceError};
use crate::infra::docker::DockerBackend;
use crate::metrics::MetricsCollector;

/// Phase names as they appear in recorded metrics
const IMAGE_BUILD_PHASE: &str = "sysroot-build";
const EXPORT_PHASE: &str = "sysroot-export";

/// Result of a completed build pipeline
#[derive(Debug)]
pub struct BuildOutcome {
    /// Tag of the built workspace image
    pub image_tag: String,
    /// Size of the built image in bytes
    pub image_size: u64,
    /// Path of the exported sysroot archive
    pub archive_path: PathBuf,
}

/// Orchestrates sysroot construction over a validated workspace tree
pub struct SysrootOrchestrator {
    sysroot_dir: PathBuf,
    ros_workspace_dir: PathBuf,
    dockerfile_path: PathBuf,
    build_setup_script: PathBuf,
    system_setup_script: PathBuf,
    platform: PlatformConfig,
    docker_config: DockerBuildConfig,
}

impl SysrootOrchestrator {
    /// Validate the workspace tree and resolve orchestration paths.
    ///
    /// The four precondition checks run in a fixed order and stop at the
    /// first missing piece, so a caller provisioning the tree incrementally
    /// always sees the next actionable error rather than a stale one:
    ///
    /// 1. `<root>/sysroot`
    /// 2. `<root>/sysroot/<ros_workspace_name>`
    /// 3. `<root>/sysroot/qemu-user-static`
    /// 4. `<root>/sysroot/qemu-user-static/qemu`
    ///
    /// No build work happens here. A custom setup script, when given, must
    /// exist and replaces the default build-setup script.
    pub fn new(
        root_dir: &Path,
        ros_workspace_name: &str,
        platform: PlatformConfig,
        docker_config: DockerBuildConfig,
        custom_setup_script: Option<&Path>,
    ) -> Result<Self, WorkspaceError> {
        let sysroot_dir = root_dir.join(SYSROOT_DIR_NAME);
        check_component("sysroot directory", &sysroot_dir)?;

        let ros_workspace_dir = sysroot_dir.join(ros_workspace_name);
        check_component("ROS workspace", &ros_workspace_dir)?;

        let qemu_dir = sysroot_dir.join(QEMU_DIR_NAME);
        check_component("emulator directory", &qemu_dir)?;
        check_component("emulator binary", &qemu_dir.join(QEMU_BINARY_NAME))?;

        let build_setup_script = match custom_setup_script {
            Some(script) if script.exists() => script.to_path_buf(),
            Some(script) => {
                return Err(WorkspaceError::InvalidCustomScript {
                    path: script.to_path_buf(),
                })
            }
            None => ros_workspace_dir.join(BUILD_SETUP_SCRIPT_NAME),
        };

        Ok(Self {
            dockerfile_path: sysroot_dir.join(WORKSPACE_DOCKERFILE_NAME),
            system_setup_script: ros_workspace_dir.join(SYSTEM_SETUP_SCRIPT_NAME),
            sysroot_dir,
            ros_workspace_dir,
            build_setup_script,
            platform,
            docker_config,
        })
    }

    /// Validated sysroot directory
    pub fn sysroot_dir(&self) -> &Path {
        &self.sysroot_dir
    }

    /// Validated ROS workspace directory
    pub fn ros_workspace_dir(&self) -> &Path {
        &self.ros_workspace_dir
    }

    /// Build descriptor handed to the Docker backend
    pub fn dockerfile_path(&self) -> &Path {
        &self.dockerfile_path
    }

    /// Script the build backend invokes to build the workspace
    pub fn build_setup_script_path(&self) -> &Path {
        &self.build_setup_script
    }

    /// Script the build backend invokes to prepare the target system
    pub fn system_setup_script_path(&self) -> &Path {
        &self.system_setup_script
    }

    /// Target platform this orchestrator builds for
    pub fn platform(&self) -> &PlatformConfig {
        &self.platform
    }

    /// Docker build options in effect
    pub fn docker_config(&self) -> &DockerBuildConfig {
        &self.docker_config
    }

    /// Run the build pipeline, recording telemetry for every phase.
    ///
    /// A phase failure propagates unchanged after its incomplete sample has
    /// been recorded; later phases are not attempted.
    pub fn build_sysroot(
        &self,
        backend: &dyn DockerBackend,
        collector: &mut MetricsCollector,
    ) -> Result<BuildOutcome, CrossrootError> {
        let image_tag = self.platform.workspace_image_tag();
        tracing::info!("Building sysroot image {image_tag}");

        collector.time(IMAGE_BUILD_PHASE, || {
            backend.build_image(
                &image_tag,
                &self.dockerfile_path,
                &self.sysroot_dir,
                &self.docker_config,
            )
        })?;

        let image_size = backend.image_size(&image_tag)?;
        collector.add_size(IMAGE_BUILD_PHASE, image_size);

        let archive_path = self.sysroot_dir.join(SYSROOT_ARCHIVE_NAME);
        collector.time(EXPORT_PHASE, || {
            backend.export_image(&image_tag, &archive_path)
        })?;
        if let Ok(metadata) = fs::metadata(&archive_path) {
            collector.add_size(EXPORT_PHASE, metadata.len());
        }

        tracing::info!("Exported sysroot archive to {}", archive_path.display());
        Ok(BuildOutcome {
            image_tag,
            image_size,
            archive_path,
        })
    }
}

fn check_component(component: &str, path: &Path) -> Result<(), WorkspaceError> {
    if path.exists() {
        Ok(())
    } else {
        Err(WorkspaceError::MissingComponent {
            component: component.to_string(),
            path: path.to_path_buf(),
        })
    }
}
