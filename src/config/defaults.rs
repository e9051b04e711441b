//! Default configuration values and fixed workspace-tree names
//!
//! The workspace layout is a contract with the external preparation step;
//! none of these names are configurable per invocation.

/// Name of the sysroot directory under the workspace root
pub const SYSROOT_DIR_NAME: &str = "sysroot";

/// Name of the directory holding the QEMU user-mode emulator
pub const QEMU_DIR_NAME: &str = "qemu-user-static";

/// Name of the emulator binary inside the QEMU directory
pub const QEMU_BINARY_NAME: &str = "qemu";

/// Name of the generated Docker build descriptor inside the sysroot directory
pub const WORKSPACE_DOCKERFILE_NAME: &str = "Dockerfile_workspace";

/// Default build-setup script inside the ROS workspace
pub const BUILD_SETUP_SCRIPT_NAME: &str = "build_workspace.sh";

/// System-setup script inside the ROS workspace
pub const SYSTEM_SETUP_SCRIPT_NAME: &str = "setup_system.sh";

/// Filename of the exported sysroot archive inside the sysroot directory
pub const SYSROOT_ARCHIVE_NAME: &str = "sysroot.tar";

/// Default metrics output filename
pub const DEFAULT_METRICS_FILENAME: &str = "sysroot_metrics.json";

/// Default Docker network mode
pub const DEFAULT_NETWORK_MODE: &str = "host";

/// Default ROS workspace directory name
pub const DEFAULT_ROS_WORKSPACE: &str = "ros_ws";
