//! Environment provisioning and default-interpreter switching.
//!
//! `provision_env` is the whole `setup` flow: ensure conda exists, create
//! the environment, then repoint the global interpreter names at it. Every
//! external effect is injected through [`ProvisionContext`] so the sequence
//! is testable without a conda installation or elevated privileges.
//!
//! The symlink sequence is not transactional. A failure partway through
//! leaves earlier operations in place; the error names the failed command
//! so the mixed state is diagnosable.

pub mod links;

use std::path::PathBuf;

use tracing::info;

use crate::error::{CondaswapError, Result};
use crate::ui::UserInterface;

pub use links::{link_plan, run_link_op, LinkOp};

/// Mockable dependencies for the provisioning flow.
pub struct ProvisionContext<'a> {
    /// Ensure conda is present, installing it when absent.
    pub ensure_conda: &'a dyn Fn(&mut dyn UserInterface) -> Result<()>,
    /// Create the environment (name, python version).
    pub create_env: &'a dyn Fn(&str, &str) -> Result<()>,
    /// Query the conda base directory.
    pub base_dir: &'a dyn Fn() -> Result<PathBuf>,
    /// Resolve the current global `python` on the search path.
    pub resolve_python: &'a dyn Fn() -> Option<PathBuf>,
    /// Execute one privileged link operation.
    pub run_link_op: &'a dyn Fn(&LinkOp) -> Result<()>,
    /// Run `<tool> --version` for post-switch verification.
    pub verify: &'a dyn Fn(&str) -> Result<()>,
}

/// Create `env_name` with the given Python version and make it the default
/// interpreter on the search path.
pub fn provision_env(
    ctx: &ProvisionContext<'_>,
    ui: &mut dyn UserInterface,
    env_name: &str,
    python_version: &str,
) -> Result<()> {
    (ctx.ensure_conda)(ui)?;

    ui.message(&format!(
        "Creating conda environment '{}' with Python {}...",
        env_name, python_version
    ));
    if let Err(e) = (ctx.create_env)(env_name, python_version) {
        ui.error(&format!("Error creating conda environment: {}", e));
        return Err(e);
    }
    ui.success(&format!("Environment '{}' created successfully!", env_name));

    let base_dir = (ctx.base_dir)()?;
    let python_path = (ctx.resolve_python)()
        .ok_or_else(|| CondaswapError::not_on_path("python"))?;

    let plan = link_plan(&base_dir, env_name, &python_path);
    ui.message("Updating symbolic links for python and pip (requires elevated privileges)...");
    for op in &plan {
        info!(op = %op.describe(), "link operation");
        ui.message(&format!("  → {}", op.describe()));
        if let Err(e) = (ctx.run_link_op)(op) {
            ui.error(&format!("Error executing: {}", op.describe()));
            return Err(e);
        }
    }
    ui.success("Symbolic links updated successfully!");

    ui.message("Verifying updated python and pip versions:");
    for tool in ["python", "pip"] {
        if (ctx.verify)(tool).is_err() {
            ui.warning(&format!("Could not verify '{}' after the switch.", tool));
        }
    }

    ui.success(&format!(
        "Python environment switched to '{}' successfully!",
        env_name
    ));
    Ok(())
}
