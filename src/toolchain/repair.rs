//! Broken-conda detection and repair.
//!
//! Covers the `ModuleNotFoundError: No module named 'conda'` failure mode
//! hosted images get into after a partial runtime swap: the `conda`
//! entry-point script survives on PATH while its interpreter no longer has
//! the package. Repair removes the stale binary and reinstalls.
//!
//! This is the only flow that recovers from a failure instead of
//! propagating it: when the final verification still fails, the outcome is
//! logged but not raised.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::shell::{self, PrivilegeMode};
use crate::ui::{Prompt, PromptType, UserInterface};

/// Mockable dependencies for the repair flow.
pub struct RepairContext<'a> {
    /// Resolve the conda binary on the search path.
    pub resolve_conda: &'a dyn Fn() -> Option<PathBuf>,
    /// Whether `conda --version` currently succeeds.
    pub version_ok: &'a dyn Fn() -> bool,
    /// Remove a binary, escalating privileges as needed.
    pub remove_binary: &'a dyn Fn(&Path) -> Result<()>,
    /// Reinstall conda.
    pub install: &'a dyn Fn(&mut dyn UserInterface) -> Result<()>,
}

/// Detect and repair a broken conda installation.
///
/// `assume_yes` skips the confirmation before the destructive removal.
pub fn repair_conda(
    ctx: &RepairContext<'_>,
    ui: &mut dyn UserInterface,
    assume_yes: bool,
) -> Result<()> {
    let Some(conda_path) = (ctx.resolve_conda)() else {
        ui.message("Conda not found. Installing...");
        return (ctx.install)(ui);
    };

    ui.message(&format!("Conda found at {}", conda_path.display()));

    if (ctx.version_ok)() {
        ui.success("Conda is working properly.");
        return Ok(());
    }

    ui.warning("Conda is not functioning properly. Attempting repair...");
    info!(path = %conda_path.display(), "conda binary is broken");

    let confirmed = assume_yes || {
        let prompt = Prompt {
            key: "remove_conda".to_string(),
            question: format!("Remove the broken binary at {}?", conda_path.display()),
            prompt_type: PromptType::Confirm,
            default: Some("yes".to_string()),
        };
        ui.prompt(&prompt)
            .ok()
            .and_then(|r| r.as_bool())
            .unwrap_or(false)
    };
    if !confirmed {
        ui.warning("Leaving the broken conda in place.");
        return Ok(());
    }

    ui.message("Removing the broken conda binary...");
    (ctx.remove_binary)(&conda_path)?;

    ui.message("Reinstalling conda...");
    (ctx.install)(ui)?;

    if (ctx.version_ok)() {
        ui.success("Conda has been repaired.");
    } else {
        // Deliberately not an error: the reinstall already reported its
        // own failures, and a half-working conda is still diagnosable.
        warn!("conda verification still failing after repair");
        ui.warning("Conda is still not functioning. Review the installation output.");
    }
    Ok(())
}

/// Remove a binary with `rm -f`, escalating through sudo when not elevated.
pub fn remove_binary(path: &Path) -> Result<()> {
    let mode = PrivilegeMode::detect()?;
    let args = vec!["-f".to_string(), path.display().to_string()];
    let (program, args) = mode.wrap(Path::new("rm"), &args);

    let result = shell::execute_quiet(&program, &args)?;
    if result.success {
        Ok(())
    } else {
        Err(crate::error::CondaswapError::CommandFailed {
            command: shell::display_argv(&program, &args),
            code: result.exit_code,
        })
    }
}

/// Build the default `RepairContext` for production use.
pub fn default_context() -> RepairContext<'static> {
    RepairContext {
        resolve_conda: &|| shell::resolve_on_system_path("conda"),
        version_ok: &|| crate::conda::CondaCli::new().version_ok(),
        remove_binary: &remove_binary,
        install: &|ui| {
            crate::toolchain::install::install_conda(
                &crate::toolchain::install::default_context(),
                ui,
            )
        },
    }
}
