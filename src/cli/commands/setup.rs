//! Environment provisioning command.
//!
//! `condaswap setup` creates a conda environment with a pinned Python and
//! repoints the global `python`/`python3`/`pip` names at it. Privilege
//! escalation is verified before any work starts so the flow never blocks
//! on a password prompt halfway through the symlink sequence.

use crate::cli::args::SetupArgs;
use crate::conda::CondaCli;
use crate::error::{CondaswapError, Result};
use crate::provision::{self, ProvisionContext};
use crate::shell::{self, PrivilegeMode};
use crate::toolchain::install;
use crate::ui::{live_output_callback, ProgressSpinner, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(args: SetupArgs) -> Self {
        Self { args }
    }
}

/// Install conda first when it is not resolvable.
fn ensure_conda(ui: &mut dyn UserInterface) -> Result<()> {
    if shell::resolve_on_system_path("conda").is_some() {
        return Ok(());
    }
    ui.message("Conda is not installed. Bootstrapping it first...");
    ui.message(
        "Note: this may restart the notebook kernel. If the environment is \
         not set up afterwards, run setup again.",
    );
    install::install_conda(&install::default_context(), ui)
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("condaswap setup");

        // Fail before creating anything if escalation would prompt
        let privilege_mode = PrivilegeMode::detect()?;
        let show_spinner = ui.output_mode().shows_spinners();

        let create_env = |env: &str, version: &str| -> Result<()> {
            let conda = CondaCli::new();
            if show_spinner {
                let spinner =
                    ProgressSpinner::new("Running conda create (this can take a few minutes)...");
                let bar = spinner.bar_clone();
                let callback = live_output_callback(
                    bar.clone(),
                    "Running conda create (this can take a few minutes)...".to_string(),
                    2,
                );
                let result = conda.create_env(env, version, callback);
                bar.finish_and_clear();
                result
            } else {
                conda.create_env(env, version, Box::new(|_| {}))
            }
        };

        let base_dir = || CondaCli::new().base_dir();
        let resolve_python = || shell::resolve_on_system_path("python");
        let run_link_op =
            |op: &provision::LinkOp| provision::run_link_op(op, privilege_mode);

        let verify = |tool: &str| -> Result<()> {
            let path = shell::resolve_on_system_path(tool)
                .ok_or_else(|| CondaswapError::not_on_path(tool))?;
            let args = vec!["--version".to_string()];
            let result = shell::execute_interactive(&path, &args)?;
            if result.success {
                Ok(())
            } else {
                Err(CondaswapError::CommandFailed {
                    command: shell::display_argv(&path, &args),
                    code: result.exit_code,
                })
            }
        };

        let ctx = ProvisionContext {
            ensure_conda: &ensure_conda,
            create_env: &create_env,
            base_dir: &base_dir,
            resolve_python: &resolve_python,
            run_link_op: &run_link_op,
            verify: &verify,
        };

        provision::provision_env(&ctx, ui, &self.args.name, &self.args.python)?;
        Ok(CommandResult::success())
    }
}
