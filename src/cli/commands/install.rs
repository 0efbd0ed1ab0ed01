//! Conda bootstrap command.

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::toolchain::install;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    #[allow(dead_code)]
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(args: InstallArgs) -> Self {
        Self { args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        install::install_conda(&install::default_context(), ui)?;
        Ok(CommandResult::success())
    }
}
