//! Conda repair command.
//!
//! `condaswap doctor` detects the broken-conda failure mode and walks the
//! remove-and-reinstall cycle.

use crate::cli::args::DoctorArgs;
use crate::error::Result;
use crate::toolchain::repair;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand {
    args: DoctorArgs,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(args: DoctorArgs) -> Self {
        Self { args }
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        repair::repair_conda(&repair::default_context(), ui, self.args.yes)?;
        Ok(CommandResult::success())
    }
}
