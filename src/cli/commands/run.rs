//! Tool execution command.
//!
//! `condaswap run <cmd> [args...]` executes a command, falling back to the
//! active conda environment's bin directory when the name is not on PATH.
//! The child's exit code becomes condaswap's exit code.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::runner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }
}

impl Command for RunCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = runner::default_context();
        let exit_code = runner::run_tool(&ctx, &self.args.command, &self.args.args)?;

        // Signal deaths come back as None; report them as failure
        match exit_code {
            Some(0) => Ok(CommandResult::success()),
            Some(code) => Ok(CommandResult::failure(code)),
            None => Ok(CommandResult::failure(1)),
        }
    }
}
