//! Toolchain probe command.
//!
//! `condaswap check` reports whether conda and python resolve on the
//! search path and what their version flags say. This is also the default
//! command when condaswap is invoked bare.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::shell;
use crate::toolchain::probe::{self, ProbeReport, ToolReport, ToolStatus};
use crate::ui::{StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Report one tool's status through the UI, mirroring the glyph lines
    /// notebook users see.
    fn report_tool(ui: &mut dyn UserInterface, label: &str, status: &ToolStatus) {
        let line = match status {
            ToolStatus::Present {
                version: Some(version),
                ..
            } => format!("{} is installed. Version: {}", label, version),
            ToolStatus::Present { version: None, .. } => format!(
                "{} is installed, but the version could not be retrieved.",
                label
            ),
            ToolStatus::Missing => format!("{} is not installed.", label),
        };

        match StatusKind::from(status) {
            StatusKind::Success => ui.success(&line),
            StatusKind::Warning => ui.warning(&line),
            _ => ui.error(&line),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path_entries = shell::parse_system_path();
        let conda = probe::check_conda(&path_entries);
        let python = probe::check_python(&path_entries);

        if self.args.json {
            let report = ProbeReport {
                conda: ToolReport::from(&conda),
                python: ToolReport::from(&python),
            };
            let rendered = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", rendered);
        } else {
            Self::report_tool(ui, "Conda", &conda);
            Self::report_tool(ui, "Python", &python);
        }

        if conda.is_present() && python.is_present() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
