//! External process execution and environment plumbing.

pub mod command;
pub mod path;
pub mod platform;

pub use command::{
    display_argv, execute, execute_interactive, execute_quiet, execute_streaming, CommandOptions,
    CommandResult, OutputCallback, OutputLine,
};
pub use path::{
    is_executable, parse_system_path, resolve_first, resolve_on_system_path, resolve_tool_path,
};
pub use platform::{is_ci, is_elevated, sudo_noninteractive, PrivilegeMode};
