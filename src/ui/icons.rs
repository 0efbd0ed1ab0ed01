//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and
//! colors used across all commands and display contexts.

use super::theme::CondaswapTheme;

/// Canonical status kinds used across all condaswap output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Operation completed successfully / tool is healthy.
    Success,
    /// Operation failed / tool is missing.
    Failed,
    /// Non-fatal warning (e.g. present but degraded).
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warning => "[warn]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &CondaswapTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &CondaswapTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<&crate::toolchain::ToolStatus> for StatusKind {
    fn from(status: &crate::toolchain::ToolStatus) -> Self {
        match status {
            crate::toolchain::ToolStatus::Present { version: Some(_), .. } => Self::Success,
            crate::toolchain::ToolStatus::Present { version: None, .. } => Self::Warning,
            crate::toolchain::ToolStatus::Missing => Self::Failed,
        }
    }
}
