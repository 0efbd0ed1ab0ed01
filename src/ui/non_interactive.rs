//! Non-interactive UI for notebook/CI/headless environments.

use std::collections::HashMap;

use crate::error::{CondaswapError, Result};

use super::prompts::default_is_affirmative;
use super::theme::CondaswapTheme;
use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts resolve from `CONDASWAP_PROMPT_*` environment variables first,
/// then from the prompt's default. Notebook cells are the primary caller,
/// so a confirm prompt with an affirmative default proceeds rather than
/// blocking on input that will never arrive.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("CONDASWAP_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn resolve_answer(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("CONDASWAP_PROMPT_{}", prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .cloned()
            .or_else(|| prompt.default.clone())
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let Some(answer) = self.resolve_answer(prompt) else {
            return Err(CondaswapError::Other(anyhow::anyhow!(
                "cannot prompt for '{}' in non-interactive mode (no default value)",
                prompt.key
            )));
        };

        match prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(default_is_affirmative(&answer))),
            PromptType::Input => Ok(PromptResult::String(answer)),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        let theme = CondaswapTheme::plain();
        println!("{}", theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = CondaswapTheme::plain();
        println!("{}", theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn confirm_prompt_uses_affirmative_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "remove_conda".to_string(),
            question: "Remove?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("yes".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_bool(), Some(true));
    }

    #[test]
    fn confirm_prompt_respects_negative_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "remove_conda".to_string(),
            question: "Remove?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("no".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_bool(), Some(false));
    }

    #[test]
    fn input_prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "env_name".to_string(),
            question: "Environment name?".to_string(),
            prompt_type: PromptType::Input,
            default: Some("condaswap".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "condaswap");
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "env_name".to_string(),
            question: "Environment name?".to_string(),
            prompt_type: PromptType::Input,
            default: None,
        };

        assert!(ui.prompt(&prompt).is_err());
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "CONDASWAP_PROMPT_REMOVE_CONDA".to_string(),
            "no".to_string(),
        );

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt {
            key: "remove_conda".to_string(),
            question: "Remove?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("yes".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_bool(), Some(false));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner;
        spinner.set_message("test");
        spinner.finish_success("done");
        spinner.finish_error("failed");
    }
}
