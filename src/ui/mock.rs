//! Mock UI for unit tests.

use std::collections::VecDeque;

use crate::error::{CondaswapError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Recording UI with scripted prompt answers.
///
/// Every output call is captured into a public vector so tests can assert
/// on what the user would have seen. Confirm prompts answer `confirm`
/// (default `true`); input prompts pop from `input_answers` or fall back
/// to the prompt's default.
#[derive(Debug, Default)]
pub struct MockUI {
    pub messages: Vec<String>,
    pub successes: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub prompts_seen: Vec<String>,
    pub confirm: bool,
    pub input_answers: VecDeque<String>,
}

impl MockUI {
    /// Create a mock that confirms everything.
    pub fn new() -> Self {
        Self {
            confirm: true,
            ..Default::default()
        }
    }

    /// Set the answer for confirm prompts.
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    /// Queue an answer for the next input prompt.
    pub fn with_input(mut self, answer: &str) -> Self {
        self.input_answers.push_back(answer.to_string());
        self
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_seen.push(prompt.key.clone());
        match prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(self.confirm)),
            PromptType::Input => self
                .input_answers
                .pop_front()
                .or_else(|| prompt.default.clone())
                .map(PromptResult::String)
                .ok_or_else(|| {
                    CondaswapError::Other(anyhow::anyhow!(
                        "no scripted answer for prompt '{}'",
                        prompt.key
                    ))
                }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.messages.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.messages.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Spinner that swallows all updates.
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}
