//! Interactive prompts.

use console::Term;
use dialoguer::{Confirm, Input};

use crate::error::{CondaswapError, Result};

use super::{Prompt, PromptResult, PromptType};

/// Convert dialoguer errors to CondaswapError.
fn map_dialoguer_err(e: dialoguer::Error) -> CondaswapError {
    CondaswapError::Io(e.into())
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_ref()
        .map(|s| default_is_affirmative(s))
        .unwrap_or(true);

    let result = Confirm::new()
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let input = Input::<String>::new().with_prompt(&prompt.question);

    let result: String = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_on(term).map_err(map_dialoguer_err)?
    };

    Ok(PromptResult::String(result))
}

/// Interpret a textual default as a confirm answer.
pub fn default_is_affirmative(s: &str) -> bool {
    let lowered = s.to_lowercase();
    lowered == "true" || lowered == "y" || lowered == "yes"
}
