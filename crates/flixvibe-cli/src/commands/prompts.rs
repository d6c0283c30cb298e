use color_eyre::Result;
use dialoguer::{Confirm, Input};

/// Prompt for a string value, keeping `current` when the input is left empty
pub fn prompt_string(prompt: &str, current: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for yes/no
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}
