#![doc = include_str!("../README.md")]

mod color;

pub use color::{install_color_eyre, Color};
use inquire::{error::InquireResult, CustomType, InquireError, Select};

/// Prompt the user to pick one of `options`
pub fn select_prompt<T: std::fmt::Display>(prompt: &str, options: Vec<T>) -> InquireResult<T> {
    Select::new(prompt, options).prompt()
}

/// Prompt the user for a number, suggesting `default`
pub fn number_prompt(prompt: &str, default: usize, help: &str) -> InquireResult<usize> {
    CustomType::<usize>::new(prompt)
        .with_default(default)
        .with_help_message(help)
        .with_error_message("Please type a whole number")
        .prompt()
}

/// Whether the user ended the prompt with Escape or Ctrl-C rather than answering it
pub fn is_cancellation(error: &InquireError) -> bool {
    matches!(
        error,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
