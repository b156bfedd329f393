#![allow(dead_code)]

use std::process::Command;

/// Create a new passgen CLI command without any configuration inherited from the environment
pub fn passgen() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_passgen"));
    command
        .env_remove("PASSGEN_LENGTH")
        .env_remove("PASSGEN_CLIPBOARD_HOLD")
        .env_remove("RUST_LOG");
    command
}

/// The characters a password with numbers and symbols is drawn from
pub fn is_combined_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!@#$%^&*-_+=[]{}~`".contains(c)
}
