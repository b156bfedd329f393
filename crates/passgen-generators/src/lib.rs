#![doc = include_str!("../README.md")]

mod clipboard;
mod controller;
mod error;
mod password;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use clipboard::Clipboard;
pub use controller::PasswordController;
pub use error::{ClipboardError, ErrorVariant, PasswordError};
pub use password::{
    generate, generate_with_rng, Alphabet, CharSet, Configuration, DEFAULT_LENGTH, MAX_LENGTH,
    MIN_LENGTH,
};
