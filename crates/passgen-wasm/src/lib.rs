#![doc = include_str!("../README.md")]

mod clipboard;
mod generator_client;
mod init;

pub use clipboard::NavigatorClipboard;
pub use generator_client::PasswordGeneratorClient;
pub use init::{init_logging, LogLevel};
