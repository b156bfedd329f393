use thiserror::Error;

/// Names the variant of an error enum, so that front-ends can report a stable identifier next to
/// the human-readable message.
pub trait ErrorVariant {
    /// The name of the variant, e.g. `"InvalidConfiguration"`.
    fn error_variant(&self) -> &'static str;
}

/// Errors raised while turning a [`Configuration`](crate::Configuration) into a password.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The configuration leaves no characters to draw from.
    #[error("The password alphabet is empty")]
    InvalidConfiguration,
}

impl ErrorVariant for PasswordError {
    fn error_variant(&self) -> &'static str {
        match self {
            PasswordError::InvalidConfiguration => "InvalidConfiguration",
        }
    }
}

/// Errors raised while exporting a password to the clipboard. Always recoverable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard is missing, unsupported by the host or refused the write.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

impl ErrorVariant for ClipboardError {
    fn error_variant(&self) -> &'static str {
        match self {
            ClipboardError::Unavailable(_) => "ClipboardUnavailable",
        }
    }
}
