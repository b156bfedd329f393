use passgen_generators::{ClipboardError, Configuration, PasswordController, PasswordError};
use wasm_bindgen::prelude::*;

use crate::NavigatorClipboard;

/// The state behind one password generator widget.
///
/// Each setter regenerates the password before returning, the view re-renders from
/// [`PasswordGeneratorClient::password`] afterwards.
#[wasm_bindgen]
pub struct PasswordGeneratorClient {
    controller: PasswordController,
    clipboard: NavigatorClipboard,
}

impl Default for PasswordGeneratorClient {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PasswordGeneratorClient {
    /// Start a session with the default configuration and a freshly generated password
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            controller: PasswordController::new(),
            clipboard: NavigatorClipboard,
        }
    }

    #[allow(missing_docs)]
    #[wasm_bindgen(getter)]
    pub fn password(&self) -> String {
        self.controller.password().to_owned()
    }

    #[allow(missing_docs)]
    #[wasm_bindgen(getter)]
    pub fn configuration(&self) -> Configuration {
        *self.controller.configuration()
    }

    #[allow(missing_docs)]
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> u8 {
        self.controller.configuration().length
    }

    #[allow(missing_docs)]
    #[wasm_bindgen(getter)]
    pub fn include_digits(&self) -> bool {
        self.controller.configuration().include_digits
    }

    #[allow(missing_docs)]
    #[wasm_bindgen(getter)]
    pub fn include_symbols(&self) -> bool {
        self.controller.configuration().include_symbols
    }

    /// Set the password length from the range input.
    ///
    /// Takes a JS number as is: negative values and NaN clamp to the minimum, anything above the
    /// maximum clamps to the maximum.
    pub fn set_length(&mut self, length: f64) -> Result<(), PasswordError> {
        // Float to integer casts saturate, NaN becomes 0
        self.controller.set_length(length as usize)
    }

    #[allow(missing_docs)]
    pub fn toggle_digits(&mut self) -> Result<(), PasswordError> {
        self.controller.toggle_digits()
    }

    #[allow(missing_docs)]
    pub fn toggle_symbols(&mut self) -> Result<(), PasswordError> {
        self.controller.toggle_symbols()
    }

    /// Copy the current password to the system clipboard.
    ///
    /// Throws a `ClipboardError` when the clipboard is unavailable. The session stays usable.
    pub fn copy_to_clipboard(&mut self) -> Result<(), ClipboardError> {
        self.controller.copy_to_clipboard(&mut self.clipboard)
    }
}
