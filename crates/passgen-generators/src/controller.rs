use std::fmt;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::{debug, warn};

use crate::{generate_with_rng, Clipboard, ClipboardError, Configuration, PasswordError};

/// Owns the current [`Configuration`] and the password generated from it.
///
/// Every mutation that changes the configuration regenerates the password before returning, so
/// [`PasswordController::password`] always reflects [`PasswordController::configuration`]. The
/// only exception is a configuration that leaves nothing to draw from: the change is kept, the
/// previous password is retained and the error is returned.
pub struct PasswordController<R = SmallRng> {
    configuration: Configuration,
    password: String,
    rng: R,
}

impl PasswordController<SmallRng> {
    /// Create a controller with the default configuration and a freshly generated password.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Create a controller from an initial configuration. The length is clamped.
    pub fn from_configuration(configuration: Configuration) -> Self {
        Self::with_configuration(configuration, SmallRng::from_entropy())
    }
}

impl Default for PasswordController<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordController<R> {
    /// Create a controller with the default configuration drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::with_configuration(Configuration::default(), rng)
    }

    /// Create a controller from an initial configuration. The length is clamped.
    pub fn with_configuration(configuration: Configuration, rng: R) -> Self {
        let mut controller = Self {
            configuration: configuration.clamped(),
            password: String::new(),
            rng,
        };
        // A failure is already logged, the controller starts without a password
        let _ = controller.regenerate();
        controller
    }

    #[allow(missing_docs)]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// The most recently generated password. Empty until a generation succeeds.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Set the password length, clamped to [`MIN_LENGTH`](crate::MIN_LENGTH)..=
    /// [`MAX_LENGTH`](crate::MAX_LENGTH).
    pub fn set_length(&mut self, length: usize) -> Result<(), PasswordError> {
        let length = Configuration::clamp_length(length);
        self.update(|configuration| configuration.length = length)
    }

    #[allow(missing_docs)]
    pub fn toggle_digits(&mut self) -> Result<(), PasswordError> {
        self.update(|configuration| configuration.include_digits = !configuration.include_digits)
    }

    #[allow(missing_docs)]
    pub fn toggle_symbols(&mut self) -> Result<(), PasswordError> {
        self.update(|configuration| {
            configuration.include_symbols = !configuration.include_symbols;
        })
    }

    #[allow(missing_docs)]
    pub fn set_include_digits(&mut self, include_digits: bool) -> Result<(), PasswordError> {
        self.update(|configuration| configuration.include_digits = include_digits)
    }

    #[allow(missing_docs)]
    pub fn set_include_symbols(&mut self, include_symbols: bool) -> Result<(), PasswordError> {
        self.update(|configuration| configuration.include_symbols = include_symbols)
    }

    /// Write the current password to `clipboard`.
    ///
    /// Does nothing when no password has been generated yet. A clipboard failure is logged and
    /// returned, the controller state is unaffected.
    pub fn copy_to_clipboard<C: Clipboard + ?Sized>(
        &self,
        clipboard: &mut C,
    ) -> Result<(), ClipboardError> {
        if self.password.is_empty() {
            debug!("No password to copy");
            return Ok(());
        }

        clipboard
            .write_text(&self.password)
            .inspect(|_| debug!(length = self.password.len(), "Copied password"))
            .inspect_err(|error| warn!(%error, "Failed to copy password to the clipboard"))
    }

    fn update(&mut self, change: impl FnOnce(&mut Configuration)) -> Result<(), PasswordError> {
        let previous = self.configuration;
        change(&mut self.configuration);

        if self.configuration == previous {
            return Ok(());
        }
        self.regenerate()
    }

    fn regenerate(&mut self) -> Result<(), PasswordError> {
        let Configuration {
            length,
            include_digits,
            include_symbols,
        } = self.configuration;

        match generate_with_rng(&mut self.rng, &self.configuration) {
            Ok(password) => {
                self.password = password;
                debug!(length, include_digits, include_symbols, "Regenerated password");
                Ok(())
            }
            Err(error) => {
                warn!(%error, length, include_digits, include_symbols, "Keeping the previous password");
                Err(error)
            }
        }
    }
}

impl<R> fmt::Debug for PasswordController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordController")
            .field("configuration", &self.configuration)
            .field("password", &"********")
            .finish_non_exhaustive()
    }
}
