use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};
use passgen_generators::{Clipboard, ClipboardError};
use tracing::{info, warn};

pub const CLIPBOARD_HOLD_ENV: &str = "PASSGEN_CLIPBOARD_HOLD";

// On X11 the selection is served by the process that set it, the contents are gone once it exits
const SELECTION_DIES_WITH_PROCESS: bool = cfg!(all(
    unix,
    not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "android",
        target_os = "emscripten"
    ))
));

/// The clipboard of the desktop session running the CLI.
///
/// The context is opened on the first write and reused afterwards, so a session without a display
/// only fails when the user actually asks to copy. Call [`SystemClipboard::release`] before
/// exiting.
pub struct SystemClipboard<P = ClipboardContext> {
    context: Option<P>,
    hold: Duration,
    copied: bool,
}

impl<P: ClipboardProvider> SystemClipboard<P> {
    /// `hold` is how long [`SystemClipboard::release`] keeps serving a copied password on
    /// desktops where the clipboard is owned by the writing process.
    pub(crate) fn new(hold: Duration) -> Self {
        Self {
            context: None,
            hold,
            copied: false,
        }
    }

    fn context(&mut self) -> Result<&mut P, ClipboardError> {
        if self.context.is_none() {
            let context =
                P::new().map_err(|error| ClipboardError::Unavailable(error.to_string()))?;
            self.context = Some(context);
        }

        self.context
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard is not open".to_owned()))
    }

    /// Wait for the hold period when the clipboard contents would vanish with the process.
    pub(crate) fn release(self) {
        if !self.copied || !SELECTION_DIES_WITH_PROCESS {
            return;
        }

        if self.hold.is_zero() {
            warn!("The copied password is removed from the clipboard when passgen exits");
            return;
        }

        info!(
            seconds = self.hold.as_secs(),
            "Keeping the password on the clipboard, press Ctrl-C to stop"
        );
        std::thread::sleep(self.hold);
    }
}

impl<P: ClipboardProvider> Clipboard for SystemClipboard<P> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.context()?
            .set_contents(text.to_owned())
            .map_err(|error| ClipboardError::Unavailable(error.to_string()))?;

        self.copied = true;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::{cell::Cell, error::Error};

    use clipboard::ClipboardProvider;

    thread_local! {
        static OPENED: Cell<usize> = const { Cell::new(0) };
    }

    /// Number of [`CountingProvider`] opened on the current thread.
    pub(crate) fn opened() -> usize {
        OPENED.with(Cell::get)
    }

    /// An in-memory provider counting how often it is opened.
    pub(crate) struct CountingProvider {
        pub(crate) contents: String,
    }

    impl ClipboardProvider for CountingProvider {
        fn new() -> Result<Self, Box<dyn Error>> {
            OPENED.with(|opened| opened.set(opened.get() + 1));
            Ok(Self {
                contents: String::new(),
            })
        }

        fn get_contents(&mut self) -> Result<String, Box<dyn Error>> {
            Ok(self.contents.clone())
        }

        fn set_contents(&mut self, contents: String) -> Result<(), Box<dyn Error>> {
            self.contents = contents;
            Ok(())
        }
    }

    /// A provider that can't be opened, like a session without a display.
    pub(crate) struct MissingProvider;

    impl ClipboardProvider for MissingProvider {
        fn new() -> Result<Self, Box<dyn Error>> {
            Err("no display".into())
        }

        fn get_contents(&mut self) -> Result<String, Box<dyn Error>> {
            Err("no display".into())
        }

        fn set_contents(&mut self, _: String) -> Result<(), Box<dyn Error>> {
            Err("no display".into())
        }
    }
}

#[cfg(test)]
impl<P> SystemClipboard<P> {
    pub(crate) fn provider(&self) -> Option<&P> {
        self.context.as_ref()
    }
}
