use std::fmt;

use clap::Args;
use passgen_cli::{is_cancellation, number_prompt, select_prompt};
use passgen_generators::{Clipboard, PasswordController};

use crate::{render::CommandResult, tools::ConfigurationArgs};

#[derive(Args, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub configuration: ConfigurationArgs,
}

/// An entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Copy,
    SetLength,
    ToggleNumbers,
    ToggleSymbols,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Copy,
        Action::SetLength,
        Action::ToggleNumbers,
        Action::ToggleSymbols,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Copy => "Copy to clipboard",
            Action::SetLength => "Change length",
            Action::ToggleNumbers => "Toggle numbers",
            Action::ToggleSymbols => "Toggle symbols",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// A change requested from the menu, with any value already prompted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Copy,
    SetLength(usize),
    ToggleNumbers,
    ToggleSymbols,
}

struct Session<C> {
    controller: PasswordController,
    clipboard: C,
}

impl<C: Clipboard> Session<C> {
    fn new(controller: PasswordController, clipboard: C) -> Self {
        Self {
            controller,
            clipboard,
        }
    }

    /// Apply `event` and return the notice to show the user, if any. Failures never end the
    /// session.
    fn handle(&mut self, event: Event) -> Option<String> {
        let result = match event {
            Event::Copy => {
                return Some(match self.controller.copy_to_clipboard(&mut self.clipboard) {
                    Ok(()) => "Copied to clipboard".to_owned(),
                    Err(error) => error.to_string(),
                });
            }
            Event::SetLength(length) => self.controller.set_length(length),
            Event::ToggleNumbers => self.controller.toggle_digits(),
            Event::ToggleSymbols => self.controller.toggle_symbols(),
        };

        result.err().map(|error| error.to_string())
    }

    fn status(&self) -> String {
        let configuration = self.controller.configuration();
        format!(
            "{}  (length {}, numbers {}, symbols {})",
            self.controller.password(),
            configuration.length,
            on_off(configuration.include_digits),
            on_off(configuration.include_symbols),
        )
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

impl InteractiveArgs {
    pub fn run(&self, clipboard: &mut impl Clipboard) -> CommandResult {
        let controller =
            PasswordController::from_configuration(self.configuration.to_configuration());
        let mut session = Session::new(controller, clipboard);

        loop {
            println!("{}", session.status());

            let action = match select_prompt("What next?", Action::ALL.to_vec()) {
                Ok(action) => action,
                Err(error) if is_cancellation(&error) => break,
                Err(error) => return Err(error.into()),
            };

            let event = match action {
                Action::Copy => Event::Copy,
                Action::SetLength => {
                    let current = usize::from(session.controller.configuration().length);
                    match number_prompt("Length", current, "Between 6 and 100") {
                        Ok(length) => Event::SetLength(length),
                        // Escape leaves the length as it was
                        Err(error) if is_cancellation(&error) => continue,
                        Err(error) => return Err(error.into()),
                    }
                }
                Action::ToggleNumbers => Event::ToggleNumbers,
                Action::ToggleSymbols => Event::ToggleSymbols,
                Action::Quit => break,
            };

            if let Some(notice) = session.handle(event) {
                println!("{notice}");
            }
        }

        Ok(().into())
    }
}

#[cfg(test)]
mod tests {
    use passgen_generators::ClipboardError;

    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        contents: Option<String>,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".to_owned()));
            }
            self.contents = Some(text.to_owned());
            Ok(())
        }
    }

    fn session(fail: bool) -> Session<FakeClipboard> {
        Session::new(
            PasswordController::new(),
            FakeClipboard {
                fail,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<String> = Action::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            [
                "Copy to clipboard",
                "Change length",
                "Toggle numbers",
                "Toggle symbols",
                "Quit"
            ]
        );
    }

    #[test]
    fn test_events_update_the_password() {
        let mut session = session(false);

        assert_eq!(session.handle(Event::SetLength(30)), None);
        assert_eq!(session.controller.password().len(), 30);

        assert_eq!(session.handle(Event::ToggleNumbers), None);
        assert_eq!(session.handle(Event::ToggleSymbols), None);
        let configuration = session.controller.configuration();
        assert!(configuration.include_digits);
        assert!(configuration.include_symbols);

        assert_eq!(session.handle(Event::SetLength(500)), None);
        assert_eq!(session.controller.password().len(), 100);
    }

    #[test]
    fn test_copy_writes_current_password() {
        let mut session = session(false);

        assert_eq!(
            session.handle(Event::Copy),
            Some("Copied to clipboard".to_owned())
        );
        assert_eq!(
            session.clipboard.contents.as_deref(),
            Some(session.controller.password())
        );
    }

    #[test]
    fn test_repeated_copies_reuse_the_system_clipboard() {
        use std::time::Duration;

        use crate::clipboard::{
            test_support::{opened, CountingProvider},
            SystemClipboard,
        };

        let before = opened();
        let mut session = Session::new(
            PasswordController::new(),
            SystemClipboard::<CountingProvider>::new(Duration::ZERO),
        );

        for length in [10, 20, 30] {
            session.handle(Event::SetLength(length));
            assert_eq!(
                session.handle(Event::Copy),
                Some("Copied to clipboard".to_owned())
            );
        }

        assert_eq!(opened() - before, 1);
        assert_eq!(
            session.clipboard.provider().unwrap().contents,
            session.controller.password()
        );
        assert_eq!(session.controller.password().len(), 30);
    }

    #[test]
    fn test_copy_failure_is_reported_and_session_continues() {
        let mut session = session(true);

        assert_eq!(
            session.handle(Event::Copy),
            Some("Clipboard unavailable: no display".to_owned())
        );
        assert_eq!(session.handle(Event::SetLength(12)), None);
        assert_eq!(session.controller.password().len(), 12);
    }

    #[test]
    fn test_status_line() {
        let mut session = session(false);
        session.handle(Event::ToggleSymbols);

        let status = session.status();
        assert!(status.starts_with(session.controller.password()));
        assert!(status.ends_with("(length 8, numbers off, symbols on)"));
    }
}
