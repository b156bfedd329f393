use clap::Args;
use passgen_generators::{Clipboard, Configuration, PasswordController, DEFAULT_LENGTH};
use serde::Serialize;

use crate::render::{CommandOutput, CommandResult};

pub const LENGTH_ENV: &str = "PASSGEN_LENGTH";

/// Options shared by every command that starts from a [`Configuration`].
#[derive(Args, Clone, Debug)]
pub struct ConfigurationArgs {
    #[arg(
        long,
        env = LENGTH_ENV,
        default_value_t = usize::from(DEFAULT_LENGTH),
        help = "Length of the password, between 6 and 100"
    )]
    pub length: usize,

    #[arg(short = 'n', long, action, help = "Include numbers (0-9)")]
    pub numbers: bool,

    #[arg(
        short = 's',
        long,
        action,
        help = "Include symbols (!@#$%^&*-_+=[]{}~`)"
    )]
    pub symbols: bool,
}

impl ConfigurationArgs {
    pub fn to_configuration(&self) -> Configuration {
        Configuration {
            length: Configuration::clamp_length(self.length),
            include_digits: self.numbers,
            include_symbols: self.symbols,
        }
    }
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub configuration: ConfigurationArgs,

    #[arg(long, help = "Also copy the password to the clipboard")]
    pub copy: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedPassword {
    password: String,
    #[serde(flatten)]
    configuration: Configuration,
}

impl GenerateArgs {
    pub fn run(&self, clipboard: &mut impl Clipboard) -> CommandResult {
        let controller =
            PasswordController::from_configuration(self.configuration.to_configuration());

        // Letters are always part of the alphabet, so the initial generation can't fail
        let password = controller.password().to_owned();

        if self.copy {
            // Failures are logged by the controller and don't prevent printing the password
            let _ = controller.copy_to_clipboard(clipboard);
        }

        Ok(CommandOutput::Object {
            text: password.clone(),
            value: Box::new(GeneratedPassword {
                password,
                configuration: *controller.configuration(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(args: &[&str]) -> GenerateArgs {
        TestCli::try_parse_from(std::iter::once("passgen").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);

        // PASSGEN_LENGTH may be set in the environment running the tests
        if std::env::var_os(LENGTH_ENV).is_none() {
            assert_eq!(args.configuration.to_configuration(), Configuration::default());
        }
        assert!(!args.copy);
    }

    #[test]
    fn test_flags() {
        let args = parse(&["--length", "24", "-n", "-s", "--copy"]);

        assert_eq!(
            args.configuration.to_configuration(),
            Configuration {
                length: 24,
                include_digits: true,
                include_symbols: true,
            }
        );
        assert!(args.copy);
    }

    #[test]
    fn test_length_is_clamped() {
        assert_eq!(
            parse(&["--length", "1000"]).configuration.to_configuration().length,
            100
        );
        assert_eq!(
            parse(&["--length", "0"]).configuration.to_configuration().length,
            6
        );
    }

    #[test]
    fn test_negative_length_is_rejected() {
        assert!(TestCli::try_parse_from(["passgen", "--length", "-5"]).is_err());
    }

    #[test]
    fn test_copy_writes_the_printed_password() {
        use std::time::Duration;

        use crate::clipboard::{test_support::CountingProvider, SystemClipboard};

        let mut clipboard = SystemClipboard::<CountingProvider>::new(Duration::ZERO);
        let Ok(CommandOutput::Object { text, .. }) =
            parse(&["--length", "16", "--copy"]).run(&mut clipboard)
        else {
            panic!("generate should return the password as an object");
        };

        assert_eq!(text.len(), 16);
        assert_eq!(clipboard.provider().unwrap().contents, text);
    }

    #[test]
    fn test_no_copy_leaves_the_clipboard_closed() {
        use std::time::Duration;

        use crate::clipboard::{test_support::CountingProvider, SystemClipboard};

        let mut clipboard = SystemClipboard::<CountingProvider>::new(Duration::ZERO);
        assert!(parse(&["--length", "16"]).run(&mut clipboard).is_ok());
        assert!(clipboard.provider().is_none());
    }

    #[test]
    fn test_generated_password_serialization() {
        let generated = GeneratedPassword {
            password: "abcdefgh".to_owned(),
            configuration: Configuration::default(),
        };

        assert_eq!(
            serde_json::to_value(&generated).unwrap(),
            serde_json::json!({
                "password": "abcdefgh",
                "length": 8,
                "includeDigits": false,
                "includeSymbols": false,
            })
        );
    }
}
