use clap::ValueEnum;
use color_eyre::eyre::eyre;
use passgen_cli::Color;

use crate::command::Cli;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum Output {
    Text,
    JSON,
    YAML,
    None,
}

pub enum CommandOutput {
    Plain(String),
    /// A value serialized for JSON and YAML output, with `text` shown for text output.
    Object {
        text: String,
        value: Box<dyn erased_serde::Serialize>,
    },
}
pub type CommandResult = color_eyre::eyre::Result<CommandOutput>;

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Plain(text.to_owned())
    }
}
impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Plain(text)
    }
}
impl From<()> for CommandOutput {
    fn from(_: ()) -> Self {
        CommandOutput::Plain(String::new())
    }
}

pub struct RenderConfig {
    pub output: Output,
    pub color: Color,
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self {
            output: cli.output,
            color: cli.color,
            quiet: cli.quiet,
        }
    }

    pub fn render_result(&self, result: CommandResult) -> color_eyre::eyre::Result<()> {
        if self.quiet || self.output == Output::None {
            return result.map(|_| ());
        }

        fn pretty_print(language: &str, data: &str, color: Color) -> color_eyre::eyre::Result<()> {
            if color.is_enabled() {
                bat::PrettyPrinter::new()
                    .input_from_bytes(data.as_bytes())
                    .language(language)
                    .print()
                    .map_err(|error| eyre!("Failed to print {language}: {error}"))?;
            } else {
                print!("{}", data);
            }
            Ok(())
        }

        match result {
            // Errors will be passed through to the caller, and rendered by the main function
            Err(e) => Err(e),

            // Nothing to show, avoid printing an empty line
            Ok(CommandOutput::Plain(text)) if text.is_empty() => Ok(()),

            // Plain text is just output as is
            Ok(CommandOutput::Plain(text)) => {
                println!("{}", text);
                Ok(())
            }

            // For objects, we serialize them based on the output format,
            Ok(CommandOutput::Object { text, value }) => match self.output {
                Output::Text => {
                    println!("{}", text);
                    Ok(())
                }
                Output::JSON => {
                    let mut json = serde_json::to_string_pretty(&*value)?;
                    // Yaml serialization adds a newline at the end, so we do the same here for
                    // consistency
                    json.push('\n');
                    pretty_print("json", &json, self.color)
                }
                Output::YAML => {
                    let yaml = serde_yaml::to_string(&*value)?;
                    pretty_print("yaml", &yaml, self.color)
                }
                Output::None => unreachable!(),
            },
        }
    }
}
