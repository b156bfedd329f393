use clap::{Parser, Subcommand};
use passgen_cli::Color;

use crate::{
    clipboard::CLIPBOARD_HOLD_ENV,
    interactive::InteractiveArgs,
    render::Output,
    tools::GenerateArgs,
};

#[derive(Parser, Clone)]
#[command(name = "passgen", version, about = "Generate passwords", long_about = None, disable_version_flag = true)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::Text)]
    pub output: Output,

    #[arg(short = 'c', long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Don't return anything to stdout."
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        env = CLIPBOARD_HOLD_ENV,
        default_value_t = 10,
        help = "Seconds to keep serving a copied password before exiting, on desktops where the clipboard empties when passgen exits."
    )]
    pub clipboard_hold: u64,

    // Clap uses uppercase V for the short flag by default
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    pub version: (),
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(
        long_about = "Generate a password.",
        after_help = r#"Notes:
  The length is clamped to 6..=100 and read from $PASSGEN_LENGTH when not given.
  Letters are always included.

Examples:
  passgen generate
  passgen generate -ns --length 24
  passgen generate --copy
  passgen -o json generate -n"#
    )]
    Generate(GenerateArgs),

    #[command(long_about = "Adjust a password from a menu until it fits, then copy it.")]
    Interactive(InteractiveArgs),

    #[command(long_about = "Generate shell completions.")]
    Completion {
        #[arg(long, help = "The shell to generate completions for.")]
        shell: Option<clap_complete::Shell>,
    },
}
