#![doc = include_str!("../README.md")]

use std::time::Duration;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use color_eyre::eyre::Result;
use passgen_cli::install_color_eyre;
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter,
};

use crate::{clipboard::SystemClipboard, command::*, render::CommandResult};

mod clipboard;
mod command;
mod interactive;
mod render;
mod tools;

fn main() -> Result<()> {
    // the log level hierarchy is determined by:
    //    - if RUST_LOG is detected at runtime
    //    - if RUST_LOG is provided at compile time
    //    - default to INFO
    let filter = EnvFilter::builder()
        .with_default_directive(option_env!("RUST_LOG").unwrap_or("info").parse()?)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    install_color_eyre(cli.color)?;
    let render_config = render::RenderConfig::new(&cli);

    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        return Ok(());
    };

    let mut clipboard = SystemClipboard::new(Duration::from_secs(cli.clipboard_hold));
    let result = process_commands(command, &mut clipboard);

    render_config.render_result(result)?;

    // Copied passwords may only live as long as the process, this happens after they're printed
    clipboard.release();
    Ok(())
}

fn process_commands(command: Commands, clipboard: &mut SystemClipboard) -> CommandResult {
    match command {
        Commands::Generate(args) => args.run(clipboard),
        Commands::Interactive(args) => args.run(clipboard),

        Commands::Completion { shell } => {
            let Some(shell) = shell.or_else(Shell::from_env) else {
                return Ok(
                    "Couldn't autodetect a valid shell. Run `passgen completion --help` for more info."
                        .into(),
                );
            };

            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(().into())
        }
    }
}
