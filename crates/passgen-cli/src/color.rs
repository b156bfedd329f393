use clap::ValueEnum;
use color_eyre::{
    config::{HookBuilder, Theme},
    eyre::Result,
};

/// When to emit colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Color {
    /// Never
    No,
    /// Always
    Yes,
    /// When stdout is a terminal that supports it
    Auto,
}

impl Color {
    #[allow(missing_docs)]
    pub fn is_enabled(self) -> bool {
        match self {
            Color::No => false,
            Color::Yes => true,
            Color::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }
}

/// Install the `color-eyre` report handler, colored or not depending on `color`
pub fn install_color_eyre(color: Color) -> Result<()> {
    if color.is_enabled() {
        color_eyre::install()
    } else {
        // An empty theme disables error coloring
        HookBuilder::new().theme(Theme::new()).install()
    }
}
