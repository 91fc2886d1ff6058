//! Command line arguments.

use clap::{ArgAction, Parser, ValueEnum};
use colorcode_core::Notation;

#[derive(Parser, Debug)]
#[command(
    name = "colorcode",
    version,
    about = "Convert colors between hex, rgb(), hsl() and hsv() notations"
)]
pub struct Cli {
    /// Colors to convert, e.g. '#deadaf' or 'hsl(200, 90%, 50%)'.
    /// Reads one color per line from stdin when omitted.
    #[arg(value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Print only this notation
    #[arg(short = 't', long = "to", value_enum, value_name = "NOTATION")]
    pub to: Option<Target>,

    /// Emit one JSON object per color
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Hex,
    Rgb,
    Hsl,
    Hsv,
}

impl From<Target> for Notation {
    fn from(target: Target) -> Self {
        match target {
            Target::Hex => Self::Hex,
            Target::Rgb => Self::Rgb,
            Target::Hsl => Self::Hsl,
            Target::Hsv => Self::Hsv,
        }
    }
}
