use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eyespeak_config::schema::Screen;

/// EyeSpeak: compose and speak sentences with blinks and glances.
///
/// Replays recorded face-landmark frames through the gesture core and
/// the sentence composer.
#[derive(Parser, Debug)]
#[command(name = "eyespeak", version, about)]
pub struct Args {
    /// JSON Lines file of landmark frames (`{"t": ms, "landmarks": [...] | null}`).
    #[arg(short = 'f', long)]
    pub frames: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// `tracing` filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Item grid to start on.
    #[arg(long, value_enum)]
    pub screen: Option<ScreenArg>,

    /// Pace frames by their timestamps instead of replaying instantly.
    #[arg(long)]
    pub realtime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScreenArg {
    Words,
    Letters,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Words => Screen::Words,
            ScreenArg::Letters => Screen::Letters,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
