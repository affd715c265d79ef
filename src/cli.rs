use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "strivadenn",
    about = "Compute workout statistics (distance, speed, calories) from sensor packets"
)]
pub struct Cli {
    /// Path to a JSON packets file: an array of [tag, data] pairs, e.g.
    /// [["SWM", [720, 1, 80, 25, 40]], ["RUN", [15000, 1, 75]]].
    ///
    /// Omitted: a built-in simulated sensor-block transmission is processed.
    #[arg(value_name = "PACKETS")]
    pub packets: Option<PathBuf>,

    /// Print at most this many workouts.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Tab-separated listing with index and workout-type tag.
    #[arg(long)]
    pub details: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,
}
