#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use strivadenn::{cli, dispatch, packets, utils};

#[macro_use]
extern crate strivadenn;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packets = match &cli.packets {
        Some(path) => {
            dlog!("mode=file packets={}", path.display());
            packets::collect_from_file(path)?
        }
        None => {
            dlog!("mode=samples");
            packets::sample_packets()
        }
    };

    if packets.is_empty() {
        anyhow::bail!("No packets to process.");
    }

    dlog!("packets={} details={}", packets.len(), cli.details);

    let take = cli.count.unwrap_or(usize::MAX);
    for (i, packet) in packets.into_iter().take(take).enumerate() {
        let workout = dispatch::read_packet(&packet.tag, &packet.data)
            .with_context(|| format!("Dispatching packet #{}", i + 1))?;
        let summary = workout
            .summary()
            .with_context(|| format!("Summarizing packet #{}", i + 1))?;

        if cli.details {
            println!("{}\t{}\t{}", i + 1, packet.tag, summary.message());
        } else {
            println!("{}", summary.message());
        }
    }

    Ok(())
}
