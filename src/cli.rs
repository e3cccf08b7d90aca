//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Plot magnetization sweep files as error-bar charts.
///
/// Each input file holds one `temperature,magnetization` sample per line.
/// One PNG is written next to each input, same name with a `.png` extension.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Sweep files to plot.
    ///
    /// When omitted, every `*.txt` file under --dir is processed.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Directory searched for `*.txt` sweep files when no FILEs are given.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,

    /// Keep only the upper half of each temperature group.
    ///
    /// Drops the lowest magnetizations per temperature before computing the
    /// plotted statistics.
    #[arg(long)]
    pub discard_bottom: bool,
}
