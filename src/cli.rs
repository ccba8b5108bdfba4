use clap::Parser;

/// Command-line interface for logmend.
#[derive(Parser, Debug)]
#[command(name = "logmend")]
#[command(about = "Repairs, normalizes, and sorts batches of JSON log lines")]
#[command(
    long_about = "Repairs, normalizes, and sorts batches of JSON log lines\n\n\
Reads one batch of newline-delimited JSON records from files or stdin, fixes \
the known bare-number encoding of the cluster field, derives the date field \
from the epoch-millisecond timestamp, strips ::token noise from messages, and \
writes the records to stdout most recent first."
)]
#[command(version)]
pub struct Cli {
    /// Input files forming one batch (reads stdin when none are given)
    pub files: Vec<String>,

    #[arg(
        short = 'j',
        long = "threads",
        default_value_t = 0,
        help_heading = "Performance Options",
        help = "Worker threads (0 = one per logical core)"
    )]
    pub threads: usize,

    #[arg(
        long = "chunk-size",
        default_value_t = 0,
        help_heading = "Performance Options",
        help = "Lines handed to a worker at a time (0 = default)"
    )]
    pub chunk_size: usize,

    #[arg(
        short = 'q',
        long = "quiet",
        help_heading = "Output Options",
        help = "Suppress per-line drop warnings on stderr"
    )]
    pub quiet: bool,

    #[arg(
        long = "stats",
        help_heading = "Output Options",
        help = "Print a drop/repair summary to stderr after the batch"
    )]
    pub stats: bool,
}
