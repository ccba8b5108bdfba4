// Core library for the logmend batch log normalizer

pub mod batch;
pub mod cli;
pub mod config;
pub mod format;
pub mod normalize;
pub mod parallel;
pub mod parser;
pub mod record;
pub mod report;

pub use batch::{process_batch, BatchOutcome};
pub use config::Config;
pub use record::Record;
pub use report::{DropEvent, DropReason, DropReporter};
