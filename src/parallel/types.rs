//! Type definitions for the worker pool.

use crate::record::Record;
use crate::report::DropEvent;

/// Configuration for the worker pool
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Worker thread count; one per logical core by default.
    pub num_workers: usize,
    /// Lines handed to a worker at a time.
    pub chunk_size: usize,
    /// Bound on the work channel; None means unbounded.
    pub buffer_size: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            chunk_size: 256,
            buffer_size: Some(1024),
        }
    }
}

/// A contiguous run of raw lines handed to one worker.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub id: u64,
    pub lines: Vec<String>,
    pub start_line_num: usize,
}

/// Normalized records and drop events produced from one chunk.
#[derive(Debug, Default)]
pub struct ChunkResult {
    pub chunk_id: u64,
    pub records: Vec<Record>,
    pub drops: Vec<DropEvent>,
    pub repaired: usize,
}
