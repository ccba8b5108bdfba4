//! Bounded worker pool for parse, repair, and normalize.
//!
//! Lines fan out to a fixed number of worker threads over a channel and
//! the normalized records fan back in unordered; ordering is imposed
//! afterwards by the batch sorter.

mod processor;
mod types;
mod worker;

pub use processor::{PoolOutput, WorkerPool};
pub use types::{Chunk, ChunkResult, PoolConfig};
