//! Pool orchestration: fan lines out to workers, collect results.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, unbounded};
use std::thread;

use crate::record::Record;
use crate::report::DropEvent;

use super::types::{Chunk, PoolConfig};
use super::worker::worker_thread;

/// Everything the pool produced for one batch. Record order is
/// unspecified; only the multiset of records is guaranteed.
#[derive(Debug, Default)]
pub struct PoolOutput {
    pub records: Vec<Record>,
    pub drops: Vec<DropEvent>,
    pub repaired: usize,
}

/// Fixed-size worker pool processing one in-memory batch of lines.
pub struct WorkerPool {
    config: PoolConfig,
}

impl WorkerPool {
    pub fn new(config: PoolConfig) -> Self {
        Self { config }
    }

    /// Runs the whole batch through the pool, blocking until every line
    /// has been processed and every worker has observed queue
    /// exhaustion and exited.
    ///
    /// Per-line failures come back as drop events in the output. Only
    /// pool-level failures (a worker that cannot be started, or one
    /// that panicked) are errors.
    pub fn process(&self, lines: Vec<String>) -> Result<PoolOutput> {
        let (work_sender, work_receiver) = match self.config.buffer_size {
            Some(size) => bounded(size),
            None => unbounded(),
        };
        // Results are unbounded so workers never block on send while the
        // caller is still feeding the bounded work channel.
        let (result_sender, result_receiver) = unbounded();

        let num_workers = self.config.num_workers.max(1);
        let mut worker_handles = Vec::with_capacity(num_workers);
        for worker_id in 0..num_workers {
            let work_receiver = work_receiver.clone();
            let result_sender = result_sender.clone();
            let handle = thread::Builder::new()
                .name(format!("logmend-worker-{}", worker_id))
                .spawn(move || worker_thread(work_receiver, result_sender))
                .context("failed to start worker thread")?;
            worker_handles.push(handle);
        }
        drop(work_receiver);
        drop(result_sender);

        let chunk_size = self.config.chunk_size.max(1);
        let mut chunk_id = 0u64;
        let mut start_line_num = 1usize;
        let mut lines = lines.into_iter().peekable();
        while lines.peek().is_some() {
            let chunk_lines: Vec<String> = lines.by_ref().take(chunk_size).collect();
            let line_count = chunk_lines.len();
            let chunk = Chunk {
                id: chunk_id,
                lines: chunk_lines,
                start_line_num,
            };
            chunk_id += 1;
            start_line_num += line_count;
            if work_sender.send(chunk).is_err() {
                break;
            }
        }
        // Closing the work channel is the completion signal for workers.
        drop(work_sender);

        let mut output = PoolOutput::default();
        while let Ok(result) = result_receiver.recv() {
            output.records.extend(result.records);
            output.drops.extend(result.drops);
            output.repaired += result.repaired;
        }

        for handle in worker_handles {
            handle
                .join()
                .map_err(|_| anyhow!("worker thread panicked"))?;
        }

        Ok(output)
    }
}
