//! Worker thread for the normalization pool.

use crossbeam_channel::{Receiver, Sender};

use crate::normalize;
use crate::parser::{self, LineOutcome};

use super::types::{Chunk, ChunkResult};

/// Worker thread: drains chunks until the work channel closes.
///
/// Each line goes through decode, repair, and normalize in isolation.
/// Failures become drop events inside the chunk result; they never
/// cross the thread boundary as errors.
pub(crate) fn worker_thread(work_receiver: Receiver<Chunk>, result_sender: Sender<ChunkResult>) {
    while let Ok(chunk) = work_receiver.recv() {
        let mut result = ChunkResult {
            chunk_id: chunk.id,
            records: Vec::with_capacity(chunk.lines.len()),
            ..Default::default()
        };

        for (line_idx, line) in chunk.lines.iter().enumerate() {
            let line_number = chunk.start_line_num + line_idx;
            match parser::parse_line(line, line_number) {
                LineOutcome::Parsed {
                    mut record,
                    repaired,
                } => {
                    normalize::normalize(&mut record);
                    if repaired {
                        result.repaired += 1;
                    }
                    result.records.push(record);
                }
                LineOutcome::Dropped(event) => result.drops.push(event),
            }
        }

        if result_sender.send(result).is_err() {
            // Collector hung up; nothing left to do.
            break;
        }
    }
}
