//! Batch orchestration: split, fan out, sort, render.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::format;
use crate::parallel::{PoolConfig, WorkerPool};
use crate::record::Record;
use crate::report::DropEvent;

/// What one batch run produced: the response body plus the
/// observability side channel.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Newline-joined serialized records, most recent first, no
    /// trailing newline. Empty when no line survived.
    pub body: String,
    /// Number of records in the body.
    pub records: usize,
    /// Per-line drop events, in no particular order.
    pub drops: Vec<DropEvent>,
    /// Lines that only decoded after the cluster repair.
    pub repaired: usize,
}

/// Processes one raw batch end to end.
///
/// A zero-byte input is a structural failure of the whole batch,
/// distinct from a batch where every line was dropped: the latter is a
/// normal outcome with an empty body.
pub fn process_batch(input: &str, config: &Config) -> Result<BatchOutcome> {
    if input.is_empty() {
        bail!("empty input: nothing to process");
    }

    // Trailing newlines produce empty segments here; those are ordinary
    // droppable lines, not errors.
    let lines: Vec<String> = input.split('\n').map(str::to_string).collect();

    let pool = WorkerPool::new(PoolConfig {
        num_workers: config.effective_threads(),
        chunk_size: config.effective_chunk_size(),
        ..PoolConfig::default()
    });
    let mut output = pool.process(lines)?;

    sort_records(&mut output.records);

    let rendered = format::render_records(&output.records, &mut output.drops);
    Ok(BatchOutcome {
        records: rendered.len(),
        body: rendered.join("\n"),
        drops: output.drops,
        repaired: output.repaired,
    })
}

/// Total order by `time`, most recent first. Stable, so records with
/// equal timestamps keep their collected order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| b.time.cmp(&a.time));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.performance.threads = 2;
        config
    }

    #[test]
    fn test_empty_input_is_a_structural_failure() {
        let result = process_batch("", &test_config());
        assert!(result.is_err());
    }

    #[test]
    fn test_all_lines_dropped_is_success_with_empty_body() {
        let outcome = process_batch("garbage\nmore garbage", &test_config()).unwrap();
        assert_eq!(outcome.records, 0);
        assert_eq!(outcome.body, "");
        assert_eq!(outcome.drops.len(), 2);
    }

    #[test]
    fn test_batch_sorted_descending_with_drops_excluded() {
        let input = [
            r#"{"time":10,"msg":"a","cluster":"1","level":"info"}"#,
            "not json",
            r#"{"time":30,"msg":"c","cluster":"3","level":"info"}"#,
            "%%%%",
            r#"{"time":20,"msg":"b","cluster":"2","level":"info"}"#,
        ]
        .join("\n");

        let outcome = process_batch(&input, &test_config()).unwrap();
        assert_eq!(outcome.records, 3);
        assert_eq!(outcome.drops.len(), 2);

        let times: Vec<i64> = outcome
            .body
            .lines()
            .map(|l| serde_json::from_str::<Record>(l).unwrap().time)
            .collect();
        assert_eq!(times, vec![30, 20, 10]);
    }

    #[test]
    fn test_trailing_newline_becomes_a_droppable_line() {
        let input = "{\"time\":1,\"msg\":\"a\",\"cluster\":\"x\",\"level\":\"info\"}\n";
        let outcome = process_batch(input, &test_config()).unwrap();
        assert_eq!(outcome.records, 1);
        assert_eq!(outcome.drops.len(), 1);
    }

    #[test]
    fn test_sort_is_stable_on_equal_timestamps() {
        let mut records: Vec<Record> = (0..4)
            .map(|i| Record {
                time: 5,
                cluster: i.to_string(),
                ..Default::default()
            })
            .collect();
        sort_records(&mut records);
        let clusters: Vec<&str> = records.iter().map(|r| r.cluster.as_str()).collect();
        assert_eq!(clusters, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn test_sort_never_drops_records() {
        let mut records: Vec<Record> = (0..100)
            .map(|i| Record {
                time: (i * 37) % 11,
                ..Default::default()
            })
            .collect();
        sort_records(&mut records);
        assert_eq!(records.len(), 100);
        assert!(records.windows(2).all(|w| w[0].time >= w[1].time));
    }
}
