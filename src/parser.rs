//! Strict-then-repair decoding of raw batch lines.

use crate::record::Record;
use crate::report::DropEvent;

/// Known-bad encodings of the cluster field and their quoted forms.
/// Some producers emit the cluster id as a bare `0` or `1`; the repair
/// quotes it so strict decode succeeds. Each substitution fires at most
/// once per line, on an exact textual match only.
const CLUSTER_REPAIRS: [(&str, &str); 2] = [
    (r#""cluster":0"#, r#""cluster":"0""#),
    (r#""cluster":1"#, r#""cluster":"1""#),
];

/// Outcome of decoding one raw line.
#[derive(Debug)]
pub enum LineOutcome {
    Parsed { record: Record, repaired: bool },
    Dropped(DropEvent),
}

/// Decodes a line into a [`Record`], repairing the known cluster
/// malformation when strict decode fails. Lines that fail both attempts
/// become a drop event; this never aborts the batch.
pub fn parse_line(line: &str, line_number: usize) -> LineOutcome {
    let strict_err = match serde_json::from_str::<Record>(line) {
        Ok(record) => {
            return LineOutcome::Parsed {
                record,
                repaired: false,
            }
        }
        Err(err) => err,
    };

    let mended = repair_cluster(line);
    if mended != line {
        match serde_json::from_str::<Record>(&mended) {
            Ok(record) => {
                return LineOutcome::Parsed {
                    record,
                    repaired: true,
                }
            }
            Err(err) => return LineOutcome::Dropped(DropEvent::decode(line_number, line, &err)),
        }
    }

    LineOutcome::Dropped(DropEvent::decode(line_number, line, &strict_err))
}

fn repair_cluster(line: &str) -> String {
    CLUSTER_REPAIRS
        .iter()
        .fold(line.to_string(), |mended, (bad, good)| {
            mended.replacen(bad, good, 1)
        })
}
