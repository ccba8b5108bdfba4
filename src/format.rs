//! NDJSON rendering of the sorted batch.

use crate::record::Record;
use crate::report::DropEvent;

/// Renders each record to one JSON line, in the order given.
///
/// A record that fails to serialize is omitted and reported as a drop
/// event; it never aborts the batch and never disturbs neighbouring
/// records. Well-formed records cannot hit this path in practice.
pub fn render_records(records: &[Record], drops: &mut Vec<DropEvent>) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::to_string(record) {
            Ok(line) => lines.push(line),
            Err(err) => drops.push(DropEvent::serialize(record, &err)),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_one_line_per_record() {
        let records = vec![
            Record {
                time: 2,
                cluster: "a".to_string(),
                ..Default::default()
            },
            Record {
                time: 1,
                cluster: "b".to_string(),
                ..Default::default()
            },
        ];
        let mut drops = Vec::new();
        let lines = render_records(&records, &mut drops);
        assert_eq!(lines.len(), 2);
        assert!(drops.is_empty());
        assert!(lines[0].contains(r#""time":2"#));
        assert!(lines[1].contains(r#""time":1"#));
    }

    #[test]
    fn test_joined_body_has_no_trailing_newline() {
        let records = vec![Record::default(), Record::default()];
        let mut drops = Vec::new();
        let body = render_records(&records, &mut drops).join("\n");
        assert!(!body.ends_with('\n'));
        assert_eq!(body.matches('\n').count(), 1);
    }

    #[test]
    fn test_empty_batch_renders_empty() {
        let mut drops = Vec::new();
        assert!(render_records(&[], &mut drops).is_empty());
    }
}
