//! Structured per-line observability events and their aggregation.
//!
//! Drops never fail a batch. They travel out of the pool as values so
//! callers and tests can assert on them directly; echoing them to
//! stderr is a presentation decision made at the CLI layer.

use serde_json::json;
use std::collections::HashMap;

/// Maximum length of a line excerpt carried in an event.
const EXCERPT_MAX: usize = 120;

/// Why a line or record was excluded from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// The line failed strict decode and the repaired retry.
    Decode,
    /// A normalized record could not be rendered back to JSON.
    Serialize,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Decode => "decode",
            DropReason::Serialize => "serialize",
        }
    }
}

/// One dropped line, with enough context to debug the producer.
#[derive(Debug, Clone)]
pub struct DropEvent {
    pub reason: DropReason,
    pub line_number: Option<usize>,
    pub excerpt: String,
    pub detail: String,
}

impl DropEvent {
    pub fn decode(line_number: usize, line: &str, err: &serde_json::Error) -> Self {
        Self {
            reason: DropReason::Decode,
            line_number: Some(line_number),
            excerpt: excerpt(line),
            detail: err.to_string(),
        }
    }

    pub fn serialize(record: &crate::record::Record, err: &serde_json::Error) -> Self {
        Self {
            reason: DropReason::Serialize,
            line_number: None,
            excerpt: excerpt(&record.message),
            detail: err.to_string(),
        }
    }
}

/// Truncates a line for inclusion in events and warnings.
pub fn excerpt(line: &str) -> String {
    if line.len() <= EXCERPT_MAX {
        return line.to_string();
    }
    let mut end = EXCERPT_MAX;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &line[..end])
}

/// Collects drop and repair events for end-of-run reporting.
#[derive(Debug)]
pub struct DropReporter {
    quiet: bool,
    counts: HashMap<&'static str, usize>,
    examples: HashMap<&'static str, Vec<String>>,
    repaired: usize,
}

impl DropReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            counts: HashMap::new(),
            examples: HashMap::new(),
            repaired: 0,
        }
    }

    /// Track an event, warning on stderr unless quiet mode is on.
    pub fn record(&mut self, event: &DropEvent) {
        if !self.quiet {
            match event.line_number {
                Some(n) => eprintln!(
                    "logmend: dropped line {}: {} ({})",
                    n, event.detail, event.excerpt
                ),
                None => eprintln!(
                    "logmend: dropped record: {} ({})",
                    event.detail, event.excerpt
                ),
            }
        }

        let key = event.reason.as_str();
        *self.counts.entry(key).or_insert(0) += 1;
        let examples = self.examples.entry(key).or_default();
        if examples.len() < 3 {
            examples.push(event.excerpt.clone());
        }
    }

    pub fn record_repairs(&mut self, repaired: usize) {
        self.repaired += repaired;
    }

    /// JSON summary of drops and repairs, or None when nothing happened.
    pub fn summary(&self) -> Option<String> {
        if self.counts.is_empty() && self.repaired == 0 {
            return None;
        }

        let mut summary = json!({ "repaired": self.repaired });
        for (reason, count) in &self.counts {
            let empty = Vec::new();
            let examples = self.examples.get(reason).unwrap_or(&empty);
            summary[*reason] = json!({
                "count": count,
                "examples": examples,
            });
        }

        serde_json::to_string_pretty(&summary).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_line_unchanged() {
        assert_eq!(excerpt("hello"), "hello");
    }

    #[test]
    fn test_excerpt_truncates_long_lines() {
        let line = "x".repeat(500);
        let cut = excerpt(&line);
        assert!(cut.len() < line.len());
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let line = "ü".repeat(200);
        let cut = excerpt(&line);
        assert!(cut.ends_with("..."));
        // must not panic and must stay valid UTF-8
        assert!(cut.chars().all(|c| c == 'ü' || c == '.'));
    }

    #[test]
    fn test_reporter_summary_counts_and_examples() {
        let mut reporter = DropReporter::new(true);
        let err = serde_json::from_str::<crate::record::Record>("not json").unwrap_err();
        for n in 1..=5 {
            reporter.record(&DropEvent::decode(n, "garbage", &err));
        }
        reporter.record_repairs(2);

        let summary = reporter.summary().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&summary).unwrap();
        assert_eq!(parsed["repaired"], 2);
        assert_eq!(parsed["decode"]["count"], 5);
        assert_eq!(parsed["decode"]["examples"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_reporter_summary_none_when_clean() {
        let reporter = DropReporter::new(true);
        assert!(reporter.summary().is_none());
    }
}
