//! Date derivation and message cleanup for parsed records.

use chrono::{DateTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::record::Record;

lazy_static! {
    /// Embedded control tokens: two colons followed by word characters.
    /// Compiled once and shared read-only across all workers.
    static ref CONTROL_TOKEN: Regex = Regex::new(r"::\w+").unwrap();
}

/// Rewrites `date` and `message` in place. Idempotent: a second pass
/// finds no tokens to strip and recomputes the same date, so callers
/// treat the record as finalized after one call.
pub fn normalize(record: &mut Record) {
    record.date = format_date(record.time);
    record.message = clean_message(&record.message);
}

/// RFC 3339 UTC rendering of an epoch-milliseconds timestamp, seconds
/// precision. A zero or absent `time` renders the epoch itself; values
/// outside chrono's representable range clamp to the epoch.
pub fn format_date(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Strips every control token, then trims the space characters left
/// behind at the start of the message. Internal and trailing whitespace
/// introduced by removal is left as-is.
pub fn clean_message(message: &str) -> String {
    let mut cleaned = message.to_string();
    // Removal can splice a new token together (":::a:b" -> "::b"), so
    // strip repeatedly until a pass finds nothing.
    loop {
        let next = CONTROL_TOKEN.replace_all(&cleaned, "");
        if next == cleaned {
            break;
        }
        cleaned = next.into_owned();
    }
    cleaned.trim_start_matches(' ').to_string()
}
