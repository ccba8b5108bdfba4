use serde::{Deserialize, Serialize};

/// One log record in the wire format shared with existing producers.
///
/// The JSON field names (`date`, `level`, `msg`, `time`, `cluster`,
/// `data`) are the compatibility surface and must not change. `time`
/// is epoch milliseconds and is the source of truth for ordering and
/// for the derived `date` string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, rename = "msg")]
    pub message: String,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub cluster: String,
    /// Free-form passthrough payload. Omitted from output entirely when
    /// absent, never emitted as `null` or `{}`.
    #[serde(default, rename = "data", skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Map<String, serde_json::Value>>,
}
