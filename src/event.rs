use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Header carrying the source table identifier.
pub const HEADER_TABLE_NAME: &str = "TableName";
/// Header carrying the IIDR entry (operation) type.
pub const HEADER_ENTRY_TYPE: &str = "A_ENTTYP";
/// Header carrying the IIDR capture timestamp.
pub const HEADER_TIMESTAMP: &str = "A_TIMSTAMP";

/// Sentinel shown in confirmation output when a record has no
/// `A_ENTTYP` header (a corrupt record).
pub const OP_NOT_AVAILABLE: &str = "N/A";

/// The row-level operation a CDC record describes, identified on the
/// wire by the IIDR `A_ENTTYP` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "PT")]
    Insert,
    #[serde(rename = "UP")]
    Update,
    #[serde(rename = "DL")]
    Delete,
}

impl Operation {
    /// The `A_ENTTYP` marker for this operation.
    pub fn marker(&self) -> &'static str {
        match self {
            Operation::Insert => "PT",
            Operation::Update => "UP",
            Operation::Delete => "DL",
        }
    }

    /// Decodes an `A_ENTTYP` header value. Unknown markers are `None`,
    /// same as a missing header.
    pub fn from_marker(bytes: &[u8]) -> Option<Self> {
        match bytes {
            b"PT" => Some(Operation::Insert),
            b"UP" => Some(Operation::Update),
            b"DL" => Some(Operation::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// One synthetic CDC record: a key, an optional value (absent marks a
/// tombstone), and an ordered list of raw-byte metadata headers.
///
/// Records are immutable once constructed; a batch is only iterated,
/// never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct SampleEvent {
    pub key: Value,
    pub value: Option<Value>,
    pub headers: Vec<(String, Vec<u8>)>,
}

impl SampleEvent {
    /// Builds a record with the canonical header order:
    /// `TableName`, `A_ENTTYP`, `A_TIMSTAMP`.
    pub fn change(table: &str, op: Operation, timestamp: &str, key: Value, value: Option<Value>) -> Self {
        Self {
            key,
            value,
            headers: vec![
                (HEADER_TABLE_NAME.to_string(), table.as_bytes().to_vec()),
                (HEADER_ENTRY_TYPE.to_string(), op.marker().as_bytes().to_vec()),
                (HEADER_TIMESTAMP.to_string(), timestamp.as_bytes().to_vec()),
            ],
        }
    }

    pub fn insert(table: &str, timestamp: &str, key: Value, value: Value) -> Self {
        Self::change(table, Operation::Insert, timestamp, key, Some(value))
    }

    pub fn update(table: &str, timestamp: &str, key: Value, value: Value) -> Self {
        Self::change(table, Operation::Update, timestamp, key, Some(value))
    }

    /// A tombstone: present key, absent value, `DL` marker.
    pub fn delete(table: &str, timestamp: &str, key: Value) -> Self {
        Self::change(table, Operation::Delete, timestamp, key, None)
    }

    /// A corrupt record: the `A_ENTTYP` header is omitted so downstream
    /// error routing can be exercised. Still published like any other.
    pub fn corrupt(table: &str, timestamp: &str, key: Value, value: Value) -> Self {
        Self {
            key,
            value: Some(value),
            headers: vec![
                (HEADER_TABLE_NAME.to_string(), table.as_bytes().to_vec()),
                (HEADER_TIMESTAMP.to_string(), timestamp.as_bytes().to_vec()),
            ],
        }
    }

    /// Raw bytes of the first header with the given name.
    pub fn header(&self, name: &str) -> Option<&[u8]> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.header(name).and_then(|v| std::str::from_utf8(v).ok())
    }

    pub fn table_name(&self) -> Option<&str> {
        self.header_str(HEADER_TABLE_NAME)
    }

    /// The `A_ENTTYP` marker as text, or `None` for a corrupt record.
    pub fn operation_marker(&self) -> Option<&str> {
        self.header_str(HEADER_ENTRY_TYPE)
    }

    pub fn operation(&self) -> Option<Operation> {
        self.header(HEADER_ENTRY_TYPE).and_then(Operation::from_marker)
    }

    pub fn is_tombstone(&self) -> bool {
        self.value.is_none()
    }

    /// Key encoded as compact JSON for the record key.
    pub fn encoded_key(&self) -> crate::Result<String> {
        serde_json::to_string(&self.key).map_err(Into::into)
    }

    /// Value encoded as compact JSON, or `None` for a tombstone payload.
    pub fn encoded_value(&self) -> crate::Result<Option<String>> {
        match &self.value {
            Some(value) => Ok(Some(serde_json::to_string(value)?)),
            None => Ok(None),
        }
    }
}

/// Capture timestamp for one run: local wall-clock time with the IIDR
/// nanosecond-width fractional field, always zero-padded.
///
/// Re-runs of the seeder get a fresh timestamp; idempotence is
/// explicitly not a goal.
pub fn run_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S.000000000000").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_markers_round_trip() {
        for op in [Operation::Insert, Operation::Update, Operation::Delete] {
            assert_eq!(Operation::from_marker(op.marker().as_bytes()), Some(op));
        }
        assert_eq!(Operation::Insert.marker(), "PT");
        assert_eq!(Operation::Update.marker(), "UP");
        assert_eq!(Operation::Delete.marker(), "DL");
        assert_eq!(Operation::from_marker(b"XX"), None);
        assert_eq!(Operation::from_marker(b""), None);
    }

    #[test]
    fn test_canonical_header_order() {
        let event = SampleEvent::insert("TEST_ORDERS", "ts", json!({"ID": 1}), json!({"ID": 1}));
        let names: Vec<&str> = event.headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["TableName", "A_ENTTYP", "A_TIMSTAMP"]);
    }

    #[test]
    fn test_tombstone_has_delete_marker_and_no_value() {
        let event = SampleEvent::delete("TEST_ORDERS", "ts", json!({"ID": 3}));
        assert!(event.is_tombstone());
        assert_eq!(event.operation(), Some(Operation::Delete));
        assert_eq!(event.encoded_value().unwrap(), None);
    }

    #[test]
    fn test_corrupt_record_has_no_entry_type() {
        let event = SampleEvent::corrupt("TEST_ORDERS", "ts", json!({"ID": 99}), json!({"ID": 99}));
        assert_eq!(event.operation_marker(), None);
        assert_eq!(event.operation(), None);
        assert_eq!(event.table_name(), Some("TEST_ORDERS"));
        // corrupt records still carry a full value payload
        assert!(!event.is_tombstone());
        let names: Vec<&str> = event.headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["TableName", "A_TIMSTAMP"]);
    }

    #[test]
    fn test_key_encodes_to_compact_json() {
        let event = SampleEvent::insert("TEST_ORDERS", "ts", json!({"ID": 1}), json!({"ID": 1}));
        assert_eq!(event.encoded_key().unwrap(), r#"{"ID":1}"#);
    }

    #[test]
    fn test_run_timestamp_format() {
        let ts = run_timestamp();
        // e.g. "2026-01-15 10:00:00.000000000000"
        assert_eq!(ts.len(), 32);
        assert!(ts.ends_with(".000000000000"));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
