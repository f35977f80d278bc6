//! Test builders — ergonomic constructors for records and normalizers.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use levelnorm::{FieldNames, LevelNormalizer, Record};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new()
///     .field("message", "timeout connecting to db")
///     .field("syslog_severity_code", 3)
///     .build();
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A record carrying only a syslog severity code.
pub fn syslog_record(code: impl Into<Value>) -> Record {
    RecordBuilder::new().field("syslog_severity_code", code).build()
}

/// A record carrying only a JUL level name.
pub fn jul_record(level: &str) -> Record {
    RecordBuilder::new().field("jul_log_level", level).build()
}

/// A record carrying only a JCL level name.
pub fn jcl_record(level: &str) -> Record {
    RecordBuilder::new().field("jcl_log_level", level).build()
}

/// A normalizer with the default field names.
pub fn default_normalizer() -> LevelNormalizer {
    LevelNormalizer::new(FieldNames::default()).expect("default field names must validate")
}
