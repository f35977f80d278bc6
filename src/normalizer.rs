//! The level normalizer itself.
//!
//! [`LevelNormalizer::normalize`] is a pure function of (configuration,
//! record): it inspects the three configured input fields in fixed precedence
//! order, resolves the last one that carries a valid table key, and writes the
//! mapped ordinal into the output field. Everything it holds is immutable
//! after construction, so one instance can serve any number of threads.

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::FieldNames;
use crate::error::ConfigError;
use crate::tables::{JCL_LEVELS, JUL_LEVELS, SYSLOG_LEVELS};
use crate::Record;

/// Maps syslog, JUL, and JCL severity indicators onto one ordinal scale.
///
/// See the [crate docs](crate) for the precedence rule that applies when more
/// than one input field is populated.
#[derive(Debug, Clone)]
pub struct LevelNormalizer {
    fields: FieldNames,
}

impl LevelNormalizer {
    /// Build a normalizer for the given field names.
    ///
    /// Fails only on malformed configuration; performs no I/O.
    pub fn new(fields: FieldNames) -> Result<Self, ConfigError> {
        fields.validate()?;
        Ok(Self { fields })
    }

    /// The field names this normalizer was built with.
    pub fn field_names(&self) -> &FieldNames {
        &self.fields
    }

    /// Resolve the record's severity and write it to the output field.
    ///
    /// Returns `true` iff at least one input field held a valid table key.
    /// When none did, the record is left untouched. Input fields that are
    /// absent, of an unexpected type, or outside their table are skipped
    /// without error; this call is total over all records.
    ///
    /// Each match writes the output field immediately, so a later-checked
    /// field sees any write an earlier one made — including into an output
    /// field configured to alias an input field.
    pub fn normalize(&self, record: &mut Record) -> bool {
        let mut matched = self.apply(record, &self.fields.syslog_severity_code, syslog_level);
        matched |= self.apply(record, &self.fields.jul_log_level, |v| {
            named_level(v, &JUL_LEVELS)
        });
        matched |= self.apply(record, &self.fields.jcl_log_level, |v| {
            named_level(v, &JCL_LEVELS)
        });
        matched
    }

    /// Check one input field and, on a table hit, write the ordinal into the
    /// output field. Returns whether the field matched.
    fn apply(
        &self,
        record: &mut Record,
        field: &str,
        lookup: impl Fn(&Value) -> Option<u16>,
    ) -> bool {
        let hit = match record.get(field) {
            None => return false,
            Some(value) => match lookup(value) {
                Some(level) => level,
                None => {
                    trace!(field, %value, "severity value has no mapping, skipping");
                    return false;
                }
            },
        };
        debug!(field, level = hit, output = %self.fields.log_level, "resolved normalized level");
        record.insert(self.fields.log_level.clone(), Value::from(hit));
        true
    }
}

/// Look up a syslog severity code value (integer, or a string holding one).
fn syslog_level(value: &Value) -> Option<u16> {
    let code = match value {
        Value::Number(n) => u8::try_from(n.as_u64()?).ok()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    SYSLOG_LEVELS.get(&code).copied()
}

/// Look up a level-name value in the given table. Exact, case-sensitive.
fn named_level(value: &Value, table: &phf::Map<&'static str, u16>) -> Option<u16> {
    table.get(value.as_str()?).copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
