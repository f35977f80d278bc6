//! levelnorm — ordinal log-level normalization.
//!
//! Different logging frameworks encode severity differently: syslog carries a
//! numeric code 0–7, java.util.logging uses names like `FINEST`/`SEVERE`, and
//! Jakarta Commons Logging uses `TRACE`/`FATAL`. This crate maps all three
//! onto one ordinal scale in 100–999 (larger = more severe) so downstream
//! consumers can filter and rank records uniformly regardless of origin.
//!
//! # Usage
//!
//! ```rust
//! use levelnorm::{FieldNames, LevelNormalizer};
//!
//! let normalizer = LevelNormalizer::new(FieldNames::default()).unwrap();
//!
//! let mut record = levelnorm::Record::new();
//! record.insert("syslog_severity_code".into(), 4.into());
//!
//! assert!(normalizer.normalize(&mut record));
//! assert_eq!(record["log_level"], 700);
//! ```
//!
//! # Precedence
//!
//! The three input fields are checked in a fixed order:
//!
//! ```text
//! syslog_severity_code ──► jul_log_level ──► jcl_log_level ──► log_level
//! ```
//!
//! and a later valid match **overwrites** an earlier one, so when more than
//! one input field is populated the last valid field in that order wins.
//! Populate at most one input field per record (e.g. by running the
//! normalizer inside a branch keyed on log source type) unless you want that
//! behaviour.

pub mod config;
pub mod error;
pub mod normalizer;
mod tables;

pub use config::{FieldNames, UnknownKeys};
pub use error::ConfigError;
pub use normalizer::LevelNormalizer;

/// A log record as handed over by the host pipeline: an ordered mapping from
/// field name to JSON value. The normalizer mutates it in place and retains
/// no reference afterwards.
pub type Record = serde_json::Map<String, serde_json::Value>;
