//! Error types for levelnorm.
//!
//! The only failure surface is construction: [`ConfigError`] is returned when
//! the supplied field-name configuration is malformed. Normalization itself
//! has no error path — absent or unrecognized input values are expected and
//! degrade to "no mapping applied".

use thiserror::Error;

/// Construction-time configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field name is not usable as a record key (empty, whitespace, a
    /// non-string option value, …).
    #[error("invalid field name {name:?}: {reason}")]
    InvalidFieldName { name: String, reason: &'static str },

    /// An option key that the normalizer does not recognize, rejected under
    /// the strict [`UnknownKeys::Deny`](crate::UnknownKeys::Deny) policy.
    #[error("unknown configuration option {0:?}")]
    UnknownOption(String),
}
