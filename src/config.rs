//! Field-name configuration for the normalizer.
//!
//! [`FieldNames`] holds the four record keys the normalizer touches: the
//! three input fields (syslog code, JUL level, JCL level) and the output
//! field. Hosts with typed configuration deserialize it directly (unknown
//! keys are rejected by serde); hosts that pass plugin options around as
//! untyped JSON use [`FieldNames::from_options`], which offers a strict and
//! a permissive unknown-key policy.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::Record;

// ---------------------------------------------------------------------------
// FieldNames
// ---------------------------------------------------------------------------

/// Names of the record fields read and written by the normalizer.
///
/// Set once at construction, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldNames {
    /// Input field holding a syslog severity code (0–7).
    #[serde(default = "default_syslog_severity_code")]
    pub syslog_severity_code: String,
    /// Input field holding a java.util.logging level name.
    #[serde(default = "default_jul_log_level")]
    pub jul_log_level: String,
    /// Input field holding a Jakarta Commons Logging level name.
    #[serde(default = "default_jcl_log_level")]
    pub jcl_log_level: String,
    /// Output field receiving the normalized ordinal.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_syslog_severity_code() -> String { "syslog_severity_code".to_string() }
fn default_jul_log_level() -> String { "jul_log_level".to_string() }
fn default_jcl_log_level() -> String { "jcl_log_level".to_string() }
fn default_log_level() -> String { "log_level".to_string() }

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            syslog_severity_code: default_syslog_severity_code(),
            jul_log_level: default_jul_log_level(),
            jcl_log_level: default_jcl_log_level(),
            log_level: default_log_level(),
        }
    }
}

/// Policy for option keys that [`FieldNames::from_options`] does not
/// recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Fail construction with [`ConfigError::UnknownOption`].
    #[default]
    Deny,
    /// Log a warning and ignore the key.
    Warn,
}

impl FieldNames {
    /// Build from an untyped options map, defaulting any omitted name.
    ///
    /// Known keys must have string values; unknown keys are handled per
    /// `unknown`.
    pub fn from_options(options: &Record, unknown: UnknownKeys) -> Result<Self, ConfigError> {
        let mut names = Self::default();
        for (key, value) in options {
            let slot = match key.as_str() {
                "syslog_severity_code" => &mut names.syslog_severity_code,
                "jul_log_level" => &mut names.jul_log_level,
                "jcl_log_level" => &mut names.jcl_log_level,
                "log_level" => &mut names.log_level,
                _ => match unknown {
                    UnknownKeys::Deny => {
                        return Err(ConfigError::UnknownOption(key.clone()));
                    }
                    UnknownKeys::Warn => {
                        tracing::warn!(option = %key, "ignoring unknown configuration option");
                        continue;
                    }
                },
            };
            *slot = value
                .as_str()
                .ok_or_else(|| ConfigError::InvalidFieldName {
                    name: key.clone(),
                    reason: "option value must be a string",
                })?
                .to_string();
        }
        Ok(names)
    }

    /// Reject names that cannot work as record keys.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            &self.syslog_severity_code,
            &self.jul_log_level,
            &self.jcl_log_level,
            &self.log_level,
        ];
        for name in all {
            if name.is_empty() {
                return Err(ConfigError::InvalidFieldName {
                    name: name.clone(),
                    reason: "must not be empty",
                });
            }
            if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
                return Err(ConfigError::InvalidFieldName {
                    name: name.clone(),
                    reason: "must not contain whitespace or control characters",
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
