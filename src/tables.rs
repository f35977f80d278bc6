//! Static severity tables.
//!
//! Three compile-time maps from a source-specific key to the normalized
//! ordinal. One copy each, process-wide, read-only; every instance of the
//! normalizer shares them. All mapped values lie in
//! {100, 200, 300, 400, 500, 600, 700, 750, 800, 850, 900} — nothing else is
//! ever written to a record.

use phf::phf_map;

/// Syslog severity codes per RFC 5424 §6.2.1 (facility-independent).
pub(crate) static SYSLOG_LEVELS: phf::Map<u8, u16> = phf_map! {
    0u8 => 900, // Emergency
    1u8 => 850, // Alert
    2u8 => 800, // Critical
    3u8 => 750, // Error
    4u8 => 700, // Warning
    5u8 => 600, // Notice
    6u8 => 500, // Informational
    7u8 => 300, // Debug
};

/// java.util.logging level names.
pub(crate) static JUL_LEVELS: phf::Map<&'static str, u16> = phf_map! {
    "SEVERE" => 900,
    "WARNING" => 700,
    "INFO" => 500,
    "CONFIG" => 400,
    "FINE" => 300,
    "FINER" => 200,
    "FINEST" => 100,
};

/// Jakarta Commons Logging level names.
pub(crate) static JCL_LEVELS: phf::Map<&'static str, u16> = phf_map! {
    "FATAL" => 900,
    "ERROR" => 850,
    "WARN" => 700,
    "INFO" => 500,
    "DEBUG" => 300,
    "TRACE" => 100,
};
