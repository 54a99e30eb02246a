//! Ordered severity classification, TRACE (lowest) to CRITICAL (highest).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::ConfigError;

/// Severity of a log record.
///
/// Discriminants follow the conventional numeric ladder, so severities
/// compare and filter by value (`Debug < Info < Success < Warning < Error <
/// Critical`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Trace = 5,
    Debug = 10,
    Info = 20,
    Success = 25,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Upper-case name, as used in settings and emitted records.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Numeric value of the severity.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// `(name, value)` pair view.
    pub fn as_tuple(self) -> (&'static str, u8) {
        (self.name(), self.value())
    }

    /// Closest `tracing` verbosity level.
    ///
    /// The backend has five levels; SUCCESS rides on INFO and CRITICAL on
    /// ERROR, with the severity name carried as a record field.
    pub fn backend_level(self) -> Level {
        match self {
            Severity::Trace => Level::TRACE,
            Severity::Debug => Level::DEBUG,
            Severity::Info | Severity::Success => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Error | Severity::Critical => Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    /// Title-case name, e.g. `Warning`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        write!(f, "{}{}", &name[..1], name[1..].to_lowercase())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "SUCCESS" => Ok(Severity::Success),
            "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            other => Err(ConfigError::validation(format!(
                "unknown severity level: {other}"
            ))),
        }
    }
}
