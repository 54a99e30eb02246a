//! Logging handlers: the capability set and its backend adapters.

use std::error::Error;

pub mod tracing;

pub use self::tracing::TracingHandler;

/// Capability set every logging handler implements.
///
/// Each method's only contract is that the message (and, for `exception`,
/// the causing error) reaches the underlying backend at the matching
/// severity. Additional sinks (file, network) are anticipated variants.
pub trait Handler: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    fn critical(&self, message: &str);

    /// Log `message` at error severity together with the causing error.
    fn exception(&self, message: &str, error: &(dyn Error + 'static));
}
