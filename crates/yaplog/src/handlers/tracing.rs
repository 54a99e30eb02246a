//! Handler backed by the `tracing` macros.

use std::error::Error;

use super::Handler;

/// Adapter delegating each capability to the matching `tracing` macro.
///
/// CRITICAL has no dedicated backend level; it is emitted at ERROR with the
/// severity name carried as a field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHandler;

impl TracingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for TracingHandler {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn critical(&self, message: &str) {
        tracing::error!(severity = "CRITICAL", "{message}");
    }

    fn exception(&self, message: &str, error: &(dyn Error + 'static)) {
        tracing::error!(error = %error, "{message}");
    }
}
