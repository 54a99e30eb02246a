//! Handler fan-out logger.

use std::error::Error;

use crate::handlers::{Handler, TracingHandler};
use crate::settings::Settings;

/// Fans every record out to its configured handlers.
///
/// The logger exclusively owns its handler list. The settings `handlers`
/// mapping selects which adapters are built; entries for backends this crate
/// does not ship are ignored, and an empty selection falls back to the
/// tracing backend.
pub struct Logger {
    handlers: Vec<Box<dyn Handler>>,
}

impl Logger {
    /// Build a logger from handler settings.
    pub fn new(settings: &Settings) -> Self {
        let mut handlers: Vec<Box<dyn Handler>> = Vec::new();
        for name in settings.handlers.keys() {
            if name == "tracing" {
                handlers.push(Box::new(TracingHandler::new()));
            }
        }
        if handlers.is_empty() {
            handlers.push(Box::new(TracingHandler::new()));
        }
        Self { handlers }
    }

    /// Build a logger over an explicit handler list.
    pub fn with_handlers(handlers: Vec<Box<dyn Handler>>) -> Self {
        Self { handlers }
    }

    pub fn debug(&self, message: &str) {
        for handler in &self.handlers {
            handler.debug(message);
        }
    }

    pub fn info(&self, message: &str) {
        for handler in &self.handlers {
            handler.info(message);
        }
    }

    pub fn warning(&self, message: &str) {
        for handler in &self.handlers {
            handler.warning(message);
        }
    }

    pub fn error(&self, message: &str) {
        for handler in &self.handlers {
            handler.error(message);
        }
    }

    pub fn critical(&self, message: &str) {
        for handler in &self.handlers {
            handler.critical(message);
        }
    }

    pub fn exception(&self, message: &str, error: &(dyn Error + 'static)) {
        for handler in &self.handlers {
            handler.exception(message, error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every call as `(severity, message)`.
    #[derive(Default)]
    struct CaptureHandler {
        records: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl CaptureHandler {
        fn push(&self, severity: &str, message: &str) {
            self.records
                .lock()
                .unwrap()
                .push((severity.to_string(), message.to_string()));
        }
    }

    impl Handler for CaptureHandler {
        fn debug(&self, message: &str) {
            self.push("debug", message);
        }
        fn info(&self, message: &str) {
            self.push("info", message);
        }
        fn warning(&self, message: &str) {
            self.push("warning", message);
        }
        fn error(&self, message: &str) {
            self.push("error", message);
        }
        fn critical(&self, message: &str) {
            self.push("critical", message);
        }
        fn exception(&self, message: &str, error: &(dyn std::error::Error + 'static)) {
            self.push("exception", &format!("{message}: {error}"));
        }
    }

    #[test]
    fn every_handler_receives_every_record() {
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::with_handlers(vec![
            Box::new(CaptureHandler {
                records: Arc::clone(&first),
            }),
            Box::new(CaptureHandler {
                records: Arc::clone(&second),
            }),
        ]);

        logger.info("hello");
        logger.warning("careful");

        let expected = vec![
            ("info".to_string(), "hello".to_string()),
            ("warning".to_string(), "careful".to_string()),
        ];
        assert_eq!(*first.lock().unwrap(), expected);
        assert_eq!(*second.lock().unwrap(), expected);
    }

    #[test]
    fn exception_carries_the_causing_error() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::with_handlers(vec![Box::new(CaptureHandler {
            records: Arc::clone(&records),
        })]);

        let error = std::io::Error::other("disk on fire");
        logger.exception("write failed", &error);

        let captured = records.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].0, "exception");
        assert!(captured[0].1.contains("disk on fire"));
    }

    #[test]
    fn settings_without_known_handlers_fall_back_to_tracing() {
        let mut settings = Settings::default();
        settings.handlers.clear();
        settings
            .handlers
            .insert("syslog".to_string(), serde_json::Value::Null);

        let logger = Logger::new(&settings);
        assert_eq!(logger.handlers.len(), 1);
    }
}
