//! Process log bound to the shared configuration.

use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{self, Config, Params};
use crate::error::ConfigResult;
use crate::settings;
use crate::severity::Severity;
use crate::singleton::Singleton;

/// Application-wide process log.
///
/// Construction configures the shared [`Config`], installs the stdout sink
/// and emits the process bootstrap records. Emission holds no locks of its
/// own; concurrent `configure` calls are not synchronized against concurrent
/// emission (configuration is expected to happen once, at process bootstrap,
/// before steady-state logging).
pub struct Log {
    config: Arc<Mutex<Config>>,
    process_uid: String,
    process_name: String,
}

static SHARED: Singleton<Log> = Singleton::new();

impl Log {
    /// Configure the process and open the log.
    pub fn new(parameters: Option<&Params>) -> ConfigResult<Self> {
        let config = config::shared();
        let snapshot = config.lock().unwrap().configure(parameters)?;

        let log = Self {
            config,
            process_uid: snapshot.process_uid().to_string(),
            process_name: snapshot.process_name().to_string(),
        };
        log.configure_sink();
        log.info("Process", Some(&log.process_name));
        log.info("Description", Some(snapshot.process_description()));
        log.info("Process UID", Some(&log.process_uid));
        Ok(log)
    }

    /// Shared singleton instance.
    ///
    /// Constructed at most once per process; parameters passed on later calls
    /// are ignored. A failed first construction caches nothing, so the next
    /// caller configures again.
    pub fn shared(parameters: Option<&Params>) -> ConfigResult<Arc<Log>> {
        SHARED.get_or_try_init(|| Log::new(parameters))
    }

    /// Drop the shared instance. Intended for test isolation.
    pub fn reset_shared() {
        SHARED.reset();
    }

    pub fn process_uid(&self) -> &str {
        &self.process_uid
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Handle to the shared configuration this log is bound to.
    pub fn config(&self) -> Arc<Mutex<Config>> {
        Arc::clone(&self.config)
    }

    /// Install the stdout sink, replacing the backend default.
    ///
    /// The filter comes from the settings severity threshold, or everything
    /// in dev mode. Installation is a no-op once a subscriber is registered
    /// process-wide.
    fn configure_sink(&self) {
        let settings = settings::get();
        let filter = if settings.dev_mode {
            EnvFilter::new("trace")
        } else {
            let level = settings
                .log_level
                .parse::<Severity>()
                .unwrap_or(Severity::Debug);
            EnvFilter::new(level.backend_level().to_string())
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_target(false)
            .try_init();
    }

    /// Single emission point.
    ///
    /// `extra_value` and an exception are mutually exclusive per record; when
    /// both are supplied the exception wins.
    fn emit(
        &self,
        severity: Severity,
        message: &str,
        extra_value: Option<&str>,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let extra = if error.is_some() { None } else { extra_value };

        macro_rules! record {
            ($level:expr) => {
                match (error, extra) {
                    (Some(err), _) => tracing::event!(
                        $level,
                        severity = severity.name(),
                        process_uid = %self.process_uid,
                        process_name = %self.process_name,
                        generated_timestamp = %timestamp,
                        exception_message = %err,
                        "{message}"
                    ),
                    (None, Some(value)) => tracing::event!(
                        $level,
                        severity = severity.name(),
                        process_uid = %self.process_uid,
                        process_name = %self.process_name,
                        generated_timestamp = %timestamp,
                        extra_value = %value,
                        "{message}"
                    ),
                    (None, None) => tracing::event!(
                        $level,
                        severity = severity.name(),
                        process_uid = %self.process_uid,
                        process_name = %self.process_name,
                        generated_timestamp = %timestamp,
                        "{message}"
                    ),
                }
            };
        }

        match severity {
            Severity::Trace => record!(Level::TRACE),
            Severity::Debug => record!(Level::DEBUG),
            Severity::Info | Severity::Success => record!(Level::INFO),
            Severity::Warning => record!(Level::WARN),
            Severity::Error | Severity::Critical => record!(Level::ERROR),
        }
    }

    pub fn trace(&self, message: &str, extra_value: Option<&str>) {
        self.emit(Severity::Trace, message, extra_value, None);
    }

    pub fn debug(&self, message: &str, extra_value: Option<&str>) {
        self.emit(Severity::Debug, message, extra_value, None);
    }

    pub fn info(&self, message: &str, extra_value: Option<&str>) {
        self.emit(Severity::Info, message, extra_value, None);
    }

    pub fn success(&self, message: &str, extra_value: Option<&str>) {
        self.emit(Severity::Success, message, extra_value, None);
    }

    pub fn warning(&self, message: &str, extra_value: Option<&str>) {
        self.emit(Severity::Warning, message, extra_value, None);
    }

    pub fn error(&self, message: &str, extra_value: Option<&str>) {
        self.emit(Severity::Error, message, extra_value, None);
    }

    /// Log at CRITICAL, optionally carrying the causing error end-to-end.
    pub fn critical(&self, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.emit(Severity::Critical, message, None, error);
    }

    /// Log an error-severity record carrying the causing error end-to-end.
    pub fn exception(&self, message: &str, error: &(dyn Error + 'static)) {
        self.emit(Severity::Error, message, None, Some(error));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn construction_binds_the_configured_identity() {
        let mut params = Params::new();
        params.insert("process_uid".to_string(), json!("log-test-uid"));
        params.insert("process_name".to_string(), json!("log-test"));

        let log = Log::new(Some(&params)).unwrap();
        assert_eq!(log.process_uid(), "log-test-uid");
        assert_eq!(log.process_name(), "log-test");

        // Emission must not panic on any path.
        let error = std::io::Error::other("boom");
        log.trace("t", None);
        log.success("s", Some("extra"));
        log.critical("c", Some(&error));
        log.exception("e", &error);
    }

    #[test]
    fn invalid_parameters_fail_construction() {
        let mut params = Params::new();
        params.insert("process_uid".to_string(), json!(42));

        assert!(Log::new(Some(&params)).is_err());
    }
}
