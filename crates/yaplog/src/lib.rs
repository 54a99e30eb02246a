//! `yaplog` — a thin logging façade.
//!
//! Per-process identity configuration (with deterministic UID generation), a
//! handler capability set over the `tracing` backend, a process log that
//! stamps every record with the process identity, and instrumented call
//! wrappers that log entry, return value, and failures.

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod instrument;
pub mod log;
pub mod logger;
pub mod settings;
pub mod severity;
pub mod singleton;

pub use config::{Config, Params, generate_process_uid};
pub use error::{ConfigError, ConfigResult};
pub use handlers::{Handler, TracingHandler};
pub use instrument::{log_function, log_method, logged_call};
pub use log::Log;
pub use logger::Logger;
pub use settings::Settings;
pub use severity::Severity;
pub use singleton::Singleton;
