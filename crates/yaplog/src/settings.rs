//! Process-wide handler settings, separate from the identity [`Config`].
//!
//! [`Config`]: crate::config::Config

use std::env;
use std::sync::{LazyLock, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{DEFAULT_LOG_LEVEL, DEV_MODE_ENV};

/// Handler-facing settings: severity threshold, dev mode, and an open-ended
/// per-handler configuration mapping.
///
/// The `handlers` sub-mapping is interpreted by each handler variant; the
/// default selects the tracing backend with no options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub dev_mode: bool,
    pub handlers: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut handlers = Map::new();
        handlers.insert("tracing".to_string(), Value::Object(Map::new()));
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            dev_mode: false,
            handlers,
        }
    }
}

static STORE: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

/// Replace the process-wide settings.
pub fn set(settings: Settings) {
    *STORE.write().unwrap() = settings;
}

/// Current process-wide settings.
///
/// The `dev_mode` environment variable is re-read on every call and fully
/// determines the flag: `"1"` enables dev mode, any other value (or absence)
/// disables it. This is the sole environment-driven override.
pub fn get() -> Settings {
    let mut settings = STORE.read().unwrap().clone();
    settings.dev_mode = env::var(DEV_MODE_ENV).is_ok_and(|v| v == "1");
    settings
}
