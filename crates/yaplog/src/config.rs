//! Process identity configuration: merge-with-defaults and UID generation.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::constants::{
    NOT_INFORMED, PROCESS_DESCRIPTION_KEY, PROCESS_EXTRAS_KEY, PROCESS_NAME_KEY, PROCESS_UID_KEY,
};
use crate::error::{ConfigError, ConfigResult};
use crate::singleton::Singleton;

/// Free-form configuration mapping, in caller-supplied order.
pub type Params = Map<String, Value>;

/// Per-process identity configuration.
///
/// Holds the process UID, name and description (defaulting to the
/// `<not_informed>` sentinel) plus the extras overflow list. Keys the caller
/// supplies that are not in the known set are never dropped: each becomes a
/// one-entry mapping appended to the extras, in the order supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    process_uid: String,
    process_name: String,
    process_description: String,
    process_extras: Vec<Map<String, Value>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            process_uid: NOT_INFORMED.to_string(),
            process_name: NOT_INFORMED.to_string(),
            process_description: NOT_INFORMED.to_string(),
            process_extras: Vec::new(),
        }
    }
}

/// A validated field update, staged before any mutation is committed.
#[derive(Debug)]
enum Update {
    Uid(String),
    Name(String),
    Description(String),
    Extras(Vec<Map<String, Value>>),
    Extra(String, Value),
}

impl Config {
    /// Merge `parameters` into the configuration and run UID generation.
    ///
    /// Keys are normalized (trimmed, lowercased) before matching. Known keys
    /// overwrite the corresponding field; unknown keys are appended to the
    /// extras under their normalized name. The whole mapping is validated
    /// before anything is committed, so a validation failure leaves the
    /// configuration untouched.
    ///
    /// Returns a snapshot of the configuration after the merge.
    pub fn configure(&mut self, parameters: Option<&Params>) -> ConfigResult<Config> {
        let mut updates = Vec::new();
        if let Some(params) = parameters {
            for (key, value) in params {
                updates.push(Self::stage(key, value)?);
            }
        }
        for update in updates {
            self.apply(update);
        }
        self.ensure_process_uid(Utc::now().timestamp());
        Ok(self.clone())
    }

    /// Set one known field directly.
    ///
    /// Unlike [`configure`](Self::configure), an unrecognized key here is a
    /// hard error instead of being routed to the extras.
    pub fn set_field(&mut self, key: &str, value: Value) -> ConfigResult<()> {
        match Self::stage(key, &value)? {
            Update::Extra(normalized, _) => Err(ConfigError::unknown_field(normalized)),
            update => {
                self.apply(update);
                Ok(())
            }
        }
    }

    /// Current process UID, the sentinel if never generated or supplied.
    pub fn get_process_id(&self) -> String {
        self.process_uid.clone()
    }

    pub fn process_uid(&self) -> &str {
        &self.process_uid
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    pub fn process_description(&self) -> &str {
        &self.process_description
    }

    pub fn process_extras(&self) -> &[Map<String, Value>] {
        &self.process_extras
    }

    fn stage(key: &str, value: &Value) -> ConfigResult<Update> {
        let normalized = key.trim().to_lowercase();
        let update = match normalized.as_str() {
            PROCESS_UID_KEY => match value {
                Value::String(uid) => Update::Uid(uid.clone()),
                other => {
                    return Err(ConfigError::validation(format!(
                        "{PROCESS_UID_KEY} must be a string, got {}",
                        json_type(other)
                    )));
                }
            },
            PROCESS_NAME_KEY => Update::Name(value_to_string(value)),
            PROCESS_DESCRIPTION_KEY => Update::Description(value_to_string(value)),
            PROCESS_EXTRAS_KEY => Update::Extras(validate_extras(value)?),
            _ => Update::Extra(normalized, value.clone()),
        };
        Ok(update)
    }

    fn apply(&mut self, update: Update) {
        match update {
            Update::Uid(uid) => self.process_uid = uid,
            Update::Name(name) => self.process_name = name,
            Update::Description(description) => self.process_description = description,
            Update::Extras(extras) => self.process_extras = extras,
            Update::Extra(key, value) => {
                let mut entry = Map::new();
                entry.insert(key, value);
                self.process_extras.push(entry);
            }
        }
    }

    /// Generate the process UID if none has been set yet.
    ///
    /// Skipped when a non-default, non-empty UID already exists, which makes
    /// repeated `configure` calls idempotent with respect to the UID.
    fn ensure_process_uid(&mut self, timestamp: i64) {
        if self.process_uid.is_empty() || self.process_uid == NOT_INFORMED {
            self.process_uid = generate_process_uid(
                timestamp,
                &self.process_name,
                &self.process_description,
            );
        }
    }
}

/// Deterministic, content-derived process UID.
///
/// A name-based UUID over the Unix timestamp, process name and description.
/// Two processes configured with the same name and description within the
/// same second produce the same UID; the UID identifies a configured process
/// instance, not a random token.
pub fn generate_process_uid(timestamp: i64, name: &str, description: &str) -> String {
    let material = format!("{timestamp}:{name}:{description}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, material.as_bytes()).to_string()
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn validate_extras(value: &Value) -> ConfigResult<Vec<Map<String, Value>>> {
    let Value::Array(entries) = value else {
        return Err(ConfigError::validation(format!(
            "{PROCESS_EXTRAS_KEY} must be a sequence, got {}",
            json_type(value)
        )));
    };
    entries
        .iter()
        .map(|entry| match entry {
            Value::Object(map) => Ok(map.clone()),
            other => Err(ConfigError::validation(format!(
                "{PROCESS_EXTRAS_KEY} entries must be mappings, got {}",
                json_type(other)
            ))),
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

static SHARED: Singleton<Mutex<Config>> = Singleton::new();

/// Process-wide configuration instance.
///
/// `configure` calls on the shared instance are serialized by the mutex, but
/// are not synchronized against concurrent log emission; configuration is
/// expected to happen once, early, at process bootstrap.
pub fn shared() -> Arc<Mutex<Config>> {
    SHARED.get_or_init(|| Mutex::new(Config::default()))
}

/// Drop the shared instance so the next [`shared`] call starts from defaults.
///
/// Intended for test isolation.
pub fn reset_shared() {
    SHARED.reset();
}
