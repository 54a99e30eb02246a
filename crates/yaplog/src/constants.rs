//! Static key names and default values for process identity fields.

/// Configuration key for the process UID.
pub const PROCESS_UID_KEY: &str = "process_uid";

/// Configuration key for the process name.
pub const PROCESS_NAME_KEY: &str = "process_name";

/// Configuration key for the process description.
pub const PROCESS_DESCRIPTION_KEY: &str = "process_description";

/// Configuration key for the extras overflow list.
pub const PROCESS_EXTRAS_KEY: &str = "process_extras";

/// Sentinel for identity fields that were never supplied.
pub const NOT_INFORMED: &str = "<not_informed>";

/// Environment variable enabling dev mode when set to `"1"`.
pub const DEV_MODE_ENV: &str = "dev_mode";

/// Default severity threshold for fresh settings.
pub const DEFAULT_LOG_LEVEL: &str = "DEBUG";
