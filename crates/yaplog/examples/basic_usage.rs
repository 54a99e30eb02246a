//! Basic usage: open the process log and emit at every severity.

use anyhow::Result;
use serde_json::json;
use yaplog::{Log, Logger, Params, settings};

fn main() -> Result<()> {
    let mut params = Params::new();
    params.insert("process_name".to_string(), json!("basic-usage"));
    params.insert(
        "process_description".to_string(),
        json!("Demonstrates the process log"),
    );

    let log = Log::shared(Some(&params))?;

    log.trace("This is a trace message", None);
    log.debug("This is a debug message", None);
    log.info("This is an info message", None);
    log.success("Operation finished", Some("42 rows"));
    log.warning("This is a warning message", None);
    log.error("This is an error message", None);

    let failure = std::io::Error::other("an example failure");
    log.exception("An operation failed", &failure);
    log.critical("Unrecoverable state", Some(&failure));

    // The handler fan-out logger covers the plain message-only surface.
    let logger = Logger::new(&settings::get());
    logger.info("Let's move on.");

    Ok(())
}
