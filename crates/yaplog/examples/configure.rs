//! Configuring process identity, including free-form extras.

use anyhow::Result;
use serde_json::json;
use yaplog::{Params, config};

fn main() -> Result<()> {
    let mut params = Params::new();
    params.insert("process_uid".to_string(), json!("my-process-uid"));
    params.insert("process_name".to_string(), json!("My Process"));
    params.insert(
        "process_description".to_string(),
        json!("This is my process."),
    );
    params.insert("version".to_string(), json!("1.0.0"));
    params.insert("environment".to_string(), json!("development"));

    let shared = config::shared();
    let snapshot = shared.lock().unwrap().configure(Some(&params))?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
