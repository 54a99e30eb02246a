//! Advanced usage: instrumented function and method calls.

use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use yaplog::{Log, Logger, Params, log_function, log_method, settings};

struct Accumulator {
    total: i64,
}

fn main() -> Result<()> {
    let mut params = Params::new();
    params.insert("process_name".to_string(), json!("advanced-usage"));

    // Opening the process log installs the stdout sink.
    let _log = Log::shared(Some(&params))?;
    let logger = Arc::new(Logger::new(&settings::get()));

    let add = log_function(Arc::clone(&logger), "add", |(x, y): (i64, i64)| {
        Ok::<_, std::num::TryFromIntError>(x + y)
    });
    let sum = add((3, 4))?;
    assert_eq!(sum, 7);

    let push = log_method(
        Arc::clone(&logger),
        "push",
        |acc: &mut Accumulator, value: i64| {
            acc.total += value;
            Ok::<_, std::num::TryFromIntError>(acc.total)
        },
    );
    let mut acc = Accumulator { total: 0 };
    push(&mut acc, 5)?;
    push(&mut acc, 6)?;

    // A failing call is logged at error severity and propagates unchanged.
    let parse = log_function(logger, "parse_port", |raw: &str| {
        raw.parse::<u16>()
    });
    if let Err(error) = parse("not-a-port") {
        eprintln!("caller still sees the error: {error}");
    }

    Ok(())
}
