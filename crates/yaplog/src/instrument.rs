//! Instrumented call wrappers: log the call, the result, or the error.

use std::error::Error;
use std::fmt::Debug;
use std::sync::Arc;

use crate::logger::Logger;

/// Run `f` on `args`, logging the call, then the outcome.
///
/// The call record (with the `Debug`-formatted arguments) is written before
/// `f` runs. On `Ok`, a record with the return value follows; on `Err`, the
/// error is logged at error severity and returned unchanged. The wrapper
/// never swallows or transforms a failure.
pub fn logged_call<A, T, E, F>(logger: &Logger, name: &str, args: A, f: F) -> Result<T, E>
where
    A: Debug,
    T: Debug,
    E: Error + 'static,
    F: FnOnce(A) -> Result<T, E>,
{
    logger.info(&format!("Calling {name} with args: {args:?}"));
    match f(args) {
        Ok(result) => {
            logger.info(&format!("{name} returned {result:?}"));
            Ok(result)
        }
        Err(error) => {
            logger.exception(&format!("{name} raised an error."), &error);
            Err(error)
        }
    }
}

/// Wrap a callable into one of the same signature that logs entry, return
/// value, and failures.
pub fn log_function<A, T, E, F>(
    logger: Arc<Logger>,
    name: impl Into<String>,
    f: F,
) -> impl Fn(A) -> Result<T, E>
where
    A: Debug,
    T: Debug,
    E: Error + 'static,
    F: Fn(A) -> Result<T, E>,
{
    let name = name.into();
    move |args: A| logged_call(&logger, &name, args, &f)
}

/// Wrap a method-like callable.
///
/// The receiver is passed through to the call but excluded from the logged
/// arguments.
pub fn log_method<S, A, T, E, F>(
    logger: Arc<Logger>,
    name: impl Into<String>,
    f: F,
) -> impl Fn(&mut S, A) -> Result<T, E>
where
    A: Debug,
    T: Debug,
    E: Error + 'static,
    F: Fn(&mut S, A) -> Result<T, E>,
{
    let name = name.into();
    move |receiver: &mut S, args: A| {
        logger.info(&format!("Calling {name} with args: {args:?}"));
        match f(receiver, args) {
            Ok(result) => {
                logger.info(&format!("{name} returned {result:?}"));
                Ok(result)
            }
            Err(error) => {
                logger.exception(&format!("{name} raised an error."), &error);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};

    use thiserror::Error;

    use super::*;
    use crate::handlers::Handler;

    #[derive(Debug, Error, PartialEq)]
    #[error("{0}")]
    struct Boom(String);

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
            self.push("exception", &format!("{message} {error}"));
        }
    }

    fn capture_logger() -> (Arc<Logger>, Arc<Mutex<Vec<(String, String)>>>) {
        let records = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::with_handlers(vec![Box::new(CaptureHandler {
            records: Arc::clone(&records),
        })]);
        (Arc::new(logger), records)
    }

    #[test]
    fn successful_call_logs_arguments_then_return_value() {
        let (logger, records) = capture_logger();

        let add = log_function(logger, "add", |(x, y): (i32, i32)| {
            Ok::<_, Boom>(x + y)
        });
        assert_eq!(add((3, 4)).unwrap(), 7);

        let captured = records.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].0, "info");
        assert!(captured[0].1.contains("Calling add"));
        assert!(captured[0].1.contains("(3, 4)"));
        assert_eq!(captured[1].0, "info");
        assert!(captured[1].1.contains("add returned 7"));
    }

    #[test]
    fn failing_call_logs_the_error_and_propagates_it_unchanged() {
        let (logger, records) = capture_logger();

        let fail = log_function(logger, "explode", |(): ()| {
            Err::<i32, _>(Boom("boom".to_string()))
        });
        let result = fail(());
        assert_eq!(result, Err(Boom("boom".to_string())));

        let captured = records.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[1].0, "exception");
        assert!(captured[1].1.contains("explode raised an error."));
        assert!(captured[1].1.contains("boom"));
    }

    #[test]
    fn method_wrapper_excludes_the_receiver_from_logged_arguments() {
        let (logger, records) = capture_logger();

        struct Counter {
            total: i32,
        }

        let bump = log_method(logger, "bump", |counter: &mut Counter, by: i32| {
            counter.total += by;
            Ok::<_, Boom>(counter.total)
        });

        let mut counter = Counter { total: 10 };
        assert_eq!(bump(&mut counter, 5).unwrap(), 15);
        assert_eq!(counter.total, 15);

        let captured = records.lock().unwrap();
        assert!(captured[0].1.contains("Calling bump with args: 5"));
        assert!(!captured[0].1.contains("Counter"));
        assert!(captured[1].1.contains("bump returned 15"));
    }

    #[test]
    fn one_shot_helper_logs_around_the_closure() {
        let (logger, records) = capture_logger();

        let doubled: Result<i32, Infallible> =
            logged_call(&logger, "double", 21, |x| Ok(x * 2));
        assert_eq!(doubled.unwrap(), 42);

        let captured = records.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert!(captured[0].1.contains("Calling double with args: 21"));
        assert!(captured[1].1.contains("double returned 42"));
    }
}
