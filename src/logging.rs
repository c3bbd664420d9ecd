// Injected log sink used by every fallible helper in the crate.

/// Receives warnings and progress messages.
///
/// Any `FnMut(String)` closure is a `Logger`, so callers can route messages
/// into their own log view or collect them in a `Vec` for inspection.
pub trait Logger {
    fn warn(&mut self, message: String);

    fn info(&mut self, _message: String) {}
}

impl<F> Logger for F
where
    F: FnMut(String),
{
    fn warn(&mut self, message: String) {
        self(message)
    }
}

/// Writes to stderr with the `PAPER:` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger;

impl Logger for StderrLogger {
    fn warn(&mut self, message: String) {
        eprintln!("PAPER: WARNING: {}", message);
    }

    fn info(&mut self, message: String) {
        eprintln!("PAPER: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_logger_collects_warnings() {
        let mut seen = Vec::new();
        {
            let mut logger = |msg: String| seen.push(msg);
            logger.warn("first".to_string());
            logger.info("ignored".to_string());
            logger.warn("second".to_string());
        }
        assert_eq!(seen, vec!["first", "second"]);
    }
}
