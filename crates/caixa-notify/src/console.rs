//! # Console Notifier
//!
//! Prints each register message on its own line, for an operator watching
//! the teller shell.

use std::io::{self, Write};
use std::sync::Mutex;

use caixa_core::{ObserverError, ObserverResult, TransactionObserver};

/// Writes messages to any `Write` sink; stdout by default.
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    /// A notifier printing to stdout.
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// A notifier printing to `writer`.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        ConsoleNotifier {
            out: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::stdout()
    }
}

impl TransactionObserver for ConsoleNotifier {
    fn record(&self, message: &str) -> ObserverResult {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ObserverError::Unavailable("console lock poisoned".into()))?;
        writeln!(out, "{message}")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Shared buffer so the test can read what the notifier wrote.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_one_line_per_message() {
        let buf = SharedBuf::default();
        let notifier = ConsoleNotifier::with_writer(buf.clone());

        notifier.record("Withdrawal completed: R$10").unwrap();
        notifier.record("Deposit completed. Total available: R$0").unwrap();

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            written,
            "Withdrawal completed: R$10\nDeposit completed. Total available: R$0\n"
        );
    }
}
