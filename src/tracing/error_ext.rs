//! Error tracing extensions
//!
//! Provides utilities for enriching error handling with tracing context.

use crate::types::AdapterError;
use std::error::Error as StdError;

/// Extension trait for adding tracing context to errors
pub trait ErrorTraceExt {
    /// Log error with full context including error code, retryable status, and error chain
    ///
    /// Logged at DEBUG: the binary reports the error itself on exit, this
    /// only adds the context shown with `-v`.
    fn trace_error(&self) -> &Self;
}

impl ErrorTraceExt for AdapterError {
    fn trace_error(&self) -> &Self {
        let error_code = self.error_code();

        let mut error_chain = Vec::new();
        let mut current_source = self.source();
        while let Some(source) = current_source {
            error_chain.push(source.to_string());
            current_source = source.source();
        }

        tracing::debug!(
            error = %self,
            error_code = error_code.code(),
            error_code_name = ?error_code,
            is_retryable = self.is_retryable(),
            is_client_error = self.is_client_error(),
            error_chain = ?error_chain,
            "Prompt adapter error"
        );

        self
    }
}

/// Extension trait for Result types
pub trait ResultTraceExt<T>: Sized {
    /// Log the error, if any, and hand the result back unchanged
    fn trace_err(self) -> Self;
}

impl<T> ResultTraceExt<T> for Result<T, AdapterError> {
    fn trace_err(self) -> Self {
        if let Err(e) = &self {
            e.trace_error();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn trace_at(level: tracing::Level, error: &AdapterError) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            error.trace_error();
        });
        logs.contents()
    }

    #[test]
    fn test_trace_error_silent_at_default_level() {
        // Default binary level is WARN; the error is printed once by main
        let error = AdapterError::prompt_not_found("missing");
        assert_eq!(trace_at(tracing::Level::WARN, &error), "");
    }

    #[test]
    fn test_trace_error_visible_when_verbose() {
        let error = AdapterError::prompt_not_found("missing");
        let logs = trace_at(tracing::Level::DEBUG, &error);
        assert!(logs.contains("Prompt adapter error"));
        assert!(logs.contains("Prompt not found: missing"));
    }

    #[test]
    fn test_error_trace_ext() {
        let error = AdapterError::session_failed("connection reset");
        error.trace_error();
    }

    #[test]
    fn test_trace_err_keeps_error() {
        let result: Result<(), AdapterError> = Err(AdapterError::unsupported_role("system"));
        let result = result.trace_err();
        assert!(matches!(result, Err(AdapterError::UnsupportedRole(_))));

        let ok: Result<u8, AdapterError> = Ok(7);
        assert_eq!(ok.trace_err().unwrap(), 7);
    }
}
