use std::{any::Any, fmt::Display};

/// Cooperative cancellation signal.
///
/// Code that wants to stop a computation returns (or panics with) this error.
/// When a capture factory of `Try` sees it, the current thread's interrupted
/// flag is set again so the signal survives being turned into data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interrupted;

impl Display for Interrupted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("operation was interrupted")
    }
}

impl std::error::Error for Interrupted {}

/// A panic captured by `Try::call` or `Try::join_thread`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    /// Panic message, or a placeholder when the payload was not a string.
    pub message: String,
}

impl Panicked {
    /// Builds the error out of a payload returned by `catch_unwind` or `JoinHandle::join`.
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("non-string panic payload")
        };

        Self { message }
    }
}

impl Display for Panicked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl std::error::Error for Panicked {}

/// Returned by `Nullable::or_else_throw` when there is nothing to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoValuePresent;

impl Display for NoValuePresent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("no value present")
    }
}

impl std::error::Error for NoValuePresent {}
