use std::{
    any::Any,
    future::Future,
    panic::{self, AssertUnwindSafe},
    thread::JoinHandle,
};

use log::debug;

use crate::{
    error::{Interrupted, Panicked},
    interrupt,
    outcome::Outcome,
    result::Result,
};

/// Outcome whose error channel is fixed to `anyhow::Error`.
///
/// Besides plain construction, a `Try` is produced by running something
/// fallible and capturing what went wrong:
///
/// ```
/// use anyhow::bail;
/// use outcomes::{Outcome, Try};
///
/// let parsed = Try::to(|| Ok("42".parse::<i32>()?));
/// assert_eq!(parsed.or_else(0), 42);
///
/// let failed: Try<i32> = Try::to(|| bail!("boom"));
/// assert_eq!(failed.error().unwrap().to_string(), "boom");
/// ```
#[derive(Debug)]
#[must_use]
pub enum Try<T> {
    Success(T),
    Failure(anyhow::Error),
}

impl<T> Try<T> {
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    pub fn failure<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Failure(error.into())
    }

    /// Runs `callable` and captures its error as failure.
    ///
    /// An `Interrupted` error sets the interrupted flag of the current thread
    /// again before the failure is returned.
    pub fn to<F>(callable: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<T>,
    {
        Self::capture(callable())
    }

    /// Runs `callable` and captures a panic as failure with a `Panicked` error.
    ///
    /// A panic raised with an `Interrupted` payload becomes an `Interrupted`
    /// failure and re-flags the current thread. State captured by `callable`
    /// may be left half updated when it panics.
    pub fn call<F>(callable: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(callable)) {
            Ok(data) => Self::Success(data),
            Err(payload) => Self::capture(Err(panic_error(&*payload))),
        }
    }

    /// Blocks the current thread until `future` completes.
    pub fn join<F>(future: F) -> Self
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        Self::capture(futures_executor::block_on(future))
    }

    /// Blocks until the thread behind `handle` finishes. A panicked thread is
    /// captured the same way `call` captures a panic.
    pub fn join_thread(handle: JoinHandle<anyhow::Result<T>>) -> Self {
        match handle.join() {
            Ok(result) => Self::capture(result),
            Err(payload) => Self::capture(Err(panic_error(&*payload))),
        }
    }

    fn capture(result: anyhow::Result<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(error) => {
                debug!("Try::capture - captured failure: {:#}", error);
                interrupt::restore_if_interrupted(&error);
                Self::Failure(error)
            }
        }
    }

    /// Applies `mapper` to the data. A failure is moved over as is.
    pub fn map<U, F>(self, mapper: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(data) => Try::Success(mapper(data)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    pub fn otherwise<F>(self, mapper: F) -> Self
    where
        F: FnOnce(anyhow::Error) -> T,
    {
        match self {
            Self::Success(data) => Self::Success(data),
            Self::Failure(error) => Self::Success(mapper(error)),
        }
    }

    /// Calls exactly one of the mappers and returns what it produced.
    pub fn compose<U, F, G>(self, success_mapper: F, failure_mapper: G) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
        G: FnOnce(anyhow::Error) -> Try<U>,
    {
        match self {
            Self::Success(data) => success_mapper(data),
            Self::Failure(error) => failure_mapper(error),
        }
    }

    pub fn flat_map<U, F>(self, mapper: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        self.compose(mapper, Try::Failure)
    }

    pub fn recover<G>(self, mapper: G) -> Self
    where
        G: FnOnce(anyhow::Error) -> Self,
    {
        self.compose(Try::Success, mapper)
    }

    pub fn transform<U, F>(self, mapper: F) -> Try<U>
    where
        F: FnOnce(Self) -> Try<U>,
    {
        mapper(self)
    }

    /// Converts into the general `Result`, the error is kept as is.
    pub fn to_result(self) -> Result<T, anyhow::Error> {
        match self {
            Self::Success(data) => Result::Success(data),
            Self::Failure(error) => Result::Failure(error),
        }
    }
}

implement_observers!(Try<T>, data: T, error: anyhow::Error);

/// An `Interrupted` payload keeps its type so the interrupted flag can be restored.
fn panic_error(payload: &(dyn Any + Send)) -> anyhow::Error {
    match payload.downcast_ref::<Interrupted>() {
        Some(interrupted) => anyhow::Error::new(*interrupted),
        None => anyhow::Error::new(Panicked::from_payload(payload)),
    }
}

impl<T> Outcome for Try<T> {
    type Data = T;
    type Error = anyhow::Error;

    fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    fn error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    fn into_std(self) -> anyhow::Result<T> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> From<anyhow::Result<T>> for Try<T> {
    fn from(value: anyhow::Result<T>) -> Self {
        match value {
            Ok(data) => Self::Success(data),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Try<T>> for Result<T, anyhow::Error> {
    fn from(value: Try<T>) -> Self {
        value.to_result()
    }
}
