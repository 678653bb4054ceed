use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Outcome of a general computation: success carrying `D` or failure carrying `E`.
///
/// A failure without an error can't be built, and a success with "no data" is
/// spelled `Result<Option<X>, E>`. Operators dispatch on the variant only,
/// never on what the payload looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum Result<D, E> {
    Success(D),
    Failure(E),
}

impl<D, E> Result<D, E> {
    pub fn success(data: D) -> Self {
        Self::Success(data)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    pub fn as_ref(&self) -> Result<&D, &E> {
        match self {
            Self::Success(data) => Result::Success(data),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Applies `mapper` to the data. A failure is moved over as is.
    pub fn map<U, F>(self, mapper: F) -> Result<U, E>
    where
        F: FnOnce(D) -> U,
    {
        match self {
            Self::Success(data) => Result::Success(mapper(data)),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Turns a failure into a success using `mapper`. A success is returned untouched.
    pub fn otherwise<F>(self, mapper: F) -> Self
    where
        F: FnOnce(E) -> D,
    {
        match self {
            Self::Success(data) => Self::Success(data),
            Self::Failure(error) => Self::Success(mapper(error)),
        }
    }

    /// Calls exactly one of the mappers and returns what it produced.
    ///
    /// `flat_map` and `recover` are both expressed through this one.
    pub fn compose<U, V, F, G>(self, success_mapper: F, failure_mapper: G) -> Result<U, V>
    where
        F: FnOnce(D) -> Result<U, V>,
        G: FnOnce(E) -> Result<U, V>,
    {
        match self {
            Self::Success(data) => success_mapper(data),
            Self::Failure(error) => failure_mapper(error),
        }
    }

    pub fn flat_map<U, F>(self, mapper: F) -> Result<U, E>
    where
        F: FnOnce(D) -> Result<U, E>,
    {
        self.compose(mapper, Result::failure)
    }

    pub fn recover<V, G>(self, mapper: G) -> Result<D, V>
    where
        G: FnOnce(E) -> Result<D, V>,
    {
        self.compose(Result::success, mapper)
    }

    /// Hands the whole outcome to `mapper`, e.g. to log and remap it in one step.
    pub fn transform<U, V, F>(self, mapper: F) -> Result<U, V>
    where
        F: FnOnce(Self) -> Result<U, V>,
    {
        mapper(self)
    }
}

implement_observers!(Result<D, E>, data: D, error: E);

impl<D, E> Outcome for Result<D, E> {
    type Data = D;
    type Error = E;

    fn data(&self) -> Option<&D> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    fn into_std(self) -> std::result::Result<D, E> {
        self.into()
    }
}

impl<D, E> From<std::result::Result<D, E>> for Result<D, E> {
    fn from(value: std::result::Result<D, E>) -> Self {
        match value {
            Ok(data) => Self::Success(data),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<D, E> From<Result<D, E>> for std::result::Result<D, E> {
    fn from(value: Result<D, E>) -> Self {
        match value {
            Result::Success(data) => Ok(data),
            Result::Failure(error) => Err(error),
        }
    }
}
