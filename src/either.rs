use serde::{Deserialize, Serialize};

/// Two-sided disjoint union without any success/failure meaning.
///
/// The side is decided by the constructor alone. A side may hold an "absent"
/// payload by using `Option` as its type, `Either::left(None)` is still a left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn left(left: L) -> Self {
        Self::Left(left)
    }

    pub fn right(right: R) -> Self {
        Self::Right(right)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    pub fn as_left(&self) -> Option<&L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    pub fn as_right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    /// Moves the payload over to the other side.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(left) => Either::Right(left),
            Self::Right(right) => Either::Left(right),
        }
    }

    /// Maps whichever side is present, the other function is not called.
    pub fn map<T, U, F, G>(self, left_mapper: F, right_mapper: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(left) => Either::Left(left_mapper(left)),
            Self::Right(right) => Either::Right(right_mapper(right)),
        }
    }

    /// Like `map`, but the mapper returns the whole replacement, so a left may
    /// turn into a right and the other way round.
    pub fn flat_map<T, U, F, G>(self, left_mapper: F, right_mapper: G) -> Either<T, U>
    where
        F: FnOnce(L) -> Either<T, U>,
        G: FnOnce(R) -> Either<T, U>,
    {
        match self {
            Self::Left(left) => left_mapper(left),
            Self::Right(right) => right_mapper(right),
        }
    }
}
