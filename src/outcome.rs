/// Behaviour shared by every success/failure type of this crate.
///
/// Implementors hold exactly one of data or error. Only the accessors and
/// `into_std` have to be provided, extraction comes with default
/// implementations built on top of them.
///
/// ```
/// use outcomes::{Outcome, Result};
///
/// let parsed: Result<i32, String> = Result::success(10);
/// assert_eq!(parsed.map(|x| x * 2).or_else(-1), 20);
///
/// let failed: Result<i32, String> = Result::failure("e".into());
/// assert_eq!(failed.map(|x| x * 2).or_else(-1), -1);
/// ```
pub trait Outcome: Sized {
    type Data;
    type Error;

    /// Returns the data if the outcome is a success.
    fn data(&self) -> Option<&Self::Data>;

    /// Returns the error if the outcome is a failure.
    fn error(&self) -> Option<&Self::Error>;

    /// Turns self into std Result, the payload is moved not copied.
    fn into_std(self) -> std::result::Result<Self::Data, Self::Error>;

    fn is_failure(&self) -> bool {
        self.error().is_some()
    }

    fn is_success(&self) -> bool {
        !self.is_failure()
    }

    fn into_error(self) -> Option<Self::Error> {
        self.into_std().err()
    }

    /// Returns the data, or `other` on failure.
    fn or_else(self, other: Self::Data) -> Self::Data {
        self.into_std().unwrap_or(other)
    }

    /// Returns the data, or calls `supplier` on failure.
    fn or_else_get<F>(self, supplier: F) -> Self::Data
    where
        F: FnOnce() -> Self::Data,
    {
        match self.into_std() {
            Ok(data) => data,
            Err(_) => supplier(),
        }
    }

    /// Returns the data, or maps the error into a value.
    fn or_else_get_with<F>(self, error_to_value: F) -> Self::Data
    where
        F: FnOnce(Self::Error) -> Self::Data,
    {
        self.into_std().unwrap_or_else(error_to_value)
    }

    /// Returns the data, or the error produced by `error_to_exception`.
    /// The function is never called on success.
    fn or_else_throw<X, F>(self, error_to_exception: F) -> std::result::Result<Self::Data, X>
    where
        F: FnOnce(Self::Error) -> X,
    {
        self.into_std().map_err(error_to_exception)
    }

    /// Success becomes `Some`, failure becomes `None` and the error is dropped.
    fn to_option(self) -> Option<Self::Data> {
        self.into_std().ok()
    }
}

/// Implements side-effecting observation hooks for a `Success`/`Failure` enum.
/// Each hook hands out references and gives `self` back for chaining.
macro_rules! implement_observers {
    ($name:ident<$($param:ident),+>, data: $data:ty, error: $error:ty) => {
        impl<$($param),+> $name<$($param),+> {
            /// Invokes exactly one of the consumers, depending on state.
            pub fn on_result<F, G>(self, data_consumer: F, error_consumer: G) -> Self
            where
                F: FnOnce(&$data),
                G: FnOnce(&$error),
            {
                match &self {
                    Self::Success(data) => data_consumer(data),
                    Self::Failure(error) => error_consumer(error),
                }
                self
            }

            pub fn on_success<F>(self, data_consumer: F) -> Self
            where
                F: FnOnce(&$data),
            {
                if let Self::Success(data) = &self {
                    data_consumer(data);
                }
                self
            }

            pub fn on_failure<G>(self, error_consumer: G) -> Self
            where
                G: FnOnce(&$error),
            {
                if let Self::Failure(error) = &self {
                    error_consumer(error);
                }
                self
            }

            /// Hands the whole outcome to `consumer`.
            pub fn inspect<F>(self, consumer: F) -> Self
            where
                F: FnOnce(&Self),
            {
                consumer(&self);
                self
            }
        }
    };
}
