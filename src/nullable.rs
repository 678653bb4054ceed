use std::fmt::Debug;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{container::Container, error::NoValuePresent};

/// Explicit presence/absence wrapper over a single value.
///
/// Emptiness is not an error, which is why `Nullable` stays outside of the
/// `Outcome` family.
///
/// ```
/// use outcomes::Nullable;
///
/// let name = Nullable::of("john")
///     .filter(|n| n.len() > 2)
///     .map(|n| n.to_uppercase())
///     .or_else(String::from("anonymous"));
///
/// assert_eq!(name, "JOHN");
/// assert!(Nullable::<i32>::from(None).is_null());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
    slot: Option<Container<T>>,
}

impl<T> Nullable<T> {
    /// Wraps a present value.
    pub fn of(value: T) -> Self {
        Self {
            slot: Some(Container::new(value)),
        }
    }

    /// `None` ends up in the same state as `Nullable::empty()`.
    pub fn of_nullable(value: Option<T>) -> Self {
        Self {
            slot: value.map(Container::new),
        }
    }

    pub fn empty() -> Self {
        Self { slot: None }
    }

    pub fn is_null(&self) -> bool {
        self.slot.is_none()
    }

    pub fn is_not_null(&self) -> bool {
        !self.is_null()
    }

    /// Returns reference to the value, if any.
    pub fn value(&self) -> Option<&T> {
        self.slot.as_ref().map(Container::value)
    }

    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.value() {
            action(value)
        }
    }

    pub fn if_present_or_else<F, G>(&self, action: F, empty_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self.value() {
            Some(value) => action(value),
            None => empty_action(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match self.value() {
            Some(value) => predicate(value),
            None => true,
        };

        if keep {
            self
        } else {
            Self::empty()
        }
    }

    pub fn map<U, F>(self, mapper: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        Nullable {
            slot: self.slot.map(|c| c.map(mapper)),
        }
    }

    pub fn flat_map<U, F>(self, mapper: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Nullable<U>,
    {
        match self.slot {
            Some(c) => mapper(c.into_value()),
            None => Nullable::empty(),
        }
    }

    /// Returns self when present, otherwise whatever `supplier` produces.
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_null() {
            return supplier();
        }
        self
    }

    /// Lazy sequence of zero or one element. Each call gives a fresh iterator.
    pub fn stream(&self) -> std::option::IntoIter<&T> {
        self.value().into_iter()
    }

    pub fn or_else(self, other: T) -> T {
        self.into_option().unwrap_or(other)
    }

    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.into_option().unwrap_or_else(supplier)
    }

    pub fn or_else_throw(self) -> Result<T, NoValuePresent> {
        self.into_option().ok_or(NoValuePresent)
    }

    /// Like `or_else_throw` but with caller provided error.
    pub fn or_else_throw_with<X, F>(self, error_supplier: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        self.into_option().ok_or_else(error_supplier)
    }

    pub fn into_option(self) -> Option<T> {
        self.slot.map(Container::into_value)
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Nullable<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Nullable<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream()
    }
}

impl<T: Debug> Debug for Nullable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "Nullable[{:?}]", value),
            None => f.write_str("Nullable.empty"),
        }
    }
}

/// Serialized as a sequence of zero or one element, so a present value that
/// serializes to `null` stays distinct from an empty `Nullable`.
impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.value())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut values = Vec::<T>::deserialize(deserializer)?;
        if values.len() > 1 {
            return Err(de::Error::invalid_length(values.len(), &"at most one value"));
        }
        Ok(Self::of_nullable(values.pop()))
    }
}
