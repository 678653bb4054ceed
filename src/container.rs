use serde::{Deserialize, Serialize};

/// Single immutable slot.
///
/// Has no presence semantics of its own; `Nullable` uses it as the slot
/// behind its `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Container<T> {
    value: T,
}

impl<T> Container<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns reference to the held value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Moves the held value out.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U, F>(self, f: F) -> Container<U>
    where
        F: FnOnce(T) -> U,
    {
        Container::new(f(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::Container;

    #[derive(Debug, PartialEq)]
    struct Custom {
        name: String,
        age: u8,
    }

    #[test]
    fn test_value() {
        let container = Container::new(String::from("data"));
        assert_eq!(container.value(), "data");

        let container: Container<Option<String>> = Container::new(None);
        assert_eq!(container.value(), &None);

        let container = Container::new(123);
        assert_eq!(container.into_value(), 123);

        let container = Container::new(Custom {
            name: "john".into(),
            age: 30,
        });
        assert_eq!(
            container.into_value(),
            Custom {
                name: "john".into(),
                age: 30
            }
        );
    }

    #[test]
    fn test_map() {
        let container = Container::new(2).map(|v| v * 21);
        assert_eq!(container, Container::new(42));
    }

    #[test]
    fn test_serialize_transparent() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Container::new("x"))?;
        assert_eq!(json, r#""x""#);

        let back: Container<String> = serde_json::from_str(&json)?;
        assert_eq!(back.value(), "x");
        Ok(())
    }
}
