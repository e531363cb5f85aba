use std::collections::HashMap;
use std::fmt;

/// A single string-renderable state entry.
#[derive(Clone, Debug, PartialEq)]
pub enum StateValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Text(value) => f.write_str(value),
            StateValue::Integer(value) => write!(f, "{value}"),
            StateValue::Float(value) => write!(f, "{value}"),
            StateValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::Text(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::Text(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Integer(value)
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        StateValue::Integer(value as i64)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        StateValue::Float(value)
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

/// Application state. Owned exclusively by the engine; mutated only through
/// [`StateMap::merge`]: same-named keys are overwritten, new keys are added,
/// nothing is ever deleted.
#[derive(Clone, Debug, Default)]
pub struct StateMap {
    entries: HashMap<String, StateValue>,
}

impl StateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shallow merge. Total: never fails, regardless of keys or values.
    pub fn merge<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StateValue>,
    {
        for (key, value) in entries {
            self.entries.insert(key.into(), value.into());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for StateMap
where
    K: Into<String>,
    V: Into<StateValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StateMap::new();
        map.merge(iter);
        map
    }
}
