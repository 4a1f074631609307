use crate::enums::HttpMethod;
use crate::router::{RouterError, RouterResult};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

pub type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Condition on context data. Guards never consume path segments.
#[derive(Clone)]
pub enum Guard {
    Predicate(Arc<PredicateFn>),
    /// Every key must exist in the context object with an equal value.
    Pattern(Map<String, Value>),
}

impl Guard {
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Guard::Predicate(Arc::new(predicate))
    }

    pub fn pattern(pattern: Value) -> RouterResult<Self> {
        match pattern {
            Value::Object(map) => Ok(Guard::Pattern(map)),
            other => Err(RouterError::GuardPatternNotObject {
                found: value_kind(&other),
            }),
        }
    }

    pub fn method(method: HttpMethod) -> Self {
        let mut pattern = Map::new();
        pattern.insert("method".to_string(), Value::from(method.as_str()));
        Guard::Pattern(pattern)
    }

    pub fn check(&self, data: &Value) -> bool {
        match self {
            Guard::Predicate(predicate) => predicate(data),
            Guard::Pattern(pattern) => matches_pattern(pattern, data),
        }
    }
}

pub fn matches_pattern(pattern: &Map<String, Value>, data: &Value) -> bool {
    pattern
        .iter()
        .all(|(key, expected)| data.get(key).is_some_and(|actual| actual == expected))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Predicate(_) => f.write_str("Predicate(..)"),
            Guard::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
        }
    }
}
