use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub type ParseFn = dyn Fn(&str) -> Option<Value> + Send + Sync;

/// Turns a path segment into a parameter value.
///
/// `None` (or `Some(Value::Null)`) means the segment does not apply and the
/// matcher fails. Parsers must not panic to reject a segment; a panic is not
/// caught by the router.
#[derive(Clone, Default)]
pub enum ParamParser {
    #[default]
    Identity,
    Function(Arc<ParseFn>),
    Pattern(Regex),
}

impl ParamParser {
    pub fn function<F>(parser: F) -> Self
    where
        F: Fn(&str) -> Option<Value> + Send + Sync + 'static,
    {
        ParamParser::Function(Arc::new(parser))
    }

    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(ParamParser::Pattern)
    }

    pub fn parse(&self, segment: &str) -> Option<Value> {
        let value = match self {
            ParamParser::Identity => Some(Value::String(segment.to_string())),
            ParamParser::Function(parser) => parser(segment),
            ParamParser::Pattern(regex) => capture(regex, segment),
        };

        value.filter(|v| !v.is_null())
    }
}

// First capture group when the pattern declares one, otherwise the whole match.
fn capture(regex: &Regex, segment: &str) -> Option<Value> {
    let captures = regex.captures(segment)?;
    let group = if regex.captures_len() > 1 { 1 } else { 0 };
    captures
        .get(group)
        .map(|m| Value::String(m.as_str().to_string()))
}

impl fmt::Debug for ParamParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamParser::Identity => f.write_str("Identity"),
            ParamParser::Function(_) => f.write_str("Function(..)"),
            ParamParser::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
        }
    }
}
