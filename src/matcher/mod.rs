mod guard;
mod outcome;
mod params;

pub use guard::{Guard, PredicateFn, matches_pattern};
pub use outcome::{MatchOutcome, merge_params};
pub use params::{ParamParser, ParseFn};

use crate::router::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One routing rule registered on a [`Router`].
///
/// Nesting variants own the child router that receives the remaining segments.
#[derive(Debug, Clone)]
pub enum Matcher<H> {
    /// Accepts only when no segments remain.
    Index(H),
    /// Accepts unconditionally.
    Fallback(H),
    Dir {
        segment: String,
        child: Router<H>,
    },
    Param {
        name: String,
        parser: ParamParser,
        child: Router<H>,
    },
    Where {
        guard: Guard,
        child: Router<H>,
    },
    Group {
        handler: H,
        child: Router<H>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    Index,
    Fallback,
    Dir,
    Param,
    Where,
    Group,
}

impl MatcherKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatcherKind::Index => "index",
            MatcherKind::Fallback => "fallback",
            MatcherKind::Dir => "dir",
            MatcherKind::Param => "param",
            MatcherKind::Where => "where",
            MatcherKind::Group => "group",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<H> Matcher<H> {
    pub fn kind(&self) -> MatcherKind {
        match self {
            Matcher::Index(_) => MatcherKind::Index,
            Matcher::Fallback(_) => MatcherKind::Fallback,
            Matcher::Dir { .. } => MatcherKind::Dir,
            Matcher::Param { .. } => MatcherKind::Param,
            Matcher::Where { .. } => MatcherKind::Where,
            Matcher::Group { .. } => MatcherKind::Group,
        }
    }

    pub fn child(&self) -> Option<&Router<H>> {
        match self {
            Matcher::Index(_) | Matcher::Fallback(_) => None,
            Matcher::Dir { child, .. }
            | Matcher::Param { child, .. }
            | Matcher::Where { child, .. }
            | Matcher::Group { child, .. } => Some(child),
        }
    }
}

impl<H: Clone> Matcher<H> {
    pub fn evaluate<S: AsRef<str>>(&self, segments: &[S], data: &Value) -> MatchOutcome<H> {
        match self {
            Matcher::Index(handler) => {
                if segments.is_empty() {
                    MatchOutcome::leaf(handler.clone())
                } else {
                    MatchOutcome::Failed
                }
            }
            Matcher::Fallback(handler) => MatchOutcome::leaf(handler.clone()),
            Matcher::Dir { segment, child } => match segments.split_first() {
                Some((first, rest)) if child.config().segment_eq(segment, first.as_ref()) => {
                    child.run(rest, data)
                }
                _ => MatchOutcome::Failed,
            },
            Matcher::Param {
                name,
                parser,
                child,
            } => {
                let Some((first, rest)) = segments.split_first() else {
                    return MatchOutcome::Failed;
                };
                match parser.parse(first.as_ref()) {
                    Some(value) => child.run(rest, data).with_param(name.as_str(), value),
                    None => MatchOutcome::Failed,
                }
            }
            Matcher::Where { guard, child } => {
                if guard.check(data) {
                    child.run(segments, data)
                } else {
                    MatchOutcome::Failed
                }
            }
            Matcher::Group { handler, child } => {
                child.run(segments, data).with_component(handler.clone())
            }
        }
    }
}
