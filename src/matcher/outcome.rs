use crate::types::RouteParams;
use serde::Serialize;
use serde_json::Value;

static EMPTY_PARAMS: RouteParams = RouteParams::new();

/// Result of evaluating a matcher or a router.
///
/// `Failed` is the only "no match" signal in the engine. Accumulation applied
/// to it is the identity, so a failure bubbles up through every ancestor
/// unchanged until a sibling matcher accepts or the root is reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum MatchOutcome<H> {
    Matched {
        components: Vec<H>,
        params: RouteParams,
    },
    Failed,
}

impl<H> Default for MatchOutcome<H> {
    fn default() -> Self {
        MatchOutcome::Failed
    }
}

impl<H> MatchOutcome<H> {
    pub fn matched(components: Vec<H>, params: RouteParams) -> Self {
        MatchOutcome::Matched { components, params }
    }

    /// A terminal success holding a single component and no parameters.
    pub fn leaf(handler: H) -> Self {
        MatchOutcome::Matched {
            components: vec![handler],
            params: RouteParams::new(),
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, MatchOutcome::Failed)
    }

    /// Matched components in root-to-leaf order; empty on failure.
    pub fn components(&self) -> &[H] {
        match self {
            MatchOutcome::Matched { components, .. } => components,
            MatchOutcome::Failed => &[],
        }
    }

    /// Extracted parameters; empty on failure.
    pub fn params(&self) -> &RouteParams {
        match self {
            MatchOutcome::Matched { params, .. } => params,
            MatchOutcome::Failed => &EMPTY_PARAMS,
        }
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params().get(name)
    }

    pub fn into_parts(self) -> (Vec<H>, RouteParams) {
        match self {
            MatchOutcome::Matched { components, params } => (components, params),
            MatchOutcome::Failed => (Vec::new(), RouteParams::new()),
        }
    }

    /// Binds `name` unless a deeper matcher already bound it.
    pub fn with_param(self, name: impl Into<String>, value: Value) -> Self {
        match self {
            MatchOutcome::Matched { components, params } => MatchOutcome::Matched {
                components,
                params: merge_params(params, name.into(), value),
            },
            MatchOutcome::Failed => MatchOutcome::Failed,
        }
    }

    /// Prepends `component`, so unwinding from leaf to root yields root-to-leaf order.
    pub fn with_component(self, component: H) -> Self {
        match self {
            MatchOutcome::Matched {
                mut components,
                params,
            } => {
                components.insert(0, component);
                MatchOutcome::Matched { components, params }
            }
            MatchOutcome::Failed => MatchOutcome::Failed,
        }
    }
}

/// Adds `name => value` to `existing`. On collision the existing value is kept.
///
/// Outcomes are decorated while the recursion unwinds, so `existing` always
/// holds bindings made closer to the leaf than the one being added.
pub fn merge_params(mut existing: RouteParams, name: String, value: Value) -> RouteParams {
    existing.entry(name).or_insert(value);
    existing
}
