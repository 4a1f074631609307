use serde_json::Value;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Parameters extracted while walking the tree, keyed by name.
pub type RouteParams = BTreeMap<String, Value>;

/// Non-empty path segments, in path order.
pub type Segments<'a> = SmallVec<[Cow<'a, str>; 8]>;
