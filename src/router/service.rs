use crate::enums::HttpMethod;
use crate::matcher::{Guard, MatchOutcome, Matcher, ParamParser};
use crate::path::split_segments;
use crate::router::{Routable, RouterError, RouterOptions, RouterResult};
use regex::Regex;
use serde_json::{Map, Value};

/// A node in the matching tree.
///
/// Matchers are evaluated in registration order and the first one that does
/// not fail wins. Builder methods either return `self` (to add siblings) or the
/// freshly created child router (to descend a level).
///
/// ```
/// use bunner_tree_router::Router;
/// use serde_json::json;
///
/// let mut router = Router::new();
/// router.index("home");
/// router.dir("users").param("id").index("user");
///
/// let outcome = router.find("/users/42", &json!({}));
/// assert_eq!(outcome.components(), ["user"]);
/// assert_eq!(outcome.param("id"), Some(&json!("42")));
/// ```
///
/// The tree must be fully built before it is matched against; mutation needs
/// `&mut self`, so a shared router cannot change under concurrent lookups.
#[derive(Debug, Clone)]
pub struct Router<H> {
    matchers: Vec<Matcher<H>>,
    options: RouterOptions,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self::from_options(RouterOptions::default())
    }

    /// Validates `options` before building the root router. Options are copied
    /// into every child router created from this one.
    pub fn with_options(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::from_options(options))
    }

    fn from_options(options: RouterOptions) -> Self {
        Self {
            matchers: Vec::new(),
            options,
        }
    }

    pub fn config(&self) -> &RouterOptions {
        &self.options
    }

    pub fn matchers(&self) -> &[Matcher<H>] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    fn child(&self) -> Router<H> {
        Router::from_options(self.options)
    }

    // Only called with nesting variants, so the pushed matcher always owns a child.
    fn descend(&mut self, matcher: Matcher<H>) -> &mut Router<H> {
        self.matchers.push(matcher);
        match self.matchers.last_mut() {
            Some(
                Matcher::Dir { child, .. }
                | Matcher::Param { child, .. }
                | Matcher::Where { child, .. }
                | Matcher::Group { child, .. },
            ) => child,
            Some(Matcher::Index(_) | Matcher::Fallback(_)) | None => {
                unreachable!("descend called without a nesting matcher")
            }
        }
    }
}

impl<H: Clone> Router<H> {
    /// Accepts when no path segments remain.
    pub fn index(&mut self, handler: H) -> &mut Self {
        self.matchers.push(Matcher::Index(handler));
        self
    }

    /// Accepts anything. Register it after the rules it should back up.
    pub fn fallback(&mut self, handler: H) -> &mut Self {
        self.matchers.push(Matcher::Fallback(handler));
        self
    }

    pub fn dir(&mut self, segment: impl Into<String>) -> &mut Router<H> {
        let child = self.child();
        self.descend(Matcher::Dir {
            segment: segment.into(),
            child,
        })
    }

    /// Binds the next segment verbatim as a string parameter.
    pub fn param(&mut self, name: impl Into<String>) -> &mut Router<H> {
        self.param_parsed(name, ParamParser::Identity)
    }

    pub fn param_with<F>(&mut self, name: impl Into<String>, parser: F) -> &mut Router<H>
    where
        F: Fn(&str) -> Option<Value> + Send + Sync + 'static,
    {
        self.param_parsed(name, ParamParser::function(parser))
    }

    pub fn param_regex(&mut self, name: impl Into<String>, regex: Regex) -> &mut Router<H> {
        self.param_parsed(name, ParamParser::Pattern(regex))
    }

    pub fn param_pattern(
        &mut self,
        name: impl Into<String>,
        pattern: &str,
    ) -> RouterResult<&mut Router<H>> {
        let name = name.into();
        match ParamParser::pattern(pattern) {
            Ok(parser) => Ok(self.param_parsed(name, parser)),
            Err(source) => Err(RouterError::InvalidParamPattern { name, source }),
        }
    }

    pub fn param_parsed(&mut self, name: impl Into<String>, parser: ParamParser) -> &mut Router<H> {
        let child = self.child();
        self.descend(Matcher::Param {
            name: name.into(),
            parser,
            child,
        })
    }

    pub fn when<F>(&mut self, predicate: F) -> &mut Router<H>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::predicate(predicate))
    }

    /// Guard on a partial object: every key of `pattern` must be present in the
    /// context data with an equal value.
    pub fn when_matches(&mut self, pattern: Value) -> RouterResult<&mut Router<H>> {
        let guard = Guard::pattern(pattern)?;
        Ok(self.guard(guard))
    }

    pub fn guard(&mut self, guard: Guard) -> &mut Router<H> {
        let child = self.child();
        self.descend(Matcher::Where { guard, child })
    }

    /// Everything matched through the returned router gets `handler` prepended.
    pub fn group(&mut self, handler: H) -> &mut Router<H> {
        let child = self.child();
        self.descend(Matcher::Group { handler, child })
    }

    /// Groups under `handler`, then lets it register its own routes.
    pub fn mount(&mut self, handler: H) -> &mut Router<H>
    where
        H: Routable,
    {
        let child = self.group(handler.clone());
        handler.configure(child);
        child
    }

    pub fn call<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        configure(&mut *self);
        self
    }

    pub fn run<S: AsRef<str>>(&self, segments: &[S], data: &Value) -> MatchOutcome<H> {
        for (position, matcher) in self.matchers.iter().enumerate() {
            let outcome = matcher.evaluate(segments, data);
            if outcome.is_matched() {
                tracing::trace!(
                    position,
                    kind = %matcher.kind(),
                    remaining = segments.len(),
                    "matcher accepted"
                );
                return outcome;
            }
        }

        MatchOutcome::Failed
    }

    /// Splits `path` into non-empty segments and runs the tree over them.
    ///
    /// A path no matcher accepts yields [`MatchOutcome::Failed`]; its
    /// `components()` and `params()` are empty.
    #[tracing::instrument(level = "trace", skip_all, fields(path = %path))]
    pub fn find(&self, path: &str, data: &Value) -> MatchOutcome<H> {
        let segments = split_segments(path, &self.options.segment_options());
        if let Some(limit) = self.options.max_segments {
            if segments.len() > limit {
                tracing::warn!(limit, "path exceeds segment limit");
                return MatchOutcome::Failed;
            }
        }

        self.run(segments.as_slice(), data)
    }

    /// [`Router::find`] with an empty context object.
    pub fn find_path(&self, path: &str) -> MatchOutcome<H> {
        self.find(path, &Value::Object(Map::new()))
    }

    pub fn find_with_method(&self, method: HttpMethod, path: &str) -> MatchOutcome<H> {
        let mut data = Map::new();
        data.insert("method".to_string(), Value::from(method.as_str()));
        self.find(path, &Value::Object(data))
    }
}
