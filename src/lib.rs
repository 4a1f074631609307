pub mod enums;
pub mod matcher;
pub mod path;
pub mod router;
pub mod types;

pub use enums::HttpMethod;
pub use matcher::{Guard, MatchOutcome, Matcher, MatcherKind, ParamParser, merge_params};
pub use router::{
    Routable, Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
    RouterResult,
};
pub use types::{RouteParams, Segments};
