use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("parameter '{name}' has an invalid pattern")]
    InvalidParamPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
    #[error("guard pattern must be a JSON object (found {found})")]
    GuardPatternNotObject { found: &'static str },
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
