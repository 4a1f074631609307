use crate::path::SegmentOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterOptions {
    pub case_sensitive: bool,
    pub decode_percent: bool,
    /// Upper bound on path segments; `None` leaves paths unbounded.
    pub max_segments: Option<usize>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            decode_percent: false,
            max_segments: None,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_segments == Some(0) {
            return Err(RouterOptionsError::MaxSegmentsInvalid { provided: 0 });
        }
        Ok(())
    }

    pub fn segment_options(&self) -> SegmentOptions {
        SegmentOptions {
            decode_percent: self.decode_percent,
            limit: self.max_segments,
        }
    }

    /// Compares a `dir` literal against a path segment.
    pub fn segment_eq(&self, literal: &str, segment: &str) -> bool {
        if self.case_sensitive {
            literal == segment
        } else {
            literal.eq_ignore_ascii_case(segment)
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn decode_percent(mut self, value: bool) -> Self {
        self.options.decode_percent = value;
        self
    }

    pub fn max_segments(mut self, value: usize) -> Self {
        self.options.max_segments = Some(value);
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_segments must be at least 1 (got {provided})")]
    MaxSegmentsInvalid { provided: usize },
}
