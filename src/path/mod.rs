mod error;
mod normalize;

pub use error::{PathError, PathResult};
pub use normalize::{SegmentOptions, decode_segment, split_segments};
