//! Error types for gridwalk-playback.

use thiserror::Error;

/// A stored timeline whose frames do not form visited frames followed by
/// path frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("visited_len {visited_len} exceeds frame count {frames}")]
    VisitedLenOutOfRange { visited_len: usize, frames: usize },

    /// Frame `index` has the wrong kind for its side of `visited_len`.
    #[error("frame {index} is out of order")]
    FrameOrder { index: usize },
}
