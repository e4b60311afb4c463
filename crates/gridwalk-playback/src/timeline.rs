//! Flattening a [`SearchResult`] into an ordered list of reveal frames.

use gridwalk_core::Coord;
use gridwalk_paths::SearchResult;

use crate::error::TimelineError;

/// Which list a frame came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FrameKind {
    Visited,
    Path,
}

/// One reveal event: a cell becoming visited or becoming part of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub pos: Coord,
    pub kind: FrameKind,
}

/// How a cell should look given a revealed prefix of the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reveal {
    #[default]
    Hidden,
    Visited,
    Path,
}

/// Every visited cell in search order, followed by every path cell from
/// start to end.
///
/// The first `visited_len` frames are always [`FrameKind::Visited`] and the
/// rest [`FrameKind::Path`]; deserialization rejects anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeline"))]
pub struct Timeline {
    frames: Vec<Frame>,
    visited_len: usize,
}

impl Timeline {
    pub fn new(result: &SearchResult) -> Self {
        let visited = result.visited_coords().map(|pos| Frame {
            pos,
            kind: FrameKind::Visited,
        });
        let path = result.path_coords().map(|pos| Frame {
            pos,
            kind: FrameKind::Path,
        });
        Self {
            frames: visited.chain(path).collect(),
            visited_len: result.visited_order().len(),
        }
    }

    /// Rebuild a timeline from stored frames, checking that the first
    /// `visited_len` are visited frames and the remainder path frames.
    pub fn from_parts(frames: Vec<Frame>, visited_len: usize) -> Result<Self, TimelineError> {
        if visited_len > frames.len() {
            return Err(TimelineError::VisitedLenOutOfRange {
                visited_len,
                frames: frames.len(),
            });
        }
        let misplaced = frames.iter().enumerate().find(|(i, f)| {
            let expected = if *i < visited_len {
                FrameKind::Visited
            } else {
                FrameKind::Path
            };
            f.kind != expected
        });
        if let Some((index, _)) = misplaced {
            return Err(TimelineError::FrameOrder { index });
        }
        Ok(Self {
            frames,
            visited_len,
        })
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    /// Number of [`FrameKind::Visited`] frames at the front.
    #[inline]
    pub fn visited_len(&self) -> usize {
        self.visited_len
    }

    /// Number of [`FrameKind::Path`] frames at the back.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.frames.len() - self.visited_len
    }

    /// State of `pos` once the first `revealed` frames are shown. Path
    /// frames come last, so they take precedence over visited ones.
    pub fn reveal_at(&self, revealed: usize, pos: Coord) -> Reveal {
        let prefix = &self.frames[..revealed.min(self.frames.len())];
        prefix
            .iter()
            .rev()
            .find(|f| f.pos == pos)
            .map_or(Reveal::Hidden, |f| match f.kind {
                FrameKind::Visited => Reveal::Visited,
                FrameKind::Path => Reveal::Path,
            })
    }
}

impl From<&SearchResult> for Timeline {
    fn from(result: &SearchResult) -> Self {
        Self::new(result)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeline {
    frames: Vec<Frame>,
    visited_len: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeline> for Timeline {
    type Error = TimelineError;

    fn try_from(raw: RawTimeline) -> Result<Self, TimelineError> {
        Self::from_parts(raw.frames, raw.visited_len)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stored_timeline_loads_back() {
        let frames = vec![
            Frame {
                pos: Coord::new(0, 0),
                kind: FrameKind::Visited,
            },
            Frame {
                pos: Coord::new(0, 0),
                kind: FrameKind::Path,
            },
        ];
        let t = Timeline::from_parts(frames, 1).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.path_len(), 1);
    }

    #[test]
    fn inconsistent_timeline_is_rejected() {
        let err = serde_json::from_str::<Timeline>(r#"{"frames":[],"visited_len":3}"#);
        assert!(err.is_err());

        let misordered = r#"{"frames":[{"pos":{"row":0,"col":0},"kind":"path"}],"visited_len":1}"#;
        assert!(serde_json::from_str::<Timeline>(misordered).is_err());
    }
}
