//! Replayable playback of a finished grid search.
//!
//! A [`SearchResult`](gridwalk_paths::SearchResult) is flattened into a
//! [`Timeline`]: every visited cell in search order, then every path cell.
//! A [`PlaybackController`] walks that timeline one frame at a time, either
//! by hand or on a timer supplied by a [`Scheduler`].
//!
//! ```
//! use std::time::Duration;
//!
//! use gridwalk_core::{Context, Grid};
//! use gridwalk_paths::Algorithm;
//! use gridwalk_playback::{ManualScheduler, PlaybackConfig, PlaybackController};
//!
//! let mut grid = Grid::parse("S...E").unwrap();
//! let result = Algorithm::AStar.run(&mut grid, &Context::new()).unwrap();
//!
//! let mut playback = PlaybackController::new(PlaybackConfig::default(), ManualScheduler::new());
//! playback.load(result);
//! playback.set_speed(100);
//! playback.play();
//! playback.advance_clock(Duration::from_secs(1));
//! assert_eq!(playback.current_index(), 9);
//! assert!(!playback.is_playing());
//! ```

mod config;
mod controller;
mod error;
mod scheduler;
mod timeline;

pub use config::PlaybackConfig;
pub use controller::{PlaybackCommand, PlaybackController};
pub use error::TimelineError;
pub use scheduler::{ManualScheduler, Scheduler, ThreadScheduler, Tick};
pub use timeline::{Frame, FrameKind, Reveal, Timeline};
