//! The playback state machine.
//!
//! [`PlaybackController`] turns one [`SearchResult`] into a scrubbable
//! sequence of reveal frames. The number of revealed frames is the only
//! state a renderer should read; everything else (timers, speed) only
//! decides when that number changes.

use std::time::Duration;

use gridwalk_core::Coord;
use gridwalk_paths::SearchResult;

use crate::config::PlaybackConfig;
use crate::scheduler::{ManualScheduler, Scheduler, Tick};
use crate::timeline::{Frame, Reveal, Timeline};

// ---------------------------------------------------------------------------
// PlaybackCommand
// ---------------------------------------------------------------------------

/// Commands a presentation layer can issue after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlaybackCommand {
    Play,
    Pause,
    TogglePause,
    Stop,
    StepForward,
    StepBack,
    Faster,
    Slower,
    Seek(isize),
    SetSpeed(u64),
}

// ---------------------------------------------------------------------------
// PlaybackController
// ---------------------------------------------------------------------------

/// Index-based navigation and timed auto-advance over a [`Timeline`].
///
/// At most one timer is armed at a time. Every armed timer carries a fresh
/// [`Tick`]; [`on_tick`](Self::on_tick) ignores anything but the tick it is
/// waiting for, so cancelling is always safe even if the scheduler delivers
/// late.
#[derive(Debug)]
pub struct PlaybackController<S: Scheduler> {
    config: PlaybackConfig,
    result: SearchResult,
    timeline: Timeline,
    /// Number of revealed frames, in `0..=timeline.len()`.
    revealed: usize,
    playing: bool,
    speed_ms: u64,
    scheduler: S,
    pending: Option<Tick>,
    next_tick: u64,
}

impl<S: Scheduler> PlaybackController<S> {
    /// An empty controller at the configured default speed.
    pub fn new(config: PlaybackConfig, scheduler: S) -> Self {
        Self {
            speed_ms: config.default_speed(),
            config,
            result: SearchResult::default(),
            timeline: Timeline::default(),
            revealed: 0,
            playing: false,
            scheduler,
            pending: None,
            next_tick: 0,
        }
    }

    /// Replace the current run. Cancels any pending timer, rewinds to
    /// index -1 and pauses. Speed is kept.
    pub fn load(&mut self, result: SearchResult) {
        self.disarm();
        self.timeline = Timeline::new(&result);
        self.result = result;
        self.revealed = 0;
        self.playing = false;
        log::debug!(
            "playback: loaded {} frames ({} visited, {} path)",
            self.timeline.len(),
            self.timeline.visited_len(),
            self.timeline.path_len()
        );
    }

    /// Same as loading an empty result.
    pub fn clear(&mut self) {
        self.load(SearchResult::default());
    }

    // -- navigation ---------------------------------------------------------

    /// Reveal one more frame. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.revealed >= self.timeline.len() {
            return false;
        }
        self.revealed += 1;
        log::trace!("playback: index {}", self.current_index());
        true
    }

    /// Hide the last revealed frame. Returns false at index -1.
    pub fn step_back(&mut self) -> bool {
        if self.revealed == 0 {
            return false;
        }
        self.revealed -= 1;
        log::trace!("playback: index {}", self.current_index());
        true
    }

    /// Jump to `index`, clamped to `[-1, len - 1]`. Play state is unchanged.
    pub fn seek(&mut self, index: isize) {
        let last = self.timeline.len() as isize - 1;
        self.revealed = (index.clamp(-1, last) + 1) as usize;
    }

    // -- play state ---------------------------------------------------------

    /// Start auto-advancing. Does nothing while already playing, and stays
    /// paused when there is no frame left to reveal.
    pub fn play(&mut self) {
        if self.playing {
            return;
        }
        if self.is_finished() {
            log::debug!("playback: nothing left to play");
            return;
        }
        self.playing = true;
        self.arm();
        log::debug!(
            "playback: playing from index {} every {}ms",
            self.current_index(),
            self.speed_ms
        );
    }

    /// Stop auto-advancing; the index is kept.
    pub fn pause(&mut self) {
        self.disarm();
        if self.playing {
            self.playing = false;
            log::debug!("playback: paused at index {}", self.current_index());
        }
    }

    /// Pause and rewind to index -1.
    pub fn stop(&mut self) {
        self.pause();
        self.revealed = 0;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    // -- speed --------------------------------------------------------------

    /// Set the auto-advance interval, clamped to the configured range. An
    /// already armed timer keeps its delay; the new speed applies from the
    /// next advance on.
    pub fn set_speed(&mut self, ms: u64) {
        self.speed_ms = self.config.clamp_speed(ms);
    }

    /// Halve the interval.
    pub fn faster(&mut self) {
        self.set_speed(self.speed_ms / 2);
    }

    /// Double the interval.
    pub fn slower(&mut self) {
        self.set_speed(self.speed_ms.saturating_mul(2));
    }

    // -- timer --------------------------------------------------------------

    /// Handle a delivered timer. Returns whether a frame was revealed.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        if self.pending != Some(tick) {
            log::trace!("playback: ignoring stale tick {}", tick.id());
            return false;
        }
        self.pending = None;
        if !self.playing {
            return false;
        }
        let advanced = self.step_forward();
        if self.is_finished() {
            self.playing = false;
            log::debug!("playback: finished at index {}", self.current_index());
        } else {
            self.arm();
        }
        advanced
    }

    /// Cancel any pending timer and stop playing. The controller stays
    /// usable afterwards.
    pub fn dispose(&mut self) {
        self.disarm();
        self.playing = false;
    }

    pub fn apply(&mut self, cmd: PlaybackCommand) {
        match cmd {
            PlaybackCommand::Play => self.play(),
            PlaybackCommand::Pause => self.pause(),
            PlaybackCommand::TogglePause => self.toggle(),
            PlaybackCommand::Stop => self.stop(),
            PlaybackCommand::StepForward => {
                self.step_forward();
            }
            PlaybackCommand::StepBack => {
                self.step_back();
            }
            PlaybackCommand::Faster => self.faster(),
            PlaybackCommand::Slower => self.slower(),
            PlaybackCommand::Seek(i) => self.seek(i),
            PlaybackCommand::SetSpeed(ms) => self.set_speed(ms),
        }
    }

    fn arm(&mut self) {
        self.disarm();
        let tick = Tick(self.next_tick);
        self.next_tick += 1;
        self.scheduler
            .schedule(PlaybackConfig::interval(self.speed_ms), tick);
        self.pending = Some(tick);
    }

    fn disarm(&mut self) {
        if let Some(tick) = self.pending.take() {
            self.scheduler.cancel(tick);
        }
    }

    // -- queries ------------------------------------------------------------

    /// Index of the last revealed frame, -1 when nothing is revealed.
    #[inline]
    pub fn current_index(&self) -> isize {
        self.revealed as isize - 1
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// The revealed prefix of the timeline.
    pub fn revealed(&self) -> &[Frame] {
        &self.timeline.frames()[..self.revealed]
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.revealed
            .checked_sub(1)
            .and_then(|i| self.timeline.get(i))
    }

    /// How `pos` should be drawn at the current index.
    pub fn reveal_at(&self, pos: Coord) -> Reveal {
        self.timeline.reveal_at(self.revealed, pos)
    }

    /// Whether every frame is revealed. True for an empty timeline.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.revealed >= self.timeline.len()
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[inline]
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    #[inline]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl PlaybackController<ManualScheduler> {
    /// Move the virtual clock forward by `elapsed`, delivering every timer
    /// that falls due on the way. Returns the number of frames revealed.
    pub fn advance_clock(&mut self, elapsed: Duration) -> usize {
        let target = self.scheduler.now() + elapsed;
        let mut advanced = 0;
        while let Some(tick) = self.scheduler.pop_due(target) {
            if self.on_tick(tick) {
                advanced += 1;
            }
        }
        self.scheduler.advance_to(target);
        advanced
    }
}

impl<S: Scheduler> Drop for PlaybackController<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}
