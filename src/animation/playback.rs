//! Frame-locked playback/record state machine.
//!
//! One `PlaybackSession` owns all playback state — current time, mode,
//! frame timing — and is driven by the event loop through [`tick`] with a
//! monotonic clock value sampled once per loop iteration. Time advances by
//! exactly one fixed frame unit per elapsed frame period, never wall-clock
//! scaled, and the due-time accumulator advances by `period` rather than
//! snapping to `now` so rounding never drifts. At most one step is taken
//! per call regardless of backlog: a stalled loop catches up in slow
//! motion over later iterations instead of jumping frames.
//!
//! [`tick`]: PlaybackSession::tick

use crate::animation::evaluator::AnimationState;
use crate::animation::store::KeyframeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    /// Recording implies playing; every step also captures a frame.
    Recording,
}

/// Default animation-time units added per frame step.
pub const DEFAULT_FRAME_STEP: f32 = 1.0 / 30.0;
/// Default wall-clock seconds between steps (30 fps).
pub const DEFAULT_FRAME_PERIOD: f64 = 1.0 / 30.0;

#[derive(Debug, Clone)]
pub struct PlaybackSession {
    state: PlaybackState,
    /// Current playback/scrub time in animation units.
    time: f32,
    /// Animation-time units advanced per step.
    frame_step: f32,
    /// Wall-clock seconds between steps.
    frame_period: f64,
    /// Next wall-clock instant a step is due; `None` re-arms on the first
    /// tick after a transition.
    next_step_at: Option<f64>,
}

impl PlaybackSession {
    #[must_use]
    pub fn new(frame_step: f32, frame_period: f64) -> Self {
        Self {
            state: PlaybackState::Idle,
            time: 0.0,
            frame_step,
            frame_period,
            next_step_at: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.state == PlaybackState::Recording
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Idle → Playing. Refused on an empty store or while already
    /// playing/recording. Playback resumes from the current scrub time.
    pub fn play(&mut self, store: &KeyframeStore) -> bool {
        if self.state != PlaybackState::Idle || store.is_empty() {
            return false;
        }
        self.state = PlaybackState::Playing;
        self.next_step_at = None;
        log::debug!("playback started at t={}", self.time);
        true
    }

    /// Idle → Recording. Refused on an empty store or while already
    /// playing/recording. Time restarts from 0; pair with
    /// [`crate::animation::FrameRecorder::reset`] so frame numbering
    /// restarts too.
    pub fn record(&mut self, store: &KeyframeStore) -> bool {
        if self.state != PlaybackState::Idle || store.is_empty() {
            return false;
        }
        self.state = PlaybackState::Recording;
        self.time = 0.0;
        self.next_step_at = None;
        log::debug!("recording started");
        true
    }

    /// Playing/Recording → Idle. Takes effect immediately; recording has no
    /// independent pause. Resuming later continues from the stored time.
    pub fn stop(&mut self) {
        if self.state != PlaybackState::Idle {
            log::debug!("playback stopped at t={}", self.time);
        }
        self.state = PlaybackState::Idle;
        self.next_step_at = None;
    }

    /// Sets the time directly. Allowed only while Idle.
    pub fn scrub(&mut self, time: f32) -> bool {
        if self.state != PlaybackState::Idle {
            return false;
        }
        self.time = time;
        true
    }

    // ========================================================================
    // Per-tick drive
    // ========================================================================

    /// Advances the state machine. `now` is a monotonic clock in seconds,
    /// sampled once per event-loop iteration by the caller. Returns the
    /// evaluated state when a step was taken this tick, `None` otherwise.
    ///
    /// Stepping past the last keyframe timestamp clamps time to that
    /// maximum, evaluates the terminal state and transitions to Idle.
    pub fn tick(&mut self, now: f64, store: &KeyframeStore) -> Option<AnimationState> {
        if self.state == PlaybackState::Idle {
            return None;
        }

        match self.next_step_at {
            None => {
                // First tick after a transition steps immediately and arms
                // the accumulator.
                self.next_step_at = Some(now + self.frame_period);
            }
            Some(due) if now >= due => {
                self.next_step_at = Some(due + self.frame_period);
            }
            Some(_) => return None,
        }

        self.time += self.frame_step;
        let max = store.max_time();
        if self.time > max {
            self.time = max;
            let state = store.sample(self.time);
            log::debug!("playback reached end at t={max}");
            self.state = PlaybackState::Idle;
            self.next_step_at = None;
            return Some(state);
        }
        Some(store.sample(self.time))
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_STEP, DEFAULT_FRAME_PERIOD)
    }
}
