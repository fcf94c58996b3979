//! # Slider Controller
//!
//! A small timing state machine that decides which item of an ordered
//! sequence is "current". Independent of `App`: the TUI owns one controller
//! and feeds it the length of the filtered view.
//!
//! ```text
//!              next / prev / go_to / autoplay
//!    ┌──────┐ ─────────────────────────────────► ┌───────────────┐
//!    │ Idle │                                    │ Transitioning │
//!    └──────┘ ◄───────────────────────────────── └───────────────┘
//!                 transition_duration elapsed
//! ```
//!
//! While `Transitioning`, every navigation request is ignored.
//!
//! ## Timers
//!
//! Two timers, both stored on the controller and both cancelled by dropping:
//!
//! - **autoplay** (`Interval`): armed only when autoplay is enabled, the
//!   slider is not paused and the host surface is visible. Re-armed lazily by
//!   `tick()` after a resume or when the surface becomes visible again.
//! - **transition end** (`Timeout`): armed on every successful navigation.
//!
//! The owner calls `tick(now)` from its event loop and can size its poll
//! timeout with `next_deadline()`.

use log::debug;
use std::time::{Duration, Instant};

use crate::core::timer::{Interval, Timeout};

pub const DEFAULT_AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSettings {
    pub auto_play: bool,
    pub auto_play_interval: Duration,
    pub transition_duration: Duration,
    pub enable_keyboard_navigation: bool,
    pub show_progress_bar: bool,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            auto_play: true,
            auto_play_interval: DEFAULT_AUTO_PLAY_INTERVAL,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            enable_keyboard_navigation: true,
            show_progress_bar: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderState {
    pub current_index: usize,
    pub is_animating: bool,
    pub direction: Direction,
    pub is_paused: bool,
}

/// Keys the slider understands when keyboard navigation is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    Left,
    Right,
    Space,
    Home,
    End,
}

pub struct SliderController {
    settings: SliderSettings,
    item_count: usize,
    state: SliderState,
    visible: bool,
    autoplay: Option<Interval>,
    transition_end: Option<Timeout>,
}

impl SliderController {
    pub fn new(item_count: usize, settings: SliderSettings) -> Self {
        Self {
            settings,
            item_count,
            state: SliderState::default(),
            visible: true,
            autoplay: None,
            transition_end: None,
        }
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_animating {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn settings(&self) -> &SliderSettings {
        &self.settings
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_pending_timers(&self) -> bool {
        self.autoplay.is_some() || self.transition_end.is_some()
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn next(&mut self, now: Instant) -> bool {
        if self.item_count == 0 || self.state.is_animating {
            return false;
        }
        let index = (self.state.current_index + 1) % self.item_count;
        self.begin_transition(index, Direction::Forward, now);
        true
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        if self.item_count == 0 || self.state.is_animating {
            return false;
        }
        let index = if self.state.current_index == 0 {
            self.item_count - 1
        } else {
            self.state.current_index - 1
        };
        self.begin_transition(index, Direction::Backward, now);
        true
    }

    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.item_count || self.state.is_animating {
            return false;
        }
        let direction = if index > self.state.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.begin_transition(index, direction, now);
        true
    }

    fn begin_transition(&mut self, index: usize, direction: Direction, now: Instant) {
        debug!(
            "Slider {} -> {} ({:?})",
            self.state.current_index, index, direction
        );
        self.state.current_index = index;
        self.state.direction = direction;
        self.state.is_animating = true;
        self.transition_end = Some(Timeout::after(now, self.settings.transition_duration));
    }

    // ------------------------------------------------------------------------
    // Autoplay control
    // ------------------------------------------------------------------------

    pub fn pause(&mut self) {
        self.state.is_paused = true;
        self.autoplay = None;
    }

    /// Clears the paused flag. The autoplay timer is re-armed by the next `tick()`.
    pub fn resume(&mut self) {
        self.state.is_paused = false;
    }

    /// Back to index 0, idle, forward, not paused. Cancels every pending timer.
    pub fn reset(&mut self) {
        self.state = SliderState::default();
        self.autoplay = None;
        self.transition_end = None;
    }

    /// Host surface shown or hidden. Hiding tears the autoplay timer down.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        self.visible = visible;
        self.sync_autoplay(now);
    }

    pub fn set_auto_play(&mut self, enabled: bool, now: Instant) {
        self.settings.auto_play = enabled;
        self.sync_autoplay(now);
    }

    /// The sequence changed length. An index that fell off the end goes back to 0.
    pub fn set_item_count(&mut self, item_count: usize, now: Instant) {
        self.item_count = item_count;
        if self.state.current_index >= item_count {
            self.state.current_index = 0;
        }
        self.sync_autoplay(now);
    }

    fn autoplay_wanted(&self) -> bool {
        self.settings.auto_play
            && !self.settings.auto_play_interval.is_zero()
            && !self.state.is_paused
            && self.visible
            && self.item_count > 1
    }

    fn sync_autoplay(&mut self, now: Instant) {
        if !self.autoplay_wanted() {
            if self.autoplay.take().is_some() {
                debug!("Slider autoplay disarmed");
            }
            return;
        }
        if self.autoplay.is_none() {
            debug!("Slider autoplay armed");
            self.autoplay = Some(Interval::starting(now, self.settings.auto_play_interval));
        }
    }

    // ------------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------------

    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: SliderKey, now: Instant) -> bool {
        if !self.settings.enable_keyboard_navigation {
            return false;
        }
        match key {
            SliderKey::Left => {
                self.prev(now);
            }
            SliderKey::Right => {
                self.next(now);
            }
            SliderKey::Space => {
                if self.state.is_paused {
                    self.resume();
                } else {
                    self.pause();
                }
            }
            SliderKey::Home => {
                self.go_to(0, now);
            }
            SliderKey::End => {
                if self.item_count > 0 {
                    self.go_to(self.item_count - 1, now);
                }
            }
        }
        true
    }

    // ------------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------------

    /// Fires whatever timers are due at `now`. Returns true if the visible
    /// state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.transition_end.is_some_and(|t| t.is_due(now)) {
            self.transition_end = None;
            self.state.is_animating = false;
            changed = true;
        }

        self.sync_autoplay(now);

        let fired = self.autoplay.as_mut().is_some_and(|interval| interval.poll(now));
        if fired && !self.state.is_animating && !self.state.is_paused {
            changed |= self.next(now);
        }

        changed
    }

    /// Earliest instant at which `tick()` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let transition = self.transition_end.map(|t| t.deadline());
        let autoplay = self.autoplay.map(|i| i.deadline());
        match (transition, autoplay) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// How far through the current autoplay period we are, if autoplay is running.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        self.autoplay.map(|interval| interval.progress(now))
    }

    /// Cancels every timer. Also runs on drop.
    pub fn teardown(&mut self) {
        if self.has_pending_timers() {
            debug!("Slider teardown: cancelling timers");
        }
        self.autoplay = None;
        self.transition_end = None;
    }
}

impl Drop for SliderController {
    fn drop(&mut self) {
        self.teardown();
    }
}
