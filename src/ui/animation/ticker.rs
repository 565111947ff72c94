//! Frame-driven animation ticker
//!
//! The ticker is an owned resource with no back-reference to the view that
//! owns it. The host delivers display frames (iced's `window::frames()`
//! subscription) only while [`FrameTicker::is_running`] is true; once the
//! animation duration is exhausted the ticker stops for good.

use std::time::Duration;

use iced::time::Instant;

/// Fixed length of the reveal animation
pub const ANIMATION_DURATION: Duration = Duration::from_secs(2);

/// Elapsed-time bookkeeping for a single run of the animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Timestamp of the last frame that was drawn (baseline for the next delta)
    pub last_tick: Option<Instant>,
    /// Delta applied by the most recent tick
    pub elapsed_since_last_tick: Duration,
    /// Accumulated animation time
    pub total_elapsed: Duration,
    /// Time after which the animation is complete
    pub total_duration: Duration,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            last_tick: None,
            elapsed_since_last_tick: Duration::ZERO,
            total_elapsed: Duration::ZERO,
            total_duration: ANIMATION_DURATION,
        }
    }
}

impl AnimationState {
    /// Normalized animation time, `total_elapsed / total_duration`
    ///
    /// Not clamped: values above 1.0 are possible on the last frames.
    pub fn normalized_time(&self) -> f32 {
        if self.total_duration.is_zero() {
            return 1.0;
        }
        self.total_elapsed.as_secs_f32() / self.total_duration.as_secs_f32()
    }

    pub fn is_complete(&self) -> bool {
        self.total_elapsed >= self.total_duration
    }

    /// Record the timestamp of a drawn frame
    pub fn record_draw(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }
}

/// Ticker lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Running,
    Stopped,
}

/// Result of delivering one display frame to the ticker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// First frame: baseline timestamp recorded, nothing else happens
    Baseline,
    /// Animation time advanced by the given delta; a redraw is needed
    Advanced(Duration),
    /// Duration exhausted on this frame; the ticker is now stopped
    Finished,
    /// Frame delivered after the ticker stopped; ignored
    Idle,
}

impl Tick {
    /// Whether this tick should schedule a redraw
    pub fn needs_display(&self) -> bool {
        matches!(self, Tick::Advanced(_) | Tick::Finished)
    }
}

/// Per-frame ticker driving an [`AnimationState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicker {
    state: TickerState,
}

impl FrameTicker {
    /// Create a ticker in the running state
    pub fn start() -> Self {
        Self {
            state: TickerState::Running,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TickerState::Running
    }

    /// Advance the animation by one display frame
    pub fn tick(&mut self, now: Instant, animation: &mut AnimationState) -> Tick {
        if self.state == TickerState::Stopped {
            return Tick::Idle;
        }

        let Some(last) = animation.last_tick else {
            // Establish a baseline so the first delta isn't huge
            animation.last_tick = Some(now);
            return Tick::Baseline;
        };

        if animation.is_complete() {
            self.state = TickerState::Stopped;
            return Tick::Finished;
        }

        let delta = now.saturating_duration_since(last);
        animation.elapsed_since_last_tick = delta;
        animation.total_elapsed += delta;
        Tick::Advanced(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_tick_is_baseline() {
        let t0 = Instant::now();
        let mut ticker = FrameTicker::start();
        let mut animation = AnimationState::default();

        assert_eq!(ticker.tick(t0, &mut animation), Tick::Baseline);
        assert_eq!(animation.last_tick, Some(t0));
        assert_eq!(animation.total_elapsed, Duration::ZERO);
        assert!(ticker.is_running());
    }

    #[test]
    fn test_delta_accumulates_from_last_draw() {
        let t0 = Instant::now();
        let mut ticker = FrameTicker::start();
        let mut animation = AnimationState::default();

        ticker.tick(t0, &mut animation);
        assert_eq!(ticker.tick(t0 + ms(16), &mut animation), Tick::Advanced(ms(16)));
        animation.record_draw(t0 + ms(16));
        assert_eq!(ticker.tick(t0 + ms(40), &mut animation), Tick::Advanced(ms(24)));

        assert_eq!(animation.elapsed_since_last_tick, ms(24));
        assert_eq!(animation.total_elapsed, ms(40));
    }

    #[test]
    fn test_stops_after_duration_exhausted() {
        let t0 = Instant::now();
        let mut ticker = FrameTicker::start();
        let mut animation = AnimationState::default();

        ticker.tick(t0, &mut animation);
        ticker.tick(t0 + ms(2100), &mut animation);
        animation.record_draw(t0 + ms(2100));
        assert!(animation.is_complete());
        // Still running until the next frame observes completion
        assert!(ticker.is_running());

        assert_eq!(ticker.tick(t0 + ms(2116), &mut animation), Tick::Finished);
        assert_eq!(ticker.state(), TickerState::Stopped);
        assert_eq!(animation.total_elapsed, ms(2100));
    }

    #[test]
    fn test_stopped_is_terminal() {
        let t0 = Instant::now();
        let mut ticker = FrameTicker::start();
        let mut animation = AnimationState {
            last_tick: Some(t0),
            total_elapsed: ANIMATION_DURATION,
            ..Default::default()
        };

        assert_eq!(ticker.tick(t0 + ms(16), &mut animation), Tick::Finished);
        for frame in 2..10 {
            assert_eq!(ticker.tick(t0 + ms(16 * frame), &mut animation), Tick::Idle);
        }
        assert_eq!(animation.total_elapsed, ANIMATION_DURATION);
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_normalized_time() {
        let mut animation = AnimationState::default();
        assert_eq!(animation.normalized_time(), 0.0);

        animation.total_elapsed = ms(1000);
        assert!((animation.normalized_time() - 0.5).abs() < 1e-6);

        animation.total_elapsed = ms(2500);
        assert!(animation.normalized_time() > 1.0);
    }

    #[test]
    fn test_redraw_decisions() {
        assert!(!Tick::Baseline.needs_display());
        assert!(Tick::Advanced(ms(16)).needs_display());
        assert!(Tick::Finished.needs_display());
        assert!(!Tick::Idle.needs_display());
    }
}
