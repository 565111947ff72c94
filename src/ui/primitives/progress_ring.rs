//! Circular progress ring primitive
//!
//! An animated circular progress indicator drawn with iced's Canvas.
//!
//! # Design
//!
//! [`CircleProgressView`] owns the ring state and the animation state. It hands
//! out a [`ProgressRing`] snapshot per view pass; the snapshot implements the
//! `canvas::Program` trait and does the actual drawing. Neither type depends on
//! application-specific messages.
//!
//! The progress arc is revealed with a cubic ease-in-out over
//! [`ANIMATION_DURATION`](crate::ui::animation::ANIMATION_DURATION), starting the moment the view is attached.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::time::Instant;
use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Point, Radians, Renderer, Size, Theme, mouse};
use serde::{Deserialize, Deserializer, de};

use crate::ui::animation::{AnimationState, FrameTicker, Tick, ease_in_out_cubic};
use crate::ui::theme;

/// Arcs start at 12 o'clock
pub const START_ANGLE: f32 = -FRAC_PI_2;

/// Default progress for a freshly built view
pub const DEFAULT_PROGRESS: f32 = 0.75;

/// Default stroke width as a fraction of the frame width
pub const DEFAULT_LINE_WIDTH_RATIO: f32 = 0.1;

/// Radius of a ring inside a frame of `width`: half the width minus twice the
/// stroke width, never negative
pub fn ring_radius(width: f32, line_width: f32) -> f32 {
    (width / 2.0 - 2.0 * line_width).max(0.0)
}

/// Visual state of the ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingState {
    /// Progress value, always within 0.0 - 1.0
    pub progress: f32,
    /// Ring stroke width
    pub line_width: f32,
    /// Progress arc color
    pub color: Color,
    /// Size of the view's frame
    pub frame: Size,
}

impl RingState {
    /// Radius derived from the current frame and stroke width
    pub fn radius(&self) -> f32 {
        ring_radius(self.frame.width, self.line_width)
    }
}

/// Animated circular progress view
///
/// Setters mark the view dirty without animating. The reveal animation runs
/// once per view lifetime, from [`attach`](Self::attach) until the duration is
/// exhausted.
#[derive(Debug, Clone)]
pub struct CircleProgressView {
    ring: RingState,
    animation: AnimationState,
    /// Created on first attach
    ticker: Option<FrameTicker>,
    needs_display: bool,
}

impl Default for CircleProgressView {
    /// Zero-sized view
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl CircleProgressView {
    pub fn new(frame: Size) -> Self {
        Self {
            ring: RingState {
                progress: DEFAULT_PROGRESS,
                line_width: frame.width * DEFAULT_LINE_WIDTH_RATIO,
                color: theme::ACCENT_CORNFLOWER,
                frame,
            },
            animation: AnimationState::default(),
            ticker: None,
            needs_display: true,
        }
    }

    pub fn progress(&self) -> f32 {
        self.ring.progress
    }

    /// Set progress, clamped to 0.0 - 1.0
    pub fn set_progress(&mut self, progress: f32) {
        let progress = if progress.is_nan() { 0.0 } else { progress };
        self.ring.progress = progress.clamp(0.0, 1.0);
        tracing::debug!("Ring progress set to {:.3}", self.ring.progress);
        self.set_needs_display();
    }

    #[allow(dead_code)]
    pub fn line_width(&self) -> f32 {
        self.ring.line_width
    }

    /// Set the stroke width; the radius follows immediately
    pub fn set_line_width(&mut self, line_width: f32) {
        self.ring.line_width = line_width.max(0.0);
        tracing::debug!(
            "Ring line width set to {:.1} (radius {:.1})",
            self.ring.line_width,
            self.radius()
        );
        self.set_needs_display();
    }

    #[allow(dead_code)]
    pub fn color(&self) -> Color {
        self.ring.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.ring.color = color;
        self.set_needs_display();
    }

    pub fn frame(&self) -> Size {
        self.ring.frame
    }

    pub fn radius(&self) -> f32 {
        self.ring.radius()
    }

    #[allow(dead_code)]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Whether a redraw has been requested since the last drawn frame
    #[allow(dead_code)]
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    fn set_needs_display(&mut self) {
        self.needs_display = true;
    }

    /// Start the reveal animation when the view joins a display hierarchy
    ///
    /// The ticker is created once; attaching again never restarts it.
    pub fn attach(&mut self) {
        if self.ticker.is_none() {
            tracing::info!(
                "Progress ring attached, animating over {:?}",
                self.animation.total_duration
            );
            self.ticker = Some(FrameTicker::start());
        }
    }

    /// Tear down the ticker; no further frames are processed
    pub fn detach(&mut self) {
        if self.ticker.take().is_some() {
            tracing::debug!("Progress ring detached");
        }
    }

    /// Whether display frames should still be delivered to this view
    pub fn is_animating(&self) -> bool {
        self.ticker.is_some_and(|ticker| ticker.is_running())
    }

    /// Deliver one display frame
    pub fn on_frame(&mut self, now: Instant) -> Tick {
        let Some(ticker) = self.ticker.as_mut() else {
            return Tick::Idle;
        };

        let tick = ticker.tick(now, &mut self.animation);
        match tick {
            Tick::Baseline => tracing::debug!("Progress ring baseline frame"),
            Tick::Advanced(_) => tracing::trace!(
                "Progress ring advanced {:?} (total {:?})",
                self.animation.elapsed_since_last_tick,
                self.animation.total_elapsed
            ),
            Tick::Finished => tracing::info!(
                "Progress ring animation finished after {:?}",
                self.animation.total_elapsed
            ),
            Tick::Idle => {}
        }

        if tick.needs_display() {
            self.set_needs_display();
        }
        if self.needs_display {
            // Drawn on this frame
            self.animation.record_draw(now);
            self.needs_display = false;
        }
        tick
    }

    /// Eased animation multiplier in 0.0 - 1.0
    pub fn eased_fraction(&self) -> f32 {
        ease_in_out_cubic(self.animation.normalized_time())
    }

    /// Sweep of the progress arc in degrees, clockwise from 12 o'clock
    pub fn sweep_degrees(&self) -> f32 {
        self.ring.progress * 360.0 * self.eased_fraction()
    }

    /// Drawable snapshot of the current state
    pub fn ring(&self) -> ProgressRing {
        ProgressRing {
            sweep: self.sweep_degrees().to_radians(),
            stroke_width: self.ring.line_width,
            background_color: theme::TRACK,
            progress_color: self.ring.color,
        }
    }
}

impl<'de> Deserialize<'de> for CircleProgressView {
    /// Views are never reconstructed from serialized state
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(de::Error::custom(
            "CircleProgressView cannot be restored from serialized state",
        ))
    }
}

/// Progress ring drawing configuration
#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    /// Progress arc sweep in radians, clockwise from 12 o'clock
    pub sweep: f32,
    /// Ring stroke width
    pub stroke_width: f32,
    /// Track color
    pub background_color: Color,
    /// Progress arc color
    pub progress_color: Color,
}

/// Resolved geometry of a ring inside concrete bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    /// End angle of the progress arc; `None` when there is nothing to draw
    pub end_angle: Option<f32>,
}

impl ProgressRing {
    /// Compute arc geometry for the given bounds; the radius is rederived on
    /// every call
    pub fn geometry(&self, bounds: Size) -> RingGeometry {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let sweep = self.sweep.clamp(0.0, TAU);

        RingGeometry {
            center,
            radius: ring_radius(bounds.width, self.stroke_width),
            start_angle: START_ANGLE,
            end_angle: (sweep > 0.0).then_some(START_ANGLE + sweep),
        }
    }
}

impl<Message> Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let geometry = self.geometry(bounds.size());

        // Track
        let track = Path::circle(geometry.center, geometry.radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.background_color),
        );

        // Progress arc, clockwise in y-down screen space
        if let Some(end_angle) = geometry.end_angle {
            let progress_arc = Path::new(|builder| {
                builder.arc(iced::widget::canvas::path::Arc {
                    center: geometry.center,
                    radius: geometry.radius,
                    start_angle: Radians(geometry.start_angle),
                    end_angle: Radians(end_angle),
                });
            });

            frame.stroke(
                &progress_arc,
                Stroke::default()
                    .with_width(self.stroke_width)
                    .with_color(self.progress_color),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Create a canvas element sized to the view's frame
pub fn view_progress_ring<'a, Message: 'a>(view: &CircleProgressView) -> Element<'a, Message> {
    let frame = view.frame();
    Canvas::new(view.ring())
        .width(frame.width)
        .height(frame.height)
        .into()
}
