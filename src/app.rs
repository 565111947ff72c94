//! Main application module

mod message;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
use crate::ui::primitives::CircleProgressView;
use crate::ui::theme;

pub use message::Message;

/// One-screen host for the progress ring
pub struct App {
    settings: Settings,
    ring: CircleProgressView,
}

impl App {
    /// Create new application instance from loaded settings
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let frame = settings.window.ring_frame();
        let mut ring = CircleProgressView::new(frame);
        ring.set_progress(settings.ring.progress);
        ring.set_line_width(settings.ring.line_width_for(frame.width));
        ring.set_color(settings.ring.accent());

        tracing::info!(
            "Progress ring {}x{} with radius {:.1}",
            frame.width,
            frame.height,
            ring.radius()
        );

        // Joining the view tree starts the reveal animation
        ring.attach();

        (Self { settings, ring }, Task::none())
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }

    /// Window title showing the configured progress
    pub fn title(&self) -> String {
        format!("Circle Progress - {:.0}%", self.ring.progress() * 100.0)
    }

    /// Display frames while the ring animates, plus close requests
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let animation_sub =
            if subscription_logic::needs_frame_subscription(self.ring.is_animating()) {
                iced::window::frames().map(Message::Frame)
            } else {
                iced::Subscription::none()
            };

        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([animation_sub, close_request_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are only requested while the ticker is running
    pub fn needs_frame_subscription(ticker_running: bool) -> bool {
        ticker_running
    }
}
