//! Application view rendering

use iced::widget::container;
use iced::{Background, Element, Padding};

use super::App;
use super::message::Message;
use crate::ui::primitives::view_progress_ring;
use crate::ui::theme;

impl App {
    /// Host surface with the ring placed at its configured offset
    pub fn view(&self) -> Element<'_, Message> {
        let window = &self.settings.window;
        let offset = window.ring_offset;

        container(view_progress_ring(&self.ring))
            .width(window.width)
            .height(window.height)
            .padding(Padding {
                top: offset,
                right: 0.0,
                bottom: 0.0,
                left: offset,
            })
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::HOST_BACKGROUND)),
                ..Default::default()
            })
            .into()
    }
}
