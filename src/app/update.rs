//! Message update handlers

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(now) => {
                self.ring.on_frame(now);
                Task::none()
            }
            Message::RequestClose => {
                // Tear the ticker down before the window goes away
                self.ring.detach();
                tracing::info!("Close requested, exiting");
                iced::exit()
            }
        }
    }
}
