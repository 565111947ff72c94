//! Application messages

use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Display refresh signal while the ring animates
    Frame(Instant),
    /// Window close button pressed
    RequestClose,
}
