//! Color palette for the progress ring host
//! A single fixed palette; there is no light/dark switching.

use iced::color;
use iced::{Color, Theme};

// ============================================================================
// Color Palette
// ============================================================================

/// Default accent for the progress arc (cornflower blue)
pub const ACCENT_CORNFLOWER: Color = color!(0x6495ed);

/// Neutral track drawn under the progress arc (black at 10% opacity)
pub const TRACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.1,
};

/// Host surface behind the ring
pub const HOST_BACKGROUND: Color = color!(0x00ff00);

/// Theme used by the host window
pub fn app_theme() -> Theme {
    Theme::Light
}

// ============================================================================
// Hex colors
// ============================================================================

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

    match hex.len() {
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)? as f32 / 255.0,
        )),
        _ => None,
    }
}

/// Format a color as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}
