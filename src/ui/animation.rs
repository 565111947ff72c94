//! Animation system for the progress ring
//!
//! - [`easing`]: time reparameterization curves
//! - [`ticker`]: per-frame ticker that advances an [`AnimationState`]

pub mod easing;
pub mod ticker;

pub use easing::ease_in_out_cubic;
pub use ticker::{ANIMATION_DURATION, AnimationState, FrameTicker, Tick, TickerState};
