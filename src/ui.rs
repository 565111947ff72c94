//! UI module for the circle progress host
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Canvas programs drawn directly with iced
//! - **Animation** (`animation`): Easing curves and the per-frame ticker
//! - **Theme** (`theme`): Fixed color palette

pub mod animation;
pub mod primitives;
pub mod theme;
