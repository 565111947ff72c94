//! Feature modules - logic separated from UI

pub mod settings;

pub use settings::Settings;
