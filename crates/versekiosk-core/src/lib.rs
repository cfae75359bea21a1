//! Portable poem-kiosk logic.
//!
//! Everything timing- or layout-sensitive lives here behind capability
//! traits (display, backlight, touch, photo decode, poem library) so that
//! hosts wire hardware in and tests drive the kiosk with mocks.

pub mod app;
pub mod backlight;
pub mod config;
pub mod content;
pub mod display;
pub mod input;
pub mod layout;
pub mod photo;
pub mod playlist;
pub mod transition;
