#![forbid(unsafe_code)]

//! Style vocabulary for actsheet.
//!
//! # This crate provides
//! - [`Rgb`] colors with `#RRGGBB` parsing.
//! - [`Palette`] light/dark color slots for sheet chrome.
//! - [`SheetMetrics`] for the fixed geometry of the chrome.
//!
//! Everything here is plain data; widgets pick values from it based on the
//! current [`ColorScheme`](actsheet_core::ColorScheme).

pub mod color;
pub mod metrics;
pub mod palette;

pub use color::{ColorParseError, Rgb, Tint};
pub use metrics::SheetMetrics;
pub use palette::Palette;
