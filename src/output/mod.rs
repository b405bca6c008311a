#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

pub mod tab;
pub mod json;

pub use tab::{TabStyle, format_tab};
pub use json::to_json;
