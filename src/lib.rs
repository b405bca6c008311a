#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod types;
mod system;
mod markup;
mod humanize;
pub mod output;

pub use types::{Breakdown, FormatEntry, Mode, UnitKind, UnitValue};
pub use system::{Clock, CountdownError, DefaultClock, parse_target, remaining_secs};
pub use markup::{HtmlBlocks, RenderBlock};
pub use humanize::{decompose, format_blocks, format_blocks_with, format_coarse, format_full};
