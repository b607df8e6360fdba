//! Terminal helpers: raw mode, ANSI styling, boxed reports.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::RawModeGuard;
