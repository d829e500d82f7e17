pub mod path;
pub mod time;

pub use time::{clock_12h, format_secs, parse_duration_secs};
