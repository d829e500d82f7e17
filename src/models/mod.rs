pub mod day_group;
pub mod record;

pub use day_group::{DayGroup, LogRow};
pub use record::SessionRecord;
