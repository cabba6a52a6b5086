pub mod date;
pub mod path;
pub mod table;
pub mod time;

pub use time::{ms_to_hours, round2};
