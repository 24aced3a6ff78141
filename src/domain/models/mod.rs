pub mod schedule;
pub mod spot;
pub mod status;
