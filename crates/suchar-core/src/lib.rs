pub mod schedule;
pub mod tags;
