pub mod coders;
pub mod contests;
pub mod standings;
