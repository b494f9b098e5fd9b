pub mod cell_formatter;
pub mod config_loader;
pub mod fetcher;
pub mod first_solve;
pub mod leaderboard;
pub mod penalty;
pub mod roster;
pub mod schedule;
pub mod standings_loader;
pub mod submission_parser;
pub mod table_decoder;
