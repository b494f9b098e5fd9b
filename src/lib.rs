pub mod error;
pub mod models;
pub mod screens;
pub mod services;

pub use error::{SiteError, SiteResult};
pub use services::leaderboard::{build_leaderboard, filter_entries};
pub use services::submission_parser::{parse_submission, try_parse_submission};
