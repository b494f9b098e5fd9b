use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Decoded verdict of one standings cell.
///
/// `accepted_time_seconds` is zero whenever `solved` is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSubmission {
    pub solved: bool,
    pub accepted_time_seconds: u64,
    pub incorrect_attempts: u32,
}

impl ParsedSubmission {
    pub const UNTOUCHED: ParsedSubmission = ParsedSubmission {
        solved: false,
        accepted_time_seconds: 0,
        incorrect_attempts: 0,
    };

    pub fn accepted(accepted_time_seconds: u64, incorrect_attempts: u32) -> Self {
        Self {
            solved: true,
            accepted_time_seconds,
            incorrect_attempts,
        }
    }

    pub fn rejected(incorrect_attempts: u32) -> Self {
        Self {
            solved: false,
            accepted_time_seconds: 0,
            incorrect_attempts,
        }
    }

    pub fn is_attempted(&self) -> bool {
        !self.solved && self.incorrect_attempts > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProblemLabel {
    Parsed {
        letter: char,
        points_earned: u32,
        points_possible: u32,
    },
    Opaque {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemColumn {
    /// Position of the column in the decoded table.
    pub table_index: usize,
    pub raw_header: String,
    pub label: ProblemLabel,
}

impl ProblemColumn {
    /// Two-line header as shown above the standings grid.
    pub fn header_lines(&self) -> (String, String) {
        match &self.label {
            ProblemLabel::Parsed {
                letter,
                points_earned,
                points_possible,
            } => (
                letter.to_string(),
                format!("({points_earned}/{points_possible})"),
            ),
            ProblemLabel::Opaque { text } => (text.clone(), String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestantRow {
    pub identity_key: String,
    pub display_name: String,
    pub score: u32,
    pub raw_cells: Vec<String>,
    pub cells: Vec<ParsedSubmission>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltySummary {
    pub solved_count: u32,
    pub total_penalty_minutes: u64,
}

/// Earliest accepted solver per problem, keyed by position in the problem list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstSolverMap {
    solvers: BTreeMap<usize, String>,
}

impl FirstSolverMap {
    pub fn insert(&mut self, problem: usize, identity_key: String) {
        self.solvers.insert(problem, identity_key);
    }

    pub fn solver(&self, problem: usize) -> Option<&str> {
        self.solvers.get(&problem).map(String::as_str)
    }

    pub fn is_first_solver(&self, problem: usize, identity_key: &str) -> bool {
        self.solver(problem) == Some(identity_key)
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellClass {
    FirstSolve,
    Solved,
    Attempted,
    Untouched,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDisplay {
    pub line1: String,
    pub line2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardCell {
    pub raw: String,
    pub parsed: ParsedSubmission,
    pub class: CellClass,
    pub display: CellDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position in the built leaderboard; kept unchanged by filtering.
    pub rank: usize,
    pub identity_key: String,
    pub display_name: String,
    pub score: u32,
    pub solved_count: u32,
    pub total_penalty: u64,
    pub cells: Vec<LeaderboardCell>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standings {
    pub columns: Vec<ProblemColumn>,
    pub entries: Vec<LeaderboardEntry>,
    pub first_solvers: FirstSolverMap,
    /// Cells that looked like verdicts but could not be read.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: String,
    pub name: String,
    pub date: String,
    pub duration: String,
    pub description: String,
    pub rank_sheet: String,
    pub link: String,
    pub password: String,
    pub problem_setters: String,
    pub coders: String,
}

impl Contest {
    pub fn has_rank_sheet(&self) -> bool {
        !self.rank_sheet.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Upcoming,
    Running,
    /// Finished and a rank sheet is published.
    Ranked,
    /// Finished, rank sheet not published yet.
    Waiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coder {
    pub serial: String,
    pub name: String,
    pub student_id: String,
    pub codeforces: String,
    pub vjudge: String,
    pub atcoder: String,
    pub codechef: String,
    pub max_cf_rank: String,
    pub max_cf_rating: String,
    pub skip: String,
    pub year_prefix: String,
    pub rating: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Codeforces,
    Vjudge,
    Atcoder,
    Codechef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub url: String,
    pub display: String,
}
