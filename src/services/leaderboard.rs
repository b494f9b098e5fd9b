use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TableError;
use crate::models::{
    CellClass, ContestantRow, FirstSolverMap, LeaderboardCell, LeaderboardEntry,
    ParsedSubmission, ProblemColumn, ProblemLabel, Standings,
};
use crate::services::cell_formatter::format_cell;
use crate::services::first_solve::build_first_solvers;
use crate::services::penalty::aggregate;
use crate::services::submission_parser::try_parse_submission;
use crate::services::table_decoder::DecodedTable;

/// Rank, Team, Score and Penalty precede the problem columns.
pub const FIXED_COLUMNS: usize = 4;

static PROBLEM_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z])\s*(\d+)\s*/\s*(\d+)").expect("static regex")
});

pub fn parse_problem_label(header: &str) -> ProblemLabel {
    let parsed = PROBLEM_HEADER.captures(header).and_then(|caps| {
        let letter = caps[1].chars().next()?;
        let points_earned = caps[2].parse().ok()?;
        let points_possible = caps[3].parse().ok()?;
        Some(ProblemLabel::Parsed {
            letter,
            points_earned,
            points_possible,
        })
    });

    parsed.unwrap_or_else(|| ProblemLabel::Opaque {
        text: header.to_string(),
    })
}

/// Handle part of a composite team field such as `handle(Real Name)`.
pub fn identity_key(team: &str) -> &str {
    match team.split_once('(') {
        Some((handle, _)) if !handle.trim().is_empty() => handle.trim(),
        _ => team.trim(),
    }
}

fn build_problem_columns(table: &DecodedTable) -> Vec<ProblemColumn> {
    table
        .headers()
        .iter()
        .enumerate()
        .skip(FIXED_COLUMNS)
        .filter(|(_, header)| !header.is_empty())
        .map(|(table_index, header)| ProblemColumn {
            table_index,
            raw_header: header.clone(),
            label: parse_problem_label(header),
        })
        .collect()
}

fn build_contestant_rows(
    table: &DecodedTable,
    columns: &[ProblemColumn],
    name_map: &HashMap<String, String>,
    warnings: &mut Vec<String>,
) -> Vec<ContestantRow> {
    let mut rows = Vec::new();

    for row in 0..table.row_count() {
        let team = table.value(row, "Team");
        if team.trim().is_empty() {
            continue;
        }

        let key = identity_key(team);
        let display_name = name_map.get(key).map(String::as_str).unwrap_or(key);
        if display_name.trim().is_empty() {
            continue;
        }

        let mut raw_cells = Vec::with_capacity(columns.len());
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            let raw = table.cell(row, column.table_index);
            let parsed = try_parse_submission(raw).unwrap_or_else(|err| {
                warnings.push(format!("team {key}, problem {}: {err}", column.raw_header));
                ParsedSubmission::UNTOUCHED
            });
            raw_cells.push(raw.to_string());
            cells.push(parsed);
        }

        rows.push(ContestantRow {
            identity_key: key.to_string(),
            display_name: display_name.to_string(),
            score: table.value(row, "Score").trim().parse().unwrap_or(0),
            raw_cells,
            cells,
        });
    }

    rows
}

pub fn classify(parsed: &ParsedSubmission, is_first_solver: bool) -> CellClass {
    if parsed.solved && is_first_solver {
        CellClass::FirstSolve
    } else if parsed.solved {
        CellClass::Solved
    } else if parsed.incorrect_attempts > 0 {
        CellClass::Attempted
    } else {
        CellClass::Untouched
    }
}

fn to_entry(rank: usize, row: ContestantRow, first_solvers: &FirstSolverMap) -> LeaderboardEntry {
    let summary = aggregate(&row.cells);
    let cells = row
        .raw_cells
        .into_iter()
        .zip(&row.cells)
        .enumerate()
        .map(|(problem, (raw, parsed))| LeaderboardCell {
            raw,
            parsed: *parsed,
            class: classify(
                parsed,
                first_solvers.is_first_solver(problem, &row.identity_key),
            ),
            display: format_cell(parsed),
        })
        .collect();

    LeaderboardEntry {
        rank,
        identity_key: row.identity_key,
        display_name: row.display_name,
        score: row.score,
        solved_count: summary.solved_count,
        total_penalty: summary.total_penalty_minutes,
        cells,
    }
}

/// Builds the standings view from a decoded rank sheet.
///
/// Row order of the sheet is the rank order. Rows without a team or without a
/// resolvable name are dropped before ranks are assigned.
pub fn build_leaderboard(
    table: &DecodedTable,
    name_map: &HashMap<String, String>,
) -> Result<Standings, TableError> {
    if table.row_count() == 0 {
        return Err(TableError::NoRows);
    }
    if table.headers().len() < FIXED_COLUMNS {
        return Err(TableError::InsufficientHeaders {
            found: table.headers().len(),
            expected: FIXED_COLUMNS,
        });
    }

    let columns = build_problem_columns(table);
    let mut warnings = Vec::new();
    let rows = build_contestant_rows(table, &columns, name_map, &mut warnings);
    let first_solvers = build_first_solvers(&rows, columns.len());

    let entries = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| to_entry(index + 1, row, &first_solvers))
        .collect();

    Ok(Standings {
        columns,
        entries,
        first_solvers,
        warnings,
    })
}

/// Entries whose name or handle contains `query`, ignoring case.
pub fn filter_entries<'a>(
    entries: &'a [LeaderboardEntry],
    query: &str,
) -> Vec<&'a LeaderboardEntry> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            query.is_empty()
                || entry.display_name.to_lowercase().contains(&query)
                || entry.identity_key.to_lowercase().contains(&query)
        })
        .collect()
}
