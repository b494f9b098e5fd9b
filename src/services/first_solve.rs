use crate::models::{ContestantRow, FirstSolverMap, ParsedSubmission};

/// Earliest accepted solver for every problem column.
///
/// Equal times go to the row scanned first.
pub fn build_first_solvers(rows: &[ContestantRow], problem_count: usize) -> FirstSolverMap {
    let mut map = FirstSolverMap::default();

    for problem in 0..problem_count {
        let earliest = rows
            .iter()
            .filter_map(|row| {
                row.cells
                    .get(problem)
                    .filter(|cell| cell.solved)
                    .map(|cell: &ParsedSubmission| (cell.accepted_time_seconds, row))
            })
            .fold(None::<(u64, &ContestantRow)>, |best, (time, row)| match best {
                Some((best_time, _)) if best_time <= time => best,
                _ => Some((time, row)),
            });

        if let Some((_, row)) = earliest {
            map.insert(problem, row.identity_key.clone());
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, cells: Vec<ParsedSubmission>) -> ContestantRow {
        ContestantRow {
            identity_key: key.to_string(),
            display_name: key.to_string(),
            score: 0,
            raw_cells: vec![String::new(); cells.len()],
            cells,
        }
    }

    #[test]
    fn earliest_time_wins() {
        let rows = vec![
            row("alice", vec![ParsedSubmission::accepted(900, 0)]),
            row("bob", vec![ParsedSubmission::accepted(300, 2)]),
        ];
        let map = build_first_solvers(&rows, 1);
        assert_eq!(map.solver(0), Some("bob"));
    }

    #[test]
    fn tie_goes_to_earlier_row() {
        let rows = vec![
            row("carol", vec![ParsedSubmission::accepted(600, 0)]),
            row("dave", vec![ParsedSubmission::accepted(600, 0)]),
        ];
        for _ in 0..3 {
            assert_eq!(build_first_solvers(&rows, 1).solver(0), Some("carol"));
        }
    }

    #[test]
    fn unsolved_column_has_no_solver() {
        let rows = vec![
            row(
                "erin",
                vec![ParsedSubmission::rejected(4), ParsedSubmission::accepted(60, 0)],
            ),
            row("frank", vec![ParsedSubmission::UNTOUCHED]),
        ];
        let map = build_first_solvers(&rows, 2);
        assert_eq!(map.solver(0), None);
        assert_eq!(map.solver(1), Some("erin"));
        assert_eq!(map.len(), 1);
    }
}
