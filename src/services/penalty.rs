use crate::models::{ParsedSubmission, PenaltySummary};

/// Minutes charged per rejected attempt on a problem that was eventually solved.
pub const PENALTY_PER_REJECT_MINUTES: u64 = 20;

/// Solved count and penalty for one contestant.
///
/// Acceptance times of solved problems are summed in seconds and floored to
/// whole minutes once, then each reject on a solved problem adds the
/// surcharge. Rejects on unsolved problems cost nothing.
pub fn aggregate(cells: &[ParsedSubmission]) -> PenaltySummary {
    let (solved_count, accepted_seconds, reject_minutes) = cells
        .iter()
        .filter(|cell| cell.solved)
        .fold((0u32, 0u64, 0u64), |(count, seconds, rejects), cell| {
            (
                count + 1,
                seconds.saturating_add(cell.accepted_time_seconds),
                rejects.saturating_add(
                    u64::from(cell.incorrect_attempts) * PENALTY_PER_REJECT_MINUTES,
                ),
            )
        });

    PenaltySummary {
        solved_count,
        total_penalty_minutes: (accepted_seconds / 60).saturating_add(reject_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_on_unsolved_problems_are_free() {
        let cells = [
            ParsedSubmission::accepted(1500, 0),
            ParsedSubmission::accepted(2700, 0),
            ParsedSubmission::rejected(2),
        ];
        let summary = aggregate(&cells);
        assert_eq!(summary.solved_count, 2);
        assert_eq!(summary.total_penalty_minutes, 70);
    }

    #[test]
    fn rejects_on_solved_problem_add_twenty_minutes_each() {
        let summary = aggregate(&[ParsedSubmission::accepted(4561, 1)]);
        assert_eq!(summary.solved_count, 1);
        assert_eq!(summary.total_penalty_minutes, 76 + 20);
    }

    #[test]
    fn minutes_are_floored_after_summing() {
        let cells = [
            ParsedSubmission::accepted(59, 0),
            ParsedSubmission::accepted(59, 0),
        ];
        assert_eq!(aggregate(&cells).total_penalty_minutes, 1);
    }

    #[test]
    fn fractional_minutes_carry_across_problems() {
        let cells = [
            ParsedSubmission::accepted(90, 0),
            ParsedSubmission::accepted(90, 1),
        ];
        assert_eq!(aggregate(&cells).total_penalty_minutes, 3 + 20);
    }

    #[test]
    fn empty_row() {
        assert_eq!(aggregate(&[]), PenaltySummary::default());
    }
}
