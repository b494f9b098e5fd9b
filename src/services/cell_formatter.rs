use crate::models::{CellDisplay, ParsedSubmission};

/// Two-line grid text for a cell.
///
/// Solved cells show `+` or `+N` over the acceptance time as `HH:MM`, with
/// leftover seconds rounding the minute up. Attempted cells show `-N` alone.
pub fn format_cell(parsed: &ParsedSubmission) -> CellDisplay {
    if parsed.solved {
        let line1 = if parsed.incorrect_attempts == 0 {
            "+".to_string()
        } else {
            format!("+{}", parsed.incorrect_attempts)
        };
        return CellDisplay {
            line1,
            line2: clock_minutes_ceil(parsed.accepted_time_seconds),
        };
    }

    if parsed.incorrect_attempts > 0 {
        return CellDisplay {
            line1: format!("-{}", parsed.incorrect_attempts),
            line2: String::new(),
        };
    }

    CellDisplay::default()
}

fn clock_minutes_ceil(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if seconds == 0 {
        return format!("{hours:02}:{minutes:02}");
    }
    if minutes + 1 == 60 {
        return format!("{:02}:00", (hours + 1) % 24);
    }
    format!("{hours:02}:{:02}", minutes + 1)
}
