use chrono::{DateTime, FixedOffset};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{Contest, ContestStatus};
use crate::services::config_loader::ScheduleConfig;
use crate::services::schedule;

fn status_cell(contest: &Contest, now: DateTime<FixedOffset>, config: &ScheduleConfig) -> Cell {
    match schedule::contest_status(contest, now, config) {
        Ok(ContestStatus::Upcoming) => {
            let text = schedule::contest_start(contest, config)
                .ok()
                .and_then(|start| schedule::countdown(start, now))
                .map(|c| {
                    format!(
                        "upcoming in {}d {:02}:{:02}:{:02}",
                        c.days, c.hours, c.minutes, c.seconds
                    )
                })
                .unwrap_or_else(|| "upcoming".to_string());
            Cell::new(text).fg(Color::Cyan)
        }
        Ok(ContestStatus::Running) => Cell::new("running").fg(Color::Green),
        Ok(ContestStatus::Ranked) => Cell::new("ranked"),
        Ok(ContestStatus::Waiting) => Cell::new("waiting for ranks").fg(Color::Yellow),
        Err(err) => Cell::new(err.to_string()).fg(Color::Red),
    }
}

pub fn contests_table(
    contests: &[&Contest],
    now: DateTime<FixedOffset>,
    config: &ScheduleConfig,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Contest").add_attribute(Attribute::Bold),
        Cell::new("Start").add_attribute(Attribute::Bold),
        Cell::new("Duration").add_attribute(Attribute::Bold),
        Cell::new("Setters").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
    ]);

    for contest in contests {
        table.add_row(vec![
            Cell::new(&contest.id),
            Cell::new(&contest.name),
            Cell::new(&contest.date),
            Cell::new(schedule::format_duration_text(&contest.duration)),
            Cell::new(&contest.problem_setters),
            status_cell(contest, now, config),
        ]);
    }

    table
}
