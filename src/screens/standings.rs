use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{CellClass, LeaderboardCell, LeaderboardEntry, ProblemColumn};

fn class_color(class: CellClass) -> Option<Color> {
    match class {
        CellClass::FirstSolve => Some(Color::Yellow),
        CellClass::Solved => Some(Color::Green),
        CellClass::Attempted => Some(Color::Red),
        CellClass::Untouched => None,
    }
}

fn grid_cell(cell: &LeaderboardCell) -> Cell {
    let text = if cell.display.line2.is_empty() {
        cell.display.line1.clone()
    } else {
        format!("{}\n{}", cell.display.line1, cell.display.line2)
    };
    let grid = Cell::new(text).set_alignment(CellAlignment::Center);
    let grid = match class_color(cell.class) {
        Some(color) => grid.fg(color),
        None => grid,
    };
    if cell.class == CellClass::FirstSolve {
        grid.add_attribute(Attribute::Bold)
    } else {
        grid
    }
}

pub fn standings_table(columns: &[ProblemColumn], entries: &[&LeaderboardEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Solved").add_attribute(Attribute::Bold),
        Cell::new("Penalty").add_attribute(Attribute::Bold),
    ];
    header.extend(columns.iter().map(|column| {
        let (top, bottom) = column.header_lines();
        Cell::new(format!("{top}\n{bottom}"))
            .set_alignment(CellAlignment::Center)
            .add_attribute(Attribute::Bold)
    }));
    table.set_header(header);

    for entry in entries {
        let mut row = vec![
            Cell::new(entry.rank).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}\n{}", entry.display_name, entry.identity_key)),
            Cell::new(entry.score).set_alignment(CellAlignment::Right),
            Cell::new(entry.total_penalty).set_alignment(CellAlignment::Right),
        ];
        row.extend(entry.cells.iter().map(grid_cell));
        table.add_row(row);
    }

    table
}
