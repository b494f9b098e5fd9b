use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{Coder, Platform};
use crate::services::roster::{codeforces_tier, profile_link};

fn tier_color(tier: &str) -> Option<Color> {
    match tier {
        "legendary-grandmaster" | "international-grandmaster" | "grandmaster" => Some(Color::Red),
        "international-master" | "master" => Some(Color::Yellow),
        "candidate-master" => Some(Color::Magenta),
        "expert" => Some(Color::Blue),
        "specialist" => Some(Color::Cyan),
        "pupil" => Some(Color::Green),
        _ => None,
    }
}

pub fn coders_table(coders: &[&Coder]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Sl. No").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Student ID").add_attribute(Attribute::Bold),
        Cell::new("Codeforces").add_attribute(Attribute::Bold),
        Cell::new("Vjudge").add_attribute(Attribute::Bold),
        Cell::new("Atcoder").add_attribute(Attribute::Bold),
        Cell::new("Codechef").add_attribute(Attribute::Bold),
        Cell::new("Max Rating").add_attribute(Attribute::Bold),
    ]);

    for coder in coders {
        let tier = codeforces_tier(&coder.max_cf_rating);
        let shown = coder.max_rating_display();
        let rating = match tier_color(tier) {
            Some(color) if shown != "-" => Cell::new(shown).fg(color),
            _ => Cell::new(shown),
        };
        table.add_row(vec![
            Cell::new(&coder.serial),
            Cell::new(&coder.name),
            Cell::new(&coder.student_id),
            Cell::new(profile_link(&coder.codeforces, Platform::Codeforces).display),
            Cell::new(profile_link(&coder.vjudge, Platform::Vjudge).display),
            Cell::new(profile_link(&coder.atcoder, Platform::Atcoder).display),
            Cell::new(profile_link(&coder.codechef, Platform::Codechef).display),
            rating,
        ]);
    }

    table
}
