use std::collections::HashMap;

use crate::models::{Coder, Platform, ProfileLink};
use crate::services::table_decoder::DecodedTable;

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// `20` followed by the first two digits of a student id.
pub fn year_prefix(student_id: &str) -> String {
    let digits: String = student_id.chars().take(2).collect();
    if digits.len() == 2 && digits.chars().all(|c| c.is_ascii_digit()) {
        format!("20{digits}")
    } else {
        String::new()
    }
}

/// Leading integer of a rating cell, as a spreadsheet user would read it.
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let sign_len = usize::from(text.starts_with(['-', '+']));
    let digits = text[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

pub fn coder_from_row(table: &DecodedTable, row: usize) -> Coder {
    let student_id = table.value(row, "Student ID");
    let max_cf_rating = table.value(row, "max_cf_rating");
    Coder {
        serial: or_default(table.value(row, "Sl. No"), &(row + 1).to_string()),
        name: or_default(table.value(row, "Name"), "-"),
        student_id: or_default(student_id, "-"),
        codeforces: table.value(row, "Codeforces").to_string(),
        vjudge: table.value(row, "Vjudge").to_string(),
        atcoder: table.value(row, "Atcoder").to_string(),
        codechef: table.value(row, "Codechef").to_string(),
        max_cf_rank: or_default(table.value(row, "max_cf_rank"), "-"),
        max_cf_rating: or_default(max_cf_rating, "-"),
        skip: table.value(row, "skip").to_string(),
        year_prefix: year_prefix(student_id),
        rating: leading_int(max_cf_rating).unwrap_or(0),
    }
}

/// Roster in display order: intake year ascending, then rating descending.
pub fn parse_coders(table: &DecodedTable) -> Vec<Coder> {
    let mut coders: Vec<Coder> = (0..table.row_count())
        .map(|row| coder_from_row(table, row))
        .collect();
    coders.sort_by(|a, b| {
        a.year_prefix
            .cmp(&b.year_prefix)
            .then_with(|| b.rating.cmp(&a.rating))
    });
    coders
}

pub fn filter_coders<'a>(coders: &'a [Coder], query: &str) -> Vec<&'a Coder> {
    let query = query.to_lowercase();
    coders
        .iter()
        .filter(|coder| {
            coder.name.to_lowercase().contains(&query)
                || coder.student_id.to_lowercase().contains(&query)
        })
        .collect()
}

impl Coder {
    /// `rating (rank)` for the roster, or `-` when hidden or not known.
    pub fn max_rating_display(&self) -> String {
        let hidden = self.skip.trim().eq_ignore_ascii_case("yes");
        if hidden || self.max_cf_rating == "-" || self.max_cf_rank == "-" {
            "-".to_string()
        } else {
            format!("{} ({})", self.max_cf_rating, self.max_cf_rank)
        }
    }
}

/// Handle to display name, taken from roster rows that have both.
pub fn name_map(table: &DecodedTable) -> HashMap<String, String> {
    (0..table.row_count())
        .filter_map(|row| {
            let handle = table.value(row, "Vjudge");
            let name = table.value(row, "Name");
            (!handle.is_empty() && !name.trim().is_empty())
                .then(|| (handle.to_string(), name.to_string()))
        })
        .collect()
}

/// Codeforces title slug for a rating, empty when the rating is not a number.
pub fn codeforces_tier(rating: &str) -> &'static str {
    let Some(rating) = leading_int(rating) else {
        return "";
    };
    match rating {
        r if r >= 3000 => "legendary-grandmaster",
        r if r >= 2600 => "international-grandmaster",
        r if r >= 2400 => "grandmaster",
        r if r >= 2300 => "international-master",
        r if r >= 2100 => "master",
        r if r >= 1900 => "candidate-master",
        r if r >= 1600 => "expert",
        r if r >= 1400 => "specialist",
        r if r >= 1200 => "pupil",
        _ => "newbie",
    }
}

pub fn profile_link(handle: &str, platform: Platform) -> ProfileLink {
    let handle = handle.trim();
    if handle.is_empty() {
        return ProfileLink {
            url: String::new(),
            display: "-".to_string(),
        };
    }

    let url = match platform {
        Platform::Codeforces => format!("https://codeforces.com/profile/{handle}"),
        Platform::Vjudge => format!("https://vjudge.net/user/{handle}"),
        Platform::Atcoder => format!("https://atcoder.jp/users/{handle}"),
        Platform::Codechef => format!("https://www.codechef.com/users/{handle}"),
    };
    ProfileLink {
        url,
        display: handle.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_prefix_from_student_id() {
        assert_eq!(year_prefix("2104012"), "2021");
        assert_eq!(year_prefix("A123"), "");
        assert_eq!(year_prefix(""), "");
    }

    #[test]
    fn tiers() {
        assert_eq!(codeforces_tier("3100"), "legendary-grandmaster");
        assert_eq!(codeforces_tier("1899"), "expert");
        assert_eq!(codeforces_tier("1200"), "pupil");
        assert_eq!(codeforces_tier("800"), "newbie");
        assert_eq!(codeforces_tier("-"), "");
    }

    #[test]
    fn blank_handle_link() {
        let link = profile_link("  ", Platform::Codeforces);
        assert_eq!(link.url, "");
        assert_eq!(link.display, "-");
    }

    #[test]
    fn vjudge_link() {
        let link = profile_link(" tourist ", Platform::Vjudge);
        assert_eq!(link.url, "https://vjudge.net/user/tourist");
        assert_eq!(link.display, "tourist");
    }
}
