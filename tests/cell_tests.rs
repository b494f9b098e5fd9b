use icepc_standings::models::{CellDisplay, ParsedSubmission};
use icepc_standings::services::cell_formatter::format_cell;
use icepc_standings::{parse_submission, try_parse_submission};
use rstest::rstest;

#[rstest]
#[case("1:16:01 (-1)", true, 4561, 1)]
#[case("0:05:00 (-12)", true, 300, 12)]
#[case("4:00:59", true, 14459, 0)]
#[case("12:00:00", true, 43200, 0)]
#[case("(-3)", false, 0, 3)]
#[case(" (-1)  ", false, 0, 1)]
#[case("  0:10:00 ", true, 600, 0)]
#[case("", false, 0, 0)]
#[case("-", false, 0, 0)]
#[case("0", false, 0, 0)]
#[case("1:16:01 (+1)", false, 0, 0)]
#[case("solved", false, 0, 0)]
fn parses_cell(
    #[case] raw: &str,
    #[case] solved: bool,
    #[case] seconds: u64,
    #[case] incorrect: u32,
) {
    let parsed = parse_submission(raw);
    assert_eq!(parsed.solved, solved, "solved for {raw:?}");
    assert_eq!(parsed.accepted_time_seconds, seconds, "time for {raw:?}");
    assert_eq!(parsed.incorrect_attempts, incorrect, "attempts for {raw:?}");
}

#[rstest]
#[case("1:60:00")]
#[case("1:00:75")]
#[case("99999999999999999999:00:00")]
#[case("(-4294967296)")]
fn malformed_numbers_fail_only_that_cell(#[case] raw: &str) {
    assert!(try_parse_submission(raw).is_err());
    assert_eq!(parse_submission(raw), ParsedSubmission::UNTOUCHED);
}

#[rstest]
#[case("١:٠٠:٠٠")]
#[case("(-٣)")]
#[case("1:٠٥:00 (-1)")]
fn non_ascii_digits_read_as_untouched(#[case] raw: &str) {
    assert_eq!(try_parse_submission(raw), Ok(ParsedSubmission::UNTOUCHED));
}

#[test]
fn unsolved_cells_have_no_time() {
    for raw in ["(-2)", "", "-", "garbage", "1:99:00"] {
        let parsed = parse_submission(raw);
        if !parsed.solved {
            assert_eq!(parsed.accepted_time_seconds, 0);
        }
    }
}

#[rstest]
#[case(ParsedSubmission::accepted(4605, 0), "+", "01:17")]
#[case(ParsedSubmission::accepted(7171, 0), "+", "02:00")]
#[case(ParsedSubmission::accepted(7171, 2), "+2", "02:00")]
#[case(ParsedSubmission::accepted(3600, 1), "+1", "01:00")]
#[case(ParsedSubmission::accepted(86399, 0), "+", "00:00")]
#[case(ParsedSubmission::rejected(2), "-2", "")]
#[case(ParsedSubmission::UNTOUCHED, "", "")]
fn formats_cell(#[case] parsed: ParsedSubmission, #[case] line1: &str, #[case] line2: &str) {
    assert_eq!(
        format_cell(&parsed),
        CellDisplay {
            line1: line1.to_string(),
            line2: line2.to_string(),
        }
    );
}

#[test]
fn formats_parsed_sheet_text() {
    let display = format_cell(&parse_submission("1:59:31"));
    assert_eq!(display.line1, "+");
    assert_eq!(display.line2, "02:00");
}
