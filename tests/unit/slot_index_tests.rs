// Unit tests for slot arithmetic and run merging on the public API
// Table-driven, one case per boundary worth pinning down

use pretty_assertions::assert_eq;
use test_case::test_case;
use timebrush::models::settings::GridConfig;
use timebrush::models::slot::TimeRange;
use timebrush::services::range::RangeCompressor;
use timebrush::services::slot_index::SlotIndex;
use timebrush::utils::error::ParseError;

fn index(step: u16) -> SlotIndex {
    let days = GridConfig::default().days().to_vec();
    SlotIndex::new(GridConfig::new(days, step).unwrap())
}

#[test_case("00:00", 0; "midnight")]
#[test_case("09:30", 570; "short form")]
#[test_case("09:30:59", 570; "seconds ignored")]
#[test_case(" 23:50:00 ", 1430; "surrounding whitespace")]
fn test_to_minutes(time: &str, expected: u16) {
    assert_eq!(SlotIndex::to_minutes(time), Ok(expected));
}

#[test_case("24:00"; "hour out of range")]
#[test_case("9h30"; "wrong separator")]
#[test_case(""; "empty")]
fn test_to_minutes_rejects(time: &str) {
    assert_eq!(
        SlotIndex::to_minutes(time),
        Err(ParseError::MalformedTime(time.to_string()))
    );
}

#[test_case(10, 540, (9, 9); "ten minute slot")]
#[test_case(15, 585, (9, 59); "quarter hour ending on the hour")]
#[test_case(30, 1410, (23, 59); "last half hour")]
#[test_case(60, 0, (0, 59); "first hour")]
#[test_case(1, 61, (1, 1); "one minute slot")]
fn test_slot_end_label(step: u16, start: u16, expected: (u16, u16)) {
    assert_eq!(index(step).slot_end_label(start), expected);
}

#[test_case(10, &[600, 610, 620], &[("10:00:00", "10:29:59")]; "one run")]
#[test_case(10, &[620, 600, 610], &[("10:00:00", "10:29:59")]; "unsorted input")]
#[test_case(10, &[600, 620], &[("10:00:00", "10:09:59"), ("10:20:00", "10:29:59")]; "gap splits runs")]
#[test_case(30, &[0, 30, 90], &[("00:00:00", "00:59:59"), ("01:30:00", "01:59:59")]; "half hours")]
#[test_case(10, &[1430], &[("23:50:00", "23:59:59")]; "last slot of the day")]
#[test_case(10, &[], &[]; "nothing selected")]
#[test_case(10, &[1430, u16::MAX, 1440, 605], &[("23:50:00", "23:59:59")]; "off grid minutes skipped")]
#[test_case(60, &[1380, 65535], &[("23:00:00", "23:59:59")]; "no overflow near u16 max")]
fn test_compress_day(step: u16, minutes: &[u16], expected: &[(&str, &str)]) {
    let compressor = RangeCompressor::new(index(step));
    let expected: Vec<TimeRange> = expected
        .iter()
        .map(|(start, end)| TimeRange::new(*start, *end))
        .collect();

    assert_eq!(compressor.compress_day(minutes), expected);
}

#[test]
fn test_numeric_ordering_across_hours() {
    // 9:50 followed by 10:00 is adjacent even though "10" < "9" as text
    let compressor = RangeCompressor::new(index(10));
    assert_eq!(
        compressor.compress_day(&[600, 590]),
        vec![TimeRange::new("09:50:00", "10:09:59")]
    );
}

#[test_case(TimeRange::new("10:05:00", "10:29:59"), ParseError::Misaligned { time: "10:05:00".to_string(), step: 10 }; "misaligned start")]
#[test_case(TimeRange::new("ten", "10:29:59"), ParseError::MalformedTime("ten".to_string()); "malformed start")]
fn test_expand_range_rejects(range: TimeRange, expected: ParseError) {
    let compressor = RangeCompressor::new(index(10));
    assert_eq!(compressor.expand_range(0, &range), Err(expected));
}

#[test]
fn test_expand_range_unknown_day() {
    let compressor = RangeCompressor::new(index(10));
    assert_eq!(
        compressor.expand_range(7, &TimeRange::new("10:00:00", "10:09:59")),
        Err(ParseError::UnknownDay(7))
    );
}

#[test]
fn test_inverted_range_expands_to_nothing() {
    let compressor = RangeCompressor::new(index(10));
    assert_eq!(
        compressor.expand_range(0, &TimeRange::new("12:00:00", "11:00:00")),
        Ok(Vec::new())
    );
}
