use chrono::{NaiveDate, Offset, TimeZone};
use event_clock::timezone::event_timezone;

#[test]
fn test_event_timezone_resolves_to_south_africa() {
    assert_eq!(event_timezone().name(), "Africa/Johannesburg");
}

#[test]
fn test_event_timezone_is_cached_and_stable() {
    let first = event_timezone();
    let second = event_timezone();
    assert_eq!(first, second);
}

#[test]
fn test_reference_zone_offset_is_plus_two_year_round() {
    // South Africa does not observe seasonal shifts, so January and July
    // carry the same offset.
    let tz = event_timezone();
    for (month, day) in [(1, 15), (7, 15)] {
        let naive = NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let offset = tz
            .offset_from_utc_datetime(&naive)
            .fix()
            .local_minus_utc();
        assert_eq!(offset, 2 * 3600, "unexpected offset in month {}", month);
    }
}
