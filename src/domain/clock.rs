use crate::domain::models::MinuteOfDay;
use crate::infrastructure::error::TimelineError;

pub const MINUTES_PER_DAY: u32 = 1440;
/// Last labelled minute of a day; overnight "start" parts end here.
pub const END_OF_DAY_MINUTE: u32 = 1439;

/// Parse a wall-clock string into minutes since midnight.
///
/// Accepts the 12-hour form `"H:MM AM/PM"` (hour 1-12, case-insensitive
/// meridiem) produced by the app itself, and the 24-hour form `"HH:MM[:SS]"`
/// used by the storage collaborator for routine start times. Seconds are
/// accepted and discarded.
pub fn parse_clock(value: &str) -> Result<MinuteOfDay, TimelineError> {
    let trimmed = value.trim();
    if let Some(minute) = parse_twelve_hour(trimmed) {
        return Ok(minute);
    }
    if let Some(minute) = parse_twenty_four_hour(trimmed) {
        return Ok(minute);
    }
    Err(TimelineError::InvalidTimeFormat(value.to_string()))
}

/// Parse a clock string, falling back to midnight on failure so one bad
/// record never aborts composition of the rest of the day.
pub fn parse_clock_or_midnight(value: &str) -> MinuteOfDay {
    match parse_clock(value) {
        Ok(minute) => minute,
        Err(error) => {
            log::warn!("treating unparseable clock string {value:?} as midnight: {error}");
            0
        }
    }
}

/// Canonical 12-hour rendering: zero-padded minutes, `12:00 PM` for noon,
/// `12:00 AM` for midnight.
pub fn format_minutes(minute: MinuteOfDay) -> String {
    let minute = minute % MINUTES_PER_DAY;
    let hour = minute / 60;
    let minute = minute % 60;
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour_12 = match hour % 12 {
        0 => 12,
        value => value,
    };
    format!("{hour_12}:{minute:02} {meridiem}")
}

/// Plain integer addition, no day wraparound; callers decide what crossing
/// midnight means.
pub fn add_minutes(minute: MinuteOfDay, delta: i64) -> i64 {
    i64::from(minute) + delta
}

/// Plain integer difference, no day wraparound.
pub fn diff_minutes(a: MinuteOfDay, b: MinuteOfDay) -> i64 {
    i64::from(a) - i64::from(b)
}

fn parse_twelve_hour(value: &str) -> Option<MinuteOfDay> {
    let (time_part, meridiem) = value.rsplit_once(char::is_whitespace)?;
    let is_pm = if meridiem.eq_ignore_ascii_case("pm") {
        true
    } else if meridiem.eq_ignore_ascii_case("am") {
        false
    } else {
        return None;
    };

    let (hour_str, minute_str) = time_part.trim().split_once(':')?;
    if minute_str.len() != 2 {
        return None;
    }
    let hour = hour_str.parse::<u32>().ok()?;
    let minute = minute_str.parse::<u32>().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour_24 = hour % 12 + if is_pm { 12 } else { 0 };
    Some(hour_24 * 60 + minute)
}

fn parse_twenty_four_hour(value: &str) -> Option<MinuteOfDay> {
    let mut split = value.split(':');
    let hour = split.next()?.parse::<u32>().ok()?;
    let minute = split.next()?.parse::<u32>().ok()?;
    if let Some(seconds_str) = split.next() {
        let seconds = seconds_str.parse::<u32>().ok()?;
        if seconds > 59 {
            return None;
        }
    }
    if split.next().is_some() {
        return None;
    }
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_twelve_hour_strings() {
        assert_eq!(parse_clock("9:05 AM").expect("valid"), 545);
        assert_eq!(parse_clock("12:00 AM").expect("valid"), 0);
        assert_eq!(parse_clock("12:00 PM").expect("valid"), 720);
        assert_eq!(parse_clock("11:59 pm").expect("valid"), 1439);
        assert_eq!(parse_clock("  1:30 Pm  ").expect("valid"), 810);
    }

    #[test]
    fn parses_twenty_four_hour_strings() {
        assert_eq!(parse_clock("00:00").expect("valid"), 0);
        assert_eq!(parse_clock("23:59").expect("valid"), 1439);
        assert_eq!(parse_clock("09:30").expect("valid"), 570);
        assert_eq!(parse_clock("09:30:45").expect("valid"), 570);
    }

    #[test]
    fn rejects_out_of_range_and_malformed_input() {
        for input in [
            "", "noon", "24:00", "12:60", "0:30 AM", "13:00 PM", "9:5 AM", "9-30", "09:30:61",
            "09:30:00:00",
        ] {
            assert!(
                parse_clock(input).is_err(),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn formats_noon_and_midnight_canonically() {
        assert_eq!(format_minutes(0), "12:00 AM");
        assert_eq!(format_minutes(720), "12:00 PM");
        assert_eq!(format_minutes(545), "9:05 AM");
        assert_eq!(format_minutes(1439), "11:59 PM");
    }

    #[test]
    fn fallback_treats_garbage_as_midnight() {
        assert_eq!(parse_clock_or_midnight("whenever"), 0);
        assert_eq!(parse_clock_or_midnight("7:45 AM"), 465);
    }

    #[test]
    fn minute_arithmetic_does_not_wrap() {
        assert_eq!(add_minutes(1430, 20), 1450);
        assert_eq!(add_minutes(10, -30), -20);
        assert_eq!(diff_minutes(10, 30), -20);
    }

    proptest! {
        #[test]
        fn twelve_hour_roundtrip_normalizes(
            hour in 1u32..=12,
            minute in 0u32..=59,
            is_pm in any::<bool>(),
            lowercase in any::<bool>(),
        ) {
            let meridiem = match (is_pm, lowercase) {
                (true, true) => "pm",
                (true, false) => "PM",
                (false, true) => "am",
                (false, false) => "AM",
            };
            let input = format!("{hour}:{minute:02} {meridiem}");
            let canonical = format!("{hour}:{minute:02} {}", if is_pm { "PM" } else { "AM" });

            let parsed = parse_clock(&input).expect("generated string parses");
            prop_assert_eq!(format_minutes(parsed), canonical);
        }
    }
}
