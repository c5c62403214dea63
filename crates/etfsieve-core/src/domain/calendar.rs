use time::macros::format_description;
use time::{Date, Month};

use crate::ValidationError;

/// Parse an ISO8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(input.trim(), &format).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

/// The calendar date `years` whole years before `date`.
///
/// Feb 29 clamps to Feb 28 when the target year is not a leap year.
pub fn years_before(date: Date, years: u32) -> Result<Date, ValidationError> {
    let out_of_range = || ValidationError::DateOutOfRange { years };
    let target_year = i32::try_from(i64::from(date.year()) - i64::from(years))
        .map_err(|_| out_of_range())?;

    match Date::from_calendar_date(target_year, date.month(), date.day()) {
        Ok(shifted) => Ok(shifted),
        Err(_) if date.month() == Month::February && date.day() == 29 => {
            Date::from_calendar_date(target_year, Month::February, 28)
                .map_err(|_| out_of_range())
        }
        Err(_) => Err(out_of_range()),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_iso_date() {
        let parsed = parse_date("2024-06-30").expect("must parse");
        assert_eq!(parsed, date!(2024 - 06 - 30));
    }

    #[test]
    fn rejects_malformed_date() {
        let err = parse_date("06/30/2024").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn shifts_whole_years() {
        let shifted = years_before(date!(2024 - 06 - 30), 5).expect("must shift");
        assert_eq!(shifted, date!(2019 - 06 - 30));
    }

    #[test]
    fn clamps_leap_day() {
        let shifted = years_before(date!(2024 - 02 - 29), 1).expect("must shift");
        assert_eq!(shifted, date!(2023 - 02 - 28));
    }

    #[test]
    fn zero_years_is_identity() {
        let day = date!(2024 - 01 - 02);
        assert_eq!(years_before(day, 0).expect("must shift"), day);
    }
}
