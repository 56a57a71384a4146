//! Age computation from a date of birth

use chrono::{Datelike, NaiveDate};

/// Compute a whole-year age on a given day
///
/// The year difference, minus one when `today`'s (month, day) falls before
/// the birthday's (month, day), meaning the birthday has not yet occurred in
/// `today`'s year. A date of birth in the future is not rejected and yields
/// a negative age.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let before_birthday = (today.month(), today.day()) < (dob.month(), dob.day());
    today.year() - dob.year() - i32::from(before_birthday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_on(date(1987, 6, 24), date(2022, 6, 24)), 35);
    }

    #[test]
    fn test_age_day_before_birthday() {
        assert_eq!(age_on(date(1987, 6, 24), date(2022, 6, 23)), 34);
    }

    #[test]
    fn test_age_day_after_birthday() {
        assert_eq!(age_on(date(1987, 6, 24), date(2022, 6, 25)), 35);
    }

    #[test]
    fn test_age_earlier_month() {
        assert_eq!(age_on(date(1987, 6, 24), date(2022, 5, 30)), 34);
    }

    #[test]
    fn test_age_later_month() {
        assert_eq!(age_on(date(1987, 6, 24), date(2022, 7, 1)), 35);
    }

    #[test]
    fn test_future_dob_goes_negative() {
        assert_eq!(age_on(date(2030, 1, 1), date(2022, 6, 24)), -8);
    }

    #[test]
    fn test_newborn_is_zero() {
        assert_eq!(age_on(date(2022, 1, 10), date(2022, 6, 24)), 0);
    }
}
