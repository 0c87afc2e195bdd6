use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::clock::Clock;
use crate::dates::range::RangeEnd;

/// Whole years and months between two dates.
///
/// `months` stays in `0..=11` for well-formed ranges. A range that ends before
/// it starts yields negative components; that result is not meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedDuration {
    pub years: i32,
    pub months: i32,
}

/// How an elapsed duration is shown next to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElapsedFormat {
    /// "2 years and 6 months"
    #[default]
    YearsAndMonths,
    /// "30 months"
    TotalMonths,
}

/// Calendar months between `start` and `end`, ignoring the day of the month.
///
/// Jan 31 → Feb 1 counts as one month. An ongoing range ends at `clock.today()`.
pub fn total_months_between(start: NaiveDate, end: RangeEnd, clock: &dyn Clock) -> i32 {
    let end = end.resolve(clock.today());
    (end.year() - start.year()) * 12 + (end.month0() as i32 - start.month0() as i32)
}

/// Splits [`total_months_between`] into years and remaining months.
pub fn months_and_years_between(
    start: NaiveDate,
    end: RangeEnd,
    clock: &dyn Clock,
) -> ElapsedDuration {
    let total = total_months_between(start, end, clock);
    ElapsedDuration {
        years: total.div_euclid(12),
        months: total % 12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(date(2024, 3, 15))
    }

    #[test]
    fn test_two_and_a_half_years() {
        let elapsed =
            months_and_years_between(date(2020, 1, 1), RangeEnd::Date(date(2022, 7, 1)), &clock());
        assert_eq!(elapsed, ElapsedDuration { years: 2, months: 6 });
    }

    #[test]
    fn test_same_day_is_zero() {
        let elapsed =
            months_and_years_between(date(2020, 1, 1), RangeEnd::Date(date(2020, 1, 1)), &clock());
        assert_eq!(elapsed, ElapsedDuration { years: 0, months: 0 });
    }

    #[test]
    fn test_day_of_month_is_ignored() {
        let elapsed = months_and_years_between(
            date(2021, 1, 31),
            RangeEnd::Date(date(2021, 2, 1)),
            &clock(),
        );
        assert_eq!(elapsed, ElapsedDuration { years: 0, months: 1 });

        let same_month = months_and_years_between(
            date(2021, 5, 1),
            RangeEnd::Date(date(2021, 5, 31)),
            &clock(),
        );
        assert_eq!(same_month, ElapsedDuration { years: 0, months: 0 });
    }

    #[test]
    fn test_exact_years_have_no_months() {
        let elapsed = months_and_years_between(
            date(2016, 9, 1),
            RangeEnd::Date(date(2020, 9, 30)),
            &clock(),
        );
        assert_eq!(elapsed, ElapsedDuration { years: 4, months: 0 });
    }

    #[test]
    fn test_present_uses_injected_clock() {
        let start = date(2022, 1, 10);
        let early = months_and_years_between(start, RangeEnd::Present, &FixedClock(date(2023, 2, 1)));
        let late = months_and_years_between(start, RangeEnd::Present, &FixedClock(date(2025, 11, 1)));
        assert_eq!(early, ElapsedDuration { years: 1, months: 1 });
        assert_eq!(late, ElapsedDuration { years: 3, months: 10 });
    }

    #[test]
    fn test_total_months_mode() {
        let total = total_months_between(date(2020, 1, 1), RangeEnd::Date(date(2022, 7, 1)), &clock());
        assert_eq!(total, 30);
        let ongoing = total_months_between(date(2023, 3, 1), RangeEnd::Present, &clock());
        assert_eq!(ongoing, 12);
    }

    #[test]
    fn test_months_always_below_twelve_for_ordered_ranges() {
        let start = date(2015, 4, 1);
        for offset in 0..60u32 {
            let end = start
                .checked_add_months(chrono::Months::new(offset))
                .unwrap();
            let elapsed = months_and_years_between(start, RangeEnd::Date(end), &clock());
            assert!(
                (0..12).contains(&elapsed.months),
                "months out of range for offset {offset}: {elapsed:?}"
            );
            assert_eq!(elapsed.years * 12 + elapsed.months, offset as i32);
        }
    }
}
