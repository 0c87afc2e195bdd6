//! Date ranges and their display ordering.
//!
//! A range is authored as a two-element tuple `["2020-01-01", "present"]`.
//! The end is either a concrete date or the open-ended `present` sentinel,
//! which is never parsed as a date.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use crate::errors::ContentError;

/// Sentinel used in content files for ranges that are still ongoing.
pub const PRESENT: &str = "present";

const DATE_FORMAT: &str = "%Y-%m-%d";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// End of a date range: a concrete day, or still ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeEnd {
    Date(NaiveDate),
    Present,
}

impl RangeEnd {
    pub fn is_present(&self) -> bool {
        matches!(self, RangeEnd::Present)
    }

    /// Concrete end date, substituting `today` for an ongoing range.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            RangeEnd::Date(date) => *date,
            RangeEnd::Present => today,
        }
    }
}

/// `[start, end]` where `start <= end` whenever `end` is concrete.
///
/// The ordering invariant is a precondition of the content, not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: RangeEnd,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: RangeEnd) -> Self {
        Self { start, end }
    }

    /// Parses the raw `(start, end)` strings of a content file.
    pub fn parse(start: &str, end: &str) -> Result<Self, ContentError> {
        let start = parse_date(start)?;
        let end = if end == PRESENT {
            RangeEnd::Present
        } else {
            RangeEnd::Date(parse_date(end)?)
        };
        Ok(Self { start, end })
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM` (first of the month) or `YYYY` (first of
/// January).
pub fn parse_date(raw: &str) -> Result<NaiveDate, ContentError> {
    let trimmed = raw.trim();
    let padded = match trimmed.len() {
        4 if trimmed.bytes().all(|b| b.is_ascii_digit()) => format!("{trimmed}-01-01"),
        7 => format!("{trimmed}-01"),
        _ => trimmed.to_string(),
    };

    NaiveDate::parse_from_str(&padded, DATE_FORMAT)
        .map_err(|_| ContentError::InvalidDate(raw.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Ordering
// ────────────────────────────────────────────────────────────────────────────

/// Items that carry a date range and can be ordered by it.
pub trait HasRange {
    fn range(&self) -> &DateRange;
}

impl HasRange for DateRange {
    fn range(&self) -> &DateRange {
        self
    }
}

/// Descending-recency comparator.
///
/// An ongoing `a` always sorts first, even against another ongoing range. The
/// check order is significant: two ongoing ranges compare as `Less` both ways.
/// Concrete ends sort by end date, most recent first, with no secondary key.
pub fn compare(a: &DateRange, b: &DateRange) -> Ordering {
    match (a.end, b.end) {
        (RangeEnd::Present, _) => Ordering::Less,
        (_, RangeEnd::Present) => Ordering::Greater,
        (RangeEnd::Date(a_end), RangeEnd::Date(b_end)) => b_end.cmp(&a_end),
    }
}

/// Sorts items by [`compare`] using a stable binary insertion sort.
///
/// `compare` is not a total order when several ranges are ongoing, so the
/// standard library sorts (which may panic on such comparators) are not used.
/// Each item is compared as the left operand against the already-sorted
/// prefix; `Less` moves it left, anything else moves it right. Equal end dates
/// therefore keep their input order, and of several ongoing ranges the one
/// listed last ends up first.
pub fn sort_by_range<T: HasRange>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut left = 0;
        let mut right = i;
        while left < right {
            let mid = left + (right - left) / 2;
            if compare(items[i].range(), items[mid].range()) == Ordering::Less {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        items[left..=i].rotate_right(1);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Serde: ["YYYY-MM-DD", "YYYY-MM-DD" | "present"]
// ────────────────────────────────────────────────────────────────────────────

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (start, end) = <(String, String)>::deserialize(deserializer)?;
        DateRange::parse(&start, &end).map_err(de::Error::custom)
    }
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.start.format(DATE_FORMAT).to_string())?;
        match self.end {
            RangeEnd::Date(end) => tuple.serialize_element(&end.format(DATE_FORMAT).to_string())?,
            RangeEnd::Present => tuple.serialize_element(PRESENT)?,
        }
        tuple.end()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn closed(start_year: i32, end_year: i32, end_month: u32) -> DateRange {
        DateRange::new(
            date(start_year, 1, 1),
            RangeEnd::Date(date(end_year, end_month, 1)),
        )
    }

    fn ongoing(start_year: i32) -> DateRange {
        DateRange::new(date(start_year, 1, 1), RangeEnd::Present)
    }

    #[test]
    fn test_present_sorts_before_concrete_both_ways() {
        let a = ongoing(2020);
        let b = closed(2015, 2024, 6);
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_two_present_ranges_first_wins() {
        let a = ongoing(2020);
        let b = ongoing(2010);
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_concrete_ends_sort_most_recent_first() {
        let older = closed(2010, 2015, 3);
        let newer = closed(2012, 2019, 8);
        assert_eq!(compare(&older, &newer), Ordering::Greater);
        assert_eq!(compare(&newer, &older), Ordering::Less);
        assert_eq!(compare(&newer, &newer), Ordering::Equal);
    }

    #[test]
    fn test_start_date_does_not_affect_order() {
        let a = closed(2001, 2020, 1);
        let b = closed(2019, 2020, 1);
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_range_orders_mixed_ranges() {
        let mut ranges = vec![
            closed(2015, 2017, 1),
            closed(2018, 2021, 5),
            ongoing(2022),
            closed(2012, 2014, 9),
        ];
        sort_by_range(&mut ranges);
        assert_eq!(
            ranges,
            vec![
                ongoing(2022),
                closed(2018, 2021, 5),
                closed(2015, 2017, 1),
                closed(2012, 2014, 9),
            ]
        );
    }

    #[test]
    fn test_sort_by_range_is_stable_for_equal_end_dates() {
        let first = closed(2010, 2020, 6);
        let second = closed(2015, 2020, 6);
        let mut ranges = vec![first, second];
        sort_by_range(&mut ranges);
        assert_eq!(ranges, vec![first, second], "equal ends must keep input order");
    }

    #[test]
    fn test_sort_by_range_last_listed_present_comes_first() {
        let mut ranges = vec![ongoing(2019), closed(2010, 2018, 1), ongoing(2021)];
        sort_by_range(&mut ranges);
        assert_eq!(
            ranges,
            vec![ongoing(2021), ongoing(2019), closed(2010, 2018, 1)]
        );
    }

    #[test]
    fn test_sort_by_range_empty_and_single() {
        let mut empty: Vec<DateRange> = vec![];
        sort_by_range(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![ongoing(2020)];
        sort_by_range(&mut single);
        assert_eq!(single, vec![ongoing(2020)]);
    }

    #[test]
    fn test_parse_accepts_present_sentinel() {
        let range = DateRange::parse("2020-03-15", "present").unwrap();
        assert_eq!(range.start, date(2020, 3, 15));
        assert!(range.end.is_present());
    }

    #[test]
    fn test_parse_accepts_month_and_year_precision() {
        assert_eq!(parse_date("2019-07").unwrap(), date(2019, 7, 1));
        assert_eq!(parse_date("2016").unwrap(), date(2016, 1, 1));
        assert_eq!(parse_date(" 2021-02-03 ").unwrap(), date(2021, 2, 3));
    }

    #[test]
    fn test_parse_rejects_timestamps_and_short_years() {
        assert!(parse_date("2021-02-03T10:00:00Z").is_err());
        assert!(parse_date("207").is_err());
        assert!(parse_date("2019-13").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = DateRange::parse("2020-01-01", "someday").unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate(ref raw) if raw == "someday"));
    }

    #[test]
    fn test_present_is_case_sensitive() {
        assert!(DateRange::parse("2020-01-01", "Present").is_err());
    }

    #[test]
    fn test_deserialize_from_json_tuple() {
        let range: DateRange = serde_json::from_str(r#"["2018-09-01", "2022-06-30"]"#).unwrap();
        assert_eq!(
            range,
            DateRange::new(date(2018, 9, 1), RangeEnd::Date(date(2022, 6, 30)))
        );

        let open: DateRange = serde_json::from_str(r#"["2022-07-01", "present"]"#).unwrap();
        assert_eq!(open.end, RangeEnd::Present);
    }

    #[test]
    fn test_serialize_writes_sentinel() {
        let json = serde_json::to_string(&ongoing(2020)).unwrap();
        assert_eq!(json, r#"["2020-01-01","present"]"#);
    }
}
