use chrono::{Datelike, NaiveDate};

use crate::intl::Locale;

/// How much of a date to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// "Mar 2021"
    #[default]
    MonthYear,
    /// "2021"
    Year,
}

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NL_MONTHS: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

pub fn format_date(locale: Locale, date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Year => date.year().to_string(),
        DateStyle::MonthYear => {
            let months = match locale {
                Locale::En => &EN_MONTHS,
                Locale::Nl => &NL_MONTHS,
            };
            format!("{} {}", months[date.month0() as usize], date.year())
        }
    }
}

/// Conjunction list: "a, b, and c" / "a, b en c".
pub fn format_list(locale: Locale, items: &[String]) -> String {
    let (pair_sep, last_sep) = match locale {
        Locale::En => (" and ", ", and "),
        Locale::Nl => (" en ", " en "),
    };

    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first}{pair_sep}{second}"),
        [init @ .., last] => format!("{}{last_sep}{last}", init.join(", ")),
    }
}

/// Localized name of an ISO 3166 region; unknown codes are returned as given.
pub fn region_name(locale: Locale, code: &str) -> String {
    let name = match (code.to_ascii_uppercase().as_str(), locale) {
        ("NL", Locale::En) => "Netherlands",
        ("NL", Locale::Nl) => "Nederland",
        ("BE", Locale::En) => "Belgium",
        ("BE", Locale::Nl) => "België",
        ("DE", Locale::En) => "Germany",
        ("DE", Locale::Nl) => "Duitsland",
        ("GB", Locale::En) => "United Kingdom",
        ("GB", Locale::Nl) => "Verenigd Koninkrijk",
        ("US", Locale::En) => "United States",
        ("US", Locale::Nl) => "Verenigde Staten",
        _ => return code.to_string(),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_date_month_year() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 9).unwrap();
        assert_eq!(format_date(Locale::En, date, DateStyle::MonthYear), "Mar 2021");
        assert_eq!(format_date(Locale::Nl, date, DateStyle::MonthYear), "mrt 2021");
        assert_eq!(format_date(Locale::Nl, date, DateStyle::Year), "2021");
    }

    #[test]
    fn test_format_list_english() {
        assert_eq!(format_list(Locale::En, &[]), "");
        assert_eq!(format_list(Locale::En, &strings(&["2 years"])), "2 years");
        assert_eq!(
            format_list(Locale::En, &strings(&["2 years", "6 months"])),
            "2 years and 6 months"
        );
        assert_eq!(format_list(Locale::En, &strings(&["a", "b", "c"])), "a, b, and c");
    }

    #[test]
    fn test_format_list_dutch() {
        assert_eq!(
            format_list(Locale::Nl, &strings(&["2 jaar", "6 maanden"])),
            "2 jaar en 6 maanden"
        );
        assert_eq!(format_list(Locale::Nl, &strings(&["a", "b", "c"])), "a, b en c");
    }

    #[test]
    fn test_region_name() {
        assert_eq!(region_name(Locale::En, "NL"), "Netherlands");
        assert_eq!(region_name(Locale::Nl, "nl"), "Nederland");
        assert_eq!(region_name(Locale::En, "XX"), "XX");
    }
}
