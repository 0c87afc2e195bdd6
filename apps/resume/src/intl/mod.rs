// Internationalization: supported locales, negotiation, message lookup and
// locale-aware formatting of dates, lists, regions and date ranges.

pub mod format;
pub mod messages;

use fluent_bundle::FluentArgs;
use fluent_langneg::{convert_vec_str_to_langids_lossy, negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::{langid, LanguageIdentifier};

pub use format::DateStyle;
pub use messages::MessageCatalog;

use crate::dates::{
    months_and_years_between, total_months_between, Clock, DateRange, ElapsedFormat, RangeEnd,
};
use crate::errors::IntlError;

// ────────────────────────────────────────────────────────────────────────────
// Locale
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Nl,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Nl];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nl => "nl",
        }
    }

    pub fn langid(&self) -> LanguageIdentifier {
        match self {
            Locale::En => langid!("en"),
            Locale::Nl => langid!("nl"),
        }
    }

    /// Matches on the primary language subtag (`nl-BE` → `nl`).
    fn from_langid(langid: &LanguageIdentifier) -> Option<Self> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == langid.language.as_str())
    }

    /// Best supported locale for the preference list, or the default.
    pub fn negotiate<'a>(preferred: impl IntoIterator<Item = &'a str>) -> Self {
        let requested = convert_vec_str_to_langids_lossy(preferred);
        let available: Vec<LanguageIdentifier> = Locale::ALL.iter().map(Locale::langid).collect();
        let default = Locale::default().langid();

        negotiate_languages(
            &requested,
            &available,
            Some(&default),
            NegotiationStrategy::Lookup,
        )
        .first()
        .and_then(|langid| Locale::from_langid(langid))
        .unwrap_or_default()
    }

    /// The locale a language switch link points to.
    pub fn alternate(&self) -> Self {
        match self {
            Locale::En => Locale::Nl,
            Locale::Nl => Locale::En,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Intl
// ────────────────────────────────────────────────────────────────────────────

/// Options for [`Intl::format_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFormat {
    pub style: DateStyle,
    /// Append the elapsed duration in parentheses.
    pub suffix: bool,
    pub elapsed: ElapsedFormat,
}

impl Default for RangeFormat {
    fn default() -> Self {
        Self {
            style: DateStyle::MonthYear,
            suffix: true,
            elapsed: ElapsedFormat::YearsAndMonths,
        }
    }
}

/// Formatter bound to one locale and its message catalog.
#[derive(Debug)]
pub struct Intl {
    locale: Locale,
    messages: MessageCatalog,
}

impl Intl {
    pub fn new(locale: Locale, messages: MessageCatalog) -> Self {
        Self { locale, messages }
    }

    /// Intl backed by the built-in catalog only.
    pub fn builtin(locale: Locale) -> Result<Self, IntlError> {
        Ok(Self::new(locale, MessageCatalog::builtin(locale)?))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format_message(
        &self,
        id: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Result<String, IntlError> {
        self.messages.format(id, args)
    }

    pub fn format_date(&self, date: chrono::NaiveDate, style: DateStyle) -> String {
        format::format_date(self.locale, date, style)
    }

    pub fn format_list(&self, items: &[String]) -> String {
        format::format_list(self.locale, items)
    }

    pub fn region_name(&self, code: &str) -> String {
        format::region_name(self.locale, code)
    }

    /// "Jan 2020 - present (4 years and 2 months)".
    ///
    /// The suffix lists only non-zero components, so a range shorter than a
    /// month shows an empty pair of parentheses.
    pub fn format_range(
        &self,
        range: &DateRange,
        opts: RangeFormat,
        clock: &dyn Clock,
    ) -> Result<String, IntlError> {
        let start = self.format_date(range.start, opts.style);
        let end = match range.end {
            RangeEnd::Present => self.format_message("experience-present", None)?,
            RangeEnd::Date(end) => self.format_date(end, opts.style),
        };
        let period = format!("{start} - {end}");

        if !opts.suffix {
            return Ok(period);
        }
        let elapsed = self.format_elapsed(range, opts.elapsed, clock)?;
        Ok(format!("{period} ({elapsed})"))
    }

    fn format_elapsed(
        &self,
        range: &DateRange,
        mode: ElapsedFormat,
        clock: &dyn Clock,
    ) -> Result<String, IntlError> {
        let mut parts = Vec::new();
        match mode {
            ElapsedFormat::YearsAndMonths => {
                let elapsed = months_and_years_between(range.start, range.end, clock);
                if elapsed.years > 0 {
                    parts.push(self.format_count("experience-years", "years", elapsed.years)?);
                }
                if elapsed.months > 0 {
                    parts.push(self.format_count("experience-months", "months", elapsed.months)?);
                }
            }
            ElapsedFormat::TotalMonths => {
                let total = total_months_between(range.start, range.end, clock);
                if total > 0 {
                    parts.push(self.format_count("experience-months", "months", total)?);
                }
            }
        }
        Ok(self.format_list(&parts))
    }

    fn format_count(&self, id: &str, name: &'static str, count: i32) -> Result<String, IntlError> {
        let mut args = FluentArgs::new();
        args.set(name, count);
        self.format_message(id, Some(&args))
    }
}
