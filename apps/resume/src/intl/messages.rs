//! Message catalogs backed by Fluent bundles.
//!
//! Each locale ships a built-in `.ftl` resource. A content directory may
//! layer `lang/<locale>.ftl` on top; messages defined there replace the
//! built-in ones with the same id. Plural and select expressions use the
//! CLDR rules of the bundle's locale.

use std::fmt;

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};

use crate::errors::IntlError;
use crate::intl::Locale;

// ────────────────────────────────────────────────────────────────────────────
// Built-in resources
// ────────────────────────────────────────────────────────────────────────────

const EN: &str = r#"
summary-title = Summary
experience-title = Experience
experience-present = present
experience-years = { $years ->
    [one] { $years } year
   *[other] { $years } years
}
experience-months = { $months ->
    [one] { $months } month
   *[other] { $months } months
}
education-title = Education
courses-title = Courses
skills-title = Skills
"#;

const NL: &str = r#"
summary-title = Samenvatting
experience-title = Werkervaring
experience-present = heden
experience-years = { $years } jaar
experience-months = { $months ->
    [one] { $months } maand
   *[other] { $months } maanden
}
education-title = Opleiding
courses-title = Cursussen
skills-title = Vaardigheden
"#;

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

pub struct MessageCatalog {
    locale: Locale,
    bundle: FluentBundle<FluentResource>,
}

impl fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl MessageCatalog {
    /// Built-in messages for a locale.
    pub fn builtin(locale: Locale) -> Result<Self, IntlError> {
        let source = match locale {
            Locale::En => EN,
            Locale::Nl => NL,
        };

        let mut bundle = FluentBundle::new(vec![locale.langid()]);
        // Isolation marks would end up verbatim in the rendered document
        bundle.set_use_isolating(false);
        bundle
            .add_resource(parse_resource(locale, source)?)
            .map_err(|errors| IntlError::Resource {
                locale: locale.code().to_string(),
                reason: join_errors(&errors),
            })?;

        Ok(Self { locale, bundle })
    }

    /// Layers an `.ftl` source on top; its messages replace existing ids.
    pub fn with_overrides(mut self, source: &str) -> Result<Self, IntlError> {
        let resource = parse_resource(self.locale, source)?;
        self.bundle.add_resource_overriding(resource);
        Ok(self)
    }

    /// Looks up `id` and formats its value with `args`.
    pub fn format(&self, id: &str, args: Option<&FluentArgs<'_>>) -> Result<String, IntlError> {
        let pattern = self
            .bundle
            .get_message(id)
            .and_then(|message| message.value())
            .ok_or_else(|| IntlError::MissingMessage(id.to_string()))?;

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            return Err(IntlError::MalformedMessage {
                id: id.to_string(),
                reason: join_errors(&errors),
            });
        }
        Ok(value.into_owned())
    }
}

fn parse_resource(locale: Locale, source: &str) -> Result<FluentResource, IntlError> {
    FluentResource::try_new(source.to_string()).map_err(|(_, errors)| IntlError::Resource {
        locale: locale.code().to_string(),
        reason: format!("{errors:?}"),
    })
}

fn join_errors<E: fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
