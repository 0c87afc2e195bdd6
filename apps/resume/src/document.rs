//! Assembles loaded content into a presentation-ready résumé document.
//!
//! The document is fully localized and themed: section titles come from the
//! message catalog, ranges are formatted with their elapsed-time suffix, and
//! stack icons are already rendered trees. A PDF or DOM binding only has to
//! walk it.

use serde::Serialize;

use crate::content::{Course, Education, Experience, Profile, ResumeContent, StackEntry};
use crate::dates::{Clock, ElapsedFormat};
use crate::errors::IntlError;
use crate::icon::{render_icon, IconProps, RenderNode};
use crate::intl::{DateStyle, Intl, Locale, RangeFormat};
use crate::theme::{FontFace, Palette, Theme, ThemeName};

/// Size of the icons shown on stack badges.
pub const STACK_ICON_SIZE: &str = "12";

#[derive(Debug, Clone, Serialize)]
pub struct ResumeDocument {
    pub locale: Locale,
    pub theme: ThemeName,
    pub palette: Palette,
    pub fonts: Vec<FontFace>,
    pub links: Links,
    pub header: Header,
    pub summary: Summary,
    pub experience: Section<ExperienceItem>,
    pub education: Section<EducationItem>,
    pub skills: Section<String>,
    pub courses: Section<CourseItem>,
}

/// Links to the same résumé in the other language and the other theme.
#[derive(Debug, Clone, Serialize)]
pub struct Links {
    pub alternate_locale: Link,
    pub toggle_theme: Link,
}

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub name: String,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub title: String,
    /// Markdown, rendered by the binding.
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section<T> {
    pub title: String,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceItem {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    /// "Jan 2020 - present (2 years and 6 months)"
    pub period: String,
    pub body: String,
    pub stack: Vec<StackBadge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StackBadge {
    pub title: String,
    pub color: String,
    /// `None` when the icon markup could not be rendered.
    pub icon: Option<RenderNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationItem {
    pub id: String,
    /// "BSc Computer Science - TU Delft"
    pub heading: String,
    /// "(2012 - 2016)"
    pub period: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseItem {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Site-level settings that are not part of the content.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub site_url: String,
    pub fonts: Vec<FontFace>,
    pub elapsed: ElapsedFormat,
}

/// Builds the document for `intl`'s locale and `theme`.
///
/// Ongoing ranges are measured against `clock`.
pub fn build_document(
    content: &ResumeContent,
    intl: &Intl,
    theme: &Theme,
    clock: &dyn Clock,
    options: &DocumentOptions,
) -> Result<ResumeDocument, IntlError> {
    let experience_format = RangeFormat {
        style: DateStyle::MonthYear,
        suffix: true,
        elapsed: options.elapsed,
    };
    let education_format = RangeFormat {
        style: DateStyle::Year,
        suffix: false,
        elapsed: options.elapsed,
    };

    let experience = content
        .experience
        .iter()
        .map(|entry| experience_item(entry, intl, theme, clock, experience_format))
        .collect::<Result<Vec<_>, _>>()?;
    let education = content
        .education
        .iter()
        .map(|entry| education_item(entry, intl, clock, education_format))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResumeDocument {
        locale: intl.locale(),
        theme: theme.name,
        palette: theme.colors,
        fonts: options.fonts.clone(),
        links: links(intl.locale(), theme.name, &options.site_url),
        header: header(&content.profile, intl),
        summary: Summary {
            title: intl.format_message("summary-title", None)?,
            body: content.summary.clone(),
        },
        experience: Section {
            title: intl.format_message("experience-title", None)?,
            items: experience,
        },
        education: Section {
            title: intl.format_message("education-title", None)?,
            items: education,
        },
        skills: Section {
            title: intl.format_message("skills-title", None)?,
            items: content.skills.iter().map(|s| s.title.clone()).collect(),
        },
        courses: Section {
            title: intl.format_message("courses-title", None)?,
            items: content.courses.iter().map(course_item).collect(),
        },
    })
}

fn experience_item(
    entry: &Experience,
    intl: &Intl,
    theme: &Theme,
    clock: &dyn Clock,
    format: RangeFormat,
) -> Result<ExperienceItem, IntlError> {
    Ok(ExperienceItem {
        id: entry.id.clone(),
        title: entry.title.clone(),
        company: entry.company.clone(),
        period: intl.format_range(&entry.range, format, clock)?,
        body: entry.body.clone(),
        stack: entry.stack.iter().map(|s| stack_badge(s, theme)).collect(),
    })
}

fn stack_badge(entry: &StackEntry, theme: &Theme) -> StackBadge {
    let props = IconProps::sized(STACK_ICON_SIZE).with_color(entry.color.as_str());
    StackBadge {
        title: entry.title.clone(),
        color: entry.color.to_string(),
        icon: render_icon(&entry.icon, &props, theme),
    }
}

fn education_item(
    entry: &Education,
    intl: &Intl,
    clock: &dyn Clock,
    format: RangeFormat,
) -> Result<EducationItem, IntlError> {
    Ok(EducationItem {
        id: entry.id.clone(),
        heading: format!("{} - {}", entry.title, entry.institution),
        period: format!("({})", intl.format_range(&entry.range, format, clock)?),
        body: entry.body.clone(),
    })
}

fn course_item(course: &Course) -> CourseItem {
    CourseItem {
        id: course.id.clone(),
        title: course.title.clone(),
        url: course.url.clone(),
    }
}

fn header(profile: &Profile, intl: &Intl) -> Header {
    let region = profile.region.as_deref().map(|code| intl.region_name(code));
    let location = match (profile.city.as_deref(), region) {
        (Some(city), Some(region)) => Some(format!("{city}, {region}")),
        (Some(city), None) => Some(city.to_string()),
        (None, region) => region,
    };
    Header {
        name: profile.name.clone(),
        location,
        email: profile.email.clone(),
        phone: profile.phone.clone(),
    }
}

fn links(locale: Locale, theme: ThemeName, site_url: &str) -> Links {
    let base = site_url.trim_end_matches('/');
    let alternate = locale.alternate();
    Links {
        alternate_locale: Link {
            label: alternate.code().to_uppercase(),
            href: format!("{base}/{}/resume", alternate.code()),
        },
        toggle_theme: Link {
            label: theme.toggled().as_str().to_string(),
            href: format!(
                "{base}/{}/resume?theme={}",
                locale.code(),
                theme.toggled().as_str()
            ),
        },
    }
}
