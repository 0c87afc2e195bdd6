//! Reads a content directory into typed, sorted collections.
//!
//! Layout:
//! ```text
//! experience/<locale>/<id>.json   education/<locale>/<id>.json
//! courses/<id>.json               stack/<id>.json
//! skills/<locale>.json            summary/<locale>.md
//! lang/<locale>.ftl               icons/<name>.svg
//! profile.json
//! ```
//! Missing collection directories are treated as empty collections.

use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::content::schema::{
    Course, Education, EducationFile, Experience, ExperienceFile, Profile, ResumeContent, Skill,
    StackEntry, StackFile,
};
use crate::dates::sort_by_range;
use crate::errors::ContentError;
use crate::intl::{Locale, MessageCatalog};

#[derive(Debug, Clone)]
pub struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads every collection for `locale`.
    pub fn load(&self, locale: Locale) -> Result<ResumeContent, ContentError> {
        let content = ResumeContent {
            profile: self.profile()?,
            summary: self.summary(locale)?,
            experience: self.experience(locale)?,
            education: self.education(locale)?,
            courses: self.courses()?,
            skills: self.skills(locale)?,
        };
        info!(
            "Loaded {} content: {} experience, {} education, {} courses, {} skills",
            locale.code(),
            content.experience.len(),
            content.education.len(),
            content.courses.len(),
            content.skills.len()
        );
        Ok(content)
    }

    /// Experience entries for `locale`, most recent first, each with its
    /// stack sorted by title.
    pub fn experience(&self, locale: Locale) -> Result<Vec<Experience>, ContentError> {
        let dir = self.root.join("experience").join(locale.code());
        let mut entries = Vec::new();

        for path in json_files(&dir)? {
            let id = entry_id(locale, &path);
            let file: ExperienceFile = read_json(&path)?;

            let mut stack = file
                .stack
                .iter()
                .map(|stack_id| self.stack_entry(stack_id, &id))
                .collect::<Result<Vec<_>, _>>()?;
            stack.sort_by(|a, b| by_title(&a.title, &b.title));

            entries.push(Experience {
                id,
                title: file.title,
                company: file.company,
                icon: file.icon,
                range: file.range,
                stack,
                body: file.body,
            });
        }

        sort_by_range(&mut entries);
        debug!("Loaded {} experience entries from {}", entries.len(), dir.display());
        Ok(entries)
    }

    /// Education entries for `locale`, most recent first.
    pub fn education(&self, locale: Locale) -> Result<Vec<Education>, ContentError> {
        let dir = self.root.join("education").join(locale.code());
        let mut entries = Vec::new();

        for path in json_files(&dir)? {
            let file: EducationFile = read_json(&path)?;
            entries.push(Education {
                id: entry_id(locale, &path),
                title: file.title,
                institution: file.institution,
                range: file.range,
                body: file.body,
            });
        }

        sort_by_range(&mut entries);
        debug!("Loaded {} education entries from {}", entries.len(), dir.display());
        Ok(entries)
    }

    /// Courses are shared by all locales and sorted by title.
    pub fn courses(&self) -> Result<Vec<Course>, ContentError> {
        let mut courses = Vec::new();
        for path in json_files(&self.root.join("courses"))? {
            let mut course: Course = read_json(&path)?;
            course.id = file_stem(&path);
            courses.push(course);
        }
        courses.sort_by(|a, b| by_title(&a.title, &b.title));
        Ok(courses)
    }

    pub fn skills(&self, locale: Locale) -> Result<Vec<Skill>, ContentError> {
        let path = self
            .root
            .join("skills")
            .join(format!("{}.json", locale.code()));
        if !path.is_file() {
            return Ok(Vec::new());
        }
        read_json(&path)
    }

    /// Markdown summary for `locale`.
    pub fn summary(&self, locale: Locale) -> Result<String, ContentError> {
        let path = self.root.join("summary").join(format!("{}.md", locale.code()));
        match fs::read_to_string(&path) {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ContentError::MissingSummary(locale.code().to_string()))
            }
            Err(source) => Err(ContentError::Io { path, source }),
        }
    }

    pub fn profile(&self) -> Result<Profile, ContentError> {
        let path = self.root.join("profile.json");
        if !path.is_file() {
            warn!("No profile.json in {}; header will be empty", self.root.display());
            return Ok(Profile::default());
        }
        read_json(&path)
    }

    /// Built-in messages for `locale`, overridden by `lang/<locale>.ftl` when present.
    pub fn messages(&self, locale: Locale) -> Result<MessageCatalog, ContentError> {
        let path = self.root.join("lang").join(format!("{}.ftl", locale.code()));
        let builtin = MessageCatalog::builtin(locale).map_err(|source| ContentError::Messages {
            path: path.clone(),
            source,
        })?;
        if !path.is_file() {
            return Ok(builtin);
        }

        let source = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Loaded message overrides from {}", path.display());
        builtin
            .with_overrides(&source)
            .map_err(|source| ContentError::Messages { path, source })
    }

    /// Raw markup of `icons/<name>`.
    pub fn icon(&self, name: &str) -> Result<String, ContentError> {
        let path = self.root.join("icons").join(name);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ContentError::IconNotFound(name.to_string()),
            _ => ContentError::Io { path, source },
        })
    }

    fn stack_entry(&self, id: &str, referenced_by: &str) -> Result<StackEntry, ContentError> {
        let path = self.root.join("stack").join(format!("{id}.json"));
        if !path.is_file() {
            return Err(ContentError::UnknownStackEntry {
                id: id.to_string(),
                referenced_by: referenced_by.to_string(),
            });
        }
        let file: StackFile = read_json(&path)?;
        Ok(StackEntry {
            id: id.to_string(),
            title: file.title,
            icon: self.icon(&file.icon)?,
            color: file.color,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// `*.json` files directly inside `dir`, in file-name order.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let read_dir = fs::read_dir(dir).map_err(|source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let path = entry
            .map_err(|source| ContentError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Locale-scoped ids look like `en/acme`.
fn entry_id(locale: Locale, path: &Path) -> String {
    format!("{}/{}", locale.code(), file_stem(path))
}

fn by_title(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
