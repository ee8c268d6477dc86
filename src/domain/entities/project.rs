use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 120;
const MAX_DESCRIPTION_LENGTH: u64 = 1000;
const MAX_CATEGORY_LENGTH: u64 = 60;
const MAX_TECHNOLOGIES: u64 = 20;
const MAX_TECHNOLOGY_LENGTH: u64 = 40;

// ───── Database Models ───────────────────────────────────────────────

/// Raw `projects` row as stored. `technologies` is the legacy denormalized
/// comma-separated text column; newer rows leave it NULL and use the
/// `project_technologies` join instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub featured: bool,
    pub liveurl: Option<String>,
    pub githuburl: Option<String>,
    pub technologies: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Canonical in-memory project shape. `technologies` is always present;
/// a project with no tags carries an empty vector, never a missing field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// ───── Filter Criteria ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

/// Client-supplied filter/search/sort criteria. `category` and `technology`
/// treat the "All" sentinel (or absence) as "no filter on this dimension".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
    pub technology: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
    pub limit: Option<usize>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub id: i32,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(custom(function = "validate_url"))]
    pub image: String,

    #[validate(length(min = 1, max = MAX_CATEGORY_LENGTH))]
    pub category: String,

    #[validate(custom(function = "validate_technology_names"))]
    pub technologies: Vec<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub live_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    validate_url(url)
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().len() != title.len() {
        return Err(new_validation_error("title_whitespace", "Title must not have leading or trailing whitespace"));
    }
    Ok(())
}

pub fn validate_technology_names(names: &[String]) -> Result<(), ValidationError> {
    if names.len() > MAX_TECHNOLOGIES as usize {
        return Err(new_validation_error("too_many_technologies", "Too many technologies provided"));
    }
    for name in names {
        if name.trim().is_empty() || name.len() > MAX_TECHNOLOGY_LENGTH as usize {
            return Err(new_validation_error("invalid_technology_length", "Technology name length must be within allowed range"));
        }
    }
    Ok(())
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        // Trim and drop duplicates within a single payload. Duplicates across
        // concurrent requests can still race at the store level.
        let mut technologies: Vec<String> = Vec::new();
        for name in &value.technologies {
            let name = name.trim();
            if !name.is_empty() && !technologies.iter().any(|t| t == name) {
                technologies.push(name.to_string());
            }
        }

        Ok(ProjectInsert {
            title: value.title,
            description: value.description,
            image: value.image,
            category: value.category,
            live_url: value.live_url,
            github_url: value.github_url,
            featured: value.featured,
            technologies,
            created_at: Utc::now(),
        })
    }
}
