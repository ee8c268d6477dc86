use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::project::{validate_title, validate_url};

const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 120;
const MAX_DESCRIPTION_LENGTH: u64 = 1000;
const MAX_CATEGORY_LENGTH: u64 = 60;
const MAX_DATE_LENGTH: u64 = 40;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Display string, e.g. "May 1, 2025". Ordering uses `created_at`.
    pub date: String,
    pub image: String,
    pub category: String,
    pub content: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct BlogPostInsert {
    pub title: String,
    pub description: String,
    pub date: String,
    pub image: String,
    pub category: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BlogPostCreatedResponse {
    pub id: i32,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(length(max = MAX_DATE_LENGTH))]
    pub date: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub image: String,

    #[validate(length(min = 1, max = MAX_CATEGORY_LENGTH))]
    pub category: String,

    pub content: Option<String>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewBlogPostRequest> for BlogPostInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewBlogPostRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let now = Utc::now();
        // The display date is free-form; default to "Month D, YYYY" when the
        // operator leaves it blank.
        let date = value
            .date
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| now.format("%B %-d, %Y").to_string());

        Ok(BlogPostInsert {
            title: value.title,
            description: value.description,
            date,
            image: value.image,
            category: value.category,
            content: value.content.filter(|c| !c.trim().is_empty()),
            created_at: now,
        })
    }
}

impl BlogPost {
    /// Body text shown on the detail page: `content` when present,
    /// otherwise the summary doubles as the body.
    pub fn body_text(&self) -> &str {
        self.content.as_deref().unwrap_or(&self.description)
    }
}
