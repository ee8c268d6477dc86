//! Pure assembly of canonical projects out of raw store rows, plus the
//! in-memory filter/search/sort pipeline applied on top. Everything here is
//! synchronous and side-effect free; the use-case layer owns fetching and
//! fallback policy.

use std::collections::HashMap;

use crate::entities::project::{Project, ProjectQuery, ProjectRow, SortKey};
use crate::entities::technology::{ProjectTechnologyRow, TechnologyRow};

/// Reserved filter value meaning "no filter on this dimension".
pub const ALL_SENTINEL: &str = "All";

/// Collapses an optional filter value to `None` when absent, blank, or the
/// "All" sentinel; otherwise yields the trimmed value.
pub fn active_filter(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    if value.is_empty() || value == ALL_SENTINEL {
        None
    } else {
        Some(value)
    }
}

/// Splits a denormalized comma-separated technology field: trim each token,
/// drop empties, drop duplicates while preserving order.
pub fn split_technology_field(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if !token.is_empty() && !names.iter().any(|n| n == token) {
            names.push(token.to_string());
        }
    }
    names
}

/// Resolves a row's technology set. A non-empty denormalized text field wins
/// outright; otherwise association rows are resolved through the technology
/// lookup. Neither present yields an empty set, which is valid.
pub fn resolve_technologies(
    row: &ProjectRow,
    links: &[ProjectTechnologyRow],
    names_by_id: &HashMap<i32, &str>,
) -> Vec<String> {
    if let Some(field) = row.technologies.as_deref() {
        if !field.trim().is_empty() {
            return split_technology_field(field);
        }
    }

    let mut names: Vec<String> = Vec::new();
    for link in links.iter().filter(|l| l.project_id == row.id) {
        if let Some(name) = names_by_id.get(&link.technology_id) {
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push((*name).to_string());
            }
        }
    }
    names
}

/// Flattens raw rows into canonical projects, reconciling the two technology
/// representations per row.
pub fn assemble_projects(
    rows: Vec<ProjectRow>,
    links: &[ProjectTechnologyRow],
    technologies: &[TechnologyRow],
) -> Vec<Project> {
    let names_by_id: HashMap<i32, &str> = technologies
        .iter()
        .map(|t| (t.id, t.name.as_str()))
        .collect();

    rows.into_iter()
        .map(|row| {
            let technologies = resolve_technologies(&row, links, &names_by_id);
            Project {
                id: row.id,
                title: row.title,
                description: row.description,
                image: row.image,
                category: row.category,
                technologies,
                live_url: row.liveurl,
                github_url: row.githuburl,
                featured: row.featured,
                created_at: row.created_at,
            }
        })
        .collect()
}

/// Exact, case-sensitive membership test against the normalized set.
pub fn matches_technology(project: &Project, technology: &str) -> bool {
    project.technologies.iter().any(|t| t == technology)
}

/// Case-insensitive substring match against title, category, or any
/// technology name.
pub fn matches_search(project: &Project, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.category.to_lowercase().contains(&needle)
        || project
            .technologies
            .iter()
            .any(|t| t.to_lowercase().contains(&needle))
}

/// Applies the in-memory filter chain: category equality, then technology
/// membership, then free-text search. The store may already have applied the
/// category predicate; re-applying it here is a no-op in that case.
pub fn apply_filters(projects: Vec<Project>, query: &ProjectQuery) -> Vec<Project> {
    let category = active_filter(query.category.as_deref());
    let technology = active_filter(query.technology.as_deref());
    let search = query.search.as_deref().filter(|s| !s.trim().is_empty());

    projects
        .into_iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| technology.is_none_or(|t| matches_technology(p, t)))
        .filter(|p| search.is_none_or(|s| matches_search(p, s)))
        .collect()
}

/// Orders projects in place. Missing timestamps sort as older than any
/// present timestamp; all comparators break ties by id ascending so the
/// ordering is total and stable across calls.
pub fn sort_projects(projects: &mut [Project], sort: SortKey) {
    match sort {
        SortKey::Newest => projects.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id))
        }),
        SortKey::Oldest => projects.sort_by(|a, b| {
            a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id))
        }),
        SortKey::TitleAsc => projects.sort_by(|a, b| {
            compare_titles(&a.title, &b.title).then(a.id.cmp(&b.id))
        }),
        SortKey::TitleDesc => projects.sort_by(|a, b| {
            compare_titles(&b.title, &a.title).then(a.id.cmp(&b.id))
        }),
    }
}

// Case-folded comparison as an approximation of locale collation; good
// enough for Latin-script titles without pulling in a collation library.
fn compare_titles(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Deduplicates vocabulary values preserving first-seen order and prepends
/// the "All" sentinel.
pub fn vocabulary_with_all<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = vec![ALL_SENTINEL.to_string()];
    for value in values {
        let value = value.trim().to_string();
        if !value.is_empty() && !out.iter().any(|v| v == &value) {
            out.push(value);
        }
    }
    out
}
