use serde::Serialize;

/// A named tag. Only ever exposed to callers as the flattened
/// `technologies` string set on a project.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TechnologyRow {
    pub id: i32,
    pub name: String,
}

/// Association row linking one project to one technology.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct ProjectTechnologyRow {
    pub project_id: i32,
    pub technology_id: i32,
}
