//! Fixed sample content substituted when a store read fails, so the site
//! stays populated instead of erroring. Listings built from this module are
//! tagged `ContentSource::Sample` so the UI can say so.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::entities::blog_post::BlogPost;
use crate::entities::project::Project;

pub static SAMPLE_PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: 1,
            title: "Personal Portfolio".to_string(),
            description: "A responsive portfolio website built with React and Tailwind CSS".to_string(),
            image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?q=80&w=1000".to_string(),
            category: "Web Development".to_string(),
            technologies: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ],
            live_url: Some("https://example.com".to_string()),
            github_url: Some("https://github.com/example/portfolio".to_string()),
            featured: true,
            created_at: parse_instant("2025-05-01T10:00:00Z"),
        },
        Project {
            id: 2,
            title: "E-commerce Dashboard".to_string(),
            description: "Admin dashboard for an e-commerce platform with sales analytics".to_string(),
            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=1000".to_string(),
            category: "Full Stack".to_string(),
            technologies: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "Prisma".to_string(),
                "PostgreSQL".to_string(),
            ],
            live_url: Some("https://example.com/dashboard".to_string()),
            github_url: Some("https://github.com/example/dashboard".to_string()),
            featured: true,
            created_at: parse_instant("2025-04-15T10:00:00Z"),
        },
    ]
});

pub static SAMPLE_BLOG_POSTS: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    vec![
        BlogPost {
            id: 1,
            title: "Getting Started with React".to_string(),
            description: "Learn the basics of React and how to build your first component".to_string(),
            date: "May 1, 2025".to_string(),
            image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?q=80&w=1000".to_string(),
            category: "React".to_string(),
            content: None,
            created_at: parse_instant("2025-05-01T10:00:00Z"),
        },
        BlogPost {
            id: 2,
            title: "Mastering TypeScript".to_string(),
            description: "Take your TypeScript skills to the next level with advanced types".to_string(),
            date: "April 15, 2025".to_string(),
            image: "https://images.unsplash.com/photo-1629904853716-f0bc54eea481?q=80&w=1000".to_string(),
            category: "TypeScript".to_string(),
            content: None,
            created_at: parse_instant("2025-04-15T10:00:00Z"),
        },
    ]
});

pub const FALLBACK_PROJECT_CATEGORIES: [&str; 3] = ["All", "Web Development", "Full Stack"];

pub const FALLBACK_PROJECT_TECHNOLOGIES: [&str; 5] =
    ["All", "React", "TypeScript", "Next.js", "Tailwind CSS"];

pub const FALLBACK_BLOG_CATEGORIES: [&str; 3] = ["All", "React", "TypeScript"];

pub fn sample_projects() -> Vec<Project> {
    SAMPLE_PROJECTS.clone()
}

pub fn sample_featured_projects() -> Vec<Project> {
    SAMPLE_PROJECTS.iter().filter(|p| p.featured).cloned().collect()
}

pub fn sample_blog_posts() -> Vec<BlogPost> {
    SAMPLE_BLOG_POSTS.clone()
}

pub fn fallback_vocabulary(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
