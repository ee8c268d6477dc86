mod test_utils;

use test_utils::*;

use portfolio_content_api::assembly::{
    active_filter, apply_filters, assemble_projects, matches_search, sort_projects,
    split_technology_field, vocabulary_with_all,
};
use portfolio_content_api::entities::project::{ProjectQuery, SortKey};

#[test]
fn split_trims_and_drops_empty_tokens() {
    let names = split_technology_field(" React , , TypeScript ,Tailwind CSS,,React");

    assert_eq!(names, vec!["React", "TypeScript", "Tailwind CSS"]);
}

#[test]
fn denormalized_field_wins_over_association_rows() {
    let mut row = project_row(1, "Weather App", "Frontend", None);
    row.technologies = Some("JavaScript, CSS3".to_string());

    // Association rows also present; they must be ignored for this row.
    let links = vec![link(1, 10)];
    let technologies = vec![technology(10, "Rust")];

    let projects = assemble_projects(vec![row], &links, &technologies);

    assert_eq!(projects[0].technologies, vec!["JavaScript", "CSS3"]);
}

#[test]
fn association_rows_used_when_denormalized_field_is_blank() {
    let mut row = project_row(1, "API Gateway", "Backend", None);
    row.technologies = Some("   ".to_string());

    let links = vec![link(1, 10), link(1, 11), link(1, 99)];
    let technologies = vec![technology(10, "Node.js"), technology(11, "Redis")];

    let projects = assemble_projects(vec![row], &links, &technologies);

    // Unresolvable association (id 99) is dropped, not an error.
    assert_eq!(projects[0].technologies, vec!["Node.js", "Redis"]);
}

#[test]
fn no_technology_data_normalizes_to_empty_set() {
    let row = project_row(1, "Bare Project", "Misc", None);

    let projects = assemble_projects(vec![row], &[], &[]);

    assert!(projects[0].technologies.is_empty());
}

#[test]
fn all_sentinel_is_no_filter() {
    assert_eq!(active_filter(Some("All")), None);
    assert_eq!(active_filter(Some("")), None);
    assert_eq!(active_filter(None), None);
    assert_eq!(active_filter(Some("Frontend")), Some("Frontend"));
}

#[test]
fn filter_values_are_trimmed_before_sentinel_comparison() {
    assert_eq!(active_filter(Some(" All ")), None);
    assert_eq!(active_filter(Some("  ")), None);
    assert_eq!(active_filter(Some(" Frontend ")), Some("Frontend"));
}

#[test]
fn technology_filter_is_case_sensitive() {
    let mut row = project_row(1, "Weather App", "Frontend", None);
    row.technologies = Some("React".to_string());
    let projects = assemble_projects(vec![row], &[], &[]);

    let exact = apply_filters(projects.clone(), &ProjectQuery {
        technology: Some("React".to_string()),
        ..Default::default()
    });
    assert_eq!(exact.len(), 1);

    let wrong_case = apply_filters(projects, &ProjectQuery {
        technology: Some("react".to_string()),
        ..Default::default()
    });
    assert!(wrong_case.is_empty());
}

#[test]
fn search_matches_title_category_or_technology_case_insensitively() {
    let mut row = project_row(1, "E-Commerce Platform", "Web Development", None);
    row.technologies = Some("React, Node.js".to_string());
    let projects = assemble_projects(vec![row], &[], &[]);

    assert!(matches_search(&projects[0], "commerce"));
    assert!(matches_search(&projects[0], "WEB DEV"));
    assert!(matches_search(&projects[0], "node"));
    assert!(!matches_search(&projects[0], "cart"));
}

#[test]
fn newest_and_oldest_are_exact_reverses_for_distinct_timestamps() {
    let rows = vec![
        project_row(1, "First", "A", Some("2025-01-01T00:00:00Z")),
        project_row(2, "Second", "A", Some("2025-02-01T00:00:00Z")),
        project_row(3, "Third", "A", Some("2025-03-01T00:00:00Z")),
    ];
    let mut projects = assemble_projects(rows, &[], &[]);

    sort_projects(&mut projects, SortKey::Newest);
    let newest: Vec<i32> = projects.iter().map(|p| p.id).collect();

    sort_projects(&mut projects, SortKey::Oldest);
    let oldest: Vec<i32> = projects.iter().map(|p| p.id).collect();

    assert_eq!(newest, vec![3, 2, 1]);
    assert_eq!(oldest, vec![1, 2, 3]);
}

#[test]
fn missing_timestamps_sort_as_older_with_id_tiebreak() {
    let rows = vec![
        project_row(5, "No Date B", "A", None),
        project_row(2, "Dated", "A", Some("2025-02-01T00:00:00Z")),
        project_row(3, "No Date A", "A", None),
    ];
    let mut projects = assemble_projects(rows, &[], &[]);

    sort_projects(&mut projects, SortKey::Newest);
    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();

    // Dated record first, then the undated ones ordered by id.
    assert_eq!(ids, vec![2, 3, 5]);
}

#[test]
fn title_sort_folds_case_and_breaks_ties_by_id() {
    let rows = vec![
        project_row(3, "beta", "A", None),
        project_row(1, "Alpha", "A", None),
        project_row(2, "alpha", "A", None),
    ];
    let mut projects = assemble_projects(rows, &[], &[]);

    sort_projects(&mut projects, SortKey::TitleAsc);
    let asc: Vec<i32> = projects.iter().map(|p| p.id).collect();
    assert_eq!(asc, vec![1, 2, 3]);

    sort_projects(&mut projects, SortKey::TitleDesc);
    let desc: Vec<i32> = projects.iter().map(|p| p.id).collect();
    assert_eq!(desc, vec![3, 1, 2]);
}

#[test]
fn vocabulary_prepends_sentinel_and_deduplicates() {
    let vocab = vocabulary_with_all(vec![
        "Frontend".to_string(),
        "Backend".to_string(),
        "Frontend".to_string(),
        "  ".to_string(),
    ]);

    assert_eq!(vocab, vec!["All", "Frontend", "Backend"]);
}
