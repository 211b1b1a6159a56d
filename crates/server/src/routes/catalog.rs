use crate::{
    dtos::catalog::{CatalogSummary, CourseResponse},
    state::AppState,
};
use axum::{Json, extract::State};
use std::sync::Arc;

/// List the minors of the catalog, in document order
#[utoipa::path(
    get,
    path = "/minors",
    responses(
        (status = 200, description = "Minors retrieved successfully", body = Vec<String>)
    ),
    tag = "Catalog"
)]
pub async fn get_minors(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .minors()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// Summarise the loaded catalog
#[utoipa::path(
    get,
    path = "/catalog",
    responses(
        (status = 200, description = "Catalog summary", body = CatalogSummary)
    ),
    tag = "Catalog"
)]
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogSummary> {
    Json(CatalogSummary {
        courses: state.catalog.len(),
        minors: state
            .catalog
            .minors()
            .into_iter()
            .map(str::to_string)
            .collect(),
        roster_size: state.roster.len(),
        built_at: state.built_at,
    })
}

/// Get every course record of the catalog
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "Courses retrieved successfully", body = Vec<CourseResponse>)
    ),
    tag = "Catalog"
)]
pub async fn get_courses(State(state): State<Arc<AppState>>) -> Json<Vec<CourseResponse>> {
    Json(state.catalog.iter().map(CourseResponse::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::sample_state;

    #[tokio::test]
    async fn test_get_minors() {
        let Json(minors) = get_minors(State(sample_state())).await;
        assert_eq!(minors, ["CyberSec", "IHM", "SSE"]);
    }

    #[tokio::test]
    async fn test_get_catalog() {
        let state = sample_state();
        let Json(summary) = get_catalog(State(state.clone())).await;

        assert_eq!(summary.courses, 3);
        assert_eq!(summary.minors, ["CyberSec", "IHM", "SSE"]);
        assert_eq!(summary.roster_size, 3);
        assert_eq!(summary.built_at, state.built_at);
    }

    #[tokio::test]
    async fn test_get_courses() {
        let Json(courses) = get_courses(State(sample_state())).await;

        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].title, "Security Basics");
        assert_eq!(courses[0].total_hours, 30);
        assert_eq!(courses[0].availability.len(), 3);
        assert!(courses[0].availability[0].available);
        assert!(!courses[0].availability[2].available);
    }
}
