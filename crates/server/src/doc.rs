use crate::routes::{catalog, health, view};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        catalog::get_minors,
        catalog::get_catalog,
        catalog::get_courses,
        view::get_course_flow,
        view::get_lecturer_flow,
        view::get_network
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Catalog", description = "Minors and course records extracted from the syllabus"),
        (name = "Views", description = "Flow diagrams and relationship graph for a selected minor"),
    ),
    info(
        title = "Syllabus API",
        version = "1.0.0",
        description = "Course catalog and minor overlap views",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/",
            "/health",
            "/minors",
            "/catalog",
            "/courses",
            "/minors/{minor}/course-flow",
            "/minors/{minor}/lecturer-flow",
            "/minors/{minor}/network",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
