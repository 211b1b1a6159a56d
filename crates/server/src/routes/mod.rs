pub mod catalog;
pub mod health;
pub mod view;

use crate::{doc::ApiDoc, state::AppState};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/minors", get(catalog::get_minors))
        .route("/catalog", get(catalog::get_catalog))
        .route("/courses", get(catalog::get_courses))
        .route("/minors/{minor}/course-flow", get(view::get_course_flow))
        .route("/minors/{minor}/lecturer-flow", get(view::get_lecturer_flow))
        .route("/minors/{minor}/network", get(view::get_network))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
