use crate::{
    dtos::view::{FlowResponse, NetworkResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::warn;
use models::error::UnknownMinorError;
use std::sync::Arc;
use visualizer::{course_flow, lecturer_flow, relationship_graph, render};

fn not_found(err: UnknownMinorError) -> StatusCode {
    warn!("{err}");
    StatusCode::NOT_FOUND
}

/// Course-sharing flow of a minor
#[utoipa::path(
    get,
    path = "/minors/{minor}/course-flow",
    params(
        ("minor" = String, Path, description = "Selected minor")
    ),
    responses(
        (status = 200, description = "Flow diagram built", body = FlowResponse),
        (status = 404, description = "Unknown minor")
    ),
    tag = "Views"
)]
pub async fn get_course_flow(
    State(state): State<Arc<AppState>>,
    Path(minor): Path<String>,
) -> Result<Json<FlowResponse>, StatusCode> {
    let diagram = course_flow(&state.catalog, &minor).map_err(not_found)?;

    Ok(Json(FlowResponse::new(&minor, diagram)))
}

/// Lecturer flow of a minor
#[utoipa::path(
    get,
    path = "/minors/{minor}/lecturer-flow",
    params(
        ("minor" = String, Path, description = "Selected minor")
    ),
    responses(
        (status = 200, description = "Flow diagram built", body = FlowResponse),
        (status = 404, description = "Unknown minor")
    ),
    tag = "Views"
)]
pub async fn get_lecturer_flow(
    State(state): State<Arc<AppState>>,
    Path(minor): Path<String>,
) -> Result<Json<FlowResponse>, StatusCode> {
    let diagram = lecturer_flow(&state.catalog, &minor).map_err(not_found)?;

    Ok(Json(FlowResponse::new(&minor, diagram)))
}

/// Relationship graph around a minor, laid out for drawing
#[utoipa::path(
    get,
    path = "/minors/{minor}/network",
    params(
        ("minor" = String, Path, description = "Selected minor")
    ),
    responses(
        (status = 200, description = "Relationship graph built", body = NetworkResponse),
        (status = 404, description = "Unknown minor")
    ),
    tag = "Views"
)]
pub async fn get_network(
    State(state): State<Arc<AppState>>,
    Path(minor): Path<String>,
) -> Result<Json<NetworkResponse>, StatusCode> {
    let graph = relationship_graph(&state.catalog, &state.roster, &minor).map_err(not_found)?;

    Ok(Json(NetworkResponse::new(&minor, render(&graph))))
}
