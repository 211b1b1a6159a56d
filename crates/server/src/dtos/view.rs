use serde::Serialize;
use utoipa::ToSchema;
use visualizer::{FlowDiagram, NetworkView, layout::NodeKind};

#[derive(Debug, Serialize, ToSchema)]
pub struct FlowLinkResponse {
    /// Position of the source node
    pub source: usize,
    /// Position of the target node
    pub target: usize,
    /// Total hours of the course behind the link
    pub value: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FlowResponse {
    pub minor: String,
    pub nodes: Vec<String>,
    pub links: Vec<FlowLinkResponse>,
}

impl FlowResponse {
    pub fn new(minor: &str, diagram: FlowDiagram) -> Self {
        Self {
            minor: minor.to_string(),
            nodes: diagram.nodes,
            links: diagram
                .links
                .into_iter()
                .map(|link| FlowLinkResponse {
                    source: link.source,
                    target: link.target,
                    value: link.value,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NetworkNodeResponse {
    pub id: String,
    pub label: String,
    /// `minor` or `person`
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub size: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NetworkEdgeResponse {
    pub source: String,
    pub target: String,
    pub weight: u32,
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NetworkResponse {
    pub minor: String,
    pub nodes: Vec<NetworkNodeResponse>,
    pub edges: Vec<NetworkEdgeResponse>,
}

impl NetworkResponse {
    pub fn new(minor: &str, view: NetworkView) -> Self {
        let nodes = view
            .nodes
            .into_iter()
            .map(|node| NetworkNodeResponse {
                id: node.id,
                label: node.label,
                kind: match node.kind {
                    NodeKind::Minor => "minor",
                    NodeKind::Person => "person",
                }
                .to_string(),
                x: node.position.x,
                y: node.position.y,
                color: node.color.to_string(),
                size: node.size,
            })
            .collect();

        let edges = view
            .edges
            .into_iter()
            .map(|edge| NetworkEdgeResponse {
                source: edge.source,
                target: edge.target,
                weight: edge.weight,
                width: edge.width,
                color: edge.color.to_string(),
            })
            .collect();

        Self {
            minor: minor.to_string(),
            nodes,
            edges,
        }
    }
}
