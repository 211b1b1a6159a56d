use crate::network::{Member, RelationshipGraph};
use models::palette::{DEFAULT_COLOR, MinorColor};
use serde::Serialize;
use std::{
    collections::hash_map::DefaultHasher,
    f64::consts::TAU,
    hash::{Hash, Hasher},
};

/// Radius of the circular layout
const LAYOUT_SCALE: f64 = 1000.0;
/// Largest offset applied to person nodes on each axis
const JITTER: f64 = 100.0;
const MINOR_SIZE: u32 = 100;
const PERSON_SIZE: u32 = 50;
/// Edge weight per unit of rendered width
const WEIGHT_PER_WIDTH: f64 = 20.0;
const HIGHLIGHT_COLOR: &str = "#FF0000";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Minor,
    Person,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub position: Position,
    pub color: &'static str,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
    pub weight: u32,
    pub width: f64,
    pub color: &'static str,
}

/// Positioned, styled relationship graph ready to be drawn
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

/// Places `count` points evenly on a unit circle, starting at angle 0.
/// A single point sits at the centre.
pub fn circular_layout(count: usize) -> Vec<Position> {
    if count == 1 {
        return vec![Position { x: 0.0, y: 0.0 }];
    }

    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            Position {
                x: angle.cos(),
                y: angle.sin(),
            }
        })
        .collect()
}

/// Prefix of person node ids, keeping them apart from minors of the same name
const PERSON_ID_PREFIX: &str = "person:";

/// Identifier of a node in the rendered view, unique across node kinds
fn node_id(member: &Member) -> String {
    match member {
        Member::Minor(name) => name.clone(),
        Member::Person { name, .. } => format!("{PERSON_ID_PREFIX}{name}"),
    }
}

/// Offset in `[-JITTER, JITTER]` derived from a name, stable across calls
fn jitter(name: &str, axis: char) -> f64 {
    let mut hasher = DefaultHasher::new();
    (name, axis).hash(&mut hasher);
    let unit = hasher.finish() as f64 / u64::MAX as f64;

    (unit * 2.0 - 1.0) * JITTER
}

fn node_view(member: &Member, position: Position) -> NodeView {
    let (kind, color, size, position) = match member {
        Member::Minor(name) => (
            NodeKind::Minor,
            MinorColor::for_minor(name),
            MINOR_SIZE,
            position,
        ),
        Member::Person { name, minor } => (
            NodeKind::Person,
            MinorColor::for_minor(minor),
            PERSON_SIZE,
            Position {
                x: position.x + jitter(name, 'x'),
                y: position.y + jitter(name, 'y'),
            },
        ),
    };

    NodeView {
        id: node_id(member),
        label: member.name().to_string(),
        kind,
        position,
        color,
        size,
    }
}

/// Lays out and styles a relationship graph.
///
/// Nodes sit on a circle in insertion order, people nudged off it so they
/// do not overlap. Minors take their palette colour and people the colour
/// of their minor. Edges touching the selected minor are highlighted.
pub fn render(graph: &RelationshipGraph) -> NetworkView {
    let positions = circular_layout(graph.node_count());

    let nodes = graph
        .members()
        .zip(positions)
        .map(|(member, position)| {
            let scaled = Position {
                x: position.x * LAYOUT_SCALE,
                y: position.y * LAYOUT_SCALE,
            };
            node_view(member, scaled)
        })
        .collect();

    let edges = graph
        .edges()
        .into_iter()
        .map(|(a, b, weight)| {
            let selected = |member: &Member| matches!(member, Member::Minor(name) if name == graph.selected());
            let highlighted = selected(a) || selected(b);
            EdgeView {
                source: node_id(a),
                target: node_id(b),
                weight,
                width: f64::from(weight) / WEIGHT_PER_WIDTH,
                color: if highlighted {
                    HIGHLIGHT_COLOR
                } else {
                    DEFAULT_COLOR
                },
            }
        })
        .collect();

    NetworkView { nodes, edges }
}
