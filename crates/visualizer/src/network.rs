use crate::ensure_minor;
use models::{Catalog, Roster, error::UnknownMinorError};
use petgraph::{
    stable_graph::{NodeIndex, StableUnGraph},
    visit::EdgeRef,
};
use std::collections::{HashMap, HashSet};

/// A node of the relationship graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Minor(String),
    Person { name: String, minor: String },
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Self::Minor(name) | Self::Person { name, .. } => name,
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self, Self::Person { .. })
    }
}

/// Undirected graph of minors sharing courses, with roster people attached
/// to their minor.
///
/// Edge weights between minors are the summed total hours of the courses
/// both offer; person edges weigh 1.
#[derive(Debug, Clone)]
pub struct RelationshipGraph {
    graph: StableUnGraph<Member, u32>,
    /// Live nodes in insertion order
    order: Vec<NodeIndex>,
    minors: HashMap<String, NodeIndex>,
    selected: String,
}

impl RelationshipGraph {
    fn new(selected: &str) -> Self {
        Self {
            graph: StableUnGraph::default(),
            order: Vec::new(),
            minors: HashMap::new(),
            selected: selected.to_string(),
        }
    }

    fn add(&mut self, member: Member) -> NodeIndex {
        let node = self.graph.add_node(member);
        self.order.push(node);
        node
    }

    /// Returns the node of `minor`, adding it if missing
    fn minor(&mut self, minor: &str) -> NodeIndex {
        if let Some(&node) = self.minors.get(minor) {
            return node;
        }

        let node = self.add(Member::Minor(minor.to_string()));
        self.minors.insert(minor.to_string(), node);
        node
    }

    /// Adds `weight` to the edge between `a` and `b`, creating it if needed
    fn accumulate(&mut self, a: NodeIndex, b: NodeIndex, weight: u32) {
        match self.graph.find_edge(a, b) {
            Some(edge) => {
                let total = &mut self.graph[edge];
                *total = total.saturating_add(weight);
            }
            None => {
                self.graph.add_edge(a, b, weight);
            }
        }
    }

    fn remove(&mut self, nodes: &[NodeIndex]) {
        for &node in nodes {
            if let Some(Member::Minor(name)) = self.graph.remove_node(node) {
                self.minors.remove(&name);
            }
        }
        self.order.retain(|node| self.graph.contains_node(*node));
    }

    fn degree(&self, node: NodeIndex) -> usize {
        self.graph.edges(node).count()
    }

    fn is_adjacent_to_selected(&self, node: NodeIndex) -> bool {
        self.minors
            .get(&self.selected)
            .is_some_and(|&selected| self.graph.find_edge(selected, node).is_some())
    }

    /// The minor the graph was pruned around
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Live nodes in insertion order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.order.iter().map(|&node| &self.graph[node])
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Edges as `(a, b, weight)`, each reported once, ordered by the
    /// insertion order of their first endpoint
    pub fn edges(&self) -> Vec<(&Member, &Member, u32)> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();

        for &node in &self.order {
            seen.insert(node);
            for edge in self.graph.edges(node) {
                let other = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };

                if !seen.contains(&other) {
                    edges.push((&self.graph[node], &self.graph[other], *edge.weight()));
                }
            }
        }

        edges
    }
}

/// Builds the relationship graph around `selected`.
///
/// Minors are linked when they offer the same course, weighted by the
/// course's total hours summed over every such course. Minors nobody on the
/// roster follows are dropped, people are attached to their minor, and
/// everything that is neither a person, the selected minor nor one of its
/// neighbours is pruned along with any node left isolated.
///
/// The graph is rebuilt from scratch on every call.
///
/// # Errors
/// [`UnknownMinorError`] if `selected` is not a minor of the catalog
pub fn relationship_graph(
    catalog: &Catalog,
    roster: &Roster,
    selected: &str,
) -> Result<RelationshipGraph, UnknownMinorError> {
    ensure_minor(catalog, selected)?;

    let mut graph = RelationshipGraph::new(selected);

    for minor in catalog.minors() {
        graph.minor(minor);
    }

    for course in catalog.iter() {
        let offered: Vec<&str> = course.availability.offered().collect();
        for (i, first) in offered.iter().enumerate() {
            for second in &offered[i + 1..] {
                let a = graph.minor(first);
                let b = graph.minor(second);
                graph.accumulate(a, b, course.total_hours());
            }
        }
    }

    let unfollowed: Vec<NodeIndex> = graph
        .minors
        .iter()
        .filter(|(name, _)| !roster.has_members(name))
        .map(|(_, &node)| node)
        .collect();
    graph.remove(&unfollowed);

    for entry in roster.iter() {
        let person = graph.add(Member::Person {
            name: entry.name.clone(),
            minor: entry.minor.clone(),
        });
        let minor = graph.minor(&entry.minor);
        graph.accumulate(person, minor, 1);
    }

    let distant: Vec<NodeIndex> = graph
        .order
        .iter()
        .copied()
        .filter(|&node| {
            let member = &graph.graph[node];
            !member.is_person()
                && member.name() != selected
                && !graph.is_adjacent_to_selected(node)
        })
        .collect();
    graph.remove(&distant);

    let isolated: Vec<NodeIndex> = graph
        .order
        .iter()
        .copied()
        .filter(|&node| graph.degree(node) == 0)
        .collect();
    graph.remove(&isolated);

    Ok(graph)
}
