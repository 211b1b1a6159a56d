use crate::ensure_minor;
use models::{Catalog, CourseRecord, error::UnknownMinorError};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Sink node for courses no other minor offers
pub const NONE_NODE: &str = "None";

/// A weighted link between two node positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: u32,
}

/// Node labels and links of a flow (Sankey) diagram
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowDiagram {
    pub nodes: Vec<String>,
    pub links: Vec<FlowLink>,
}

/// Accumulates a [`FlowDiagram`], giving equal labels a single node
#[derive(Debug, Default)]
struct FlowBuilder {
    diagram: FlowDiagram,
    positions: HashMap<String, usize>,
}

impl FlowBuilder {
    /// Returns the position of `label`, adding a node on first sight
    fn node(&mut self, label: &str) -> usize {
        if let Some(&position) = self.positions.get(label) {
            return position;
        }

        let position = self.diagram.nodes.len();
        self.diagram.nodes.push(label.to_string());
        self.positions.insert(label.to_string(), position);
        position
    }

    fn link(&mut self, source: &str, target: &str, value: u32) {
        let source = self.node(source);
        let target = self.node(target);
        self.diagram.links.push(FlowLink {
            source,
            target,
            value,
        });
    }

    fn build(self) -> FlowDiagram {
        self.diagram
    }
}

/// Builds the course-sharing flow of `selected`.
///
/// Hours flow from the selected minor to each of its courses, then from each
/// course to every other minor offering a course with the same title, or to
/// [`NONE_NODE`] when no other minor does. Every link carries the course's
/// total hours.
///
/// # Errors
/// [`UnknownMinorError`] if `selected` is not a minor of the catalog
pub fn course_flow(catalog: &Catalog, selected: &str) -> Result<FlowDiagram, UnknownMinorError> {
    ensure_minor(catalog, selected)?;

    let courses: Vec<&CourseRecord> = catalog.offered_in(selected).collect();
    let titles: HashSet<&str> = courses.iter().map(|c| c.title.as_str()).collect();

    // Other minors, each with the selected titles it offers too
    let sharing: Vec<(&str, HashSet<&str>)> = catalog
        .minors()
        .into_iter()
        .filter(|minor| *minor != selected)
        .map(|minor| {
            let shared = catalog
                .offered_in(minor)
                .map(|c| c.title.as_str())
                .filter(|title| titles.contains(title))
                .collect();
            (minor, shared)
        })
        .collect();

    let mut flow = FlowBuilder::default();
    flow.node(selected);
    for course in &courses {
        flow.node(&course.title);
    }
    for (minor, shared) in &sharing {
        if !shared.is_empty() {
            flow.node(minor);
        }
    }
    flow.node(NONE_NODE);

    for course in &courses {
        flow.link(selected, &course.title, course.total_hours());
    }

    for course in &courses {
        let hours = course.total_hours();
        let mut shared_with = sharing
            .iter()
            .filter(|(_, shared)| shared.contains(course.title.as_str()))
            .map(|(minor, _)| *minor)
            .peekable();

        if shared_with.peek().is_none() {
            flow.link(&course.title, NONE_NODE, hours);
        }
        for minor in shared_with {
            flow.link(&course.title, minor, hours);
        }
    }

    Ok(flow.build())
}

/// Builds the lecturer flow of `selected`.
///
/// Hours flow from the selected minor to each of its courses, from each
/// course to its lecturer and from the lecturer to their email domain. A
/// lecturer with several courses gets one link per course; links are never
/// merged.
///
/// # Errors
/// [`UnknownMinorError`] if `selected` is not a minor of the catalog
pub fn lecturer_flow(catalog: &Catalog, selected: &str) -> Result<FlowDiagram, UnknownMinorError> {
    ensure_minor(catalog, selected)?;

    let courses: Vec<&CourseRecord> = catalog.offered_in(selected).collect();

    let mut flow = FlowBuilder::default();
    flow.node(selected);
    for course in &courses {
        flow.node(&course.title);
    }
    for course in &courses {
        flow.node(&course.in_charge);
    }
    for course in &courses {
        flow.node(course.email_domain());
    }

    for course in &courses {
        flow.link(selected, &course.title, course.total_hours());
    }
    for course in &courses {
        flow.link(&course.title, &course.in_charge, course.total_hours());
    }
    for course in &courses {
        flow.link(&course.in_charge, course.email_domain(), course.total_hours());
    }

    Ok(flow.build())
}
