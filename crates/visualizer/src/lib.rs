//! Derived views of a course catalog for one selected minor.
//!
//! Every view is computed from scratch from the immutable catalog, so
//! concurrent queries never share state.

pub mod flow;
pub mod layout;
pub mod network;

use models::{Catalog, error::UnknownMinorError};

pub use flow::{FlowDiagram, FlowLink, course_flow, lecturer_flow};
pub use layout::{NetworkView, render};
pub use network::{Member, RelationshipGraph, relationship_graph};

/// Fails unless `minor` is one of the catalog's minors
pub fn ensure_minor(catalog: &Catalog, minor: &str) -> Result<(), UnknownMinorError> {
    if catalog.has_minor(minor) {
        Ok(())
    } else {
        Err(UnknownMinorError {
            minor: minor.to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use models::CourseRecord;

    /// Builds a record with empty narrative fields
    pub fn course(title: &str, hours: (u32, u32, u32), minors: &[(&str, bool)]) -> CourseRecord {
        CourseRecord {
            code: String::new(),
            title: title.to_string(),
            cm_hours: hours.0,
            td_hours: hours.1,
            hne_hours: hours.2,
            in_charge: "Jane Doe".to_string(),
            email: "jane.doe@univ.fr".to_string(),
            summary: String::new(),
            prerequisites: None,
            objective: String::new(),
            content: String::new(),
            references: String::new(),
            knowledge: String::new(),
            assessment: String::new(),
            bibliography: None,
            availability: minors.iter().copied().collect(),
        }
    }

    #[test]
    fn test_ensure_minor() {
        let catalog = Catalog::new(vec![course("Intro", (1, 0, 0), &[("A", true), ("B", false)])]);

        assert!(ensure_minor(&catalog, "A").is_ok());
        assert!(ensure_minor(&catalog, "B").is_ok());
        assert_eq!(
            ensure_minor(&catalog, "Z"),
            Err(UnknownMinorError {
                minor: "Z".to_string()
            })
        );
        assert!(ensure_minor(&Catalog::default(), "A").is_err());
    }
}
