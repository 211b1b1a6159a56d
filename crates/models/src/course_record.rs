use indexmap::{IndexMap, map::Iter};
use serde::Serialize;
use std::{collections::HashSet, ops::Deref};

/// Ordered mapping of minor name to whether a course is offered under it.
///
/// Order follows the syllabus layout, which is also the order minors are
/// presented in selectors and seeded into graphs. A repeated minor keeps its
/// first position and takes the last flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Availability(IndexMap<String, bool>);

impl Availability {
    /// Returns the flag for `minor`, or `None` if the minor is unknown
    pub fn get(&self, minor: &str) -> Option<bool> {
        self.0.get(minor).copied()
    }

    /// `true` only if `minor` is known and flagged as available
    pub fn offers(&self, minor: &str) -> bool {
        self.get(minor).unwrap_or(false)
    }

    pub fn contains(&self, minor: &str) -> bool {
        self.0.contains_key(minor)
    }

    /// Minor names in layout order
    pub fn minors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Minor names flagged as available, in layout order
    pub fn offered(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, available)| **available)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> Iter<'_, String, bool> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether both availabilities describe exactly the same set of minors
    pub fn same_minors(&self, other: &Availability) -> bool {
        let ours: HashSet<&str> = self.minors().collect();
        let theirs: HashSet<&str> = other.minors().collect();
        ours == theirs
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Availability {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(minor, available)| (minor.into(), available))
                .collect(),
        )
    }
}

/// One course block of the syllabus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub code: String,
    pub title: String,
    /// Lecture hours (Cours Magistraux)
    pub cm_hours: u32,
    /// Tutorial hours (Travaux Dirigés)
    pub td_hours: u32,
    /// Supervised practice hours (Heures Non Encadrées)
    pub hne_hours: u32,
    pub in_charge: String,
    pub email: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub prerequisites: Option<String>,
    pub objective: String,
    pub content: String,
    pub references: String,
    pub knowledge: String,
    pub assessment: String,
    pub bibliography: Option<String>,
    pub availability: Availability,
}

impl CourseRecord {
    /// Total teaching load, used as the weight of every flow and graph edge.
    ///
    /// Saturates at `u32::MAX`; extracted records are checked to fit.
    pub fn total_hours(&self) -> u32 {
        self.cm_hours
            .saturating_add(self.td_hours)
            .saturating_add(self.hne_hours)
    }

    pub fn is_offered_in(&self, minor: &str) -> bool {
        self.availability.offers(minor)
    }

    /// Part of the lecturer email after the last `@`
    pub fn email_domain(&self) -> &str {
        self.email.rsplit('@').next().unwrap_or(&self.email)
    }
}

/// Every course record of one syllabus, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog(Vec<CourseRecord>);

impl Catalog {
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        Self(courses)
    }

    /// Minor names known to the catalog, taken from the first record
    pub fn minors(&self) -> Vec<&str> {
        self.0
            .first()
            .map(|course| course.availability.minors().collect())
            .unwrap_or_default()
    }

    pub fn has_minor(&self, minor: &str) -> bool {
        self.0
            .first()
            .is_some_and(|course| course.availability.contains(minor))
    }

    /// Courses offered under `minor`, in document order
    pub fn offered_in<'a>(&'a self, minor: &'a str) -> impl Iterator<Item = &'a CourseRecord> {
        self.0.iter().filter(move |course| course.is_offered_in(minor))
    }
}

impl Deref for Catalog {
    type Target = [CourseRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::course;
    use super::*;

    #[test]
    fn test_total_hours() {
        let record = course("Intro", (2, 1, 0), &[("A", true)]);
        assert_eq!(record.total_hours(), 3);
    }

    #[test]
    fn test_total_hours_saturates() {
        let record = course("Huge", (u32::MAX, 1, 0), &[("A", true)]);
        assert_eq!(record.total_hours(), u32::MAX);
    }

    #[test]
    fn test_email_domain() {
        let mut record = course("Intro", (0, 0, 0), &[]);
        record.email = "first.last@inria.fr".to_string();
        assert_eq!(record.email_domain(), "inria.fr");

        record.email = "weird@name@etu.univ.fr".to_string();
        assert_eq!(record.email_domain(), "etu.univ.fr");

        record.email = "no-at-sign".to_string();
        assert_eq!(record.email_domain(), "no-at-sign");
    }

    #[test]
    fn test_availability_keeps_layout_order() {
        let availability: Availability = [("SSE", false), ("IHM", true), ("IF", true)]
            .into_iter()
            .collect();

        assert_eq!(availability.minors().collect::<Vec<_>>(), ["SSE", "IHM", "IF"]);
        assert_eq!(availability.offered().collect::<Vec<_>>(), ["IHM", "IF"]);
        assert_eq!(availability.get("SSE"), Some(false));
        assert_eq!(availability.get("CyberSec"), None);
        assert!(!availability.offers("CyberSec"));
    }

    #[test]
    fn test_availability_repeated_minor_keeps_position() {
        let availability: Availability = [("A", true), ("B", false), ("A", false)]
            .into_iter()
            .collect();

        assert_eq!(availability.len(), 2);
        assert_eq!(availability.minors().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(availability.get("A"), Some(false));
    }

    #[test]
    fn test_availability_same_minors_ignores_order_and_flags() {
        let a: Availability = [("A", true), ("B", false)].into_iter().collect();
        let b: Availability = [("B", true), ("A", false)].into_iter().collect();
        let c: Availability = [("A", true)].into_iter().collect();

        assert!(a.same_minors(&b));
        assert!(!a.same_minors(&c));
    }

    #[test]
    fn test_availability_serializes_as_ordered_map() {
        let availability: Availability = [("B", true), ("A", false)].into_iter().collect();
        let json = serde_json::to_string(&availability).unwrap();
        assert_eq!(json, r#"{"B":true,"A":false}"#);
    }

    #[test]
    fn test_catalog_minors_come_from_first_record() {
        let catalog = Catalog::new(vec![
            course("Intro", (1, 0, 0), &[("A", true), ("B", false)]),
            course("Advanced", (1, 0, 0), &[("A", false), ("B", true)]),
        ]);

        assert_eq!(catalog.minors(), ["A", "B"]);
        assert!(catalog.has_minor("B"));
        assert!(!catalog.has_minor("C"));

        let titles: Vec<_> = catalog.offered_in("B").map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Advanced"]);
    }

    #[test]
    fn test_empty_catalog_has_no_minors() {
        let catalog = Catalog::default();
        assert!(catalog.minors().is_empty());
        assert!(!catalog.has_minor("A"));
    }
}
