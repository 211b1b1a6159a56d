use chrono::{DateTime, Utc};
use models::CourseRecord;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogSummary {
    pub courses: usize,
    pub minors: Vec<String>,
    pub roster_size: usize,
    pub built_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MinorAvailability {
    pub minor: String,
    pub available: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub code: String,
    pub title: String,
    pub cm_hours: u32,
    pub td_hours: u32,
    pub hne_hours: u32,
    pub total_hours: u32,
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
    pub availability: Vec<MinorAvailability>,
}

impl From<&CourseRecord> for CourseResponse {
    fn from(course: &CourseRecord) -> Self {
        Self {
            code: course.code.clone(),
            title: course.title.clone(),
            cm_hours: course.cm_hours,
            td_hours: course.td_hours,
            hne_hours: course.hne_hours,
            total_hours: course.total_hours(),
            in_charge: course.in_charge.clone(),
            email: course.email.clone(),
            summary: course.summary.clone(),
            prerequisites: course.prerequisites.clone(),
            objective: course.objective.clone(),
            content: course.content.clone(),
            references: course.references.clone(),
            knowledge: course.knowledge.clone(),
            assessment: course.assessment.clone(),
            bibliography: course.bibliography.clone(),
            availability: course
                .availability
                .iter()
                .map(|(minor, available)| MinorAvailability {
                    minor: minor.clone(),
                    available: *available,
                })
                .collect(),
        }
    }
}
