use crate::config::Config;
use chrono::{DateTime, Utc};
use log::info;
use models::{
    Catalog, Roster,
    error::{CatalogError, RosterError},
};
use syllabus::{CatalogOptions, build_catalog};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Read-only data shared by every request
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub roster: Roster,
    pub built_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog, roster: Roster) -> Self {
        Self {
            catalog,
            roster,
            built_at: Utc::now(),
        }
    }

    /// Parses the syllabus and loads the roster named by `config`
    pub fn load(config: &Config) -> Result<Self, StartupError> {
        let options = CatalogOptions {
            archive_dir: config.archive_dir.clone(),
        };

        let catalog = build_catalog(&config.syllabus_path, &options)?;
        let roster = Roster::load(&config.roster_path)?;
        info!(
            "Loaded {} courses over {} minors and {} roster entries",
            catalog.len(),
            catalog.minors().len(),
            roster.len()
        );

        Ok(Self::new(catalog, roster))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use models::CourseRecord;
    use std::sync::Arc;

    fn course(
        title: &str,
        hours: (u32, u32, u32),
        lecturer: (&str, &str),
        offered: [bool; 3],
    ) -> CourseRecord {
        CourseRecord {
            code: "SI5".to_string(),
            title: title.to_string(),
            cm_hours: hours.0,
            td_hours: hours.1,
            hne_hours: hours.2,
            in_charge: lecturer.0.to_string(),
            email: lecturer.1.to_string(),
            summary: String::new(),
            prerequisites: None,
            objective: String::new(),
            content: String::new(),
            references: String::new(),
            knowledge: String::new(),
            assessment: String::new(),
            bibliography: None,
            availability: ["CyberSec", "IHM", "SSE"].into_iter().zip(offered).collect(),
        }
    }

    /// Three courses over three minors, one follower per minor
    pub fn sample_state() -> Arc<AppState> {
        let jane = ("Jane Doe", "jane.doe@inria.fr");
        let alan = ("Alan Turing", "alan.turing@univ.fr");

        let catalog = Catalog::new(vec![
            course("Security Basics", (20, 10, 0), jane, [true, true, false]),
            course("Cryptography", (12, 0, 0), jane, [true, false, false]),
            course("Testing", (10, 5, 5), alan, [false, false, true]),
        ]);
        let roster = Roster::new([("Alice", "CyberSec"), ("Karim", "IHM"), ("Yvann", "SSE")]);

        Arc::new(AppState::new(catalog, roster))
    }

    #[test]
    fn test_load_missing_syllabus() {
        let config = Config {
            syllabus_path: "/nonexistent/syll.txt".into(),
            roster_path: "/nonexistent/roster.json".into(),
            archive_dir: None,
            bind_addr: String::new(),
        };

        assert!(matches!(
            AppState::load(&config),
            Err(StartupError::Catalog(CatalogError::SourceUnavailable { .. }))
        ));
    }
}
