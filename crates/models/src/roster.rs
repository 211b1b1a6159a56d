use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// One person and the minor they are enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub minor: String,
}

/// Fixed mapping of people to minors, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<RosterEntry>);

impl Roster {
    /// Builds a roster from `(person, minor)` pairs; a repeated person keeps
    /// its first position and takes the last minor given
    pub fn new<N, M>(entries: impl IntoIterator<Item = (N, M)>) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        let mut roster = Roster::default();
        for (name, minor) in entries {
            roster.insert(name.into(), minor.into());
        }
        roster
    }

    fn insert(&mut self, name: String, minor: String) {
        match self.0.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.minor = minor,
            None => self.0.push(RosterEntry { name, minor }),
        }
    }

    /// Loads a roster from a JSON array of `{ "name", "minor" }` objects
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<RosterEntry> =
            serde_json::from_str(&text).map_err(|source| RosterError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(entries.into_iter().map(|e| (e.name, e.minor))))
    }

    /// Whether at least one person is enrolled in `minor`
    pub fn has_members(&self, minor: &str) -> bool {
        self.0.iter().any(|entry| entry.minor == minor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
