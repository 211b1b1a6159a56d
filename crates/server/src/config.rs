use std::{env, path::PathBuf};

const DEFAULT_SYLLABUS_PATH: &str = "syll.txt";
const DEFAULT_ROSTER_PATH: &str = "data/roster.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Server settings, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text export of the syllabus (`SYLLABUS_PATH`)
    pub syllabus_path: PathBuf,
    /// JSON roster of people and their minors (`ROSTER_PATH`)
    pub roster_path: PathBuf,
    /// Where raw course blocks are archived, if anywhere (`OUTPUT_DIR`)
    pub archive_dir: Option<PathBuf>,
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            syllabus_path: non_empty("SYLLABUS_PATH")
                .unwrap_or_else(|| DEFAULT_SYLLABUS_PATH.to_string())
                .into(),
            roster_path: non_empty("ROSTER_PATH")
                .unwrap_or_else(|| DEFAULT_ROSTER_PATH.to_string())
                .into(),
            archive_dir: non_empty("OUTPUT_DIR").map(PathBuf::from),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.syllabus_path, PathBuf::from("syll.txt"));
        assert_eq!(config.roster_path, PathBuf::from("data/roster.json"));
        assert_eq!(config.archive_dir, None);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("SYLLABUS_PATH", "/srv/syllabus.txt"),
            ("OUTPUT_DIR", "out"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("ROSTER_PATH", "  "),
        ]);
        assert_eq!(config.syllabus_path, PathBuf::from("/srv/syllabus.txt"));
        assert_eq!(config.archive_dir, Some(PathBuf::from("out")));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.roster_path, PathBuf::from("data/roster.json"));
    }
}
