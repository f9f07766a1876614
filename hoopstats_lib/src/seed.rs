//! Static configuration: the schools to crawl and the opponent name overrides.
//!
//! Both lists ship as YAML under `seed_data/` and are embedded at compile time
//! with `include_str!`. The CLI can swap either one for an external file.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Error types for seed data operations.
#[derive(Error, Debug)]
pub enum SeedDataError {
    #[error("Failed to parse seed YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Duplicate 'from' name in opponent map: {0}")]
    DuplicateAlias(String),
    #[error("Duplicate school slug: {0}")]
    DuplicateSchool(String),
    #[error("School list is empty")]
    NoSchools,
}

/// Top-level structure for the opponent map YAML file.
#[derive(Deserialize, Debug)]
pub struct OpponentMapFile {
    pub aliases: Vec<OpponentAlias>,
}

/// A single override.
///
/// `from` is a gently cleaned schedule name (e.g. "unc-greensboro").
/// `to` is the slug the site uses for that school.
#[derive(Deserialize, Debug, Clone)]
pub struct OpponentAlias {
    pub from: String,
    pub to: String,
}

/// Top-level structure for the school list YAML file.
#[derive(Deserialize, Debug)]
pub struct SchoolsFile {
    pub schools: Vec<String>,
}

/// Parse opponent overrides from YAML content.
pub fn parse_opponent_map(yaml_content: &str) -> Result<HashMap<String, String>, SeedDataError> {
    let file: OpponentMapFile = serde_yml::from_str(yaml_content)?;

    let mut map = HashMap::new();
    for alias in file.aliases {
        if map.contains_key(&alias.from) {
            return Err(SeedDataError::DuplicateAlias(alias.from));
        }
        map.insert(alias.from, alias.to);
    }

    Ok(map)
}

/// Load the opponent overrides embedded at compile time.
pub fn load_opponent_map() -> Result<HashMap<String, String>, SeedDataError> {
    let yaml_content = include_str!("../../seed_data/opponent_map.yml");
    parse_opponent_map(yaml_content)
}

/// Load opponent overrides from a YAML file on disk.
pub fn load_opponent_map_from(path: &Path) -> Result<HashMap<String, String>, SeedDataError> {
    parse_opponent_map(&std::fs::read_to_string(path)?)
}

/// Parse the school list from YAML content, keeping file order.
pub fn parse_schools(yaml_content: &str) -> Result<Vec<String>, SeedDataError> {
    let file: SchoolsFile = serde_yml::from_str(yaml_content)?;
    if file.schools.is_empty() {
        return Err(SeedDataError::NoSchools);
    }

    let mut seen = HashSet::new();
    for school in &file.schools {
        if !seen.insert(school.as_str()) {
            return Err(SeedDataError::DuplicateSchool(school.clone()));
        }
    }

    Ok(file.schools)
}

/// Load the school list embedded at compile time.
pub fn load_schools() -> Result<Vec<String>, SeedDataError> {
    let yaml_content = include_str!("../../seed_data/schools.yml");
    parse_schools(yaml_content)
}

/// Load a school list from a YAML file on disk.
pub fn load_schools_from(path: &Path) -> Result<Vec<String>, SeedDataError> {
    parse_schools(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_aliases() {
        let yaml = r#"
aliases:
  - from: "unc"
    to: "north-carolina"
  - from: "uconn"
    to: "connecticut"
"#;
        let result = parse_opponent_map(yaml).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("unc").map(String::as_str), Some("north-carolina"));
        assert_eq!(result.get("uconn").map(String::as_str), Some("connecticut"));
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let yaml = r#"
aliases:
  - from: "unc"
    to: "north-carolina"
  - from: "unc"
    to: "north-carolina-state"
"#;
        let result = parse_opponent_map(yaml);
        assert!(matches!(result.unwrap_err(), SeedDataError::DuplicateAlias(_)));
    }

    #[test]
    fn test_empty_aliases() {
        let result = parse_opponent_map("aliases: []\n").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_embedded_opponent_map_loads() {
        let map = load_opponent_map().unwrap();
        assert_eq!(
            map.get("unc-greensboro").map(String::as_str),
            Some("north-carolina-greensboro")
        );
    }

    #[test]
    fn test_parse_schools_keeps_order() {
        let yaml = "schools:\n  - duke\n  - kansas\n  - villanova\n";
        let schools = parse_schools(yaml).unwrap();
        assert_eq!(schools, vec!["duke", "kansas", "villanova"]);
    }

    #[test]
    fn test_duplicate_school_rejected() {
        let yaml = "schools:\n  - duke\n  - duke\n";
        assert!(matches!(
            parse_schools(yaml).unwrap_err(),
            SeedDataError::DuplicateSchool(s) if s == "duke"
        ));
    }

    #[test]
    fn test_empty_school_list_rejected() {
        assert!(matches!(
            parse_schools("schools: []\n").unwrap_err(),
            SeedDataError::NoSchools
        ));
    }

    #[test]
    fn test_embedded_schools_load() {
        let schools = load_schools().unwrap();
        assert!(schools.contains(&"duke".to_string()));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            parse_schools("schools: {duke").unwrap_err(),
            SeedDataError::YamlParse(_)
        ));
    }
}
