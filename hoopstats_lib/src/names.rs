//! Opponent name canonicalization.
//!
//! Schedule tables print opponents as free text ("(5) North Carolina",
//! "Texas A&M", "UNC Greensboro"). URLs, file names and boxscore table ids use
//! slugs instead. [`TeamNames::gentle_clean`] derives a slug mechanically;
//! [`TeamNames::clean`] additionally applies the override map for schools whose
//! site slug cannot be derived from the printed name.

use std::collections::HashMap;

use regex::Regex;

use crate::error::HoopsError;
use crate::seed;

/// Slug derivation rules plus the override map.
pub struct TeamNames {
    ranking: Regex,
    disallowed: Regex,
    separators: Regex,
    overrides: HashMap<String, String>,
}

impl TeamNames {
    /// Builds the canonicalizer around an override map.
    pub fn new(overrides: HashMap<String, String>) -> Result<Self, HoopsError> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| HoopsError::Parse(format!("regex compile error: {}", e)))
        };
        Ok(Self {
            ranking: compile(r"\s*\(\d+\)")?,
            disallowed: compile(r"[^a-zA-Z0-9_ -]")?,
            separators: compile(r"[\s-]+")?,
            overrides,
        })
    }

    /// Builds the canonicalizer around the embedded override map.
    pub fn embedded() -> Result<Self, HoopsError> {
        Self::new(seed::load_opponent_map()?)
    }

    /// Name to slug without consulting the override map.
    ///
    /// Rankings in parentheses go first, then every character outside
    /// `[A-Za-z0-9_ -]`; whitespace/hyphen runs become one hyphen and the
    /// result is lowercased. Hyphens left at either end by a leading ranking
    /// are trimmed.
    pub fn gentle_clean(&self, name: &str) -> String {
        let name = self.ranking.replace_all(name, "");
        let name = self.disallowed.replace_all(&name, "");
        let name = self.separators.replace_all(&name, "-");
        name.trim_matches('-').to_lowercase()
    }

    /// Name to slug, with the override map taking precedence.
    pub fn clean(&self, name: &str) -> String {
        let gentle = self.gentle_clean(name);
        match self.overrides.get(&gentle) {
            Some(mapped) => mapped.clone(),
            None => gentle,
        }
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> TeamNames {
        let mut overrides = HashMap::new();
        overrides.insert("unc".to_string(), "north-carolina".to_string());
        overrides.insert("duke-st".to_string(), "duke-state".to_string());
        TeamNames::new(overrides).unwrap()
    }

    #[test]
    fn strips_leading_ranking_and_punctuation() {
        assert_eq!(names().gentle_clean("(3) Duke St."), "duke-st");
    }

    #[test]
    fn strips_trailing_ranking() {
        assert_eq!(names().gentle_clean("Duke (12)"), "duke");
    }

    #[test]
    fn ranked_north_carolina() {
        assert_eq!(names().clean("(5) North Carolina"), "north-carolina");
    }

    #[test]
    fn collapses_whitespace_and_hyphen_runs() {
        assert_eq!(names().gentle_clean("Texas  A&M - Corpus Christi"), "texas-am-corpus-christi");
    }

    #[test]
    fn keeps_non_ranking_parentheses_content() {
        assert_eq!(names().gentle_clean("Miami (FL)"), "miami-fl");
        assert_eq!(names().gentle_clean("St. John's (NY)"), "st-johns-ny");
    }

    #[test]
    fn output_alphabet_is_restricted() {
        let slug = names().gentle_clean("(25) Saint Mary's (CA) #1!");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        assert!(!slug.contains('('));
        assert!(!slug.contains("25"));
    }

    #[test]
    fn override_takes_precedence() {
        let names = names();
        assert_eq!(names.gentle_clean("(7) Duke St."), "duke-st");
        assert_eq!(names.clean("(7) Duke St."), "duke-state");
        assert_eq!(names.clean("UNC"), "north-carolina");
    }

    #[test]
    fn unmapped_names_pass_through() {
        assert_eq!(names().clean("Villanova"), "villanova");
    }

    #[test]
    fn embedded_map_resolves_known_mismatch() {
        let names = TeamNames::embedded().unwrap();
        assert!(names.override_count() > 0);
        assert_eq!(names.clean("UNC Greensboro"), "north-carolina-greensboro");
        assert_eq!(names.gentle_clean("UNC Greensboro"), "unc-greensboro");
    }
}
