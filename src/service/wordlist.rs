//! Word lists feeding the memorable credential and identifier generators.
//!
//! Lists are loaded once at start and shared read-only. A custom set can be
//! supplied as a JSON document:
//!
//! ```json
//! {
//!   "adjectives": ["swift", "quiet"],
//!   "nouns": ["falcon", "river"],
//!   "first_names": ["alex", "sam"],
//!   "last_names": ["morgan", "reed"]
//! }
//! ```

use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::error::{AppError, Result};

const ADJECTIVES: &[&str] = &[
    "agile", "amber", "ancient", "azure", "bold", "brave", "bright", "calm", "clever", "cosmic",
    "crimson", "crisp", "daring", "eager", "electric", "fancy", "fearless", "gentle", "golden",
    "happy", "hidden", "humble", "icy", "jolly", "keen", "lively", "lucky", "lunar", "mellow",
    "mighty", "nimble", "noble", "quiet", "rapid", "rustic", "silent", "silver", "solar", "steady",
    "swift", "vivid", "wild", "wise", "witty", "zesty",
];

const NOUNS: &[&str] = &[
    "anchor", "badger", "beacon", "canyon", "cedar", "comet", "coyote", "dolphin", "ember",
    "falcon", "forest", "galaxy", "harbor", "hawk", "island", "jaguar", "lantern", "lynx",
    "maple", "meadow", "meteor", "orbit", "otter", "panther", "pebble", "phoenix", "pixel",
    "raven", "reef", "river", "rocket", "sparrow", "summit", "thunder", "tiger", "voyager",
    "walrus", "willow", "wolf", "zephyr",
];

const FIRST_NAMES: &[&str] = &[
    "alex", "blake", "casey", "dana", "drew", "eli", "jamie", "jordan", "kai", "lee", "morgan",
    "noah", "parker", "quinn", "riley", "sam", "taylor", "avery", "robin", "sky",
];

const LAST_NAMES: &[&str] = &[
    "baker", "brooks", "carter", "ellis", "fisher", "grant", "hayes", "hughes", "kim", "lane",
    "miller", "nash", "park", "reed", "shaw", "stone", "turner", "walsh", "west", "young",
];

/// Immutable bundle of the word lists used by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordLists {
    adjectives: Vec<String>,
    nouns: Vec<String>,
    first_names: Vec<String>,
    last_names: Vec<String>,
}

impl WordLists {
    /// The word lists shipped with the service.
    #[must_use]
    pub fn builtin() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|&w| w.to_string()).collect() };
        Self {
            adjectives: owned(ADJECTIVES),
            nouns: owned(NOUNS),
            first_names: owned(FIRST_NAMES),
            last_names: owned(LAST_NAMES),
        }
    }

    /// Build word lists from explicit vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if any list is empty or contains a blank entry.
    pub fn new(
        adjectives: Vec<String>,
        nouns: Vec<String>,
        first_names: Vec<String>,
        last_names: Vec<String>,
    ) -> Result<Self> {
        let lists = Self {
            adjectives,
            nouns,
            first_names,
            last_names,
        };
        lists.validate()?;
        Ok(lists)
    }

    /// Load word lists from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds an empty list.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::WordList(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }

    /// Parse word lists from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or holds an empty list.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let lists: Self = serde_json::from_str(content)
            .map_err(|e| AppError::WordList(format!("invalid word list document: {e}")))?;
        lists.validate()?;
        Ok(lists)
    }

    fn validate(&self) -> Result<()> {
        let named = [
            ("adjectives", &self.adjectives),
            ("nouns", &self.nouns),
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
        ];
        for (name, list) in named {
            if list.is_empty() {
                return Err(AppError::WordList(format!("{name} cannot be empty")));
            }
            if list.iter().any(|w| w.trim().is_empty()) {
                return Err(AppError::WordList(format!(
                    "{name} cannot contain blank entries"
                )));
            }
        }
        Ok(())
    }

    /// Adjectives used by memorable credentials and pattern identifiers.
    #[must_use]
    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    /// Nouns used by memorable credentials and pattern identifiers.
    #[must_use]
    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    /// First name fragments used by professional identifiers.
    #[must_use]
    pub fn first_names(&self) -> &[String] {
        &self.first_names
    }

    /// Last name fragments used by professional identifiers.
    #[must_use]
    pub fn last_names(&self) -> &[String] {
        &self.last_names
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pick one entry uniformly. Lists are validated non-empty at load.
pub fn pick<'a, R: Rng + ?Sized>(list: &'a [String], rng: &mut R) -> &'a str {
    &list[rng.random_range(0..list.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_lists_are_valid() {
        let lists = WordLists::builtin();
        assert!(lists.validate().is_ok());
        assert!(lists.adjectives().len() >= 20);
        assert!(lists.nouns().len() >= 20);
        assert!(
            lists
                .adjectives()
                .iter()
                .chain(lists.nouns())
                .all(|w| w.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    #[test]
    fn test_from_json_str() {
        let lists = WordLists::from_json_str(
            r#"{"adjectives":["red"],"nouns":["fox"],"first_names":["al"],"last_names":["bo"]}"#,
        )
        .unwrap();
        assert_eq!(lists.adjectives(), ["red".to_string()]);
        assert_eq!(lists.last_names(), ["bo".to_string()]);
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = WordLists::from_json_str(
            r#"{"adjectives":[],"nouns":["fox"],"first_names":["al"],"last_names":["bo"]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("adjectives"));

        let err = WordLists::new(
            vec!["red".to_string()],
            vec!["  ".to_string()],
            vec!["al".to_string()],
            vec!["bo".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("nouns"));
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(WordLists::from_json_str(r#"{"adjectives":["red"]}"#).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"adjectives":["tiny"],"nouns":["cat"],"first_names":["jo"],"last_names":["li"]}"#,
        )
        .unwrap();

        let lists = WordLists::from_json_file(file.path()).unwrap();
        assert_eq!(lists.nouns(), ["cat".to_string()]);

        let missing = WordLists::from_json_file(Path::new("/nonexistent/words.json"));
        assert!(matches!(missing, Err(AppError::WordList(_))));
    }
}
