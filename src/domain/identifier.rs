//! Identifier (username/handle) generation configuration types.

use serde::{Deserialize, Serialize};

/// Minimum identifier batch size.
pub const MIN_BATCH_SIZE: u32 = 1;

/// Maximum identifier batch size.
pub const MAX_BATCH_SIZE: u32 = 10;

/// Maximum length of the literal prefix and suffix.
pub const MAX_AFFIX_LEN: usize = 32;

/// How the base of an identifier is synthesized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierStyle {
    /// `adjective` + separator + `noun`.
    #[default]
    Pattern,
    /// `first` + separator + `last` name fragment.
    Professional,
    /// Base-36 alphanumeric string.
    RandomAlnum,
}

impl std::fmt::Display for IdentifierStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern => write!(f, "pattern"),
            Self::Professional => write!(f, "professional"),
            Self::RandomAlnum => write!(f, "random_alnum"),
        }
    }
}

/// Separator placed between the two word tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    /// `_`
    #[default]
    #[serde(rename = "_")]
    Underscore,
    /// `.`
    #[serde(rename = ".")]
    Dot,
    /// `-`
    #[serde(rename = "-")]
    Hyphen,
    /// No separator.
    #[serde(rename = "")]
    None,
}

impl Separator {
    /// The separator as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underscore => "_",
            Self::Dot => ".",
            Self::Hyphen => "-",
            Self::None => "",
        }
    }
}

/// Configuration for an identifier batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Base synthesis style.
    pub style: IdentifierStyle,

    /// Literal text placed before every identifier.
    pub prefix: String,

    /// Literal text placed after every identifier.
    pub suffix: String,

    /// Number of distinct identifiers to generate.
    pub batch_size: u32,

    /// Append a random number below 999.
    pub allow_digits: bool,

    /// Separator between word tokens.
    pub separator: Separator,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            style: IdentifierStyle::Pattern,
            prefix: String::new(),
            suffix: String::new(),
            batch_size: 5,
            allow_digits: false,
            separator: Separator::Underscore,
        }
    }
}

impl IdentifierConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch size or affixes are out of range.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(format!(
                "batch_size must be between {MIN_BATCH_SIZE} and {MAX_BATCH_SIZE}, got {}",
                self.batch_size
            ));
        }
        if self.prefix.chars().count() > MAX_AFFIX_LEN {
            return Err(format!("prefix cannot exceed {MAX_AFFIX_LEN} characters"));
        }
        if self.suffix.chars().count() > MAX_AFFIX_LEN {
            return Err(format!("suffix cannot exceed {MAX_AFFIX_LEN} characters"));
        }
        Ok(())
    }
}
