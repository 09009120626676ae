//! Credential generation configuration types.
//!
//! These types describe how a batch of passwords, PINs or memorable
//! passphrases is composed.

use serde::{Deserialize, Serialize};

/// Minimum batch size for credential generation.
pub const MIN_COUNT: u32 = 1;

/// Maximum batch size for credential generation.
pub const MAX_COUNT: u32 = 5;

/// Credential generation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Random characters drawn from a composed alphabet.
    #[default]
    Random,
    /// Numeric PIN.
    Pin,
    /// Adjective-Noun-Segment passphrase.
    Memorable,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Pin => write!(f, "pin"),
            Self::Memorable => write!(f, "memorable"),
        }
    }
}

impl GenerationMode {
    /// Whether the configured `length` affects the output in this mode.
    #[must_use]
    pub const fn uses_length(self) -> bool {
        !matches!(self, Self::Memorable)
    }
}

/// Symbol set appended to the alphabet when symbols are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSet {
    /// `!@#$%^&*()`
    #[default]
    Basic,
    /// Basic symbols plus `_+-=[]{}|;:,.<>?`
    Extended,
}

/// Inclusive length range allowed for a generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    /// Smallest allowed length.
    pub min: u32,
    /// Largest allowed length.
    pub max: u32,
}

impl LengthBounds {
    /// Get the length bounds for a mode.
    #[must_use]
    pub const fn for_mode(mode: GenerationMode) -> Self {
        match mode {
            GenerationMode::Pin => Self { min: 6, max: 16 },
            GenerationMode::Random | GenerationMode::Memorable => Self { min: 8, max: 36 },
        }
    }

    /// Clamp a length into this range.
    #[must_use]
    pub fn clamp(self, length: u32) -> u32 {
        length.clamp(self.min, self.max)
    }

    /// Check whether a length lies inside this range.
    #[must_use]
    pub const fn contains(self, length: u32) -> bool {
        length >= self.min && length <= self.max
    }
}

/// Configuration for a credential batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    /// Generation strategy.
    pub mode: GenerationMode,

    /// Output length (ignored in memorable mode).
    pub length: u32,

    /// Number of credentials to generate.
    pub count: u32,

    /// Include uppercase letters (capitalize words in memorable mode).
    pub include_upper: bool,

    /// Include digits.
    pub include_digits: bool,

    /// Include symbols.
    pub include_symbols: bool,

    /// Which symbol set to draw from.
    pub symbol_set: SymbolSet,

    /// Remove `I`, `l`, `1`, `O` and `0` from the random alphabet.
    pub exclude_ambiguous: bool,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Random,
            length: 16,
            count: 1,
            include_upper: true,
            include_digits: true,
            include_symbols: true,
            symbol_set: SymbolSet::Basic,
            exclude_ambiguous: false,
        }
    }
}

impl CredentialConfig {
    /// Switch to another mode, clamping `length` into the new mode's bounds.
    #[must_use]
    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self.length = LengthBounds::for_mode(mode).clamp(self.length);
        self
    }

    /// Length bounds for the current mode.
    #[must_use]
    pub const fn bounds(&self) -> LengthBounds {
        LengthBounds::for_mode(self.mode)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` or `count` is out of range.
    pub fn validate(&self) -> Result<(), String> {
        let bounds = self.bounds();
        if !bounds.contains(self.length) {
            return Err(format!(
                "length must be between {} and {} for {} mode, got {}",
                bounds.min, bounds.max, self.mode, self.length
            ));
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.count) {
            return Err(format!(
                "count must be between {MIN_COUNT} and {MAX_COUNT}, got {}",
                self.count
            ));
        }
        Ok(())
    }
}

/// Display-only strength rating derived from output length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Short output.
    Weak,
    /// Moderate output.
    Medium,
    /// Long output.
    Strong,
}

impl Strength {
    /// Classify a credential of `len` characters produced in `mode`.
    #[must_use]
    pub const fn classify(mode: GenerationMode, len: usize) -> Self {
        let (weak_below, medium_below) = match mode {
            GenerationMode::Pin => (8, 12),
            GenerationMode::Random | GenerationMode::Memorable => (12, 20),
        };
        if len < weak_below {
            Self::Weak
        } else if len < medium_below {
            Self::Medium
        } else {
            Self::Strong
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "weak"),
            Self::Medium => write!(f, "medium"),
            Self::Strong => write!(f, "strong"),
        }
    }
}
