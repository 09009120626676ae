//! Theme preference types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme.
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Persisted theme preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRecord {
    /// Selected theme.
    pub theme: Theme,

    /// When the preference was last changed.
    pub updated_at: DateTime<Utc>,
}

impl ThemeRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn now(theme: Theme) -> Self {
        Self {
            theme,
            updated_at: Utc::now(),
        }
    }
}
