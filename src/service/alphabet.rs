//! Character classes and alphabet assembly for credential generation.

use crate::domain::{CredentialConfig, SymbolSet};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const BASIC_SYMBOLS: &str = "!@#$%^&*()";
pub const EXTENDED_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs easily confused with one another.
pub const AMBIGUOUS: &[char] = &['I', 'l', '1', 'O', '0'];

impl SymbolSet {
    /// Characters in this symbol set.
    #[must_use]
    pub const fn chars(self) -> &'static str {
        match self {
            Self::Basic => BASIC_SYMBOLS,
            Self::Extended => EXTENDED_SYMBOLS,
        }
    }
}

/// Assemble the alphabet for random mode.
///
/// Lowercase letters are always present. Ambiguous glyphs are filtered after
/// every class has been appended.
#[must_use]
pub fn random_alphabet(config: &CredentialConfig) -> Vec<char> {
    let mut alphabet = String::from(LOWERCASE);
    if config.include_upper {
        alphabet.push_str(UPPERCASE);
    }
    if config.include_digits {
        alphabet.push_str(DIGITS);
    }
    if config.include_symbols {
        alphabet.push_str(config.symbol_set.chars());
    }

    alphabet
        .chars()
        .filter(|c| !(config.exclude_ambiguous && AMBIGUOUS.contains(c)))
        .collect()
}

/// Characters for the memorable-mode segment, or `None` when neither digits
/// nor symbols are enabled.
#[must_use]
pub fn segment_alphabet(config: &CredentialConfig) -> Option<Vec<char>> {
    let mut alphabet = String::new();
    if config.include_digits {
        alphabet.push_str(DIGITS);
    }
    if config.include_symbols {
        alphabet.push_str(config.symbol_set.chars());
    }

    if alphabet.is_empty() {
        None
    } else {
        Some(alphabet.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(upper: bool, digits: bool, symbols: bool) -> CredentialConfig {
        CredentialConfig {
            include_upper: upper,
            include_digits: digits,
            include_symbols: symbols,
            ..Default::default()
        }
    }

    #[test]
    fn test_lowercase_only() {
        let alphabet = random_alphabet(&config(false, false, false));
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.iter().all(char::is_ascii_lowercase));
    }

    #[test]
    fn test_all_classes() {
        let alphabet = random_alphabet(&config(true, true, true));
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 10);

        let mut extended = config(true, true, true);
        extended.symbol_set = SymbolSet::Extended;
        assert_eq!(random_alphabet(&extended).len(), 26 + 26 + 10 + 26);
    }

    #[test]
    fn test_exclude_ambiguous() {
        let mut cfg = config(true, true, false);
        cfg.exclude_ambiguous = true;
        let alphabet = random_alphabet(&cfg);
        assert_eq!(alphabet.len(), 26 + 26 + 10 - 5);
        assert!(AMBIGUOUS.iter().all(|c| !alphabet.contains(c)));

        // Only `l` is ambiguous among lowercase letters
        let mut cfg = config(false, false, false);
        cfg.exclude_ambiguous = true;
        assert_eq!(random_alphabet(&cfg).len(), 25);
    }

    #[test]
    fn test_extended_contains_basic() {
        assert!(BASIC_SYMBOLS.chars().all(|c| EXTENDED_SYMBOLS.contains(c)));
    }

    #[test]
    fn test_segment_alphabet() {
        assert!(segment_alphabet(&config(true, false, false)).is_none());
        assert_eq!(segment_alphabet(&config(false, true, false)).unwrap().len(), 10);
        assert_eq!(segment_alphabet(&config(false, false, true)).unwrap().len(), 10);
        assert_eq!(segment_alphabet(&config(false, true, true)).unwrap().len(), 20);
    }
}
