//! Credential generator.
//!
//! Produces batches of random passwords, numeric PINs, or memorable
//! `Adjective-Noun-Segment` passphrases.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::domain::{CredentialConfig, GenerationMode};
use crate::service::alphabet::{self, DIGITS};
use crate::service::wordlist::{WordLists, pick};

/// Length of the trailing segment in memorable mode.
const SEGMENT_LEN: usize = 4;

/// Separator joining memorable-mode parts.
const MEMORABLE_SEPARATOR: char = '-';

/// Generator for credential batches.
pub struct CredentialGenerator {
    words: Arc<WordLists>,
}

impl CredentialGenerator {
    /// Create a generator over the given word lists.
    #[must_use]
    pub const fn new(words: Arc<WordLists>) -> Self {
        Self { words }
    }

    /// Generate `config.count` credentials.
    ///
    /// The configuration is expected to be within bounds; see
    /// [`CredentialConfig::validate`]. Batches are not deduplicated.
    pub fn generate<R: Rng + ?Sized>(&self, config: &CredentialConfig, rng: &mut R) -> Vec<String> {
        let batch: Vec<String> = match config.mode {
            GenerationMode::Random => {
                let alphabet = alphabet::random_alphabet(config);
                (0..config.count)
                    .map(|_| draw(&alphabet, config.length as usize, rng))
                    .collect()
            }
            GenerationMode::Pin => {
                let digits: Vec<char> = DIGITS.chars().collect();
                (0..config.count)
                    .map(|_| draw(&digits, config.length as usize, rng))
                    .collect()
            }
            GenerationMode::Memorable => {
                let segment = alphabet::segment_alphabet(config);
                (0..config.count)
                    .map(|_| self.memorable(config, segment.as_deref(), rng))
                    .collect()
            }
        };

        debug!(
            mode = %config.mode,
            count = batch.len(),
            length = config.length,
            "Generated credential batch"
        );

        batch
    }

    fn memorable<R: Rng + ?Sized>(
        &self,
        config: &CredentialConfig,
        segment_alphabet: Option<&[char]>,
        rng: &mut R,
    ) -> String {
        let adjective = pick(self.words.adjectives(), rng);
        let noun = pick(self.words.nouns(), rng);

        let segment = match segment_alphabet {
            Some(chars) => draw(chars, SEGMENT_LEN, rng),
            None => format!("{:04}", rng.random_range(0..10_000u32)),
        };

        format!(
            "{}{sep}{}{sep}{segment}",
            apply_case(adjective, config.include_upper),
            apply_case(noun, config.include_upper),
            sep = MEMORABLE_SEPARATOR,
        )
    }
}

/// Draw `len` characters independently and uniformly from `alphabet`.
fn draw<R: Rng + ?Sized>(alphabet: &[char], len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Capitalize the first letter and lowercase the rest, or lowercase everything.
fn apply_case(word: &str, capitalize: bool) -> String {
    let lower = word.to_lowercase();
    if !capitalize {
        return lower;
    }
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
