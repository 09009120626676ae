//! Identifier generator.
//!
//! Produces batches of distinct handle-like strings. Candidates are drawn
//! until the batch is full; duplicates are discarded. The number of draws is
//! capped so a configuration whose combination space is smaller than the
//! batch fails instead of spinning.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::domain::{IdentifierConfig, IdentifierStyle};
use crate::error::{AppError, Result};
use crate::service::wordlist::{WordLists, pick};

/// Length of a random alphanumeric identifier base.
const ALNUM_LEN: usize = 8;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Appended numbers are drawn below this bound.
const DIGIT_SUFFIX_BOUND: u32 = 999;

/// Generator for identifier batches.
pub struct IdentifierGenerator {
    words: Arc<WordLists>,
    max_attempts_per_item: u32,
}

impl IdentifierGenerator {
    /// Create a generator over the given word lists.
    #[must_use]
    pub const fn new(words: Arc<WordLists>, config: &GeneratorConfig) -> Self {
        Self {
            words,
            max_attempts_per_item: config.max_attempts_per_item,
        }
    }

    /// Generate `config.batch_size` pairwise-distinct identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UniquenessExhausted`] if the attempt budget runs
    /// out before the batch is full.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        config: &IdentifierConfig,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let target = config.batch_size as usize;
        let max_attempts = u64::from(config.batch_size) * u64::from(self.max_attempts_per_item);

        let mut seen = HashSet::with_capacity(target);
        let mut batch = Vec::with_capacity(target);
        let mut attempts: u64 = 0;
        let mut duplicates: u64 = 0;

        while batch.len() < target {
            if attempts >= max_attempts {
                metrics::counter!("credforge_identifier_duplicates_total").increment(duplicates);
                return Err(AppError::UniquenessExhausted {
                    requested: config.batch_size,
                    produced: u32::try_from(batch.len()).unwrap_or(u32::MAX),
                });
            }
            attempts += 1;

            let candidate = self.candidate(config, rng);
            if seen.insert(candidate.clone()) {
                batch.push(candidate);
            } else {
                duplicates += 1;
                debug!(attempts, "Discarded duplicate identifier");
            }
        }

        metrics::counter!("credforge_identifier_duplicates_total").increment(duplicates);
        debug!(
            style = %config.style,
            count = batch.len(),
            attempts,
            duplicates,
            "Generated identifier batch"
        );

        Ok(batch)
    }

    /// Synthesize one candidate: `prefix + base [+ number] + suffix`.
    fn candidate<R: Rng + ?Sized>(&self, config: &IdentifierConfig, rng: &mut R) -> String {
        let separator = config.separator.as_str();

        let mut base = match config.style {
            IdentifierStyle::Pattern => {
                let adjective = pick(self.words.adjectives(), rng);
                let noun = pick(self.words.nouns(), rng);
                format!("{adjective}{separator}{noun}")
            }
            IdentifierStyle::Professional => {
                let first = pick(self.words.first_names(), rng);
                let last = pick(self.words.last_names(), rng);
                format!("{first}{separator}{last}")
            }
            IdentifierStyle::RandomAlnum => random_alnum(rng),
        };

        if config.allow_digits {
            base.push_str(&rng.random_range(0..DIGIT_SUFFIX_BOUND).to_string());
        }

        format!("{}{base}{}", config.prefix, config.suffix)
    }
}

/// Base-36 digits taken from the fraction of a uniform value in `[0, 1)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_alnum<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut fraction: f64 = rng.random();

    (0..ALNUM_LEN)
        .map(|_| {
            fraction *= 36.0;
            let digit = fraction.trunc();
            fraction -= digit;
            BASE36[(digit as usize).min(BASE36.len() - 1)] as char
        })
        .collect()
}
