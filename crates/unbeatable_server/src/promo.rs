//! Promo codes issued when the human wins.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use tracing::{debug, instrument};

/// Prefix of every promo code.
pub const PROMO_PREFIX: &str = "WIN-";

/// Number of random characters after the prefix.
pub const PROMO_LENGTH: usize = 8;

// Uppercase letters and digits without the look-alikes 0/O and 1/I.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generates promo codes such as `WIN-7KQ2M9XD`.
#[derive(Debug)]
pub struct PromoCodeGenerator {
    rng: Mutex<StdRng>,
}

impl PromoCodeGenerator {
    /// Creates a generator seeded from the thread-local RNG.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_rng(&mut rand::rng())),
        }
    }

    /// Creates a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generates a fresh promo code.
    #[instrument(skip(self))]
    pub fn generate(&self) -> String {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let suffix: String = (0..PROMO_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        let code = format!("{PROMO_PREFIX}{suffix}");
        debug!(%code, "Promo code generated");
        code
    }
}

impl Default for PromoCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
