//! # Order Identifier Generator
//!
//! Random 12-character order ids drawn from a 36-character base.
//!
//! Uses the Park–Miller minimal-standard generator (m = 2^31 − 1,
//! a = 39373) stepped with Schrage's method so the multiplication never
//! overflows. Emitted ids are not required to be monotonic.

use crate::domain::value_objects::timestamp::Timestamp;

const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 39_373;

const ID_LENGTH: usize = 12;
const ID_BASE: &[u8; 36] = b"0123456789QWERTYUIOPASDFGHJKLZXCVBNM";

/// Generator for order identifiers.
///
/// Seeded from the wall-clock milliseconds within the current second; a
/// zero seed falls back to Unix seconds so the generator never starts in
/// the LCG's absorbing state.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::value_objects::ids::OrderIdGenerator;
///
/// let mut ids = OrderIdGenerator::from_seed(42);
/// let id = ids.generate();
/// assert_eq!(id.len(), 12);
/// assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
/// ```
#[derive(Debug, Clone)]
pub struct OrderIdGenerator {
    seed: i64,
}

impl OrderIdGenerator {
    /// Creates a generator seeded from the current wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(Timestamp::now().millis_of_second())
    }

    /// Creates a generator from an explicit seed.
    ///
    /// A zero seed is replaced by the current Unix seconds, matching the
    /// wall-clock fallback of [`new`](Self::new).
    #[must_use]
    pub fn from_seed(seed: i64) -> Self {
        let seed = if seed == 0 {
            Timestamp::now().timestamp_secs()
        } else {
            seed
        };
        Self {
            seed: seed.rem_euclid(MODULUS),
        }
    }

    /// Generates a fresh 12-character identifier.
    pub fn generate(&mut self) -> String {
        (0..ID_LENGTH)
            .map(|_| {
                let uniform = self.next_uniform();
                let index = (uniform * ID_BASE.len() as f64) as usize;
                ID_BASE[index.min(ID_BASE.len() - 1)] as char
            })
            .collect()
    }

    /// Advances the LCG and returns a uniform draw in [0, 1).
    fn next_uniform(&mut self) -> f64 {
        // Schrage decomposition: m = a*q + r with r < q.
        let q = MODULUS / MULTIPLIER;
        let r = MODULUS % MULTIPLIER;
        let k = self.seed / q;
        self.seed = MULTIPLIER * (self.seed - k * q) - k * r;
        if self.seed < 0 {
            self.seed += MODULUS;
        }
        self.seed as f64 / MODULUS as f64
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_twelve_characters() {
        let mut ids = OrderIdGenerator::new();
        assert_eq!(ids.generate().len(), 12);
    }

    #[test]
    fn charset_is_digits_and_uppercase() {
        let mut ids = OrderIdGenerator::from_seed(123);
        for _ in 0..50 {
            let id = ids.generate();
            assert!(
                id.bytes().all(|b| ID_BASE.contains(&b)),
                "unexpected character in '{id}'"
            );
        }
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let mut a = OrderIdGenerator::from_seed(999);
        let mut b = OrderIdGenerator::from_seed(999);
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn consecutive_ids_differ() {
        let mut ids = OrderIdGenerator::from_seed(7);
        assert_ne!(ids.generate(), ids.generate());
    }

    #[test]
    fn zero_seed_falls_back_to_wall_clock() {
        let mut ids = OrderIdGenerator::from_seed(0);
        // Must not be stuck in the absorbing state (all '0' output).
        let id = ids.generate();
        assert_eq!(id.len(), 12);
        assert_ne!(id, "000000000000");
    }
}
