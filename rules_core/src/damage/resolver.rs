//! DamageResolver - Roll a damage value from a `min-max` range

use crate::dice::{DamageRange, FormatError};
use crate::rng::RandomSource;
use tracing::debug;

/// Damage dealt by an unarmed attack
pub const BARE_HANDS_DAMAGE: DamageRange = DamageRange::between(1, 4);

/// Rolls damage from ranges using an injected source
#[derive(Debug, Clone)]
pub struct DamageResolver<R> {
    rng: R,
}

impl<R: RandomSource> DamageResolver<R> {
    pub fn new(rng: R) -> Self {
        DamageResolver { rng }
    }

    /// Parse `min-max` and roll uniformly inside it
    pub fn damage(&mut self, range: &str) -> Result<i64, FormatError> {
        let range: DamageRange = range.parse()?;
        Ok(self.damage_range(range))
    }

    /// Uniform value in `[min, max]`
    pub fn damage_range(&mut self, range: DamageRange) -> i64 {
        let amount = self.rng.range_inclusive(range.min(), range.max());
        debug!(%range, amount, "rolled damage");
        amount
    }
}
