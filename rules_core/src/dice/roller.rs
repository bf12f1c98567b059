//! DiceRoller - Rolls dice specs and random tables against an injected source

use super::spec::{FormatError, RollSpec};
use super::table::{RandomTable, TableError};
use crate::rng::RandomSource;
use tracing::debug;

/// The d100 used for plain, advantaged and disadvantaged checks
pub const D100: RollSpec = RollSpec::die(1, 100);

/// Dice roller owning its randomness source
#[derive(Debug, Clone)]
pub struct DiceRoller<R> {
    rng: R,
}

impl<R: RandomSource> DiceRoller<R> {
    pub fn new(rng: R) -> Self {
        DiceRoller { rng }
    }

    /// Borrow the underlying source, e.g. to share it with a `DamageResolver`
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Parse and roll an `XdY` spec
    pub fn roll(&mut self, spec: &str) -> Result<i64, FormatError> {
        let spec: RollSpec = spec.parse()?;
        Ok(self.roll_spec(spec))
    }

    /// Sum of `count` independent draws over `[1, sides]`
    pub fn roll_spec(&mut self, spec: RollSpec) -> i64 {
        let sides = i64::from(spec.sides());
        let rng = &mut self.rng;
        let total = (0..spec.count())
            .map(|_| rng.range_inclusive(1, sides))
            .sum();
        debug!(%spec, total, "rolled dice");
        total
    }

    /// Roll `spec` `times` times and keep the lowest result
    pub fn roll_lowest_of(&mut self, spec: RollSpec, times: u32) -> i64 {
        (0..times.max(1))
            .map(|_| self.roll_spec(spec))
            .min()
            .unwrap_or_else(|| spec.min_total())
    }

    /// Roll `spec` once, or twice keeping the better (advantage) or worse
    /// (disadvantage) result. Both flags together cancel out.
    pub fn roll_spec_with_mode(&mut self, spec: RollSpec, advantage: bool, disadvantage: bool) -> i64 {
        if advantage == disadvantage {
            return self.roll_spec(spec);
        }
        let first = self.roll_spec(spec);
        let second = self.roll_spec(spec);
        if advantage {
            first.max(second)
        } else {
            first.min(second)
        }
    }

    /// `1d100`, with advantage/disadvantage applied
    pub fn roll_with_advantage_or_disadvantage(&mut self, advantage: bool, disadvantage: bool) -> i64 {
        self.roll_spec_with_mode(D100, advantage, disadvantage)
    }

    /// Roll `spec` and pick the matching entry of `table`
    pub fn roll_random_table<'t, T>(
        &mut self,
        spec: &str,
        table: &'t RandomTable<T>,
    ) -> Result<&'t T, TableError> {
        let roll = self.roll(spec)?;
        let entry = table.lookup(spec, roll);
        debug!(spec, roll, found = entry.is_ok(), "rolled on random table");
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, StdRandom};

    #[test]
    fn test_roll_stays_in_bounds() {
        let mut dice = DiceRoller::new(StdRandom::seeded(12345));
        for _ in 0..200 {
            let total = dice.roll("3d6").unwrap();
            assert!((3..=18).contains(&total));
        }
    }

    #[test]
    fn test_roll_sums_each_die() {
        let mut dice = DiceRoller::new(ScriptedSource::new([2, 5, 6]));
        assert_eq!(dice.roll("3d6").unwrap(), 13);
    }

    #[test]
    fn test_roll_rejects_bad_spec() {
        let mut dice = DiceRoller::new(StdRandom::seeded(1));
        assert_eq!(
            dice.roll("0d6"),
            Err(FormatError::DiceSpec("0d6".to_string()))
        );
        assert!(dice.roll("d20").is_err());
    }

    #[test]
    fn test_advantage_takes_max_and_disadvantage_min() {
        let mut dice = DiceRoller::new(ScriptedSource::new([30, 80]));
        assert_eq!(dice.roll_with_advantage_or_disadvantage(true, false), 80);

        let mut dice = DiceRoller::new(ScriptedSource::new([30, 80]));
        assert_eq!(dice.roll_with_advantage_or_disadvantage(false, true), 30);
    }

    #[test]
    fn test_advantage_and_disadvantage_cancel() {
        let mut dice = DiceRoller::new(ScriptedSource::new([30, 80]));
        assert_eq!(dice.roll_with_advantage_or_disadvantage(true, true), 30);
        assert_eq!(dice.source_mut().remaining(), 1);

        let mut dice = DiceRoller::new(ScriptedSource::new([45, 80]));
        assert_eq!(dice.roll_with_advantage_or_disadvantage(false, false), 45);
    }

    #[test]
    fn test_seeded_advantage_matches_two_plain_draws() {
        let mut plain = DiceRoller::new(StdRandom::seeded(99));
        let a = plain.roll("1d100").unwrap();
        let b = plain.roll("1d100").unwrap();

        let mut advantaged = DiceRoller::new(StdRandom::seeded(99));
        assert_eq!(advantaged.roll_with_advantage_or_disadvantage(true, false), a.max(b));

        let mut disadvantaged = DiceRoller::new(StdRandom::seeded(99));
        assert_eq!(
            disadvantaged.roll_with_advantage_or_disadvantage(false, true),
            a.min(b)
        );
    }

    #[test]
    fn test_flat_table_clamps_high_roll() {
        let table = RandomTable::Flat((1..=20).collect::<Vec<i32>>());
        let mut dice = DiceRoller::new(ScriptedSource::new([25]));
        assert_eq!(dice.roll_random_table("1d30", &table), Ok(&20));
    }

    #[test]
    fn test_ranged_table_boundary_error() {
        let table = RandomTable::Ranged(vec![("1-10".parse().unwrap(), "low")]);
        let mut dice = DiceRoller::new(ScriptedSource::new([15]));
        assert_eq!(
            dice.roll_random_table("1d20", &table),
            Err(TableError::OutOfBounds {
                spec: "1d20".to_string(),
                roll: 15
            })
        );
    }

    #[test]
    fn test_table_with_bad_spec() {
        let table = RandomTable::Flat(vec!["a"]);
        let mut dice = DiceRoller::new(StdRandom::seeded(3));
        assert!(matches!(
            dice.roll_random_table("1x6", &table),
            Err(TableError::Format(_))
        ));
    }

    #[test]
    fn test_roll_lowest_of() {
        let mut dice = DiceRoller::new(ScriptedSource::new([5, 2, 4]));
        assert_eq!(dice.roll_lowest_of(RollSpec::die(1, 6), 3), 2);
    }
}
