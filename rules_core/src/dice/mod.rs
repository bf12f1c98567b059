//! Dice - Roll specs, random tables and the roller that evaluates them

mod roller;
mod spec;
mod table;

pub use roller::{DiceRoller, D100};
pub use spec::{DamageRange, FormatError, RollSpec, TableRange, MAX_DICE};
pub use table::{RandomTable, TableError, TableRegistry};
