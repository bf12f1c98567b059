//! Damage - Uniform damage rolls inside a `min-max` range

mod resolver;

pub use crate::dice::DamageRange;
pub use resolver::{DamageResolver, BARE_HANDS_DAMAGE};
