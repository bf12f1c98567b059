//! Textual roll specifications: `XdY` dice, `min-max` ranges

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Malformed dice or range text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid dice spec '{0}': expected <count>d<sides> with both numbers positive")]
    DiceSpec(String),
    #[error("invalid damage range '{0}': expected <min>-<max> with min <= max")]
    DamageRange(String),
    #[error("invalid table range '{0}': expected <min>-<max> or a single number")]
    TableRange(String),
    #[error("too many dice in '{0}': at most {max} per roll", max = MAX_DICE)]
    TooManyDice(String),
}

/// Most dice a single spec may roll
pub const MAX_DICE: u32 = 1000;

/// Parse a non-empty run of ASCII digits
fn parse_digits(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// `<count>d<sides>`, e.g. `3d6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RollSpec {
    count: u32,
    sides: u32,
}

impl RollSpec {
    pub fn new(count: u32, sides: u32) -> Result<Self, FormatError> {
        if count == 0 || sides == 0 {
            return Err(FormatError::DiceSpec(format!("{count}d{sides}")));
        }
        if count > MAX_DICE {
            return Err(FormatError::TooManyDice(format!("{count}d{sides}")));
        }
        Ok(RollSpec { count, sides })
    }

    /// Constructor for literals known to be positive
    pub(crate) const fn die(count: u32, sides: u32) -> Self {
        RollSpec { count, sides }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Smallest possible total
    pub fn min_total(&self) -> i64 {
        i64::from(self.count)
    }

    /// Largest possible total
    pub fn max_total(&self) -> i64 {
        i64::from(self.count) * i64::from(self.sides)
    }
}

impl FromStr for RollSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::DiceSpec(s.to_string());
        let (count, sides) = s.split_once('d').ok_or_else(invalid)?;
        let count = parse_digits(count).ok_or_else(invalid)?;
        let sides = parse_digits(sides)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid)?;
        if count > i64::from(MAX_DICE) {
            return Err(FormatError::TooManyDice(s.to_string()));
        }
        let count = u32::try_from(count).map_err(|_| invalid())?;
        RollSpec::new(count, sides).map_err(|_| invalid())
    }
}

impl fmt::Display for RollSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl TryFrom<String> for RollSpec {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RollSpec> for String {
    fn from(spec: RollSpec) -> Self {
        spec.to_string()
    }
}

/// Inclusive `min-max` damage range; `min` may be negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DamageRange {
    min: i64,
    max: i64,
}

impl DamageRange {
    pub fn new(min: i64, max: i64) -> Result<Self, FormatError> {
        if min > max {
            return Err(FormatError::DamageRange(format!("{min}-{max}")));
        }
        Ok(DamageRange { min, max })
    }

    pub(crate) const fn between(min: i64, max: i64) -> Self {
        DamageRange { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl FromStr for DamageRange {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::DamageRange(s.to_string());
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (min, max) = rest.split_once('-').ok_or_else(invalid)?;
        let min = parse_digits(min).ok_or_else(invalid)?;
        let max = parse_digits(max).ok_or_else(invalid)?;
        let min = if negative { -min } else { min };
        DamageRange::new(min, max).map_err(|_| invalid())
    }
}

impl fmt::Display for DamageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl TryFrom<String> for DamageRange {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DamageRange> for String {
    fn from(range: DamageRange) -> Self {
        range.to_string()
    }
}

/// Inclusive key of a range-keyed random table: `1-5`, `7-7` or `7`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableRange {
    min: i64,
    max: i64,
}

impl TableRange {
    pub fn new(min: i64, max: i64) -> Result<Self, FormatError> {
        if min > max {
            return Err(FormatError::TableRange(format!("{min}-{max}")));
        }
        Ok(TableRange { min, max })
    }

    pub fn contains(&self, roll: i64) -> bool {
        self.min <= roll && roll <= self.max
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl FromStr for TableRange {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::TableRange(s.to_string());
        let (min, max) = match s.split_once('-') {
            Some((min, max)) => (min, max),
            None => (s, s),
        };
        let min = parse_digits(min.trim()).ok_or_else(invalid)?;
        let max = parse_digits(max.trim()).ok_or_else(invalid)?;
        TableRange::new(min, max).map_err(|_| invalid())
    }
}

impl fmt::Display for TableRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl TryFrom<String> for TableRange {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TableRange> for String {
    fn from(range: TableRange) -> Self {
        range.to_string()
    }
}
