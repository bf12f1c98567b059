//! Per-location rules that gate combat

use serde::{Deserialize, Serialize};

/// What a location allows. Everything is off unless a room opts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRules {
    #[serde(default)]
    pub allow_combat: bool,
    #[serde(default)]
    pub allow_pvp: bool,
    /// Defeat kills instead of knocking out
    #[serde(default)]
    pub allow_death: bool,
}

impl RoomRules {
    /// Arena where characters may fight each other but never die
    pub fn pvp() -> Self {
        RoomRules {
            allow_combat: true,
            allow_pvp: true,
            allow_death: false,
        }
    }

    /// Combat allowed and lethal, no pvp
    pub fn dangerous() -> Self {
        RoomRules {
            allow_combat: true,
            allow_pvp: false,
            allow_death: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_peaceful() {
        let room = RoomRules::default();
        assert!(!room.allow_combat && !room.allow_pvp && !room.allow_death);
    }

    #[test]
    fn test_pvp_preset_is_non_lethal() {
        let room = RoomRules::pvp();
        assert!(room.allow_combat);
        assert!(room.allow_pvp);
        assert!(!room.allow_death);
    }

    #[test]
    fn test_parse_partial() {
        let room: RoomRules = toml::from_str("allow_combat = true").unwrap();
        assert_eq!(
            room,
            RoomRules {
                allow_combat: true,
                ..RoomRules::default()
            }
        );
    }
}
