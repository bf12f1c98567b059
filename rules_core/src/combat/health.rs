//! Hit point and coin arithmetic

use crate::actor::Actor;

/// Restore up to `amount` hp without passing max. Returns the hp restored.
pub fn heal(actor: &mut dyn Actor, amount: i64) -> i64 {
    let healed = amount.min(actor.hp_max() - actor.hp()).max(0);
    actor.set_hp(actor.hp() + healed);
    healed
}

/// Take up to `amount` coins. Returns what was actually paid.
pub fn pay(actor: &mut dyn Actor, amount: i64) -> i64 {
    let paid = amount.min(actor.coins()).max(0);
    actor.set_coins(actor.coins() - paid);
    paid
}

/// Subtract hp with no floor. Returns the new hp.
pub fn take_damage(actor: &mut dyn Actor, amount: i64) -> i64 {
    let hp = actor.hp() - amount;
    actor.set_hp(hp);
    hp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Character;
    use crate::store::MemoryStore;

    fn hero() -> Character {
        Character::new("hero", MemoryStore::new())
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut hero = hero();
        hero.set_hp(3);
        assert_eq!(heal(&mut hero, 2), 2);
        assert_eq!(hero.hp(), 5);
        assert_eq!(heal(&mut hero, 100), 3);
        assert_eq!(hero.hp(), 8);
        assert_eq!(heal(&mut hero, 1), 0);
    }

    #[test]
    fn test_pay_over_balance_empties_purse() {
        let mut hero = hero();
        hero.set_coins(7);
        assert_eq!(pay(&mut hero, 3), 3);
        assert_eq!(pay(&mut hero, 10), 4);
        assert_eq!(hero.coins(), 0);
        assert_eq!(pay(&mut hero, 1), 0);
    }

    #[test]
    fn test_negative_amounts_change_nothing() {
        let mut hero = hero();
        hero.set_hp(4);
        hero.set_coins(3);
        assert_eq!(heal(&mut hero, -5), 0);
        assert_eq!(hero.hp(), 4);
        assert_eq!(pay(&mut hero, -2), 0);
        assert_eq!(hero.coins(), 3);
    }

    #[test]
    fn test_damage_has_no_floor() {
        let mut hero = hero();
        assert_eq!(take_damage(&mut hero, 5), 3);
        assert_eq!(take_damage(&mut hero, 10), -7);
        assert_eq!(hero.hp(), -7);
    }
}
