//! Damage calculation and application.

/// Smallest damage any landed hit deals.
///
/// Keeps a battle moving even when armor meets or exceeds attack.
pub const MIN_DAMAGE: u32 = 1;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// damage = max(MIN_DAMAGE, attack - armor)
/// ```
pub fn calculate_damage(attack: u32, armor: u32) -> u32 {
    attack.saturating_sub(armor).max(MIN_DAMAGE)
}

/// Apply damage to current health.
///
/// # Returns
///
/// New health value (clamped to 0)
pub fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_subtracts_from_attack() {
        assert_eq!(calculate_damage(10, 3), 7);
        assert_eq!(calculate_damage(10, 0), 10);
    }

    #[test]
    fn damage_never_drops_below_floor() {
        assert_eq!(calculate_damage(5, 10), 1);
        assert_eq!(calculate_damage(5, 5), 1);
        assert_eq!(calculate_damage(0, 0), 1);
        assert_eq!(calculate_damage(0, u32::MAX), 1);
    }

    #[test]
    fn health_floors_at_zero() {
        assert_eq!(apply_damage(10, 7), 3);
        assert_eq!(apply_damage(3, 7), 0);
    }
}
