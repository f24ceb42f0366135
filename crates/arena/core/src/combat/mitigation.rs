//! Armor mitigation.

/// Damage left after armor.
///
/// # Formula
///
/// ```text
/// effective = max(0, incoming - armor)
/// ```
///
/// Pure: computing mitigation never touches combatant state.
pub fn calculate_mitigation(incoming: i32, armor: i32) -> i32 {
    incoming.saturating_sub(armor).max(0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn armor_reduces_hit() {
        assert_eq!(calculate_mitigation(30, 5), 25);
    }

    #[test]
    fn armor_never_heals() {
        assert_eq!(calculate_mitigation(3, 8), 0);
    }

    proptest! {
        #[test]
        fn matches_clamped_difference(incoming in -1_000i32..10_000, armor in 0i32..5_000) {
            let effective = calculate_mitigation(incoming, armor);
            prop_assert_eq!(effective, (incoming - armor).max(0));
            prop_assert!(effective >= 0);
        }
    }
}
