//! Property tests for the dice engine.

use delve::{minmax, within_minmax, Dice, DiceBag, RollLimits};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_minmax_stays_in_range(n in -5000i32..5000, floor in -100i32..100, span in 1i32..100) {
        let ceiling = floor + span;
        let clamped = minmax(n, floor, ceiling);
        prop_assert!(within_minmax(clamped, floor, ceiling));
        if within_minmax(n, floor, ceiling) {
            prop_assert_eq!(clamped, n);
        }
    }

    #[test]
    fn test_minmax_inverted_range_is_identity(n in any::<i32>(), ceiling in -100i32..100, gap in 1i32..100) {
        prop_assert_eq!(minmax(n, ceiling + gap, ceiling), n);
    }

    #[test]
    fn test_minmax_collapsed_range(n in any::<i32>(), bound in -100i32..100) {
        prop_assert_eq!(minmax(n, bound, bound), bound);
    }

    #[test]
    fn test_zero_dice_returns_modifier(seed in any::<u64>(), modifier in -1000i32..1000) {
        let mut dice = Dice::seeded(seed);
        prop_assert_eq!(dice.roll(0, modifier), modifier);
        prop_assert_eq!(dice.roll_clamped(0, modifier, 5, 10), modifier);
    }

    #[test]
    fn test_roll_range(seed in any::<u64>(), count in 1u8..20, modifier in -50i32..50) {
        let mut dice = Dice::seeded(seed);
        let total = dice.roll(count, modifier);
        let count = i32::from(count);
        prop_assert!(total >= count + modifier);
        prop_assert!(total <= 6 * count + modifier);
    }

    #[test]
    fn test_clamped_roll_respects_bounds(
        seed in any::<u64>(),
        count in 1u8..10,
        floor in 0i32..20,
        span in 1i32..20,
        modifier in -5i32..5,
    ) {
        let mut dice = Dice::seeded(seed);
        let total = dice.roll_clamped(count, modifier, floor, floor + span);
        prop_assert!(total >= floor + modifier);
        prop_assert!(total <= floor + span + modifier);
    }

    #[test]
    fn test_absolute_limits_apply(seed in any::<u64>(), count in 1u8..30) {
        let mut dice = Dice::with_limits(seed, RollLimits { min: 3, max: 7 });
        let bag = DiceBag::new(count, 0, 10, 0);
        prop_assert!(bag.is_unset());
        let total = dice.roll_bag(&bag);
        prop_assert!((3..=7).contains(&total));
    }

    #[test]
    fn test_named_dice_ranges(seed in any::<u64>()) {
        let mut dice = Dice::seeded(seed);
        prop_assert!((1..=6).contains(&dice.d6()));
        prop_assert!((1..=2).contains(&dice.d2()));
        prop_assert!((0..=9).contains(&dice.td10()));
        prop_assert!((1..=10).contains(&dice.d10()));
        prop_assert!((1..=100).contains(&dice.d100()));
    }
}

#[test]
fn test_degenerate_dice_are_fixed() {
    let mut dice = Dice::seeded(0);
    assert_eq!(dice.roll_die(-5), 5);
    assert_eq!(dice.roll_die(0), 0);
    assert_eq!(dice.roll_die(1), 1);
}

#[test]
fn test_same_seed_same_rolls() {
    let mut a = Dice::seeded(77);
    let mut b = Dice::seeded(77);
    let rolls_a: Vec<i32> = (0..50).map(|_| a.roll(3, 1)).collect();
    let rolls_b: Vec<i32> = (0..50).map(|_| b.roll(3, 1)).collect();
    assert_eq!(rolls_a, rolls_b);
}

#[test]
fn test_quickcheck_against_fixed_roll() {
    let mut dice = Dice::seeded(1);
    assert!(dice.quickcheck(0, 4, 4));
    assert!(!dice.quickcheck(0, 5, 4));
    assert!(dice.quickcheck_clamped(0, 2, 3, 0, 10));
}
