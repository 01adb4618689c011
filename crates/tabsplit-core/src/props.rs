//! Property-based tests for apportionment and the split engine.
//!
//! - Conservation: food, tip and tax each sum to their inputs
//! - Apportionment exactness and determinism
//! - Zero-weight slots receive nothing
//! - Surplus is never negative
//! - Any unassigned item fails the whole split

use proptest::prelude::*;

use crate::apportion::{apportion, apportion_weighted};
use crate::engine::compute;
use crate::money::Money;
use crate::types::{BillConfig, ChargePolicy, Item, ItemId, Person, PersonId, SplitMethod};

/// Strategy for a total in cents (0 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Money> {
    (0i64..100_000_000).prop_map(Money::from_cents)
}

/// Strategy for food weights, roughly a third of them zero.
fn weights() -> impl Strategy<Value = Vec<Money>> {
    prop::collection::vec(
        prop_oneof![Just(0i64), 1i64..1_000_000].prop_map(Money::from_cents),
        0..12,
    )
}

fn method() -> impl Strategy<Value = SplitMethod> {
    prop_oneof![Just(SplitMethod::Equal), Just(SplitMethod::Proportional)]
}

fn policy() -> impl Strategy<Value = ChargePolicy> {
    (0i64..50_000, method(), any::<bool>()).prop_map(|(cents, method, include)| ChargePolicy {
        amount_cents: Money::from_cents(cents),
        method,
        include_zero_food_people: include,
    })
}

/// A fully assigned bill: 1-8 people, 0-10 items, each item shared by a
/// non-empty subset of people (by index bitmask).
fn assigned_bill() -> impl Strategy<Value = BillConfig> {
    (1usize..=8)
        .prop_flat_map(|people| {
            let item = (0i64..20_000, 1i64..4, 1u32..(1u32 << people));
            (
                Just(people),
                prop::collection::vec(item, 0..10),
                policy(),
                policy(),
            )
        })
        .prop_map(|(people, items, tip, tax)| {
            let people: Vec<Person> = (0..people)
                .map(|i| Person::with_id(format!("p{i}"), format!("Person {i}")))
                .collect();

            let mut config = BillConfig {
                people,
                tip,
                tax,
                ..BillConfig::default()
            };

            for (n, (price, quantity, mask)) in items.into_iter().enumerate() {
                let item = Item::with_id(format!("i{n}"), format!("Item {n}"), Money::from_cents(price), quantity);
                let sharers: Vec<PersonId> = config
                    .people
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, p)| p.id.clone())
                    .collect();
                config.assign(&item.id, sharers);
                config.items.push(item);
            }

            config
        })
}

/// True when the charge has at least one eligible recipient.
fn has_recipient(policy: &ChargePolicy, config: &BillConfig) -> bool {
    let anyone_ate = config.items.iter().any(|i| i.line_total().is_positive());
    match policy.method {
        SplitMethod::Equal => anyone_ate || (policy.include_zero_food_people && !config.people.is_empty()),
        SplitMethod::Proportional => anyone_ate,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Apportionment
    // =========================================================================

    #[test]
    fn prop_apportion_exact(total in amount(), count in 0usize..64) {
        let parts = apportion(total, count);
        prop_assert_eq!(parts.len(), count);
        if count > 0 {
            prop_assert_eq!(parts.iter().sum::<Money>(), total);
        }
        // Spread is at most one cent, and the larger parts come first.
        for pair in parts.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
            prop_assert!(pair[0].cents() - pair[1].cents() <= 1);
        }
    }

    #[test]
    fn prop_apportion_deterministic(total in amount(), count in 0usize..64) {
        prop_assert_eq!(apportion(total, count), apportion(total, count));
    }

    #[test]
    fn prop_weighted_exact(total in amount(), weights in weights()) {
        let shares = apportion_weighted(total, &weights);
        prop_assert_eq!(shares.len(), weights.len());

        if weights.iter().any(Money::is_positive) {
            prop_assert_eq!(shares.iter().sum::<Money>(), total);
        } else {
            prop_assert!(shares.iter().all(Money::is_zero));
        }
    }

    #[test]
    fn prop_weighted_zero_weight_gets_zero(total in amount(), weights in weights()) {
        let shares = apportion_weighted(total, &weights);
        for (weight, share) in weights.iter().zip(&shares) {
            if weight.is_zero() {
                prop_assert!(share.is_zero());
            }
            prop_assert!(!share.is_negative());
        }
    }

    #[test]
    fn prop_weighted_within_one_cent_of_exact(total in amount(), weights in weights()) {
        let total_weight: i128 = weights.iter().map(|w| i128::from(w.cents())).sum();
        prop_assume!(total_weight > 0);

        let shares = apportion_weighted(total, &weights);
        for (weight, share) in weights.iter().zip(&shares) {
            let exact_floor = i128::from(total.cents()) * i128::from(weight.cents()) / total_weight;
            let share = i128::from(share.cents());
            prop_assert!(share == exact_floor || share == exact_floor + 1);
        }
    }

    // =========================================================================
    // Engine
    // =========================================================================

    #[test]
    fn prop_compute_conserves(config in assigned_bill()) {
        let split = compute(&config).unwrap();
        prop_assert_eq!(split.results.len(), config.people.len());

        let food: Money = split.results.iter().map(|r| r.food_cents).sum();
        let items: Money = config.items.iter().map(Item::line_total).sum();
        prop_assert_eq!(food, items);

        let tip: Money = split.results.iter().map(|r| r.tip_cents).sum();
        if has_recipient(&config.tip, &config) {
            prop_assert_eq!(tip, config.tip.amount_cents);
        } else {
            prop_assert!(tip.is_zero());
        }

        let tax: Money = split.results.iter().map(|r| r.tax_cents).sum();
        if has_recipient(&config.tax, &config) {
            prop_assert_eq!(tax, config.tax.amount_cents);
        } else {
            prop_assert!(tax.is_zero());
        }

        let surplus: Money = split.results.iter().map(|r| r.surplus_cents).sum();
        prop_assert_eq!(split.total_surplus_cents, surplus);
    }

    #[test]
    fn prop_surplus_non_negative(config in assigned_bill()) {
        let split = compute(&config).unwrap();
        for r in &split.results {
            prop_assert!(r.rounded_total_cents >= r.exact_total_cents);
            prop_assert!(!r.surplus_cents.is_negative());
            prop_assert_eq!(r.exact_total_cents, r.food_cents + r.tip_cents + r.tax_cents);
        }
    }

    #[test]
    fn prop_proportional_zero_food_pays_nothing(config in assigned_bill()) {
        let split = compute(&config).unwrap();
        for r in &split.results {
            if r.food_cents.is_zero() {
                if config.tip.method == SplitMethod::Proportional {
                    prop_assert!(r.tip_cents.is_zero());
                }
                if config.tax.method == SplitMethod::Proportional {
                    prop_assert!(r.tax_cents.is_zero());
                }
            }
        }
    }

    #[test]
    fn prop_compute_deterministic(config in assigned_bill()) {
        prop_assert_eq!(compute(&config), compute(&config));
    }

    #[test]
    fn prop_unassigned_item_fails_closed(config in assigned_bill(), victim in any::<prop::sample::Index>()) {
        prop_assume!(!config.items.is_empty());
        let mut config = config;
        let victim: ItemId = config.items[victim.index(config.items.len())].id.clone();
        config.assignments.remove(&victim);

        let err = compute(&config).unwrap_err();
        prop_assert_eq!(err.unassigned_item_ids(), &[victim][..]);
    }
}
