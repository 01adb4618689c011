//! # Distribution
//!
//! Applies the apportionment primitives to a bill.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  distribute_items                                                       │
//! │    for each item: apportion(line total, sharers) → add into food map   │
//! │                                                                         │
//! │  distribute_charge (tip or tax, independently)                          │
//! │    Equal        → apportion(amount, eligible people)                   │
//! │                   eligible = food > 0, or everyone if the flag is set  │
//! │    Proportional → apportion_weighted(amount, food of every person)     │
//! │                   the flag is ignored; zero food always pays 0         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither function rejects anything. Validation happens before they run.

use std::collections::BTreeMap;

use tracing::debug;

use crate::apportion::{apportion, apportion_weighted};
use crate::money::Money;
use crate::types::{Assignments, ChargePolicy, Item, Person, PersonId, SplitMethod};

/// Per-person amounts keyed by person id.
pub type ShareMap = BTreeMap<PersonId, Money>;

/// Map with every listed person at zero.
fn zeroed(people: &[Person]) -> ShareMap {
    people
        .iter()
        .map(|person| (person.id.clone(), Money::zero()))
        .collect()
}

/// Computes each person's food subtotal.
///
/// Every listed person starts at 0. Each item's line total is apportioned
/// across its sharers in assignment order and added to their running
/// subtotal. Unassigned items are skipped, and shares owed to ids missing
/// from `people` are dropped.
pub fn distribute_items(items: &[Item], assignments: &Assignments, people: &[Person]) -> ShareMap {
    let mut food = zeroed(people);

    for item in items {
        let sharers = match assignments.get(&item.id) {
            Some(sharers) if !sharers.is_empty() => sharers,
            _ => continue,
        };

        let shares = apportion(item.line_total(), sharers.len());
        for (person_id, share) in sharers.iter().zip(shares) {
            if let Some(subtotal) = food.get_mut(person_id) {
                *subtotal += share;
            }
        }
    }

    food
}

/// Divides one charge (tip or tax) among `people`.
///
/// `food` is the map produced by [`distribute_items`]. Everyone in
/// `people` appears in the result; anyone who is not eligible gets 0.
///
/// If nobody is eligible (everyone ate nothing and the split is
/// proportional, or equal without the inclusion flag) the charge is left
/// unallocated and every share is 0.
pub fn distribute_charge(policy: &ChargePolicy, people: &[Person], food: &ShareMap) -> ShareMap {
    let mut charge = zeroed(people);

    if policy.amount_cents.is_zero() {
        return charge;
    }

    let food_of = |person: &Person| food.get(&person.id).copied().unwrap_or_default();

    match policy.method {
        SplitMethod::Equal => {
            let eligible: Vec<&Person> = people
                .iter()
                .filter(|person| policy.include_zero_food_people || food_of(*person).is_positive())
                .collect();

            if eligible.is_empty() {
                debug!(amount = %policy.amount_cents, "No eligible people, charge left unallocated");
                return charge;
            }

            let shares = apportion(policy.amount_cents, eligible.len());
            for (person, share) in eligible.into_iter().zip(shares) {
                charge.insert(person.id.clone(), share);
            }
        }
        SplitMethod::Proportional => {
            let weights: Vec<Money> = people.iter().map(food_of).collect();
            if !weights.iter().any(Money::is_positive) {
                debug!(amount = %policy.amount_cents, "No food to weight by, charge left unallocated");
            }

            let shares = apportion_weighted(policy.amount_cents, &weights);
            for (person, share) in people.iter().zip(shares) {
                charge.insert(person.id.clone(), share);
            }
        }
    }

    charge
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn people(ids: &[&str]) -> Vec<Person> {
        ids.iter().map(|id| Person::with_id(*id, *id)).collect()
    }

    fn food(entries: &[(&str, i64)]) -> ShareMap {
        entries
            .iter()
            .map(|(id, cents)| (PersonId::from(*id), Money::from_cents(*cents)))
            .collect()
    }

    fn share(map: &ShareMap, id: &str) -> i64 {
        map[&PersonId::from(id)].cents()
    }

    #[test]
    fn test_items_shared_item() {
        let people = people(&["a", "b", "c"]);
        let items = vec![Item::with_id("x", "Pizza", Money::from_cents(1000), 1)];
        let mut assignments = Assignments::new();
        assignments.insert(
            ItemId::from("x"),
            vec![PersonId::from("a"), PersonId::from("b"), PersonId::from("c")],
        );

        let food = distribute_items(&items, &assignments, &people);
        assert_eq!(share(&food, "a"), 334);
        assert_eq!(share(&food, "b"), 333);
        assert_eq!(share(&food, "c"), 333);
    }

    #[test]
    fn test_items_extra_cent_follows_assignment_order() {
        let people = people(&["a", "b"]);
        let items = vec![Item::with_id("x", "Soda", Money::from_cents(101), 1)];
        let mut assignments = Assignments::new();
        assignments.insert(ItemId::from("x"), vec![PersonId::from("b"), PersonId::from("a")]);

        let food = distribute_items(&items, &assignments, &people);
        assert_eq!(share(&food, "b"), 51);
        assert_eq!(share(&food, "a"), 50);
    }

    #[test]
    fn test_items_accumulate_and_skip() {
        let people = people(&["a", "b", "c"]);
        let items = vec![
            Item::with_id("x", "Nachos", Money::from_cents(1000), 1),
            Item::with_id("y", "Wings", Money::from_cents(350), 2),
            Item::with_id("z", "Orphan", Money::from_cents(999), 1),
        ];
        let mut assignments = Assignments::new();
        assignments.insert(ItemId::from("x"), vec![PersonId::from("a"), PersonId::from("b")]);
        assignments.insert(ItemId::from("y"), vec![PersonId::from("a")]);
        assignments.insert(ItemId::from("z"), vec![]);

        let food = distribute_items(&items, &assignments, &people);
        assert_eq!(share(&food, "a"), 1200);
        assert_eq!(share(&food, "b"), 500);
        assert_eq!(share(&food, "c"), 0);
    }

    #[test]
    fn test_items_ignore_dangling_person_ids() {
        let people = people(&["a"]);
        let items = vec![Item::with_id("x", "Fries", Money::from_cents(300), 1)];
        let mut assignments = Assignments::new();
        assignments.insert(ItemId::from("x"), vec![PersonId::from("ghost"), PersonId::from("a")]);

        let food = distribute_items(&items, &assignments, &people);
        assert_eq!(food.len(), 1);
        assert_eq!(share(&food, "a"), 150);
    }

    #[test]
    fn test_charge_zero_amount_short_circuits() {
        let people = people(&["a", "b"]);
        let food = food(&[("a", 100), ("b", 0)]);
        let tip = distribute_charge(&ChargePolicy::none(), &people, &food);
        assert_eq!(share(&tip, "a"), 0);
        assert_eq!(share(&tip, "b"), 0);
    }

    #[test]
    fn test_charge_equal_respects_inclusion_flag() {
        let people = people(&["a", "b"]);
        let food = food(&[("a", 1000), ("b", 0)]);

        let policy = ChargePolicy::equal(Money::from_cents(200));
        let tip = distribute_charge(&policy, &people, &food);
        assert_eq!(share(&tip, "a"), 200);
        assert_eq!(share(&tip, "b"), 0);

        let tip = distribute_charge(&policy.including_zero_food(true), &people, &food);
        assert_eq!(share(&tip, "a"), 100);
        assert_eq!(share(&tip, "b"), 100);
    }

    #[test]
    fn test_charge_equal_extra_cents_follow_people_order() {
        let people = people(&["a", "b", "c"]);
        let food = food(&[("a", 0), ("b", 10), ("c", 10)]);
        let tip = distribute_charge(&ChargePolicy::equal(Money::from_cents(101)), &people, &food);
        assert_eq!(share(&tip, "a"), 0);
        assert_eq!(share(&tip, "b"), 51);
        assert_eq!(share(&tip, "c"), 50);
    }

    #[test]
    fn test_charge_proportional_ignores_inclusion_flag() {
        let people = people(&["a", "b"]);
        let food = food(&[("a", 1000), ("b", 0)]);
        let policy = ChargePolicy::proportional(Money::from_cents(150)).including_zero_food(true);

        let tip = distribute_charge(&policy, &people, &food);
        assert_eq!(share(&tip, "a"), 150);
        assert_eq!(share(&tip, "b"), 0);
    }

    #[test]
    fn test_charge_proportional_weights_by_food() {
        let people = people(&["a", "b"]);
        let food = food(&[("a", 2000), ("b", 1000)]);
        let tax = distribute_charge(&ChargePolicy::proportional(Money::from_cents(900)), &people, &food);
        assert_eq!(share(&tax, "a"), 600);
        assert_eq!(share(&tax, "b"), 300);
    }

    #[test]
    fn test_charge_with_nobody_eligible_stays_unallocated() {
        let people = people(&["a", "b"]);
        let food = food(&[("a", 0), ("b", 0)]);

        let equal = distribute_charge(&ChargePolicy::equal(Money::from_cents(100)), &people, &food);
        assert!(equal.values().all(Money::is_zero));

        let proportional =
            distribute_charge(&ChargePolicy::proportional(Money::from_cents(100)), &people, &food);
        assert!(proportional.values().all(Money::is_zero));
    }
}
