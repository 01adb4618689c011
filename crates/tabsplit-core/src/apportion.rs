//! # Apportionment
//!
//! Splits an integer number of cents into integer parts that sum exactly to
//! the original, using the largest-remainder (Hamilton) method.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apportion(1000, 3)                                                     │
//! │                                                                         │
//! │    base = 1000 / 3 = 333, remainder = 1                                │
//! │    [333, 333, 333] → first `remainder` slots get +1 → [334, 333, 333]  │
//! │                                                                         │
//! │  apportion_weighted(100, [1, 1, 1])                                     │
//! │                                                                         │
//! │    exact = 33⅓ each, floors = [33, 33, 33], residual = 1               │
//! │    largest fraction wins, ties go to the lowest index → [34, 33, 33]   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both primitives break ties toward the earliest index, so the same input
//! always places the extra cents in the same slots.

use crate::money::Money;

/// Splits `total` into `count` parts as evenly as possible.
///
/// Every part starts at `floor(total / count)`; the first
/// `total mod count` parts get one extra cent. `count == 0` yields an
/// empty vector whatever the total.
///
/// Division is Euclidean, so the parts still sum to `total` if a caller
/// ever passes a negative amount.
///
/// ## Example
/// ```rust
/// use tabsplit_core::apportion;
/// use tabsplit_core::money::Money;
///
/// let parts = apportion(Money::from_cents(10), 3);
/// assert_eq!(parts, vec![Money::from_cents(4), Money::from_cents(3), Money::from_cents(3)]);
/// assert!(apportion(Money::from_cents(50), 0).is_empty());
/// ```
pub fn apportion(total: Money, count: usize) -> Vec<Money> {
    match count {
        0 => Vec::new(),
        1 => vec![total],
        _ => {
            let divisor = i64::try_from(count).unwrap_or(i64::MAX);
            let base = total.cents().div_euclid(divisor);
            let remainder = total.cents().rem_euclid(divisor) as usize;

            (0..count)
                .map(|index| {
                    if index < remainder {
                        Money::from_cents(base + 1)
                    } else {
                        Money::from_cents(base)
                    }
                })
                .collect()
        }
    }
}

/// Splits `total` in proportion to `weights`.
///
/// Each slot gets the floor of `total × weight / Σweights`; the leftover
/// cents go one at a time to the slots with the largest fractional
/// remainder, ties to the lowest index. Arithmetic is exact (`i128`
/// numerators over a shared denominator), so the leftover is exact too.
///
/// - `Σweights == 0` yields all zeros.
/// - A zero weight always yields exactly zero: such slots are never
///   candidates for a leftover cent. Negative weights count as zero.
///
/// ## Example
/// ```rust
/// use tabsplit_core::apportion_weighted;
/// use tabsplit_core::money::Money;
///
/// let weights = [Money::from_cents(2000), Money::from_cents(1000), Money::zero()];
/// let shares = apportion_weighted(Money::from_cents(900), &weights);
/// assert_eq!(shares, vec![Money::from_cents(600), Money::from_cents(300), Money::zero()]);
/// ```
pub fn apportion_weighted(total: Money, weights: &[Money]) -> Vec<Money> {
    let weights: Vec<i128> = weights
        .iter()
        .map(|w| i128::from(w.cents().max(0)))
        .collect();
    let total_weight: i128 = weights.iter().sum();

    if total_weight == 0 {
        return vec![Money::zero(); weights.len()];
    }

    let total_cents = i128::from(total.cents());
    let mut shares: Vec<i128> = Vec::with_capacity(weights.len());
    // (index, remainder numerator); remainders share the denominator
    // `total_weight`, so comparing numerators compares fractions.
    let mut candidates: Vec<(usize, i128)> = Vec::with_capacity(weights.len());

    for (index, &weight) in weights.iter().enumerate() {
        let scaled = total_cents * weight;
        shares.push(scaled.div_euclid(total_weight));
        if weight > 0 {
            candidates.push((index, scaled.rem_euclid(total_weight)));
        }
    }

    let residual = total_cents - shares.iter().sum::<i128>();
    let residual = usize::try_from(residual).unwrap_or(0);

    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for &(index, _) in candidates.iter().take(residual) {
        shares[index] += 1;
    }

    // Each share is bounded by |total|, so it fits back into i64.
    shares
        .into_iter()
        .map(|cents| Money::from_cents(cents as i64))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cents(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from_cents).collect()
    }

    #[rstest]
    #[case(10, 3, &[4, 3, 3])]
    #[case(100, 3, &[34, 33, 33])]
    #[case(7, 2, &[4, 3])]
    #[case(0, 3, &[0, 0, 0])]
    #[case(1, 5, &[1, 0, 0, 0, 0])]
    #[case(100, 1, &[100])]
    #[case(50, 0, &[])]
    #[case(0, 0, &[])]
    fn test_apportion_cases(#[case] total: i64, #[case] count: usize, #[case] expected: &[i64]) {
        assert_eq!(apportion(Money::from_cents(total), count), cents(expected));
    }

    #[test]
    fn test_apportion_sum_invariant() {
        for total in [0, 1, 2, 99, 100, 101, 999, 1000, 12_345] {
            for count in 0..=12 {
                let parts = apportion(Money::from_cents(total), count);
                assert_eq!(parts.len(), count);
                if count > 0 {
                    assert_eq!(
                        parts.iter().sum::<Money>(),
                        Money::from_cents(total),
                        "sum invariant failed for total={total}, count={count}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_apportion_is_deterministic() {
        let first = apportion(Money::from_cents(1001), 7);
        let second = apportion(Money::from_cents(1001), 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_apportion_negative_total_still_conserves() {
        let parts = apportion(Money::from_cents(-10), 3);
        assert_eq!(parts.iter().sum::<Money>(), Money::from_cents(-10));
    }

    #[test]
    fn test_weighted_exact_thirds() {
        let shares = apportion_weighted(Money::from_cents(900), &cents(&[2000, 1000]));
        assert_eq!(shares, cents(&[600, 300]));
    }

    #[test]
    fn test_weighted_zero_total_weight() {
        let shares = apportion_weighted(Money::from_cents(500), &cents(&[0, 0, 0]));
        assert_eq!(shares, cents(&[0, 0, 0]));
        assert!(apportion_weighted(Money::from_cents(500), &[]).is_empty());
    }

    #[test]
    fn test_weighted_ties_go_to_lowest_index() {
        let shares = apportion_weighted(Money::from_cents(100), &cents(&[1, 1, 1]));
        assert_eq!(shares, cents(&[34, 33, 33]));

        let shares = apportion_weighted(Money::from_cents(2), &cents(&[5, 5, 5]));
        assert_eq!(shares, cents(&[1, 1, 0]));
    }

    #[test]
    fn test_weighted_largest_remainder_wins() {
        // exact = [1.5, 3.0, 5.5] → floors [1, 3, 5], residual 1.
        // Slots 0 and 2 tie on .5; slot 0 wins on index.
        let shares = apportion_weighted(Money::from_cents(10), &cents(&[3, 6, 11]));
        assert_eq!(shares, cents(&[2, 3, 5]));

        // exact = [0.6, 1.2, 1.2] → floors [0, 1, 1], residual 1 → slot 0.
        let shares = apportion_weighted(Money::from_cents(3), &cents(&[1, 2, 2]));
        assert_eq!(shares, cents(&[1, 1, 1]));
    }

    #[test]
    fn test_weighted_zero_weight_never_receives_residual() {
        // The zero-weight slot is first, so it would win an index tie.
        let shares = apportion_weighted(Money::from_cents(1), &cents(&[0, 1, 1]));
        assert_eq!(shares, cents(&[0, 1, 0]));

        let shares = apportion_weighted(Money::from_cents(7), &cents(&[0, 3, -4, 3]));
        assert_eq!(shares[0], Money::zero());
        assert_eq!(shares[2], Money::zero());
        assert_eq!(shares.iter().sum::<Money>(), Money::from_cents(7));
    }
}
