//! Term factors and the forward accumulation pass of the Chudnovsky series.
//!
//! The series is consumed in its `a_sum`/`b_sum` form: each term's value is
//! obtained from the previous one by an exact rational factor, so the whole
//! pass costs one multiplication, one division, and two additions per term.
//! All values are fixed-point integers at a common power-of-ten scale chosen
//! by the caller.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::progress::ProgressSink;

/// The Chudnovsky constant `C = 640320`.
pub(crate) const C: i128 = 640_320;

/// `C^3 / 24`. The cube of 640320 is divisible by 24 exactly.
pub(crate) const C3_OVER_24: i128 = C * C * C / 24;

/// Exact rational update factor for one series term.
///
/// Multiplying the running term by `numerator / denominator` (with floor
/// division) advances it from term `k-1` to term `k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermFactor {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

/// Partial sums produced by [`accumulate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accumulation {
    /// Sum of all term values, including the leading `one`.
    pub a_sum: BigInt,
    /// Sum of `k * a_k` over all terms.
    pub b_sum: BigInt,
    /// Terms that contributed a nonzero value at the working scale.
    pub terms_used: usize,
}

/// Builds the factor table for terms `1..=total_terms`.
///
/// For term `k` the factor is `-(6k-5)(2k-1)(6k-1) / (k^3 * C^3/24)`.
/// Pure integer arithmetic over a fixed formula; infallible. The table is
/// built in full before the accumulation pass and never mutated afterward.
pub fn term_factors(total_terms: usize) -> Vec<TermFactor> {
    let c3_over_24 = BigInt::from(C3_OVER_24);
    (1..=total_terms as i128)
        .map(|k| {
            // (6k-1)^3 stays well inside i128 for any reachable term count.
            let numerator = BigInt::from(-((6 * k - 5) * (2 * k - 1) * (6 * k - 1)));
            let k_big = BigInt::from(k);
            let denominator = &k_big * &k_big * &k_big * &c3_over_24;
            TermFactor {
                numerator,
                denominator,
            }
        })
        .collect()
}

/// Runs the forward pass over the factor table.
///
/// Starting from `a_k = a_sum = one` and `b_sum = 0`, each step updates
/// `a_k` by its factor and folds it into both sums. The division must floor
/// rather than truncate toward zero: `a_k` alternates in sign, the two
/// conventions differ by one unit on every inexact negative quotient, and
/// that unit is observable in the digit stream.
///
/// The pass stops at the first term whose value underflows to exactly zero;
/// every later term would also be zero at this scale. `progress` is notified
/// once per completed nonzero term.
pub fn accumulate(
    one: &BigInt,
    factors: &[TermFactor],
    progress: &dyn ProgressSink,
) -> Accumulation {
    let mut a_k = one.clone();
    let mut a_sum = one.clone();
    let mut b_sum = BigInt::zero();
    let mut terms_used = 0;

    for (index, factor) in factors.iter().enumerate() {
        a_k = (&a_k * &factor.numerator).div_floor(&factor.denominator);
        a_sum += &a_k;
        b_sum += BigInt::from(index as u64 + 1) * &a_k;
        if a_k.is_zero() {
            break;
        }
        terms_used += 1;
        progress.term_completed();
    }

    Accumulation {
        a_sum,
        b_sum,
        terms_used,
    }
}
