//! Pipeline assembly: precision planning, the series pass, and the final
//! square root and division that turn the partial sums into digits of π.
//!
//! ## Key Design Decisions
//!
//! 1. **Guard digits**: the working scale exceeds the requested digit count
//!    by a band sized to the term count. Floor-division noise in the
//!    accumulators stays inside the band, so the reported digits equal the
//!    true decimal expansion of π truncated at the requested length, for
//!    every digit count rather than just large ones.
//! 2. **Exact integer square root**: `sqrt(10005)` is taken at the working
//!    scale with `num_integer::Roots::sqrt`, the floor of the real root, so
//!    no floating point ever touches the digit stream.
//! 3. **Planning is the only fallible step**: once a [`PrecisionPlan`] has
//!    been admitted, the computation itself cannot fail.

use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::Pow;

use crate::digits::format_pi;
use crate::error::ChudnovskyError;
use crate::progress::{NoProgress, ProgressSink};
use crate::series::{accumulate, term_factors, Accumulation};

/// Decimal digits of convergence contributed by each series term.
pub(crate) const DIGITS_PER_TERM: f64 = 14.181647462;

/// Linear coefficients of the series: term `k` enters the final denominator
/// as `13591409 + 545140134 k`.
const LINEAR_OFFSET: u64 = 13_591_409;
const LINEAR_SLOPE: u64 = 545_140_134;

/// Prefactor and radicand of the closed form `426880 * sqrt(10005) / S`.
const FRONT_FACTOR: u64 = 426_880;
const SQRT_RADICAND: u64 = 10_005;

/// Guard digits carried regardless of size.
const GUARD_BASE: u64 = 10;

/// Largest admissible digit count: keeps the power-of-ten exponent inside
/// `u32` with room for the guard band. Memory for counts anywhere near this
/// is the caller's problem long before the limit bites.
pub const MAX_DIGITS: u64 = u32::MAX as u64 - 64;

/// Series terms needed for `work_digits` of working precision.
///
/// Truncates toward zero after the `+ 1`; the extra term covers the
/// fractional remainder of the last ~14-digit step.
pub fn total_terms(work_digits: u64) -> usize {
    (work_digits as f64 / DIGITS_PER_TERM + 1.0) as usize
}

/// Working-precision plan for one computation.
///
/// Derived once from the requested digit count; every big integer in the
/// pass is carried at scale `10^(digits + guard)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrecisionPlan {
    /// Requested digits after the decimal point.
    pub digits: u64,
    /// Guard digits carried below the requested precision.
    pub guard: u64,
    /// Series terms planned at the working precision.
    pub total_terms: usize,
}

impl PrecisionPlan {
    /// Derives the working precision for `digits` requested digits.
    ///
    /// Each term contributes at most one unit of floor-division error to
    /// `b_sum`, scaled by its index, so the accumulated noise grows at worst
    /// with the square of the term count. Two guard digits per decimal order
    /// of the term count, on top of a fixed base, keep that noise strictly
    /// below the requested precision.
    pub fn for_digits(digits: u64) -> Result<Self, ChudnovskyError> {
        if digits > MAX_DIGITS {
            return Err(ChudnovskyError::DigitCountTooLarge {
                requested: digits,
                max: MAX_DIGITS,
            });
        }
        let guard = GUARD_BASE + 2 * decimal_len(total_terms(digits) as u64);
        Ok(Self {
            digits,
            guard,
            total_terms: total_terms(digits + guard),
        })
    }

    /// Total decimal scale the big integers are carried at.
    pub fn work_digits(&self) -> u64 {
        self.digits + self.guard
    }

    /// Runs the full pipeline under this plan.
    ///
    /// Builds the factor table, runs the accumulation pass (reporting each
    /// completed term to `progress`), combines the sums, drops the guard
    /// band, and formats the digit string.
    pub fn compute(&self, progress: &dyn ProgressSink) -> PiComputation {
        let one = pow10(self.work_digits() as u32);
        let factors = term_factors(self.total_terms);
        let accumulation = accumulate(&one, &factors, progress);
        let scaled = combine(&one, &accumulation);
        let truncated = scaled.div_floor(&pow10(self.guard as u32));
        PiComputation {
            formatted: format_pi(&truncated),
            terms_used: accumulation.terms_used,
        }
    }
}

/// Result of one run: the formatted digit string and the number of series
/// terms that actually contributed at the working scale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PiComputation {
    pub formatted: String,
    pub terms_used: usize,
}

/// Computes π to `digits` decimal places and returns the formatted string.
///
/// Convenience wrapper over [`PrecisionPlan`] with no progress reporting.
/// Running it twice with the same count yields byte-identical strings, and
/// a longer request extends a shorter one digit-for-digit.
///
/// # Examples
///
/// ```
/// let ten = chudnovsky::pi_digits(10)?;
/// assert_eq!(ten, "3.1415926535");
/// # Ok::<(), chudnovsky::ChudnovskyError>(())
/// ```
pub fn pi_digits(digits: u64) -> Result<String, ChudnovskyError> {
    let plan = PrecisionPlan::for_digits(digits)?;
    Ok(plan.compute(&NoProgress).formatted)
}

/// Combines the partial sums into π scaled by `one`.
///
/// Evaluates `426880 * sqrt(10005) / (13591409 a_sum + 545140134 b_sum)`
/// with the square root taken at the working scale and a single floor
/// division at the end. Both operands of that division are positive, so
/// floor and truncation coincide here.
fn combine(one: &BigInt, accumulation: &Accumulation) -> BigInt {
    let radicand = BigInt::from(SQRT_RADICAND) * one * one;
    let sqrt_radicand = Roots::sqrt(&radicand);
    let numerator = BigInt::from(FRONT_FACTOR) * sqrt_radicand * one;
    let denominator = BigInt::from(LINEAR_OFFSET) * &accumulation.a_sum
        + BigInt::from(LINEAR_SLOPE) * &accumulation.b_sum;
    numerator.div_floor(&denominator)
}

fn pow10(exponent: u32) -> BigInt {
    Pow::pow(&BigInt::from(10), exponent)
}

fn decimal_len(value: u64) -> u64 {
    u64::from(value.max(1).ilog10()) + 1
}
