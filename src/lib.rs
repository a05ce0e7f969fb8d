//! Digits of π from the Chudnovsky series over exact big-integer arithmetic.
//!
//! The computation is one linear pipeline: derive a working precision and a
//! term count from the requested digit count, run the series' forward pass
//! as fixed-point integer arithmetic, then assemble the digit string with
//! one integer square root and one division.
//!
//! ## Key Design Decisions
//!
//! 1. **Fixed-point decimal scale**: every intermediate value is an integer
//!    at scale `10^(digits + guard)`; no floating point touches the digit
//!    stream.
//! 2. **Floor division throughout the pass**: the running term alternates in
//!    sign, and floor division (not truncation toward zero) is what keeps
//!    the partial sums consistent from one scale to the next.
//! 3. **Guard digits**: the working precision exceeds the request by a band
//!    sized to the term count, so truncation noise in the accumulators never
//!    reaches the reported digits and the output equals the true expansion
//!    truncated at the requested length.
//! 4. **Pluggable progress**: the per-term observer is an injection seam for
//!    a terminal display; the mathematical pass has no other side channel.

#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

mod chudnovsky;
mod digits;
mod error;
mod progress;
mod series;

pub use chudnovsky::{pi_digits, total_terms, PiComputation, PrecisionPlan, MAX_DIGITS};
pub use digits::{format_pi, write_digits};
pub use error::ChudnovskyError;
pub use progress::{NoProgress, ProgressSink};
pub use series::{accumulate, term_factors, Accumulation, TermFactor};
