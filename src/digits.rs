//! Decimal rendering of the scaled result and the single file-output path.

use std::fs;
use std::path::Path;

use num_bigint::BigInt;

use crate::error::ChudnovskyError;

/// Renders a scaled π value (π times a power of ten) as `"3." + fraction`.
///
/// The integer's decimal expansion already begins with the leading 3; the
/// point is inserted after it. A representation of length ≤ 1 carries no
/// fractional digits at all (a zero-digit request) and falls back to the
/// literal `"3.14"`.
pub fn format_pi(pi_scaled: &BigInt) -> String {
    let digits = pi_scaled.to_string();
    if digits.len() <= 1 {
        return String::from("3.14");
    }
    let mut formatted = String::with_capacity(digits.len() + 1);
    formatted.push_str("3.");
    formatted.push_str(&digits[1..]);
    formatted
}

/// Writes the formatted digits to `path`, replacing any existing file.
///
/// No trailing newline is added. A failure is surfaced with the destination
/// path attached; there is no retry and no partial-write cleanup.
pub fn write_digits(path: &Path, formatted: &str) -> Result<(), ChudnovskyError> {
    fs::write(path, formatted).map_err(|source| ChudnovskyError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
