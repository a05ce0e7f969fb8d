//! Error types for the pipeline boundary.
//!
//! The computation itself is a single deterministic pass over exact integer
//! arithmetic and cannot fail once a plan has been admitted; everything that
//! can go wrong happens at the edges, before the pass starts (an infeasible
//! digit count) or after it ends (the file write).

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures surfaced by precision planning and the single output path.
#[derive(Debug)]
pub enum ChudnovskyError {
    /// The requested digit count exceeds the supported working range.
    DigitCountTooLarge { requested: u64, max: u64 },
    /// The output file could not be written. Fatal, not retried.
    WriteFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for ChudnovskyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigitCountTooLarge { requested, max } => {
                write!(
                    f,
                    "requested digit count {requested} exceeds the supported maximum {max}"
                )
            }
            Self::WriteFailed { path, source } => {
                write!(f, "failed to write digits to {}: {source}", path.display())
            }
        }
    }
}

impl Error for ChudnovskyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DigitCountTooLarge { .. } => None,
            Self::WriteFailed { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn digit_count_display_names_both_limits() {
        let err = ChudnovskyError::DigitCountTooLarge {
            requested: 10,
            max: 5,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("10"), "missing requested count: {rendered}");
        assert!(rendered.contains('5'), "missing maximum: {rendered}");
    }

    #[test]
    fn write_failure_display_names_the_path() {
        let err = ChudnovskyError::WriteFailed {
            path: PathBuf::from("/nowhere/pi.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("/nowhere/pi.txt"), "missing path: {rendered}");
    }

    #[test]
    fn write_failure_exposes_the_io_source() {
        let err = ChudnovskyError::WriteFailed {
            path: PathBuf::from("pi.txt"),
            source: io::Error::other("disk gone"),
        };
        assert!(err.source().is_some());
    }
}
