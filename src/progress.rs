//! Pluggable per-term progress reporting.
//!
//! Progress is a cosmetic side channel: the accumulation loop notifies the
//! sink once per completed nonzero term, and nothing about the mathematical
//! result depends on whether anyone is listening. The trait is the seam where
//! a terminal progress bar (or a test counter) plugs in.

/// Observer invoked once per completed series term.
pub trait ProgressSink {
    fn term_completed(&self);
}

/// Sink that ignores all notifications; used where no display is attached.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn term_completed(&self) {}
}
