//! End-to-end checks of the public pipeline surface.

use chudnovsky::{pi_digits, write_digits, NoProgress, PrecisionPlan};

#[test]
fn five_digit_run_round_trips_through_the_output_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pi.txt");

    let plan = PrecisionPlan::for_digits(5).expect("plan");
    let computation = plan.compute(&NoProgress);
    assert_eq!(computation.formatted, "3.14159");

    write_digits(&path, &computation.formatted).expect("write");
    let on_disk = std::fs::read_to_string(&path).expect("read");
    assert_eq!(on_disk, computation.formatted);
}

#[test]
fn output_file_has_no_trailing_newline() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pi.txt");

    let formatted = pi_digits(5).expect("compute");
    write_digits(&path, &formatted).expect("write");

    let bytes = std::fs::read(&path).expect("read");
    assert_eq!(bytes.len(), 7);
    assert_ne!(bytes.last(), Some(&b'\n'));
}

#[test]
fn plan_exposes_enough_to_size_a_progress_display() {
    // A display sized to the plan's term count can only ever be under-run,
    // never over-run: terms_used counts the nonzero terms.
    let plan = PrecisionPlan::for_digits(1000).expect("plan");
    let computation = plan.compute(&NoProgress);
    assert!(computation.terms_used <= plan.total_terms);
    assert!(plan.work_digits() > 1000);
}
