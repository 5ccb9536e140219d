use super::*;

#[test]
fn batch_summary_counts_students_and_active() {
    assert_eq!(batch_summary(&BATCHES), (3, 439, 1));
    assert_eq!(batch_summary(&[]), (0, 0, 0));
}

#[test]
fn coming_soon_batches_cannot_enroll() {
    assert_eq!(BatchStatus::ComingSoon.action(), ("Notify Me", false));
    assert_eq!(BatchStatus::Enrolling.action(), ("Enroll Now", true));
    assert_eq!(BatchStatus::ComingSoon.label(), "Coming Soon");
}
