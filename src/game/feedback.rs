//! Win feedback labels, one per attempt count

use crate::core::MAX_ATTEMPTS;

const LABELS: [&str; MAX_ATTEMPTS as usize] = [
    "Genius!",
    "Magnificent!",
    "Impressive!",
    "Splendid!",
    "Great!",
    "Phew!",
];

/// Label for a win on `attempt` (1-based)
///
/// Returns `None` outside 1..=6.
#[must_use]
pub fn feedback_label(attempt: u8) -> Option<&'static str> {
    let index = usize::from(attempt).checked_sub(1)?;
    LABELS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fastest_and_slowest_wins() {
        assert_eq!(feedback_label(1), Some("Genius!"));
        assert_eq!(feedback_label(6), Some("Phew!"));
    }

    #[test]
    fn every_attempt_has_a_distinct_label() {
        let labels: Vec<_> = (1..=MAX_ATTEMPTS).filter_map(feedback_label).collect();
        assert_eq!(labels.len(), 6);
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn out_of_range_has_no_label() {
        assert_eq!(feedback_label(0), None);
        assert_eq!(feedback_label(7), None);
    }
}
