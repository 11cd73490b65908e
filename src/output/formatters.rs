//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as bull and cow markers, exact first
///
/// `●` marks an exact digit, `○` a misplaced one and `·` a miss.
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback) -> String {
    let exact = usize::from(feedback.exact());
    let misplaced = usize::from(feedback.misplaced());
    let misses = 4usize.saturating_sub(exact + misplaced);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(misplaced), "·".repeat(misses))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the code space has been ruled out
#[must_use]
pub fn elimination_bar(remaining: usize, total: usize, width: usize) -> String {
    let eliminated = total.saturating_sub(remaining);
    create_progress_bar(eliminated as f64, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_no_match() {
        let feedback = Feedback::new(0, 0).unwrap();
        assert_eq!(feedback_to_pegs(feedback), "····");
    }

    #[test]
    fn pegs_mixed() {
        let feedback = Feedback::new(1, 2).unwrap();
        assert_eq!(feedback_to_pegs(feedback), "●○○·");
    }

    #[test]
    fn pegs_perfect() {
        assert_eq!(feedback_to_pegs(Feedback::PERFECT), "●●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn elimination_bar_tracks_remaining() {
        assert_eq!(elimination_bar(10_000, 10_000, 4), "░░░░");
        assert_eq!(elimination_bar(1, 10_000, 4), "███░");
        assert_eq!(elimination_bar(0, 10_000, 4), "████");
    }
}
