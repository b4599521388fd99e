//! Core State trait and the quiz phase it describes.
//!
//! A quiz session never stores its phase. The phase is derived from the
//! session fields, and `Complete` wins over any feedback flags.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Example
///
/// ```rust
/// use quizflow::core::{QuizPhase, State};
///
/// assert_eq!(QuizPhase::InProgress.name(), "InProgress");
/// assert!(QuizPhase::Complete.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Position of a quiz session in its state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum QuizPhase {
    /// Waiting for an answer to the current question
    InProgress,
    /// An answer (or an externally supplied verdict) is being shown
    Feedback { correct: bool },
    /// The index has moved past the last question
    Complete,
}

impl QuizPhase {
    /// Derive the phase from raw session fields.
    ///
    /// A missing verdict while feedback shows is read as incorrect.
    pub fn derive(
        current_index: usize,
        question_count: usize,
        show_feedback: bool,
        last_correct: Option<bool>,
    ) -> Self {
        if current_index >= question_count {
            Self::Complete
        } else if show_feedback {
            Self::Feedback {
                correct: last_correct.unwrap_or(false),
            }
        } else {
            Self::InProgress
        }
    }

    pub fn is_answering(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl State for QuizPhase {
    fn name(&self) -> &str {
        match self {
            Self::InProgress => "InProgress",
            Self::Feedback { correct: true } => "Feedback(correct)",
            Self::Feedback { correct: false } => "Feedback(incorrect)",
            Self::Complete => "Complete",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(QuizPhase::InProgress.name(), "InProgress");
        assert_eq!(
            QuizPhase::Feedback { correct: true }.name(),
            "Feedback(correct)"
        );
        assert_eq!(
            QuizPhase::Feedback { correct: false }.name(),
            "Feedback(incorrect)"
        );
        assert_eq!(QuizPhase::Complete.name(), "Complete");
    }

    #[test]
    fn only_complete_is_final() {
        assert!(!QuizPhase::InProgress.is_final());
        assert!(!QuizPhase::Feedback { correct: true }.is_final());
        assert!(QuizPhase::Complete.is_final());
    }

    #[test]
    fn derive_prefers_complete_over_feedback() {
        assert_eq!(QuizPhase::derive(3, 3, true, Some(true)), QuizPhase::Complete);
        assert_eq!(QuizPhase::derive(4, 3, false, None), QuizPhase::Complete);
    }

    #[test]
    fn derive_reads_verdict_only_while_feedback_shows() {
        assert_eq!(
            QuizPhase::derive(0, 2, true, Some(true)),
            QuizPhase::Feedback { correct: true }
        );
        assert_eq!(
            QuizPhase::derive(0, 2, true, None),
            QuizPhase::Feedback { correct: false }
        );
        assert_eq!(QuizPhase::derive(0, 2, false, Some(true)), QuizPhase::InProgress);
    }

    #[test]
    fn empty_quiz_is_complete_immediately() {
        assert_eq!(QuizPhase::derive(0, 0, false, None), QuizPhase::Complete);
    }

    #[test]
    fn phase_serializes_correctly() {
        let phase = QuizPhase::Feedback { correct: true };
        let json = serde_json::to_string(&phase).unwrap();
        let deserialized: QuizPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, deserialized);
    }
}
