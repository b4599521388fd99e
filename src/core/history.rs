//! Phase transition history for a quiz session.
//!
//! History is immutable: recording a transition returns a new history.

use super::state::QuizPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase before the action
    pub from: QuizPhase,
    /// Phase after the action
    pub to: QuizPhase,
    /// Name of the action that caused the move
    pub action: String,
    /// Question index at the time the action was applied
    pub question_index: usize,
    /// Answer submissions on that question so far, including this one
    pub attempt: usize,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied actions.
///
/// # Example
///
/// ```rust
/// use quizflow::core::{PhaseTransition, QuizPhase, SessionHistory};
/// use chrono::Utc;
///
/// let history = SessionHistory::new().record(PhaseTransition {
///     from: QuizPhase::InProgress,
///     to: QuizPhase::Feedback { correct: true },
///     action: "AnswerQuestion".to_string(),
///     question_index: 0,
///     attempt: 1,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    transitions: Vec<PhaseTransition>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&QuizPhase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Highest attempt number recorded for a question, or 0 if it was never answered.
    pub fn attempts_for(&self, question_index: usize) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.question_index == question_index)
            .map(|t| t.attempt)
            .max()
            .unwrap_or(0)
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
