//! The fixed question list a session runs over.

use crate::question::Question;
use serde::{Deserialize, Serialize};

/// Immutable ordered questions plus the pass threshold.
///
/// Build one with [`crate::builder::QuizBuilder`] to have it validated, or
/// with [`Quiz::new`] to take it as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    questions: Vec<Question>,
    goal_points: u32,
}

impl Quiz {
    pub fn new(questions: Vec<Question>, goal_points: u32) -> Self {
        Self {
            questions,
            goal_points,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn goal_points(&self) -> u32 {
        self.goal_points
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Points available if every question is answered correctly.
    pub fn max_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |sum, q| sum.saturating_add(q.points))
    }
}
