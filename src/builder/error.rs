//! Build errors for quiz and question builders.

use crate::validation::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building quizzes and questions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Goal not specified. Call .goal(points) before .build()")]
    MissingGoal,

    #[error("No questions defined. Add at least one question")]
    NoQuestions,

    #[error("Question '{0}' has no text. Call .text(..)")]
    MissingText(String),

    #[error("Question '{0}' has no choices. Call .option(..) at least once")]
    NoChoices(String),

    #[error("Question '{0}' has no items. Call .item(..) at least once")]
    NoItems(String),

    #[error("Quiz definition has {} problem(s): {}", .0.len(), summarize(.0))]
    InvalidQuiz(Vec<DefinitionError>),
}

fn summarize(errors: &[DefinitionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
