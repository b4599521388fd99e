//! Integrity violations in a question bank.

use thiserror::Error;

/// A single broken rule in a quiz definition
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Question at position {index} has an empty id")]
    EmptyQuestionId { index: usize },

    #[error("Question id '{id}' is used more than once")]
    DuplicateQuestionId { id: String },

    #[error("Question '{question}' has no options")]
    NoOptions { question: String },

    #[error("Question '{question}' has {found} correct options, expected exactly one")]
    CorrectOptionCount { question: String, found: usize },

    #[error("Question '{question}' has no draggable items")]
    NoItems { question: String },

    #[error("Question '{question}' reuses id '{id}'")]
    DuplicateChoiceId { question: String, id: String },

    #[error("Item '{item}' in question '{question}' matches unknown target '{target}'")]
    UnknownTarget {
        question: String,
        item: String,
        target: String,
    },
}
