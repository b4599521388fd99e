//! Question data model and answer evaluation.
//!
//! Questions are a closed sum type. The serialized form carries a `type`
//! tag (`multiple-choice` or `drag-and-drop`); any other tag is read as
//! [`QuestionKind::Unsupported`] so an unknown question never breaks loading
//! and always evaluates as incorrect.

mod draft;
mod evaluate;

pub use draft::MatchDraft;
pub use evaluate::evaluate;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Messages shown after an answer is evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: String,
    pub incorrect: String,
}

impl Feedback {
    pub fn new(correct: impl Into<String>, incorrect: impl Into<String>) -> Self {
        Self {
            correct: correct.into(),
            incorrect: incorrect.into(),
        }
    }

    /// Pick the message for a verdict.
    pub fn message(&self, correct: bool) -> &str {
        if correct {
            &self.correct
        } else {
            &self.incorrect
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

/// A draggable term and the id of the target it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragItem {
    pub id: String,
    pub text: String,
    pub matches_to: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub id: String,
    pub text: String,
}

/// Variant-specific part of a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<ChoiceOption>,
    },
    DragAndDrop {
        items: Vec<DragItem>,
        definitions: Vec<DropTarget>,
    },
    /// A question type this crate does not know how to evaluate.
    #[serde(other)]
    Unsupported,
}

impl QuestionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MultipleChoice { .. } => "multiple-choice",
            Self::DragAndDrop { .. } => "drag-and-drop",
            Self::Unsupported => "unsupported",
        }
    }
}

/// A single quiz question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub points: u32,
    pub feedback: Feedback,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn multiple_choice(
        id: impl Into<String>,
        text: impl Into<String>,
        points: u32,
        options: Vec<ChoiceOption>,
        feedback: Feedback,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            points,
            feedback,
            kind: QuestionKind::MultipleChoice { options },
        }
    }

    pub fn drag_and_drop(
        id: impl Into<String>,
        text: impl Into<String>,
        points: u32,
        items: Vec<DragItem>,
        definitions: Vec<DropTarget>,
        feedback: Feedback,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            points,
            feedback,
            kind: QuestionKind::DragAndDrop { items, definitions },
        }
    }

    /// Check an answer against this question. See [`evaluate`].
    pub fn is_correct(&self, answer: &Answer) -> bool {
        evaluate(self, answer)
    }

    /// The answer that evaluates as correct, if the question has one.
    pub fn solution(&self) -> Option<Answer> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => options
                .iter()
                .find(|o| o.is_correct)
                .map(|o| Answer::Choice(o.id.clone())),
            QuestionKind::DragAndDrop { items, .. } => Some(Answer::Matching(
                items
                    .iter()
                    .map(|item| (item.id.clone(), item.matches_to.clone()))
                    .collect(),
            )),
            QuestionKind::Unsupported => None,
        }
    }
}

/// A submitted answer.
///
/// Serialized untagged: a bare string for a choice, an object for a matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Id of the selected option
    Choice(String),
    /// Item id -> target id
    Matching(BTreeMap<String, String>),
}

impl Answer {
    pub fn choice(option_id: impl Into<String>) -> Self {
        Self::Choice(option_id.into())
    }

    /// Build a matching from `(item_id, target_id)` pairs. Later pairs win.
    pub fn matching<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Matching(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
