//! Builder for constructing questions.

use crate::builder::error::BuildError;
use crate::question::{ChoiceOption, DragItem, DropTarget, Feedback, Question, QuestionKind};

/// Builder for constructing questions with a fluent API.
///
/// Pick the kind up front with [`QuestionBuilder::multiple_choice`] or
/// [`QuestionBuilder::drag_and_drop`]. Calls that do not apply to the chosen
/// kind (`option` on drag-and-drop, `item`/`target` on multiple choice) are
/// ignored.
pub struct QuestionBuilder {
    id: String,
    text: Option<String>,
    points: u32,
    feedback: Feedback,
    kind: QuestionKind,
}

impl QuestionBuilder {
    fn with_kind(id: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            text: None,
            points: 0,
            feedback: Feedback::new("Correct!", "Think again!"),
            kind,
        }
    }

    pub fn multiple_choice(id: impl Into<String>) -> Self {
        Self::with_kind(id, QuestionKind::MultipleChoice { options: Vec::new() })
    }

    pub fn drag_and_drop(id: impl Into<String>) -> Self {
        Self::with_kind(
            id,
            QuestionKind::DragAndDrop {
                items: Vec::new(),
                definitions: Vec::new(),
            },
        )
    }

    /// Set the question text (required).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Points awarded for a correct answer. Defaults to 0.
    pub fn points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Messages shown after evaluation.
    pub fn feedback(mut self, correct: impl Into<String>, incorrect: impl Into<String>) -> Self {
        self.feedback = Feedback::new(correct, incorrect);
        self
    }

    /// Add a multiple-choice option.
    pub fn option(mut self, id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        if let QuestionKind::MultipleChoice { options } = &mut self.kind {
            options.push(ChoiceOption {
                id: id.into(),
                text: text.into(),
                is_correct,
            });
        }
        self
    }

    /// Add a draggable item that belongs on `matches_to`.
    pub fn item(
        mut self,
        id: impl Into<String>,
        text: impl Into<String>,
        matches_to: impl Into<String>,
    ) -> Self {
        if let QuestionKind::DragAndDrop { items, .. } = &mut self.kind {
            items.push(DragItem {
                id: id.into(),
                text: text.into(),
                matches_to: matches_to.into(),
            });
        }
        self
    }

    /// Add a drop target.
    pub fn target(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        if let QuestionKind::DragAndDrop { definitions, .. } = &mut self.kind {
            definitions.push(DropTarget {
                id: id.into(),
                text: text.into(),
            });
        }
        self
    }

    /// Build the question.
    ///
    /// Only structural presence is checked here; cross-references are
    /// checked by [`crate::validation::validate_question`].
    pub fn build(self) -> Result<Question, BuildError> {
        let text = self.text.ok_or_else(|| BuildError::MissingText(self.id.clone()))?;

        match &self.kind {
            QuestionKind::MultipleChoice { options } if options.is_empty() => {
                return Err(BuildError::NoChoices(self.id));
            }
            QuestionKind::DragAndDrop { items, .. } if items.is_empty() => {
                return Err(BuildError::NoItems(self.id));
            }
            _ => {}
        }

        Ok(Question {
            id: self.id,
            text,
            points: self.points,
            feedback: self.feedback,
            kind: self.kind,
        })
    }
}
