//! Work-in-progress drag-and-drop placements.

use super::{Answer, Question, QuestionKind};
use std::collections::BTreeMap;

/// Placements made on a drag-and-drop board before they are submitted.
///
/// Each item sits on at most one target. Placing an item again moves it.
///
/// ```rust
/// use quizflow::question::{Answer, MatchDraft};
///
/// let mut draft = MatchDraft::new();
/// draft.place("variable", "def1");
/// draft.place("variable", "def2");
///
/// assert_eq!(draft.target_of("variable"), Some("def2"));
/// assert_eq!(draft.into_answer(), Answer::matching([("variable", "def2")]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchDraft {
    placements: BTreeMap<String, String>,
}

impl MatchDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `item_id` on `target_id`, returning the target it was on before.
    pub fn place(&mut self, item_id: impl Into<String>, target_id: impl Into<String>) -> Option<String> {
        self.placements.insert(item_id.into(), target_id.into())
    }

    pub fn remove(&mut self, item_id: &str) -> Option<String> {
        self.placements.remove(item_id)
    }

    pub fn target_of(&self, item_id: &str) -> Option<&str> {
        self.placements.get(item_id).map(String::as_str)
    }

    /// The first item placed on `target_id`, if any.
    pub fn item_at(&self, target_id: &str) -> Option<&str> {
        self.placements
            .iter()
            .find(|(_, target)| target.as_str() == target_id)
            .map(|(item, _)| item.as_str())
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// True once every item of a drag-and-drop question has a placement.
    ///
    /// Always false for other question kinds.
    pub fn is_complete(&self, question: &Question) -> bool {
        match &question.kind {
            QuestionKind::DragAndDrop { items, .. } => items
                .iter()
                .all(|item| self.placements.contains_key(&item.id)),
            QuestionKind::MultipleChoice { .. } | QuestionKind::Unsupported => false,
        }
    }

    pub fn clear(&mut self) {
        self.placements.clear();
    }

    pub fn into_answer(self) -> Answer {
        Answer::Matching(self.placements)
    }
}
