//! Progress of one quiz session.

use super::quiz::Quiz;
use crate::core::QuizPhase;
use crate::question::Answer;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of a session's progress.
///
/// Only the reducer produces new snapshots; everything outside the crate
/// reads them through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizState {
    pub(crate) current_index: usize,
    pub(crate) question_count: usize,
    pub(crate) total_points: u32,
    pub(crate) goal_points: u32,
    pub(crate) answers: BTreeMap<String, Answer>,
    pub(crate) show_feedback: bool,
    pub(crate) last_correct: Option<bool>,
    pub(crate) can_continue: bool,
}

impl QuizState {
    /// Fresh state at the first question of `quiz`.
    pub fn initial(quiz: &Quiz) -> Self {
        Self {
            current_index: 0,
            question_count: quiz.len(),
            total_points: 0,
            goal_points: quiz.goal_points(),
            answers: BTreeMap::new(),
            show_feedback: false,
            last_correct: None,
            can_continue: false,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        QuizPhase::derive(
            self.current_index,
            self.question_count,
            self.show_feedback,
            self.last_correct,
        )
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn goal_points(&self) -> u32 {
        self.goal_points
    }

    /// Every answer recorded this session, keyed by question id.
    pub fn answers(&self) -> &BTreeMap<String, Answer> {
        &self.answers
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn show_feedback(&self) -> bool {
        self.show_feedback
    }

    /// `None` until an answer is evaluated, then the verdict while feedback shows.
    pub fn last_correct(&self) -> Option<bool> {
        self.last_correct
    }

    pub fn can_continue(&self) -> bool {
        self.can_continue
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.question_count
    }

    pub fn is_last_question(&self) -> bool {
        self.question_count.checked_sub(1) == Some(self.current_index)
    }

    /// Pass/fail is a read over the totals, never stored.
    pub fn is_passed(&self) -> bool {
        self.total_points >= self.goal_points
    }

    /// Drop feedback and the continue flag, keeping index and answers.
    pub(crate) fn clear_feedback(&mut self) {
        self.show_feedback = false;
        self.last_correct = None;
        self.can_continue = false;
    }

    pub(crate) fn set_feedback(&mut self, correct: bool) {
        self.show_feedback = true;
        self.last_correct = Some(correct);
        self.can_continue = correct;
    }
}
