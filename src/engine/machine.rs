//! Engine that owns one quiz session.

use super::quiz::Quiz;
use super::session::QuizState;
use super::transition::{reduce, QuizAction, StepResult};
use crate::core::{PhaseTransition, QuizPhase, SessionHistory, State};
use crate::question::{Answer, Question};
use chrono::Utc;
use tracing::{debug, warn};

/// Drives a single quiz session.
///
/// The engine is the only owner of the session state. Presentation code
/// reads through the accessors and changes things only via [`dispatch`].
///
/// [`dispatch`]: QuizEngine::dispatch
#[derive(Clone, Debug)]
pub struct QuizEngine {
    quiz: Quiz,
    state: QuizState,
    history: SessionHistory,
    attempts: usize,
}

impl QuizEngine {
    /// Start a session at the first question.
    pub fn new(quiz: Quiz) -> Self {
        let state = QuizState::initial(&quiz);
        Self {
            quiz,
            state,
            history: SessionHistory::new(),
            attempts: 0,
        }
    }

    /// Apply one action. Rejected actions leave the engine untouched.
    pub fn dispatch(&mut self, action: QuizAction) -> StepResult {
        let from = self.state.phase();
        let question_index = self.state.current_index();
        let (next, result) = reduce(&self.quiz, &self.state, &action);

        if let StepResult::Ignored(rejection) = &result {
            warn!(
                action = action.name(),
                phase = from.name(),
                %rejection,
                "Quiz action ignored"
            );
            return result;
        }

        match &action {
            QuizAction::ResetQuiz => {
                debug!(from = from.name(), "Quiz reset");
                self.state = next;
                self.history = SessionHistory::new();
                self.attempts = 0;
                return result;
            }
            QuizAction::AnswerQuestion { question_id, .. } => {
                self.attempts += 1;
                if let StepResult::Evaluated { correct, awarded } = &result {
                    debug!(
                        question_id = question_id.as_str(),
                        correct,
                        awarded,
                        attempt = self.attempts,
                        "Answer evaluated"
                    );
                }
            }
            _ => {}
        }

        let to = next.phase();
        self.history = self.history.record(PhaseTransition {
            from,
            to,
            action: action.name().to_string(),
            question_index,
            attempt: self.attempts,
            timestamp: Utc::now(),
        });
        debug!(
            action = action.name(),
            from = from.name(),
            to = to.name(),
            total_points = next.total_points(),
            "Quiz transitioned"
        );

        if matches!(action, QuizAction::NextQuestion) {
            self.attempts = 0;
        }
        self.state = next;
        result
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn phase(&self) -> QuizPhase {
        self.state.phase()
    }

    /// The question being asked, or `None` once the quiz is complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.question(self.state.current_index())
    }

    /// 1-based position of the current question, for headers.
    pub fn question_number(&self) -> Option<usize> {
        self.current_question()
            .map(|_| self.state.current_index() + 1)
    }

    pub fn total_points(&self) -> u32 {
        self.state.total_points()
    }

    pub fn goal_points(&self) -> u32 {
        self.state.goal_points()
    }

    pub fn show_feedback(&self) -> bool {
        self.state.show_feedback()
    }

    pub fn last_correct(&self) -> Option<bool> {
        self.state.last_correct()
    }

    pub fn can_continue(&self) -> bool {
        self.state.can_continue()
    }

    pub fn is_last_question(&self) -> bool {
        self.state.is_last_question()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn is_passed(&self) -> bool {
        self.state.is_passed()
    }

    /// Message for the verdict currently on screen.
    pub fn feedback_message(&self) -> Option<&str> {
        if !self.state.show_feedback() {
            return None;
        }
        let correct = self.state.last_correct().unwrap_or(false);
        self.current_question()
            .map(|question| question.feedback.message(correct))
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.state.answer_for(question_id)
    }

    /// Answer submissions on the current question.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }
}
