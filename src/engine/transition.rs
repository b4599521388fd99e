//! Actions and the pure transition function.

use super::quiz::Quiz;
use super::session::QuizState;
use crate::core::{Guard, QuizPhase, State};
use crate::question::{evaluate, Answer};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer can ask of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizAction {
    /// Submit an answer for the current question
    AnswerQuestion { question_id: String, answer: Answer },
    /// Move past a correctly answered question
    NextQuestion,
    /// Dismiss incorrect feedback and try the same question again
    HideFeedback,
    /// Show a verdict decided by the caller; awards no points
    ShowFeedback { correct: bool },
    /// Start over from the first question
    ResetQuiz,
}

impl QuizAction {
    pub fn answer(question_id: impl Into<String>, answer: Answer) -> Self {
        Self::AnswerQuestion {
            question_id: question_id.into(),
            answer,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AnswerQuestion { .. } => "AnswerQuestion",
            Self::NextQuestion => "NextQuestion",
            Self::HideFeedback => "HideFeedback",
            Self::ShowFeedback { .. } => "ShowFeedback",
            Self::ResetQuiz => "ResetQuiz",
        }
    }

    /// Precondition on the current snapshot.
    pub fn guard(&self) -> Guard<QuizState> {
        match self {
            Self::AnswerQuestion { .. } | Self::ShowFeedback { .. } => {
                Guard::new(|s: &QuizState| s.phase().is_answering())
            }
            Self::NextQuestion => Guard::new(|s: &QuizState| s.can_continue()),
            Self::HideFeedback => {
                Guard::new(|s: &QuizState| s.phase() == QuizPhase::Feedback { correct: false })
            }
            Self::ResetQuiz => Guard::always(),
        }
    }
}

/// Why an action left the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{action} is not allowed while {phase}")]
    GuardBlocked { action: &'static str, phase: String },

    #[error("answer for '{found}' does not match the current question '{expected}'")]
    StaleQuestion { expected: String, found: String },

    #[error("{action} ignored, the quiz is complete")]
    QuizComplete { action: &'static str },
}

/// Outcome of reducing one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// An answer was evaluated; `awarded` is 0 unless it was correct
    Evaluated { correct: bool, awarded: u32 },

    /// The action moved the session to a new phase
    Transitioned(QuizPhase),

    /// The action was not applicable; the state is unchanged
    Ignored(Rejection),
}

impl StepResult {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Compute the next state for `action`.
///
/// Pure and total: rejected actions return a clone of `state` together
/// with [`StepResult::Ignored`].
///
/// # Example
///
/// ```rust
/// use quizflow::engine::{reduce, Quiz, QuizAction, QuizState, StepResult};
/// use quizflow::question::{Answer, ChoiceOption, Feedback, Question};
///
/// let quiz = Quiz::new(
///     vec![Question::multiple_choice(
///         "q1",
///         "2 + 2?",
///         10,
///         vec![ChoiceOption { id: "a".into(), text: "4".into(), is_correct: true }],
///         Feedback::new("Yes", "No"),
///     )],
///     10,
/// );
/// let state = QuizState::initial(&quiz);
///
/// let (state, result) = reduce(&quiz, &state, &QuizAction::answer("q1", Answer::choice("a")));
/// assert_eq!(result, StepResult::Evaluated { correct: true, awarded: 10 });
///
/// let (state, _) = reduce(&quiz, &state, &QuizAction::NextQuestion);
/// assert!(state.is_complete());
/// assert!(state.is_passed());
/// ```
pub fn reduce(quiz: &Quiz, state: &QuizState, action: &QuizAction) -> (QuizState, StepResult) {
    if let Err(rejection) = admit(quiz, state, action) {
        return (state.clone(), StepResult::Ignored(rejection));
    }

    let mut next = state.clone();
    let result = match action {
        QuizAction::AnswerQuestion {
            question_id,
            answer,
        } => {
            // admit() guarantees a current question
            let Some(question) = quiz.question(state.current_index) else {
                return (state.clone(), quiz_complete(action));
            };
            let correct = evaluate(question, answer);
            let awarded = if correct { question.points } else { 0 };

            next.answers.insert(question_id.clone(), answer.clone());
            next.total_points = next.total_points.saturating_add(awarded);
            next.set_feedback(correct);

            StepResult::Evaluated { correct, awarded }
        }
        QuizAction::NextQuestion => {
            next.current_index += 1;
            next.clear_feedback();
            StepResult::Transitioned(next.phase())
        }
        QuizAction::HideFeedback => {
            next.clear_feedback();
            StepResult::Transitioned(next.phase())
        }
        QuizAction::ShowFeedback { correct } => {
            next.set_feedback(*correct);
            StepResult::Transitioned(next.phase())
        }
        QuizAction::ResetQuiz => {
            next = QuizState::initial(quiz);
            StepResult::Transitioned(next.phase())
        }
    };

    (next, result)
}

fn admit(quiz: &Quiz, state: &QuizState, action: &QuizAction) -> Result<(), Rejection> {
    let phase = state.phase();

    if phase.is_final() && !matches!(action, QuizAction::ResetQuiz) {
        return Err(Rejection::QuizComplete {
            action: action.name(),
        });
    }

    if !action.guard().check(state) {
        return Err(Rejection::GuardBlocked {
            action: action.name(),
            phase: phase.name().to_string(),
        });
    }

    if let QuizAction::AnswerQuestion { question_id, .. } = action {
        let expected = quiz
            .question(state.current_index)
            .map(|q| q.id.as_str())
            .unwrap_or_default();
        if expected != question_id {
            return Err(Rejection::StaleQuestion {
                expected: expected.to_string(),
                found: question_id.clone(),
            });
        }
    }

    Ok(())
}

fn quiz_complete(action: &QuizAction) -> StepResult {
    StepResult::Ignored(Rejection::QuizComplete {
        action: action.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{ChoiceOption, Feedback, Question};

    fn option(id: &str, is_correct: bool) -> ChoiceOption {
        ChoiceOption {
            id: id.into(),
            text: id.into(),
            is_correct,
        }
    }

    fn two_question_quiz() -> Quiz {
        Quiz::new(
            vec![
                Question::multiple_choice(
                    "q1",
                    "First",
                    10,
                    vec![option("a", false), option("b", true)],
                    Feedback::new("yes", "no"),
                ),
                Question::multiple_choice(
                    "q2",
                    "Second",
                    5,
                    vec![option("a", true), option("b", false)],
                    Feedback::new("yes", "no"),
                ),
            ],
            15,
        )
    }

    fn step(quiz: &Quiz, state: &QuizState, action: QuizAction) -> (QuizState, StepResult) {
        reduce(quiz, state, &action)
    }

    #[test]
    fn correct_answer_awards_points_and_enables_continue() {
        let quiz = two_question_quiz();
        let state = QuizState::initial(&quiz);

        let (state, result) = step(&quiz, &state, QuizAction::answer("q1", Answer::choice("b")));

        assert_eq!(
            result,
            StepResult::Evaluated {
                correct: true,
                awarded: 10
            }
        );
        assert_eq!(state.total_points(), 10);
        assert_eq!(state.phase(), QuizPhase::Feedback { correct: true });
        assert!(state.can_continue());
        assert_eq!(state.answer_for("q1"), Some(&Answer::choice("b")));
    }

    #[test]
    fn incorrect_answer_records_but_awards_nothing() {
        let quiz = two_question_quiz();
        let state = QuizState::initial(&quiz);

        let (state, result) = step(&quiz, &state, QuizAction::answer("q1", Answer::choice("a")));

        assert_eq!(
            result,
            StepResult::Evaluated {
                correct: false,
                awarded: 0
            }
        );
        assert_eq!(state.total_points(), 0);
        assert_eq!(state.phase(), QuizPhase::Feedback { correct: false });
        assert!(!state.can_continue());
        assert_eq!(state.answer_for("q1"), Some(&Answer::choice("a")));
    }

    #[test]
    fn second_answer_while_correct_is_locked() {
        let quiz = two_question_quiz();
        let state = QuizState::initial(&quiz);
        let (state, _) = step(&quiz, &state, QuizAction::answer("q1", Answer::choice("b")));

        let (after, result) = step(&quiz, &state, QuizAction::answer("q1", Answer::choice("b")));

        assert!(result.is_ignored());
        assert_eq!(after, state);
    }

    #[test]
    fn next_question_without_continue_is_ignored() {
        let quiz = two_question_quiz();
        let state = QuizState::initial(&quiz);

        let (after, result) = step(&quiz, &state, QuizAction::NextQuestion);
        assert!(matches!(
            result,
            StepResult::Ignored(Rejection::GuardBlocked {
                action: "NextQuestion",
                ..
            })
        ));
        assert_eq!(after.current_index(), 0);

        let (state, _) = step(&quiz, &state, QuizAction::answer("q1", Answer::choice("a")));
        let (after, result) = step(&quiz, &state, QuizAction::NextQuestion);
        assert!(result.is_ignored());
        assert_eq!(after, state);
    }

    #[test]
    fn hide_feedback_allows_retry_without_losing_answer() {
        let quiz = two_question_quiz();
        let state = QuizState::initial(&quiz);
        let (state, _) = step(&quiz, &state, QuizAction::answer("q1", Answer::choice("a")));

        let (state, result) = step(&quiz, &state, QuizAction::HideFeedback);

        assert_eq!(result, StepResult::Transitioned(QuizPhase::InProgress));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.last_correct(), None);
        assert_eq!(state.answer_for("q1"), Some(&Answer::choice("a")));

        let (state, _) = step(&quiz, &state, QuizAction::answer("q1", Answer::choice("b")));
        assert_eq!(state.total_points(), 10);
        assert_eq!(state.answer_for("q1"), Some(&Answer::choice("b")));
    }

    #[test]
    fn hide_feedback_is_ignored_after_correct_answer() {
        let quiz = two_question_quiz();
        let state = QuizState::initial(&quiz);
        let (state, _) = step(&quiz, &state, QuizAction::answer("q1", Answer::choice("b")));

        let (after, result) = step(&quiz, &state, QuizAction::HideFeedback);

        assert!(result.is_ignored());
        assert_eq!(after, state);
    }

    #[test]
    fn stale_question_id_is_ignored() {
        let quiz = two_question_quiz();
        let state = QuizState::initial(&quiz);

        let (after, result) = step(&quiz, &state, QuizAction::answer("q2", Answer::choice("a")));

        assert_eq!(
            result,
            StepResult::Ignored(Rejection::StaleQuestion {
                expected: "q1".into(),
                found: "q2".into(),
            })
        );
        assert_eq!(after, state);
    }

    #[test]
    fn last_next_question_completes_the_quiz() {
        let quiz = two_question_quiz();
        let mut state = QuizState::initial(&quiz);
        for (id, choice) in [("q1", "b"), ("q2", "a")] {
            state = step(&quiz, &state, QuizAction::answer(id, Answer::choice(choice))).0;
            state = step(&quiz, &state, QuizAction::NextQuestion).0;
        }

        assert_eq!(state.phase(), QuizPhase::Complete);
        assert_eq!(state.total_points(), 15);
        assert!(state.is_passed());

        let (after, result) = step(&quiz, &state, QuizAction::answer("q2", Answer::choice("a")));
        assert_eq!(
            result,
            StepResult::Ignored(Rejection::QuizComplete {
                action: "AnswerQuestion"
            })
        );
        assert_eq!(after, state);
    }

    #[test]
    fn show_feedback_sets_verdict_without_points() {
        let quiz = two_question_quiz();
        let state = QuizState::initial(&quiz);

        let (state, result) = step(&quiz, &state, QuizAction::ShowFeedback { correct: true });

        assert_eq!(
            result,
            StepResult::Transitioned(QuizPhase::Feedback { correct: true })
        );
        assert_eq!(state.total_points(), 0);
        assert!(state.can_continue());
        assert!(state.answers().is_empty());
    }

    #[test]
    fn reset_restores_initial_state() {
        let quiz = two_question_quiz();
        let initial = QuizState::initial(&quiz);
        let (state, _) = step(&quiz, &initial, QuizAction::answer("q1", Answer::choice("b")));
        let (state, _) = step(&quiz, &state, QuizAction::NextQuestion);

        let (state, result) = step(&quiz, &state, QuizAction::ResetQuiz);

        assert_eq!(result, StepResult::Transitioned(QuizPhase::InProgress));
        assert_eq!(state, initial);
    }

    #[test]
    fn action_tag_matches_widget_names() {
        let json = serde_json::to_string(&QuizAction::NextQuestion).unwrap();
        assert_eq!(json, r#"{"type":"NEXT_QUESTION"}"#);

        let action: QuizAction = serde_json::from_str(
            r#"{"type":"ANSWER_QUESTION","question_id":"q1","answer":"b"}"#,
        )
        .unwrap();
        assert_eq!(action, QuizAction::answer("q1", Answer::choice("b")));
    }
}
