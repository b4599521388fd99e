//! Pure answer evaluation.

use super::{Answer, Question, QuestionKind};

/// Decide whether `answer` is correct for `question`.
///
/// - Multiple choice: the chosen option exists and is flagged correct.
/// - Drag-and-drop: every item of the question is mapped to its own target
///   and the mapping names no other items. A partial mapping is incorrect.
/// - Unsupported questions, and answers whose shape does not fit the
///   question, are incorrect.
///
/// # Example
///
/// ```rust
/// use quizflow::question::{evaluate, Answer, ChoiceOption, Feedback, Question};
///
/// let question = Question::multiple_choice(
///     "q2",
///     "What is the role of sunlight in photosynthesis?",
///     10,
///     vec![
///         ChoiceOption { id: "a".into(), text: "It provides energy".into(), is_correct: true },
///         ChoiceOption { id: "b".into(), text: "It turns leaves green".into(), is_correct: false },
///     ],
///     Feedback::new("Correct!", "Think about the energy source."),
/// );
///
/// assert!(evaluate(&question, &Answer::choice("a")));
/// assert!(!evaluate(&question, &Answer::choice("b")));
/// ```
pub fn evaluate(question: &Question, answer: &Answer) -> bool {
    match (&question.kind, answer) {
        (QuestionKind::MultipleChoice { options }, Answer::Choice(chosen)) => options
            .iter()
            .find(|option| option.id == *chosen)
            .is_some_and(|option| option.is_correct),
        (QuestionKind::DragAndDrop { items, .. }, Answer::Matching(placed)) => {
            placed.len() == items.len()
                && items
                    .iter()
                    .all(|item| placed.get(&item.id) == Some(&item.matches_to))
        }
        (QuestionKind::MultipleChoice { .. }, Answer::Matching(_))
        | (QuestionKind::DragAndDrop { .. }, Answer::Choice(_)) => false,
        (QuestionKind::Unsupported, _) => false,
    }
}
