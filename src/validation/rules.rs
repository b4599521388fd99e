//! Integrity rules for a quiz definition, using Validation.

use crate::question::{Question, QuestionKind};
use crate::validation::violations::DefinitionError;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

/// Outcome of checking a quiz definition.
pub type DefinitionCheck = Validation<(), NonEmptyVec<DefinitionError>>;

fn require(ok: bool, violation: impl FnOnce() -> DefinitionError) -> DefinitionCheck {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Ids that appear more than once, each reported once, in first-seen order.
fn duplicates<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dupes = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            dupes.push(id);
        }
    }
    dupes
}

/// Check every rule for one question.
pub fn validate_question(question: &Question) -> DefinitionCheck {
    let mut checks: Vec<DefinitionCheck> = vec![Validation::success(())];

    match &question.kind {
        QuestionKind::MultipleChoice { options } => {
            checks.push(require(!options.is_empty(), || DefinitionError::NoOptions {
                question: question.id.clone(),
            }));

            for id in duplicates(options.iter().map(|o| o.id.as_str())) {
                checks.push(Validation::fail(DefinitionError::DuplicateChoiceId {
                    question: question.id.clone(),
                    id: id.to_string(),
                }));
            }

            let correct = options.iter().filter(|o| o.is_correct).count();
            if !options.is_empty() {
                checks.push(require(correct == 1, || {
                    DefinitionError::CorrectOptionCount {
                        question: question.id.clone(),
                        found: correct,
                    }
                }));
            }
        }
        QuestionKind::DragAndDrop { items, definitions } => {
            checks.push(require(!items.is_empty(), || DefinitionError::NoItems {
                question: question.id.clone(),
            }));

            let item_ids = items.iter().map(|i| i.id.as_str());
            let target_ids = definitions.iter().map(|d| d.id.as_str());
            for id in duplicates(item_ids).into_iter().chain(duplicates(target_ids)) {
                checks.push(Validation::fail(DefinitionError::DuplicateChoiceId {
                    question: question.id.clone(),
                    id: id.to_string(),
                }));
            }

            let known: HashSet<&str> = definitions.iter().map(|d| d.id.as_str()).collect();
            for item in items {
                checks.push(require(known.contains(item.matches_to.as_str()), || {
                    DefinitionError::UnknownTarget {
                        question: question.id.clone(),
                        item: item.id.clone(),
                        target: item.matches_to.clone(),
                    }
                }));
            }
        }
        QuestionKind::Unsupported => {
            warn!(
                question_id = question.id.as_str(),
                "Unsupported question type; answers will always be incorrect"
            );
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Check a whole question bank, accumulating ALL violations.
///
/// A goal above the points on offer is allowed but logged.
pub fn validate_quiz(questions: &[Question], goal_points: u32) -> DefinitionCheck {
    let mut checks: Vec<DefinitionCheck> = vec![Validation::success(())];

    for (index, question) in questions.iter().enumerate() {
        checks.push(require(!question.id.is_empty(), || {
            DefinitionError::EmptyQuestionId { index }
        }));
    }

    for id in duplicates(questions.iter().map(|q| q.id.as_str())) {
        checks.push(Validation::fail(DefinitionError::DuplicateQuestionId {
            id: id.to_string(),
        }));
    }

    for question in questions {
        checks.push(validate_question(question));
    }

    let available = questions
        .iter()
        .fold(0u32, |sum, q| sum.saturating_add(q.points));
    if goal_points > available {
        warn!(goal_points, available, "Goal cannot be reached with these questions");
    }

    Validation::all_vec(checks).map(|_| ())
}
