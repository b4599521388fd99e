//! Property-based tests for the quiz reducer and evaluator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated questions and action sequences.

use proptest::prelude::*;
use quizflow::engine::{reduce, Quiz, QuizAction, QuizState, StepResult};
use quizflow::question::{evaluate, Answer, ChoiceOption, DragItem, DropTarget, Feedback, Question};

fn feedback() -> Feedback {
    Feedback::new("Correct!", "Think again!")
}

prop_compose! {
    fn arbitrary_multiple_choice()(option_count in 1..6usize, points in 0..100u32)
        (correct in 0..option_count, option_count in Just(option_count), points in Just(points))
        -> (Question, String)
    {
        let options = (0..option_count)
            .map(|i| ChoiceOption {
                id: format!("opt{i}"),
                text: format!("Option {i}"),
                is_correct: i == correct,
            })
            .collect();
        let question = Question::multiple_choice("mc", "Pick one", points, options, feedback());
        (question, format!("opt{correct}"))
    }
}

prop_compose! {
    fn arbitrary_drag_and_drop()(item_count in 2..7usize, points in 0..100u32)
        (mismatch in 0..item_count, item_count in Just(item_count), points in Just(points))
        -> (Question, usize)
    {
        let items = (0..item_count)
            .map(|i| DragItem {
                id: format!("item{i}"),
                text: format!("Item {i}"),
                matches_to: format!("def{i}"),
            })
            .collect();
        let definitions = (0..item_count)
            .map(|i| DropTarget {
                id: format!("def{i}"),
                text: format!("Definition {i}"),
            })
            .collect();
        let question = Question::drag_and_drop("dd", "Match", points, items, definitions, feedback());
        (question, mismatch)
    }
}

fn session_quiz() -> Quiz {
    let option = |id: &str, is_correct: bool| ChoiceOption {
        id: id.into(),
        text: id.into(),
        is_correct,
    };
    Quiz::new(
        vec![
            Question::multiple_choice(
                "q1",
                "What do plants need for photosynthesis?",
                10,
                vec![option("a", false), option("b", true), option("c", false)],
                feedback(),
            ),
            Question::multiple_choice(
                "q2",
                "What is the role of sunlight in photosynthesis?",
                10,
                vec![option("a", true), option("b", false), option("c", false)],
                feedback(),
            ),
            Question::drag_and_drop(
                "q3",
                "Match the Algebraic Terms!",
                10,
                vec![
                    DragItem {
                        id: "variable".into(),
                        text: "Variable".into(),
                        matches_to: "def1".into(),
                    },
                    DragItem {
                        id: "constant".into(),
                        text: "Constant".into(),
                        matches_to: "def2".into(),
                    },
                ],
                vec![
                    DropTarget {
                        id: "def1".into(),
                        text: "Changes".into(),
                    },
                    DropTarget {
                        id: "def2".into(),
                        text: "Fixed".into(),
                    },
                ],
                feedback(),
            ),
        ],
        30,
    )
}

fn arbitrary_action() -> impl Strategy<Value = QuizAction> {
    prop_oneof![
        (1..4usize, prop::sample::select(vec!["a", "b", "c"]))
            .prop_map(|(q, choice)| QuizAction::answer(format!("q{q}"), Answer::choice(choice))),
        Just(QuizAction::answer(
            "q3",
            Answer::matching([("variable", "def1"), ("constant", "def2")])
        )),
        Just(QuizAction::answer(
            "q3",
            Answer::matching([("variable", "def2"), ("constant", "def1")])
        )),
        Just(QuizAction::NextQuestion),
        Just(QuizAction::HideFeedback),
        any::<bool>().prop_map(|correct| QuizAction::ShowFeedback { correct }),
    ]
}

fn run(quiz: &Quiz, actions: &[QuizAction]) -> QuizState {
    actions
        .iter()
        .fold(QuizState::initial(quiz), |state, action| reduce(quiz, &state, action).0)
}

proptest! {
    #[test]
    fn correct_choice_awards_points_once((question, correct_id) in arbitrary_multiple_choice()) {
        let points = question.points;
        let quiz = Quiz::new(vec![question], points);
        let state = QuizState::initial(&quiz);
        let action = QuizAction::answer("mc", Answer::choice(correct_id));

        let (state, result) = reduce(&quiz, &state, &action);
        prop_assert_eq!(result, StepResult::Evaluated { correct: true, awarded: points });
        prop_assert_eq!(state.last_correct(), Some(true));
        prop_assert_eq!(state.total_points(), points);

        let (state, result) = reduce(&quiz, &state, &action);
        prop_assert!(result.is_ignored());
        prop_assert_eq!(state.total_points(), points);
    }

    #[test]
    fn full_matching_is_correct((question, _) in arbitrary_drag_and_drop()) {
        let solution = question.solution().unwrap();
        prop_assert!(evaluate(&question, &solution));
    }

    #[test]
    fn single_mismatch_is_incorrect((question, mismatch) in arbitrary_drag_and_drop()) {
        let Some(Answer::Matching(mut placed)) = question.solution() else {
            panic!("drag and drop always has a solution");
        };
        let count = placed.len();
        placed.insert(format!("item{mismatch}"), format!("def{}", (mismatch + 1) % count));

        prop_assert!(!evaluate(&question, &Answer::Matching(placed)));
    }

    #[test]
    fn answering_again_under_correct_feedback_changes_nothing(
        (question, correct_id) in arbitrary_multiple_choice(),
        retries in prop::collection::vec(0..6usize, 1..5)
    ) {
        let quiz = Quiz::new(vec![question], 0);
        let state = QuizState::initial(&quiz);
        let (locked, _) = reduce(&quiz, &state, &QuizAction::answer("mc", Answer::choice(correct_id)));

        for retry in retries {
            let action = QuizAction::answer("mc", Answer::choice(format!("opt{retry}")));
            let (after, result) = reduce(&quiz, &locked, &action);
            prop_assert!(result.is_ignored());
            prop_assert_eq!(&after, &locked);
        }
    }

    #[test]
    fn reset_from_any_state_restores_initial(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let quiz = session_quiz();
        let state = run(&quiz, &actions);

        let (state, _) = reduce(&quiz, &state, &QuizAction::ResetQuiz);

        prop_assert_eq!(state.total_points(), 0);
        prop_assert_eq!(state.current_index(), 0);
        prop_assert!(state.answers().is_empty());
        prop_assert_eq!(state, QuizState::initial(&quiz));
    }

    #[test]
    fn next_question_never_advances_without_continue(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let quiz = session_quiz();
        let state = run(&quiz, &actions);

        if !state.can_continue() {
            let (after, result) = reduce(&quiz, &state, &QuizAction::NextQuestion);
            prop_assert!(result.is_ignored());
            prop_assert_eq!(after.current_index(), state.current_index());
        }
    }

    #[test]
    fn points_never_decrease_without_reset(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let quiz = session_quiz();
        let mut state = QuizState::initial(&quiz);

        for action in &actions {
            let (next, _) = reduce(&quiz, &state, action);
            prop_assert!(next.total_points() >= state.total_points());
            prop_assert!(next.total_points() <= quiz.max_points());
            state = next;
        }
    }
}
