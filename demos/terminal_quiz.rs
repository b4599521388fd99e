//! Terminal Quiz
//!
//! Drives the photosynthesis/algebra quiz from the terminal with a scripted
//! learner, printing what a UI would render after each action.
//!
//! Key concepts:
//! - The engine renders nothing; this file is the presentation layer
//! - Wrong answers show feedback until the learner chooses to try again
//! - Drag-and-drop answers are assembled with a MatchDraft
//!
//! Run with: RUST_LOG=quizflow=debug cargo run --example terminal_quiz

use quizflow::builder::{BuildError, QuestionBuilder, QuizBuilder};
use quizflow::engine::{QuizAction, QuizEngine};
use quizflow::question::{Answer, MatchDraft, QuestionKind};
use tracing_subscriber::EnvFilter;

fn build_engine() -> Result<QuizEngine, BuildError> {
    QuizBuilder::new()
        .goal(30)
        .question(
            QuestionBuilder::multiple_choice("q1")
                .text("What do plants need for photosynthesis?")
                .points(10)
                .option("a", "Oxygen & Sugar", false)
                .option("b", "Sunlight, Water & Carbon Dioxide", true)
                .option("c", "Protein & Salt", false)
                .feedback(
                    "That's right! Plants need sunlight, water, and carbon dioxide for photosynthesis.",
                    "Think about what gives plants energy to make their food.",
                ),
        )?
        .question(
            QuestionBuilder::multiple_choice("q2")
                .text("What is the role of sunlight in photosynthesis?")
                .points(10)
                .option("a", "It provides energy to make food", true)
                .option("b", "It helps plants absorb water", false)
                .option("c", "It turns leaves green", false)
                .feedback(
                    "Correct! Sunlight provides the energy plants need to convert water and CO2 into glucose.",
                    "Think about the energy source in photosynthesis.",
                ),
        )?
        .question(
            QuestionBuilder::drag_and_drop("q3")
                .text("Match the Algebraic Terms!")
                .points(10)
                .item("variable", "Variable", "def1")
                .item("constant", "Constant", "def2")
                .item("expression", "Expression", "def3")
                .item("equation", "Equation", "def4")
                .target("def1", "A symbol that represents a number that can change")
                .target("def2", "A fixed number that does not change")
                .target("def3", "A statement that has numbers, variables, and operations")
                .target("def4", "A statement that two expressions are equal")
                .feedback(
                    "Great job matching all the algebraic terms!",
                    "Some matches are incorrect. Try again!",
                ),
        )?
        .start()
}

fn render(engine: &QuizEngine) {
    println!(
        "  [Goal: {} points | Current Points: {}]",
        engine.goal_points(),
        engine.total_points()
    );

    let Some(question) = engine.current_question() else {
        return;
    };
    if let Some(number) = engine.question_number() {
        println!("  Question {number}: {}", question.text);
    }

    if let Some(message) = engine.feedback_message() {
        let heading = if engine.last_correct() == Some(true) {
            "Correct!"
        } else {
            "Think again!"
        };
        println!("  {heading} {message}");
    }

    if engine.can_continue() {
        let label = if engine.is_last_question() {
            "Finish"
        } else {
            "Continue"
        };
        println!("  -> [{label}]");
    }
}

fn act(engine: &mut QuizEngine, label: &str, action: QuizAction) {
    println!("\n> {label}");
    let result = engine.dispatch(action);
    if result.is_ignored() {
        println!("  (nothing happens)");
    }
    render(engine);
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Terminal Quiz ===");
    let mut engine = build_engine()?;
    render(&engine);

    act(&mut engine, "Pick b", QuizAction::answer("q1", Answer::choice("b")));
    act(&mut engine, "Continue", QuizAction::NextQuestion);

    act(&mut engine, "Pick c", QuizAction::answer("q2", Answer::choice("c")));
    act(&mut engine, "Continue (not allowed yet)", QuizAction::NextQuestion);
    act(&mut engine, "Try again", QuizAction::HideFeedback);
    act(&mut engine, "Pick a", QuizAction::answer("q2", Answer::choice("a")));
    act(&mut engine, "Continue", QuizAction::NextQuestion);

    // Drop each term on a definition until the board is full
    let mut draft = MatchDraft::new();
    let mut submission = None;
    if let Some(question) = engine.current_question() {
        if let QuestionKind::DragAndDrop { items, .. } = &question.kind {
            for item in items {
                draft.place(item.id.as_str(), item.matches_to.as_str());
                println!("  placed {} on {}", item.text, item.matches_to);
            }
        }
        if draft.is_complete(question) {
            submission = Some(question.id.clone());
        }
    }
    if let Some(question_id) = submission {
        act(
            &mut engine,
            "Board complete",
            QuizAction::answer(question_id, draft.into_answer()),
        );
    }
    act(&mut engine, "Finish", QuizAction::NextQuestion);

    println!();
    if engine.is_passed() {
        println!("Congratulations!");
    } else {
        println!("Quiz Completed");
    }
    println!(
        "You scored {} out of {} points.",
        engine.total_points(),
        engine.goal_points()
    );
    println!("Phases visited: {}", engine.history().get_path().len());

    println!("\n=== Example Complete ===");
    Ok(())
}
