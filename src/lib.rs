//! Quizflow: a pure state machine for quizzes
//!
//! Quizflow runs a quiz of multiple-choice and drag-and-drop questions,
//! scores answers against a goal, and tells the caller when to show
//! feedback, when the learner may continue, and whether the session passed.
//! It renders nothing. Any presentation layer (component tree, immediate-mode
//! UI, terminal) reads the engine and dispatches actions into it.
//!
//! # Core Concepts
//!
//! - **Phase**: `InProgress`, `Feedback { correct }` or `Complete`, derived from session fields
//! - **Reducer**: [`engine::reduce`] maps `(state, action)` to the next state with no side effects
//! - **Guards**: every action has a precondition; a failed guard is a no-op, never an error
//! - **Validation**: question banks are checked up front, reporting every violation at once
//!
//! # Example
//!
//! ```rust
//! use quizflow::builder::{QuestionBuilder, QuizBuilder};
//! use quizflow::engine::QuizAction;
//! use quizflow::question::Answer;
//!
//! let mut engine = QuizBuilder::new()
//!     .goal(20)
//!     .question(
//!         QuestionBuilder::multiple_choice("q1")
//!             .text("What is the role of sunlight in photosynthesis?")
//!             .points(10)
//!             .option("a", "It provides energy to make food", true)
//!             .option("b", "It helps plants absorb water", false),
//!     )?
//!     .question(
//!         QuestionBuilder::drag_and_drop("q2")
//!             .text("Match the Algebraic Terms!")
//!             .points(10)
//!             .item("variable", "Variable", "def1")
//!             .item("constant", "Constant", "def2")
//!             .target("def1", "A symbol that represents a number that can change")
//!             .target("def2", "A fixed number that does not change"),
//!     )?
//!     .start()?;
//!
//! engine.dispatch(QuizAction::answer("q1", Answer::choice("a")));
//! engine.dispatch(QuizAction::NextQuestion);
//! engine.dispatch(QuizAction::answer(
//!     "q2",
//!     Answer::matching([("variable", "def1"), ("constant", "def2")]),
//! ));
//! engine.dispatch(QuizAction::NextQuestion);
//!
//! assert!(engine.is_complete());
//! assert!(engine.is_passed());
//! # Ok::<(), quizflow::builder::BuildError>(())
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod question;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, QuestionBuilder, QuizBuilder};
pub use crate::core::{QuizPhase, State};
pub use engine::{reduce, Quiz, QuizAction, QuizEngine, QuizState, StepResult};
pub use question::{Answer, Question, QuestionKind};
