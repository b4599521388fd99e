//! The quiz state machine.
//!
//! [`reduce`] is the pure transition function over `(Quiz, QuizState,
//! QuizAction)`. [`QuizEngine`] wraps it for one session, keeping the
//! history and attempt counter and logging every step with `tracing`.
//!
//! # Example
//!
//! ```rust
//! use quizflow::engine::{Quiz, QuizAction, QuizEngine};
//! use quizflow::question::{Answer, ChoiceOption, Feedback, Question};
//!
//! let quiz = Quiz::new(
//!     vec![Question::multiple_choice(
//!         "q1",
//!         "What do plants need for photosynthesis?",
//!         10,
//!         vec![
//!             ChoiceOption { id: "a".into(), text: "Oxygen & Sugar".into(), is_correct: false },
//!             ChoiceOption { id: "b".into(), text: "Sunlight, Water & CO2".into(), is_correct: true },
//!         ],
//!         Feedback::new("That's right!", "Think about energy."),
//!     )],
//!     10,
//! );
//!
//! let mut engine = QuizEngine::new(quiz);
//! engine.dispatch(QuizAction::answer("q1", Answer::choice("a")));
//! assert_eq!(engine.last_correct(), Some(false));
//!
//! engine.dispatch(QuizAction::HideFeedback);
//! engine.dispatch(QuizAction::answer("q1", Answer::choice("b")));
//! engine.dispatch(QuizAction::NextQuestion);
//!
//! assert!(engine.is_complete());
//! assert!(engine.is_passed());
//! ```

mod machine;
mod quiz;
mod session;
mod transition;

pub use machine::QuizEngine;
pub use quiz::Quiz;
pub use session::QuizState;
pub use transition::{reduce, QuizAction, Rejection, StepResult};
