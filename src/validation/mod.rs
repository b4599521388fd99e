//! Validation of quiz definitions.
//!
//! Uses Stillwater's `Validation` type so one pass reports every broken
//! rule in a question bank instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use quizflow::question::{ChoiceOption, Feedback, Question};
//! use quizflow::validation::validate_quiz;
//!
//! let questions = vec![Question::multiple_choice(
//!     "q1",
//!     "Pick one",
//!     10,
//!     vec![
//!         ChoiceOption { id: "a".into(), text: "A".into(), is_correct: true },
//!         ChoiceOption { id: "b".into(), text: "B".into(), is_correct: true },
//!     ],
//!     Feedback::new("Yes", "No"),
//! )];
//!
//! assert!(validate_quiz(&questions, 10).is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate_question, validate_quiz, DefinitionCheck};
pub use violations::DefinitionError;
