//! Builder API for quiz construction.
//!
//! Fluent builders for questions and whole quizzes. `QuizBuilder::build`
//! runs the integrity rules in [`crate::validation`] and refuses a bank
//! with any violation.
//!
//! # Example
//!
//! ```
//! use quizflow::builder::{QuestionBuilder, QuizBuilder};
//! use quizflow::engine::QuizAction;
//! use quizflow::question::Answer;
//!
//! let mut engine = QuizBuilder::new()
//!     .goal(10)
//!     .question(
//!         QuestionBuilder::multiple_choice("q1")
//!             .text("What do plants need for photosynthesis?")
//!             .points(10)
//!             .option("a", "Oxygen & Sugar", false)
//!             .option("b", "Sunlight, Water & Carbon Dioxide", true),
//!     )?
//!     .start()?;
//!
//! engine.dispatch(QuizAction::answer("q1", Answer::choice("b")));
//! assert_eq!(engine.total_points(), 10);
//! # Ok::<(), quizflow::builder::BuildError>(())
//! ```

pub mod error;
pub mod question;
pub mod quiz;

pub use error::BuildError;
pub use question::QuestionBuilder;
pub use quiz::QuizBuilder;
