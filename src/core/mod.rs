//! Core state machine types.
//!
//! - Phase definitions via the `State` trait
//! - Guard predicates for transition control
//! - Immutable session history
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{PhaseTransition, SessionHistory};
pub use state::{QuizPhase, State};
