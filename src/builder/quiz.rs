//! Builder for constructing validated quizzes.

use crate::builder::error::BuildError;
use crate::builder::question::QuestionBuilder;
use crate::engine::{Quiz, QuizEngine};
use crate::question::Question;
use crate::validation::validate_quiz;
use stillwater::validation::Validation;

/// Builder for constructing quizzes with a fluent API.
#[derive(Default)]
pub struct QuizBuilder {
    goal: Option<u32>,
    questions: Vec<Question>,
}

impl QuizBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass threshold (required).
    pub fn goal(mut self, points: u32) -> Self {
        self.goal = Some(points);
        self
    }

    /// Add a question using a builder.
    /// Returns an error if the builder fails.
    pub fn question(mut self, builder: QuestionBuilder) -> Result<Self, BuildError> {
        self.questions.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built question.
    pub fn add_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Add multiple questions at once.
    pub fn questions(mut self, questions: Vec<Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    /// Build the quiz, running every integrity rule.
    pub fn build(self) -> Result<Quiz, BuildError> {
        let goal = self.goal.ok_or(BuildError::MissingGoal)?;

        if self.questions.is_empty() {
            return Err(BuildError::NoQuestions);
        }

        match validate_quiz(&self.questions, goal) {
            Validation::Success(_) => Ok(Quiz::new(self.questions, goal)),
            Validation::Failure(errors) => {
                Err(BuildError::InvalidQuiz(errors.iter().cloned().collect()))
            }
        }
    }

    /// Build the quiz and start a session over it.
    pub fn start(self) -> Result<QuizEngine, BuildError> {
        self.build().map(QuizEngine::new)
    }
}
