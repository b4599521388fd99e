//! Guard predicates for controlling state transitions.
//!
//! Every quiz action is gated by a guard over the session snapshot. A guard
//! that rejects turns the action into a no-op instead of an error.

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use quizflow::core::Guard;
///
/// let positive = Guard::new(|points: &u32| *points > 0);
///
/// assert!(positive.check(&10));
/// assert!(!positive.check(&0));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that accepts every input.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Combine two guards; both must pass.
    ///
    /// ```rust
    /// use quizflow::core::Guard;
    ///
    /// let in_range = Guard::new(|n: &u32| *n >= 10).and(Guard::new(|n: &u32| *n <= 20));
    ///
    /// assert!(in_range.check(&15));
    /// assert!(!in_range.check(&25));
    /// ```
    pub fn and(self, other: Guard<T>) -> Self
    where
        T: 'static,
    {
        Self::new(move |value| self.check(value) && other.check(value))
    }
}

impl<T> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
