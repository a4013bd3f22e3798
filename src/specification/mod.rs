//! Specification pattern core
//!
//! A [`Specification`] is a reusable predicate over a subject. Leaf
//! specifications encode one atomic rule; the combinators build new
//! specifications out of existing ones without modifying them.

mod combinators;

pub use combinators::{AndSpecification, NotSpecification, OrSpecification};

/// A composable predicate over subjects of type `T`.
///
/// Evaluation is pure: it borrows the subject, mutates nothing, and always
/// produces a boolean. A specification is constructed once and reused; a
/// tree built from `Send + Sync` parts can be evaluated against different
/// subjects from multiple threads without synchronization.
pub trait Specification<T> {
    /// Check whether `candidate` satisfies this specification.
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Combine with `other` into a specification satisfied only when both are.
    ///
    /// Takes ownership of both operands and leaves them untouched; borrow
    /// (`&spec`) to keep composing the same specification elsewhere.
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }

    /// Combine with `other` into a specification satisfied when either is.
    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        OrSpecification::new(self, other)
    }

    /// Invert into a specification satisfied when this one is not.
    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification::new(self)
    }
}

impl<T, S> Specification<T> for &S
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}
