//! Visitor and combiner traits.
//!
//! A visitor is an overload set: one [`Visit`] impl per element type it
//! handles, or one generic impl. The element type of the active position
//! picks the impl statically.

use crate::composite::{Composite, Next, TraverseChildren};

/// Called once per element a traversal reaches.
///
/// `X` is the extra context forwarded by [`traverse_with`]; it is `()` when
/// none is given.
///
/// [`traverse_with`]: crate::traverse_with
pub trait Visit<T: ?Sized, X = ()> {
    fn visit(&mut self, value: &T, extra: X);
}

impl<T, X, F> Visit<T, X> for F
where
    T: ?Sized,
    F: FnMut(&T, X),
{
    #[inline]
    fn visit(&mut self, value: &T, extra: X) {
        self(value, extra)
    }
}

/// Called once for each composite node a traversal reaches.
///
/// The node's children are only visited if the implementation calls
/// [`Next::descend`], which it may do with a different `extra` than it
/// received (an indentation level, a depth budget, ...).
pub trait VisitNode<N: Composite + ?Sized, X = ()> {
    fn visit_node(&mut self, node: &N, next: Next<'_, N::Children>, extra: X);
}

/// Threads an accumulator through a fold, one element at a time.
pub trait Combine<A, T: ?Sized, X = ()> {
    fn combine(&mut self, acc: A, value: &T, extra: X) -> A;
}

impl<A, T, X, F> Combine<A, T, X> for F
where
    T: ?Sized,
    F: FnMut(A, &T, X) -> A,
{
    #[inline]
    fn combine(&mut self, acc: A, value: &T, extra: X) -> A {
        self(acc, value, extra)
    }
}

/// Accepts every element, accumulator and node whose children it also
/// accepts, and does nothing.
///
/// This is the probe behind [`Traversable`] and [`Foldable`].
///
/// [`Traversable`]: crate::Traversable
/// [`Foldable`]: crate::Foldable
#[derive(Debug, Default, Clone, Copy)]
pub struct Ignore;

impl<T: ?Sized, X> Visit<T, X> for Ignore {
    #[inline]
    fn visit(&mut self, _value: &T, _extra: X) {}
}

// A node is traversable only when all of its children are, down to the leaves.
impl<N, X> VisitNode<N, X> for Ignore
where
    N: Composite + ?Sized,
    N::Children: TraverseChildren<Ignore, X>,
{
    #[inline]
    fn visit_node(&mut self, _node: &N, _next: Next<'_, N::Children>, _extra: X) {}
}

impl<A, T: ?Sized, X> Combine<A, T, X> for Ignore {
    #[inline]
    fn combine(&mut self, acc: A, _value: &T, _extra: X) -> A {
        acc
    }
}
