//! Accumulator-threading traversal.
//!
//! `Fold` covers the same shapes as [`Traverse`](crate::Traverse), but
//! instead of invoking a visitor independently per element it feeds the
//! result of each [`Combine`](crate::Combine) call into the next:
//!
//! - Product: `combine(combine(init, f0), f1) ...`, strictly left to right
//! - Sum: `combine(init, active)`, exactly once
//! - Optional: `combine(init, value)` when present, `init` when absent
//!
//! The accumulator type `A` is the same at every position of one fold.

use crate::shape::Shape;

pub trait Fold<A, F: ?Sized, X = ()>: Shape {
    fn fold(&self, init: A, combiner: &mut F, extra: X) -> A;
}

/// Fold `value` into `init` with `combiner`.
#[inline]
pub fn fold<T, A, F>(value: &T, init: A, combiner: &mut F) -> A
where
    T: Fold<A, F> + ?Sized,
    F: ?Sized,
{
    value.fold(init, combiner, ())
}

/// Like [`fold`], forwarding `extra` to every combiner call.
#[inline]
pub fn fold_with<T, A, F, X>(value: &T, init: A, combiner: &mut F, extra: X) -> A
where
    T: Fold<A, F, X> + ?Sized,
    F: ?Sized,
{
    value.fold(init, combiner, extra)
}
