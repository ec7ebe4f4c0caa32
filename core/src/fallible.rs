//! Early-exit traversal and fold for visitors that can fail.
//!
//! The shapes themselves never fail. A fallible visitor or combiner is
//! wrapped in an adapter that implements the ordinary [`Visit`] /
//! [`VisitNode`] / [`Combine`] traits, remembers the first error, and stops
//! calling the wrapped value from then on. The error is returned to the
//! caller as-is.

use core::fmt;

use crate::composite::{ChildList, Composite, Next, TraverseChildren};
use crate::fold::Fold;
use crate::traverse::Traverse;
use crate::visit::{Combine, Visit, VisitNode};

pub trait TryVisit<T: ?Sized, X = ()> {
    type Error;

    fn try_visit(&mut self, value: &T, extra: X) -> Result<(), Self::Error>;
}

impl<T, X, E, F> TryVisit<T, X> for F
where
    T: ?Sized,
    F: FnMut(&T, X) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn try_visit(&mut self, value: &T, extra: X) -> Result<(), E> {
        self(value, extra)
    }
}

/// Fallible counterpart of [`VisitNode`]. Descend with [`Next::try_descend`].
pub trait TryVisitNode<N: Composite + ?Sized, X = ()> {
    type Error;

    fn try_visit_node(
        &mut self,
        node: &N,
        next: Next<'_, N::Children>,
        extra: X,
    ) -> Result<(), Self::Error>;
}

pub trait TryCombine<A, T: ?Sized, X = ()> {
    type Error;

    fn try_combine(&mut self, acc: A, value: &T, extra: X) -> Result<A, Self::Error>;
}

impl<A, T, X, E, F> TryCombine<A, T, X> for F
where
    T: ?Sized,
    F: FnMut(A, &T, X) -> Result<A, E>,
{
    type Error = E;

    #[inline]
    fn try_combine(&mut self, acc: A, value: &T, extra: X) -> Result<A, E> {
        self(acc, value, extra)
    }
}

/// Runs a fallible visitor until its first error.
pub struct Fallible<'v, V: ?Sized, E> {
    visitor: &'v mut V,
    error: Option<E>,
}

impl<'v, V: ?Sized, E> Fallible<'v, V, E> {
    pub fn new(visitor: &'v mut V) -> Self {
        Fallible {
            visitor,
            error: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// The first error the visitor returned, if any.
    pub fn finish(self) -> Result<(), E> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn record(&mut self, result: Result<(), E>) {
        if let Err(error) = result {
            tracing::debug!("visitor failed, skipping remaining elements");
            self.error = Some(error);
        }
    }
}

impl<V: ?Sized, E> fmt::Debug for Fallible<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallible")
            .field("failed", &self.is_failed())
            .finish()
    }
}

impl<T, X, V, E> Visit<T, X> for Fallible<'_, V, E>
where
    T: ?Sized,
    V: TryVisit<T, X, Error = E> + ?Sized,
{
    fn visit(&mut self, value: &T, extra: X) {
        if self.error.is_none() {
            let result = self.visitor.try_visit(value, extra);
            self.record(result);
        }
    }
}

impl<N, X, V, E> VisitNode<N, X> for Fallible<'_, V, E>
where
    N: Composite + ?Sized,
    V: TryVisitNode<N, X, Error = E> + ?Sized,
{
    fn visit_node(&mut self, node: &N, next: Next<'_, N::Children>, extra: X) {
        if self.error.is_none() {
            let result = self.visitor.try_visit_node(node, next, extra);
            self.record(result);
        }
    }
}

/// Children that can be traversed by a fallible visitor `V` failing with `E`.
///
/// Implemented for every child list whose children accept the [`Fallible`]
/// adapter; use it as the bound on [`TryVisitNode`] impls.
pub trait TryTraverseChildren<V: ?Sized, X, E>: ChildList {
    fn try_traverse_children(&self, visitor: &mut V, extra: X) -> Result<(), E>;
}

impl<C, V, X, E> TryTraverseChildren<V, X, E> for C
where
    V: ?Sized,
    C: ChildList + for<'v> TraverseChildren<Fallible<'v, V, E>, X>,
{
    fn try_traverse_children(&self, visitor: &mut V, extra: X) -> Result<(), E> {
        let mut fallible = Fallible::new(visitor);
        self.traverse_children(&mut fallible, extra);
        fallible.finish()
    }
}

impl<C: ?Sized> Next<'_, C> {
    /// Like [`descend`](Next::descend) for fallible visitors: stops at the
    /// first child error and returns it.
    pub fn try_descend<V, X, E>(self, visitor: &mut V, extra: X) -> Result<(), E>
    where
        V: ?Sized,
        C: TryTraverseChildren<V, X, E>,
    {
        self.children().try_traverse_children(visitor, extra)
    }
}

/// Threads `Result<A, E>` through a fold, skipping the combiner after the
/// first error.
pub struct FallibleCombine<'f, F: ?Sized> {
    combiner: &'f mut F,
}

impl<'f, F: ?Sized> FallibleCombine<'f, F> {
    pub fn new(combiner: &'f mut F) -> Self {
        FallibleCombine { combiner }
    }
}

impl<A, T, X, E, F> Combine<Result<A, E>, T, X> for FallibleCombine<'_, F>
where
    T: ?Sized,
    F: TryCombine<A, T, X, Error = E> + ?Sized,
{
    fn combine(&mut self, acc: Result<A, E>, value: &T, extra: X) -> Result<A, E> {
        let acc = acc?;
        self.combiner
            .try_combine(acc, value, extra)
            .inspect_err(|_| tracing::debug!("combiner failed, skipping remaining elements"))
    }
}

/// Traverse `value` with a fallible visitor, returning its first error.
///
/// ```
/// use shapewalk_core::try_traverse;
///
/// let mut seen = Vec::new();
/// let result = try_traverse(&(1, -2, 3), &mut |v: &i32, ()| {
///     if *v < 0 {
///         return Err(format!("negative: {v}"));
///     }
///     seen.push(*v);
///     Ok(())
/// });
/// assert_eq!(result, Err("negative: -2".to_string()));
/// assert_eq!(seen, [1]);
/// ```
pub fn try_traverse<'v, T, V, E>(value: &T, visitor: &'v mut V) -> Result<(), E>
where
    T: Traverse<Fallible<'v, V, E>> + ?Sized,
    V: ?Sized,
{
    try_traverse_with(value, visitor, ())
}

/// Like [`try_traverse`], forwarding `extra` to every visitor call.
pub fn try_traverse_with<'v, T, V, X, E>(value: &T, visitor: &'v mut V, extra: X) -> Result<(), E>
where
    T: Traverse<Fallible<'v, V, E>, X> + ?Sized,
    V: ?Sized,
{
    let mut fallible = Fallible::new(visitor);
    value.traverse(&mut fallible, extra);
    fallible.finish()
}

/// Fold `value` with a fallible combiner, returning its first error.
pub fn try_fold<'f, T, A, F, E>(value: &T, init: A, combiner: &'f mut F) -> Result<A, E>
where
    T: Fold<Result<A, E>, FallibleCombine<'f, F>> + ?Sized,
    F: ?Sized,
{
    try_fold_with(value, init, combiner, ())
}

/// Like [`try_fold`], forwarding `extra` to every combiner call.
pub fn try_fold_with<'f, T, A, F, X, E>(
    value: &T,
    init: A,
    combiner: &'f mut F,
    extra: X,
) -> Result<A, E>
where
    T: Fold<Result<A, E>, FallibleCombine<'f, F>, X> + ?Sized,
    F: ?Sized,
{
    value.fold(Ok(init), &mut FallibleCombine::new(combiner), extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Shape, ShapeKind, Tier};
    use crate::traverse_with;
    use alloc::{format, string::String, vec, vec::Vec};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stops_at_first_error() {
        let mut calls = 0;
        let result = try_traverse(&(1, 2, 3, 4), &mut |v: &i32, ()| {
            calls += 1;
            if *v == 2 { Err(*v) } else { Ok(()) }
        });
        assert_eq!(result, Err(2));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_success_visits_everything() {
        let mut seen = Vec::new();
        let result = try_traverse(&[1, 2, 3], &mut |v: &i32, ()| {
            seen.push(*v);
            Ok::<(), ()>(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_absent_optional_cannot_fail() {
        let result: Result<(), &str> = try_traverse(&None::<u8>, &mut |_: &u8, ()| Err::<(), _>("never"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_try_fold_short_circuits() {
        let mut calls = 0;
        let mut checked_add = |acc: u8, v: &u8, ()| {
            calls += 1;
            acc.checked_add(*v).ok_or("overflow")
        };
        assert_eq!(try_fold(&(100u8, 100u8, 100u8, 1u8), 0u8, &mut checked_add), Err("overflow"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_try_fold_ok() {
        let sum = try_fold_with(
            &Some(4u32),
            1u32,
            &mut |acc: u32, v: &u32, scale: u32| Ok::<_, ()>(acc + v * scale),
            10,
        );
        assert_eq!(sum, Ok(41));
    }

    struct Section<C> {
        title: &'static str,
        children: C,
    }

    struct Text(&'static str);

    impl Shape for Text {
        const KIND: ShapeKind = ShapeKind::Leaf;
        const TIER: Tier = Tier::Home;
    }

    impl<V: Visit<Text, X> + ?Sized, X> Traverse<V, X> for Text {
        fn traverse(&self, visitor: &mut V, extra: X) {
            visitor.visit(self, extra)
        }
    }

    impl<C: ChildList> Shape for Section<C> {
        const KIND: ShapeKind = ShapeKind::Composite;
        const TIER: Tier = Tier::Home;
    }

    impl<C: ChildList> Composite for Section<C> {
        type Children = C;

        fn children(&self) -> &C {
            &self.children
        }
    }

    impl<C: ChildList, V: VisitNode<Section<C>, X> + ?Sized, X> Traverse<V, X> for Section<C> {
        fn traverse(&self, visitor: &mut V, extra: X) {
            crate::composite::traverse_node(self, visitor, extra)
        }
    }

    /// Writes lines into a bounded buffer and fails once it is full.
    struct Bounded {
        out: String,
        limit: usize,
    }

    impl Bounded {
        fn line(&mut self, depth: usize, text: &str) -> fmt::Result {
            let line = format!("{}{}\n", " ".repeat(depth), text);
            if self.out.len() + line.len() > self.limit {
                return Err(fmt::Error);
            }
            self.out.push_str(&line);
            Ok(())
        }
    }

    impl TryVisit<Text, usize> for Bounded {
        type Error = fmt::Error;

        fn try_visit(&mut self, value: &Text, depth: usize) -> fmt::Result {
            self.line(depth, value.0)
        }
    }

    impl<C> TryVisitNode<Section<C>, usize> for Bounded
    where
        C: TryTraverseChildren<Bounded, usize, fmt::Error>,
    {
        type Error = fmt::Error;

        fn try_visit_node(
            &mut self,
            node: &Section<C>,
            next: Next<'_, C>,
            depth: usize,
        ) -> fmt::Result {
            self.line(depth, &format!("[{}]", node.title))?;
            next.try_descend(self, depth + 1)
        }
    }

    fn document() -> Section<(Section<(Text, Text)>, Section<(Text,)>)> {
        Section {
            title: "doc",
            children: (
                Section {
                    title: "a",
                    children: (Text("one"), Text("two")),
                },
                Section {
                    title: "b",
                    children: (Text("three"),),
                },
            ),
        }
    }

    #[test]
    fn test_composite_error_propagates_from_child() {
        let mut out = Bounded {
            out: String::new(),
            limit: 20,
        };
        let result = try_traverse_with(&document(), &mut out, 0usize);
        assert_eq!(result, Err(fmt::Error));
        assert_eq!(out.out, "[doc]\n [a]\n  one\n");
    }

    #[test]
    fn test_composite_success() {
        let mut out = Bounded {
            out: String::new(),
            limit: 1000,
        };
        assert_eq!(try_traverse_with(&document(), &mut out, 0usize), Ok(()));
        assert_eq!(out.out, "[doc]\n [a]\n  one\n  two\n [b]\n  three\n");
    }

    #[test]
    fn test_fallible_adapter_is_a_plain_visitor() {
        let mut inner = |v: &i32, ()| if *v > 1 { Err(*v) } else { Ok(()) };
        let mut adapter = Fallible::new(&mut inner);
        traverse_with(&(1, 2, 3), &mut adapter, ());
        assert!(adapter.is_failed());
        assert_eq!(adapter.finish(), Err(2));
    }
}
