//! Composite trees with caller-driven recursion.
//!
//! A composite node owns an ordered, heterogeneous list of children (a tuple
//! or array). Traversing a node calls [`VisitNode::visit_node`] exactly once
//! and hands over a [`Next`] continuation; the children are only visited if
//! the visitor calls [`Next::descend`]. That lets a visitor prune subtrees,
//! emit text around its children, or change the extra argument (an indent
//! level, a depth budget) on the way down, without this crate knowing about
//! any of it.

use core::any::type_name;
use core::fmt;

use crate::shape::Shape;
use crate::visit::VisitNode;

/// A tree node owning its children by value.
///
/// Leaves use `()` as their children.
pub trait Composite: Shape {
    type Children: ChildList;

    fn children(&self) -> &Self::Children;
}

/// A fixed-length sequence of composite children.
pub trait ChildList {
    const LEN: usize;
}

/// Traverses every child of a [`ChildList`], in order, with a clone of the
/// extra argument each.
pub trait TraverseChildren<V: ?Sized, X = ()>: ChildList {
    fn traverse_children(&self, visitor: &mut V, extra: X);
}

/// The continuation handed to [`VisitNode::visit_node`].
///
/// Calling [`descend`](Next::descend) traverses each child of the node once,
/// in declaration order. Dropping it without calling prunes the subtree.
pub struct Next<'a, C: ?Sized> {
    children: &'a C,
}

impl<'a, C: ?Sized> Next<'a, C> {
    pub fn new(children: &'a C) -> Self {
        Next { children }
    }

    pub fn children(&self) -> &'a C {
        self.children
    }

    /// Traverse every child with `visitor`, forwarding `extra`.
    ///
    /// `visitor` is normally the one that received this continuation, and
    /// `extra` may differ from what it received.
    pub fn descend<V, X>(self, visitor: &mut V, extra: X)
    where
        V: ?Sized,
        C: TraverseChildren<V, X>,
    {
        tracing::trace!(children = type_name::<C>(), count = C::LEN, "descending");
        self.children.traverse_children(visitor, extra)
    }

    pub fn len(&self) -> usize
    where
        C: ChildList,
    {
        C::LEN
    }

    pub fn is_empty(&self) -> bool
    where
        C: ChildList,
    {
        C::LEN == 0
    }
}

impl<C: ?Sized> Clone for Next<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Next<'_, C> {}

impl<C: ?Sized> fmt::Debug for Next<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("children", &type_name::<C>())
            .finish()
    }
}

/// The [`Traverse`](crate::Traverse) body of every composite node: visit the node once and
/// offer its children through [`Next`].
///
/// Derived composites call this; hand-written registrations should too.
#[inline]
pub fn traverse_node<N, V, X>(node: &N, visitor: &mut V, extra: X)
where
    N: Composite + ?Sized,
    V: VisitNode<N, X> + ?Sized,
{
    tracing::trace!(node = type_name::<N>(), "entering composite node");
    visitor.visit_node(node, Next::new(node.children()), extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{ShapeKind, Tier};
    use crate::{Traversable, Traverse, is_traversable, traverse, traverse_with};
    use alloc::{format, string::String, vec, vec::Vec};
    use pretty_assertions::assert_eq;
    use static_assertions::assert_not_impl_any;

    /// A branch with arbitrary children.
    struct Branch<C> {
        name: &'static str,
        children: C,
    }

    /// A childless node.
    struct Leaf {
        name: &'static str,
    }

    impl<C: ChildList> Shape for Branch<C> {
        const KIND: ShapeKind = ShapeKind::Composite;
        const TIER: Tier = Tier::Home;
    }

    impl<C: ChildList> Composite for Branch<C> {
        type Children = C;

        fn children(&self) -> &C {
            &self.children
        }
    }

    impl<C: ChildList, V: VisitNode<Branch<C>, X> + ?Sized, X> Traverse<V, X> for Branch<C> {
        fn traverse(&self, visitor: &mut V, extra: X) {
            traverse_node(self, visitor, extra)
        }
    }

    impl Shape for Leaf {
        const KIND: ShapeKind = ShapeKind::Composite;
        const TIER: Tier = Tier::Home;
    }

    impl Composite for Leaf {
        type Children = ();

        fn children(&self) -> &() {
            &()
        }
    }

    impl<V: VisitNode<Leaf, X> + ?Sized, X> Traverse<V, X> for Leaf {
        fn traverse(&self, visitor: &mut V, extra: X) {
            traverse_node(self, visitor, extra)
        }
    }

    fn sample() -> Branch<(Leaf, Branch<(Leaf, Leaf)>, Leaf)> {
        Branch {
            name: "root",
            children: (
                Leaf { name: "a" },
                Branch {
                    name: "mid",
                    children: (Leaf { name: "b" }, Leaf { name: "c" }),
                },
                Leaf { name: "d" },
            ),
        }
    }

    /// Records node names with their depth, always descending.
    #[derive(Default)]
    struct Outline {
        lines: Vec<String>,
    }

    impl VisitNode<Leaf, usize> for Outline {
        fn visit_node(&mut self, node: &Leaf, next: Next<'_, ()>, depth: usize) {
            assert!(next.is_empty());
            self.lines.push(format!("{}{}", "  ".repeat(depth), node.name));
            next.descend(self, depth + 1);
        }
    }

    impl<C> VisitNode<Branch<C>, usize> for Outline
    where
        C: TraverseChildren<Outline, usize>,
    {
        fn visit_node(&mut self, node: &Branch<C>, next: Next<'_, C>, depth: usize) {
            self.lines
                .push(format!("{}{}/{}", "  ".repeat(depth), node.name, next.len()));
            next.descend(self, depth + 1);
        }
    }

    #[test]
    fn test_descend_visits_children_in_order_with_new_context() {
        crate::test_utils::init_test_logging();

        let mut outline = Outline::default();
        traverse_with(&sample(), &mut outline, 0usize);
        assert_eq!(
            outline.lines,
            vec!["root/3", "  a", "  mid/2", "    b", "    c", "  d"]
        );
    }

    /// Counts nodes and only descends while under a depth budget.
    struct Budget {
        visited: usize,
    }

    impl<N> VisitNode<N, u32> for Budget
    where
        N: Composite,
        N::Children: TraverseChildren<Budget, u32>,
    {
        fn visit_node(&mut self, _node: &N, next: Next<'_, N::Children>, remaining: u32) {
            self.visited += 1;
            if remaining > 0 {
                next.descend(self, remaining - 1);
            }
        }
    }

    #[test]
    fn test_not_calling_next_prunes_subtree() {
        let tree = sample();
        let count = |budget: u32| {
            let mut v = Budget { visited: 0 };
            traverse_with(&tree, &mut v, budget);
            v.visited
        };
        assert_eq!(count(0), 1);
        assert_eq!(count(1), 4);
        assert_eq!(count(2), 6);
        assert_eq!(count(10), 6);
    }

    /// Descends twice, exercising `Next: Copy`.
    struct Twice(usize);

    impl<N> VisitNode<N> for Twice
    where
        N: Composite,
        N::Children: TraverseChildren<Twice>,
    {
        fn visit_node(&mut self, _node: &N, next: Next<'_, N::Children>, _: ()) {
            self.0 += 1;
            next.descend(self, ());
            next.descend(self, ());
        }
    }

    #[test]
    fn test_next_may_be_called_more_than_once() {
        let tree = Branch {
            name: "r",
            children: (Leaf { name: "x" },),
        };
        let mut twice = Twice(0);
        traverse(&tree, &mut twice);
        assert_eq!(twice.0, 3);
    }

    #[test]
    fn test_array_children() {
        let tree = Branch {
            name: "r",
            children: [Leaf { name: "x" }, Leaf { name: "y" }],
        };
        let mut outline = Outline::default();
        traverse_with(&tree, &mut outline, 0usize);
        assert_eq!(outline.lines, vec!["r/2", "  x", "  y"]);
    }

    #[test]
    fn test_composites_are_traversable() {
        fn check<T: Traversable>(_: &T) {}
        check(&sample());
        assert!(is_traversable!(Branch<(Leaf,)>));
        assert!(is_traversable!(Leaf));
        assert!(is_traversable!(Branch<[Branch<(Leaf, Option<u8>)>; 2]>));
    }

    struct Opaque;

    assert_not_impl_any!(Branch<(Opaque,)>: Traversable);
    assert_not_impl_any!(Branch<(Leaf, Branch<(Leaf, Opaque)>)>: Traversable);

    #[test]
    fn test_untraversable_child_makes_node_untraversable() {
        assert!(!is_traversable!(Branch<(Opaque,)>));
        assert!(!is_traversable!(Branch<[Opaque; 3]>));
        assert!(!is_traversable!(Branch<(Leaf, Branch<(Leaf, Opaque)>)>));
    }
}
