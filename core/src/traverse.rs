use crate::shape::Shape;

/// Single-pass, read-only visit of a value's elements.
///
/// Implemented for every registered shape:
/// - products call the visitor once per field, left to right
/// - sums call it once, on the active alternative
/// - optionals call it once when present and never when absent
/// - composites call [`VisitNode::visit_node`] once and leave the children
///   to the node's continuation
///
/// A type that is not registered cannot be traversed:
///
/// ```compile_fail
/// struct Opaque;
/// shapewalk_core::traverse(&Opaque, &mut shapewalk_core::Ignore);
/// ```
///
/// [`VisitNode::visit_node`]: crate::VisitNode::visit_node
pub trait Traverse<V: ?Sized, X = ()>: Shape {
    fn traverse(&self, visitor: &mut V, extra: X);
}

/// Traverse `value`, invoking `visitor` on each element it reaches.
#[inline]
pub fn traverse<T, V>(value: &T, visitor: &mut V)
where
    T: Traverse<V> + ?Sized,
    V: ?Sized,
{
    value.traverse(visitor, ())
}

/// Like [`traverse`], forwarding `extra` to every visitor call.
#[inline]
pub fn traverse_with<T, V, X>(value: &T, visitor: &mut V, extra: X)
where
    T: Traverse<V, X> + ?Sized,
    V: ?Sized,
{
    value.traverse(visitor, extra)
}
