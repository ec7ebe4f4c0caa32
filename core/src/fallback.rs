//! Last-resort registrations for foreign types.
//!
//! Owners of a type should register it themselves (derive or home impl).
//! The impls here exist only for types nobody downstream is allowed to
//! register: strings are leaves visited as a whole, and smart pointers
//! traverse and fold as whatever they point to.

use alloc::{boxed::Box, rc::Rc, string::String, sync::Arc};

use crate::fold::Fold;
use crate::shape::{Shape, ShapeKind, Tier};
use crate::traverse::Traverse;
use crate::visit::{Combine, Visit};

macro_rules! leaf_impls {
    ($($ty:ty),+ $(,)?) => {$(
        impl Shape for $ty {
            const KIND: ShapeKind = ShapeKind::Leaf;
            const TIER: Tier = Tier::Fallback;
        }

        impl<V, X> Traverse<V, X> for $ty
        where
            V: Visit<$ty, X> + ?Sized,
        {
            #[inline]
            fn traverse(&self, visitor: &mut V, extra: X) {
                visitor.visit(self, extra)
            }
        }

        impl<A, F, X> Fold<A, F, X> for $ty
        where
            F: Combine<A, $ty, X> + ?Sized,
        {
            #[inline]
            fn fold(&self, init: A, combiner: &mut F, extra: X) -> A {
                combiner.combine(init, self, extra)
            }
        }
    )+};
}

leaf_impls!(str, String);

macro_rules! pointer_impls {
    ($($ptr:ident),+ $(,)?) => {$(
        impl<T: Shape + ?Sized> Shape for $ptr<T> {
            const KIND: ShapeKind = T::KIND;
            const TIER: Tier = T::TIER;
        }

        impl<V, X, T> Traverse<V, X> for $ptr<T>
        where
            V: ?Sized,
            T: Traverse<V, X> + ?Sized,
        {
            #[inline]
            fn traverse(&self, visitor: &mut V, extra: X) {
                (**self).traverse(visitor, extra)
            }
        }

        impl<A, F, X, T> Fold<A, F, X> for $ptr<T>
        where
            F: ?Sized,
            T: Fold<A, F, X> + ?Sized,
        {
            #[inline]
            fn fold(&self, init: A, combiner: &mut F, extra: X) -> A {
                (**self).fold(init, combiner, extra)
            }
        }
    )+};
}

pointer_impls!(Box, Rc, Arc);
