//! Product registrations for tuples and fixed-size arrays.
//!
//! Tuples of arity 0 through 12 are products (and composite child lists).
//! Each field is handed to the visitor with a clone of the extra argument.

use crate::composite::{ChildList, TraverseChildren};
use crate::fold::Fold;
use crate::shape::{Shape, ShapeKind, Tier};
use crate::traverse::Traverse;
use crate::visit::{Combine, Visit};

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! tuple_impls {
    ($($name:ident $idx:tt),*) => {
        impl<$($name),*> Shape for ($($name,)*) {
            const KIND: ShapeKind = ShapeKind::Product;
            const TIER: Tier = Tier::Fallback;
        }

        impl<V, X, $($name),*> Traverse<V, X> for ($($name,)*)
        where
            V: ?Sized $(+ Visit<$name, X>)*,
            X: Clone,
        {
            #[inline]
            #[allow(unused_variables)]
            fn traverse(&self, visitor: &mut V, extra: X) {
                $( <V as Visit<$name, X>>::visit(visitor, &self.$idx, extra.clone()); )*
            }
        }

        impl<A, F, X, $($name),*> Fold<A, F, X> for ($($name,)*)
        where
            F: ?Sized $(+ Combine<A, $name, X>)*,
            X: Clone,
        {
            #[inline]
            #[allow(unused_variables)]
            fn fold(&self, init: A, combiner: &mut F, extra: X) -> A {
                let acc = init;
                $( let acc = <F as Combine<A, $name, X>>::combine(combiner, acc, &self.$idx, extra.clone()); )*
                acc
            }
        }

        impl<$($name),*> ChildList for ($($name,)*) {
            const LEN: usize = count!($($name)*);
        }

        impl<V, X, $($name),*> TraverseChildren<V, X> for ($($name,)*)
        where
            V: ?Sized,
            X: Clone,
            $($name: Traverse<V, X>,)*
        {
            #[inline]
            #[allow(unused_variables)]
            fn traverse_children(&self, visitor: &mut V, extra: X) {
                $( self.$idx.traverse(visitor, extra.clone()); )*
            }
        }
    };
}

tuple_impls!();
tuple_impls!(T0 0);
tuple_impls!(T0 0, T1 1);
tuple_impls!(T0 0, T1 1, T2 2);
tuple_impls!(T0 0, T1 1, T2 2, T3 3);
tuple_impls!(T0 0, T1 1, T2 2, T3 3, T4 4);
tuple_impls!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
tuple_impls!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6);
tuple_impls!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7);
tuple_impls!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8);
tuple_impls!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9);
tuple_impls!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10);
tuple_impls!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10, T11 11);

impl<T, const N: usize> Shape for [T; N] {
    const KIND: ShapeKind = ShapeKind::Product;
    const TIER: Tier = Tier::Fallback;
}

impl<V, X, T, const N: usize> Traverse<V, X> for [T; N]
where
    V: Visit<T, X> + ?Sized,
    X: Clone,
{
    #[inline]
    fn traverse(&self, visitor: &mut V, extra: X) {
        for item in self {
            visitor.visit(item, extra.clone());
        }
    }
}

impl<A, F, X, T, const N: usize> Fold<A, F, X> for [T; N]
where
    F: Combine<A, T, X> + ?Sized,
    X: Clone,
{
    #[inline]
    fn fold(&self, init: A, combiner: &mut F, extra: X) -> A {
        self.iter()
            .fold(init, |acc, item| combiner.combine(acc, item, extra.clone()))
    }
}

impl<T, const N: usize> ChildList for [T; N] {
    const LEN: usize = N;
}

impl<V, X, T, const N: usize> TraverseChildren<V, X> for [T; N]
where
    V: ?Sized,
    X: Clone,
    T: Traverse<V, X>,
{
    #[inline]
    fn traverse_children(&self, visitor: &mut V, extra: X) {
        for child in self {
            child.traverse(visitor, extra.clone());
        }
    }
}
