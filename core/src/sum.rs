//! Sum and optional registrations.
//!
//! `Option` is the optional shape. `Result` and the generated
//! `Variant2`..`Variant8` enums are sums: exactly one alternative is active
//! and only that one is visited. The visitor impl is chosen by the
//! alternative's static type, so callers never switch on a tag themselves.

use crate::fold::Fold;
use crate::shape::{Shape, ShapeKind, Tier};
use crate::traverse::Traverse;
use crate::visit::{Combine, Visit};

impl<T> Shape for Option<T> {
    const KIND: ShapeKind = ShapeKind::Optional;
    const TIER: Tier = Tier::Fallback;
}

impl<V, X, T> Traverse<V, X> for Option<T>
where
    V: Visit<T, X> + ?Sized,
{
    #[inline]
    fn traverse(&self, visitor: &mut V, extra: X) {
        if let Some(value) = self {
            visitor.visit(value, extra);
        }
    }
}

impl<A, F, X, T> Fold<A, F, X> for Option<T>
where
    F: Combine<A, T, X> + ?Sized,
{
    #[inline]
    fn fold(&self, init: A, combiner: &mut F, extra: X) -> A {
        match self {
            Some(value) => combiner.combine(init, value, extra),
            None => init,
        }
    }
}

impl<T, E> Shape for Result<T, E> {
    const KIND: ShapeKind = ShapeKind::Sum;
    const TIER: Tier = Tier::Fallback;
}

impl<V, X, T, E> Traverse<V, X> for Result<T, E>
where
    V: Visit<T, X> + Visit<E, X> + ?Sized,
{
    #[inline]
    fn traverse(&self, visitor: &mut V, extra: X) {
        match self {
            Ok(value) => <V as Visit<T, X>>::visit(visitor, value, extra),
            Err(error) => <V as Visit<E, X>>::visit(visitor, error, extra),
        }
    }
}

impl<A, F, X, T, E> Fold<A, F, X> for Result<T, E>
where
    F: Combine<A, T, X> + Combine<A, E, X> + ?Sized,
{
    #[inline]
    fn fold(&self, init: A, combiner: &mut F, extra: X) -> A {
        match self {
            Ok(value) => <F as Combine<A, T, X>>::combine(combiner, init, value, extra),
            Err(error) => <F as Combine<A, E, X>>::combine(combiner, init, error, extra),
        }
    }
}

macro_rules! variant_types {
    ($(#[$meta:meta])* $name:ident { $($alt:ident($ty:ident) = $idx:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name<$($ty),+> {
            $($alt($ty)),+
        }

        impl<$($ty),+> $name<$($ty),+> {
            /// Position of the active alternative.
            pub fn index(&self) -> usize {
                match self {
                    $($name::$alt(_) => $idx),+
                }
            }
        }

        impl<$($ty),+> Shape for $name<$($ty),+> {
            const KIND: ShapeKind = ShapeKind::Sum;
            const TIER: Tier = Tier::Home;
        }

        impl<V, X, $($ty),+> Traverse<V, X> for $name<$($ty),+>
        where
            V: ?Sized $(+ Visit<$ty, X>)+,
        {
            #[inline]
            fn traverse(&self, visitor: &mut V, extra: X) {
                match self {
                    $($name::$alt(value) => <V as Visit<$ty, X>>::visit(visitor, value, extra)),+
                }
            }
        }

        impl<A, F, X, $($ty),+> Fold<A, F, X> for $name<$($ty),+>
        where
            F: ?Sized $(+ Combine<A, $ty, X>)+,
        {
            #[inline]
            fn fold(&self, init: A, combiner: &mut F, extra: X) -> A {
                match self {
                    $($name::$alt(value) => <F as Combine<A, $ty, X>>::combine(combiner, init, value, extra)),+
                }
            }
        }
    };
}

variant_types! {
    /// A sum of two alternatives.
    Variant2 { V0(T0) = 0, V1(T1) = 1 }
}
variant_types! {
    /// A sum of three alternatives.
    Variant3 { V0(T0) = 0, V1(T1) = 1, V2(T2) = 2 }
}
variant_types! {
    Variant4 { V0(T0) = 0, V1(T1) = 1, V2(T2) = 2, V3(T3) = 3 }
}
variant_types! {
    Variant5 { V0(T0) = 0, V1(T1) = 1, V2(T2) = 2, V3(T3) = 3, V4(T4) = 4 }
}
variant_types! {
    Variant6 { V0(T0) = 0, V1(T1) = 1, V2(T2) = 2, V3(T3) = 3, V4(T4) = 4, V5(T5) = 5 }
}
variant_types! {
    Variant7 {
        V0(T0) = 0, V1(T1) = 1, V2(T2) = 2, V3(T3) = 3, V4(T4) = 4, V5(T5) = 5, V6(T6) = 6,
    }
}
variant_types! {
    Variant8 {
        V0(T0) = 0, V1(T1) = 1, V2(T2) = 2, V3(T3) = 3, V4(T4) = 4, V5(T5) = 5, V6(T6) = 6,
        V7(T7) = 7,
    }
}
