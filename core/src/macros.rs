//! Declarative macros: const predicates and home-tier delegation.

/// `true` iff the concrete type implements [`Traversable`](crate::Traversable).
///
/// Usable in `const` context. The type must be concrete at the call site;
/// inside generic code use a `T: Traversable` bound instead.
///
/// ```
/// use shapewalk_core::is_traversable;
///
/// struct Opaque;
///
/// const PAIR: bool = is_traversable!((f64, Opaque));
/// const OPAQUE: bool = is_traversable!(Opaque);
/// assert!(PAIR);
/// assert!(!OPAQUE);
/// ```
#[macro_export]
macro_rules! is_traversable {
    ($ty:ty $(,)?) => {{
        #[allow(dead_code)]
        trait DoesNotTraverse {
            const TRAVERSABLE: bool = false;
        }
        impl<T: ?Sized> DoesNotTraverse for T {}

        struct Probe<T: ?Sized>($crate::__private::PhantomData<T>);

        #[allow(dead_code)]
        impl<T: ?Sized + $crate::Traversable> Probe<T> {
            const TRAVERSABLE: bool = true;
        }

        <Probe<$ty>>::TRAVERSABLE
    }};
}

/// `true` iff the concrete type implements [`Foldable`](crate::Foldable),
/// either for the given accumulator type or for [`Arbitrary`](crate::Arbitrary).
///
/// ```
/// use shapewalk_core::is_foldable;
///
/// const ANY: bool = is_foldable!(Option<u8>);
/// const INTO_F64: bool = is_foldable!((i32, f64), f64);
/// const NOPE: bool = is_foldable!(u8);
/// assert!(ANY && INTO_F64 && !NOPE);
/// ```
#[macro_export]
macro_rules! is_foldable {
    ($ty:ty $(,)?) => {
        $crate::is_foldable!($ty, $crate::Arbitrary)
    };
    ($ty:ty, $acc:ty $(,)?) => {{
        #[allow(dead_code)]
        trait DoesNotFold {
            const FOLDABLE: bool = false;
        }
        impl<T: ?Sized> DoesNotFold for T {}

        struct Probe<T: ?Sized>($crate::__private::PhantomData<T>);

        #[allow(dead_code)]
        impl<T: ?Sized + $crate::Foldable<$acc>> Probe<T> {
            const FOLDABLE: bool = true;
        }

        <Probe<$ty>>::FOLDABLE
    }};
}

/// Register a type at the [home tier](crate::Tier::Home) by delegating
/// traversal and fold to one of its fields.
///
/// The field's type decides the shape; the outer type just forwards.
///
/// ```
/// use shapewalk_core::{Shape, Tier, Variant2, Visit, traverse, traverse_via};
///
/// pub struct Either<L, R> {
///     value: Variant2<L, R>,
/// }
///
/// traverse_via!(impl[L, R] Either<L, R> => value: Variant2<L, R>);
///
/// struct Print(String);
///
/// impl Visit<String> for Print {
///     fn visit(&mut self, value: &String, _: ()) {
///         self.0 = format!("left {value}");
///     }
/// }
///
/// impl Visit<i32> for Print {
///     fn visit(&mut self, value: &i32, _: ()) {
///         self.0 = format!("right {value}");
///     }
/// }
///
/// let e: Either<String, i32> = Either { value: Variant2::V1(3) };
/// let mut print = Print(String::new());
/// traverse(&e, &mut print);
/// assert_eq!(print.0, "right 3");
/// assert_eq!(<Either<String, i32> as Shape>::TIER, Tier::Home);
/// ```
///
/// Registering the same type twice is rejected at compile time:
///
/// ```compile_fail
/// use shapewalk_core::traverse_via;
///
/// pub struct Wrapper {
///     inner: (u8, u8),
/// }
///
/// traverse_via!(impl Wrapper => inner: (u8, u8));
/// traverse_via!(impl Wrapper => inner: (u8, u8));
/// ```
#[macro_export]
macro_rules! traverse_via {
    (impl [$($generics:tt)+] $ty:ty => $field:tt : $field_ty:ty) => {
        $crate::traverse_via!(@register [$($generics)+,] $ty => $field : $field_ty);
    };
    (impl $ty:ty => $field:tt : $field_ty:ty) => {
        $crate::traverse_via!(@register [] $ty => $field : $field_ty);
    };
    (@register [$($generics:tt)*] $ty:ty => $field:tt : $field_ty:ty) => {
        impl<$($generics)*> $crate::Shape for $ty {
            const KIND: $crate::ShapeKind = <$field_ty as $crate::Shape>::KIND;
            const TIER: $crate::Tier = $crate::Tier::Home;
        }

        impl<$($generics)* __V, __X> $crate::Traverse<__V, __X> for $ty
        where
            __V: ?Sized,
            $field_ty: $crate::Traverse<__V, __X>,
        {
            #[inline]
            fn traverse(&self, visitor: &mut __V, extra: __X) {
                $crate::Traverse::traverse(&self.$field, visitor, extra)
            }
        }

        impl<$($generics)* __A, __F, __X> $crate::Fold<__A, __F, __X> for $ty
        where
            __F: ?Sized,
            $field_ty: $crate::Fold<__A, __F, __X>,
        {
            #[inline]
            fn fold(&self, init: __A, combiner: &mut __F, extra: __X) -> __A {
                $crate::Fold::fold(&self.$field, init, combiner, extra)
            }
        }
    };
}
