//! Capability predicates.
//!
//! `T: Traversable` holds iff `T` traverses with [`Ignore`], a visitor that
//! accepts anything. `T: Foldable<A>` holds iff `T` folds an `A` with
//! [`Ignore`] as the combiner; leave `A` out to ask "foldable for some
//! accumulator". Both are answered by the trait solver alone.
//!
//! For a `bool` usable in `const` context, see [`is_traversable!`] and
//! [`is_foldable!`].
//!
//! [`is_traversable!`]: crate::is_traversable
//! [`is_foldable!`]: crate::is_foldable

use crate::fold::Fold;
use crate::traverse::Traverse;
use crate::visit::Ignore;

/// Wildcard accumulator type for [`Foldable`].
///
/// Every built-in and derived fold is generic in its accumulator, so being
/// foldable into `Arbitrary` means being foldable into anything the combiner
/// accepts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Arbitrary;

/// Types that have exactly one traversal registration.
pub trait Traversable: Traverse<Ignore> {}

impl<T: Traverse<Ignore> + ?Sized> Traversable for T {}

/// Types that have exactly one fold registration accepting accumulator `A`.
pub trait Foldable<A = Arbitrary>: Fold<A, Ignore> {}

impl<A, T: Fold<A, Ignore> + ?Sized> Foldable<A> for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Variant3, is_foldable, is_traversable};
    use alloc::string::String;
    use static_assertions::{assert_impl_all, assert_not_impl_any, const_assert};

    struct NonTraversable;

    assert_impl_all!((char, i32, f32): Traversable, Foldable, Foldable<i32>);
    assert_impl_all!((f64, NonTraversable): Traversable);
    assert_impl_all!(Variant3<char, i32, f32>: Traversable, Foldable<char>);
    assert_impl_all!(Option<i32>: Traversable, Foldable);
    assert_impl_all!(str: Traversable, Foldable<usize>);
    assert_not_impl_any!(NonTraversable: Traversable, Foldable);
    assert_not_impl_any!(i32: Traversable, Foldable);

    const_assert!(is_traversable!((char, i32, f32)));
    const_assert!(is_traversable!((f64, NonTraversable)));
    const_assert!(is_traversable!(Option<NonTraversable>));
    const_assert!(!is_traversable!(NonTraversable));
    const_assert!(!is_traversable!(u64));
    const_assert!(is_foldable!((i32, i32), i32));
    const_assert!(is_foldable!(Variant3<i32, &'static str, ()>));
    const_assert!(is_foldable!(String, String));
    const_assert!(!is_foldable!(NonTraversable));

    #[test]
    fn test_predicates_at_runtime() {
        assert!(is_traversable!(Result<u8, NonTraversable>));
        assert!(!is_foldable!(NonTraversable, u8));
    }
}
