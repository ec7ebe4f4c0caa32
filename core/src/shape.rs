//! Shape registration.
//!
//! Every type that can be traversed or folded carries exactly one [`Shape`]
//! implementation. `Shape` is a supertrait of both [`Traverse`] and
//! [`Fold`], so registering a type twice, at any combination of tiers,
//! fails to compile with a conflicting-implementation error instead of
//! silently preferring one.
//!
//! [`Traverse`]: crate::Traverse
//! [`Fold`]: crate::Fold

use core::fmt;

use static_assertions::const_assert;

/// The closed set of shapes the dispatch engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Fixed-arity ordered fields: tuples, arrays, derived structs.
    /// Every field is visited once, in declaration order.
    Product,

    /// Exactly one active alternative: `Result`, `VariantN`, derived enums.
    Sum,

    /// Present or absent: `Option`.
    Optional,

    /// A tree node whose children are visited only through its continuation.
    Composite,

    /// An opaque value visited as a whole, such as `String`.
    Leaf,
}

impl ShapeKind {
    /// Returns a human-readable name for this shape.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Product => "product",
            ShapeKind::Sum => "sum",
            ShapeKind::Optional => "optional",
            ShapeKind::Composite => "composite",
            ShapeKind::Leaf => "leaf",
        }
    }

    /// How many times a traversal of this shape may invoke the visitor.
    pub fn visits(self) -> &'static str {
        match self {
            ShapeKind::Product => "once per field, in order",
            ShapeKind::Sum => "once, on the active alternative",
            ShapeKind::Optional => "once if present, never if absent",
            ShapeKind::Composite => "once on the node; children only through `next`",
            ShapeKind::Leaf => "once, on the value itself",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a registration lives.
///
/// Ordered from highest to lowest precedence. Coherence guarantees at most
/// one registration per type, so precedence only documents which mechanism
/// a type should use; it never breaks a tie at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Attached to the type definition itself (`#[derive(Shape)]`,
    /// `#[derive(Composite)]`).
    Intrinsic,

    /// Written by hand, or with `traverse_via!`, in the crate that defines
    /// the type.
    Home,

    /// Provided by this crate for foreign types that cannot be modified:
    /// tuples, arrays, `Option`, `Result`, strings and smart pointers.
    Fallback,
}

impl Tier {
    /// Lower is searched first.
    pub const fn precedence(self) -> u8 {
        match self {
            Tier::Intrinsic => 0,
            Tier::Home => 1,
            Tier::Fallback => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Intrinsic => "intrinsic",
            Tier::Home => "home",
            Tier::Fallback => "fallback",
        }
    }
}

const_assert!(Tier::Intrinsic.precedence() < Tier::Home.precedence());
const_assert!(Tier::Home.precedence() < Tier::Fallback.precedence());

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The registration every traversable or foldable type must carry.
///
/// # Ambiguity
///
/// A second registration for the same type does not compile:
///
/// ```compile_fail
/// use shapewalk_core::{Shape, ShapeKind, Tier};
///
/// struct Meters(f64);
///
/// impl Shape for Meters {
///     const KIND: ShapeKind = ShapeKind::Leaf;
///     const TIER: Tier = Tier::Home;
/// }
///
/// impl Shape for Meters {
///     const KIND: ShapeKind = ShapeKind::Product;
///     const TIER: Tier = Tier::Home;
/// }
/// ```
pub trait Shape {
    const KIND: ShapeKind;
    const TIER: Tier;
}
