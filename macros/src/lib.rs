//! Derive macros for shapewalk registrations.
//!
//! - `#[derive(Shape)]` - register a struct as a product or an enum as a sum
//! - `#[derive(Composite)]` - register a struct as a composite tree node
//!
//! Both register at the intrinsic tier. A type may carry only one
//! registration, so deriving here and also writing a home-tier impl for the
//! same type is a compile error.

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod composite;
mod shape;

/// Register a struct as a product or an enum as a sum.
///
/// Generates `Shape`, `Traverse` and `Fold` implementations. The visitor
/// must accept every field type.
///
/// # Products
///
/// ```ignore
/// use shapewalk::{Shape, traverse};
///
/// #[derive(Shape)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut seen = Vec::new();
/// traverse(&Point { x: 1, y: 2 }, &mut |v: &i32, ()| seen.push(*v));
/// assert_eq!(seen, [1, 2]);
/// ```
///
/// Fields are visited in declaration order, each with a clone of the extra
/// argument.
///
/// # Sums
///
/// Only the active variant is visited:
/// - a unit variant is visited zero times (fold returns the accumulator)
/// - a single-field variant visits its field once
/// - a multi-field variant visits each field in order
///
/// ```ignore
/// #[derive(Shape)]
/// enum Token {
///     Number(i64),
///     Word { text: String },
///     Pair(i64, String),
///     End,
/// }
/// ```
///
/// # Crate path
///
/// Generated code refers to `::shapewalk`. Callers depending on
/// `shapewalk-core` directly (or on a re-export) can override it:
///
/// ```ignore
/// #[derive(Shape)]
/// #[shapewalk(crate = "shapewalk_core")]
/// struct Pair(u8, u8);
/// ```
///
/// # Restrictions
///
/// - Unions are rejected
#[proc_macro_derive(Shape, attributes(shapewalk))]
pub fn derive_shape(item: TokenStream) -> TokenStream {
    shape::derive_shape_impl(item)
}

/// Register a struct as a composite tree node.
///
/// Mark at most one field `#[children]`; its type (a tuple or array of
/// traversable nodes) becomes `Composite::Children`. Without a marked field
/// the node is a leaf with `()` children.
///
/// ```ignore
/// use shapewalk::Composite;
///
/// #[derive(Composite)]
/// struct Div<C> {
///     class: &'static str,
///     #[children]
///     children: C,
/// }
///
/// #[derive(Composite)]
/// struct Br;
/// ```
///
/// Traversing a node calls `VisitNode::visit_node` on the visitor with a
/// `Next` continuation over the children; see `shapewalk::Next`.
///
/// # Restrictions
///
/// - Only structs (enums and unions are rejected)
/// - At most one `#[children]` field, and the attribute takes no arguments
#[proc_macro_derive(Composite, attributes(children, shapewalk))]
pub fn derive_composite(item: TokenStream) -> TokenStream {
    composite::derive_composite_impl(item)
}
