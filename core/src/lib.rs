//! Static traverse and fold dispatch over algebraic data shapes.
//!
//! A value is *traversable* when its type has exactly one registered
//! [`Shape`] and a matching [`Traverse`] implementation. Traversal invokes a
//! [`Visit`]or once per element: every field of a product in order, the
//! active alternative of a sum, the contained value of a present optional.
//! [`Fold`] does the same while threading an accumulator through a
//! [`Combine`]r. Composite trees ([`Composite`]) hand their visitor a
//! [`Next`] continuation so the visitor decides whether and how to descend.
//!
//! All dispatch is resolved by the trait solver; nothing here is dynamic.
//!
//! # Example
//!
//! ```
//! use shapewalk_core::{Visit, fold, traverse};
//!
//! struct Collect(Vec<String>);
//!
//! impl Visit<i32> for Collect {
//!     fn visit(&mut self, value: &i32, _: ()) {
//!         self.0.push(format!("int {value}"));
//!     }
//! }
//!
//! impl Visit<char> for Collect {
//!     fn visit(&mut self, value: &char, _: ()) {
//!         self.0.push(format!("char {value}"));
//!     }
//! }
//!
//! let mut out = Collect(Vec::new());
//! traverse(&(1, 'x', 2), &mut out);
//! assert_eq!(out.0, ["int 1", "char x", "int 2"]);
//!
//! let sum = fold(&(2, 4), 0, &mut |acc: i32, v: &i32, ()| acc + v);
//! assert_eq!(sum, 6);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod composite;
mod fallback;
mod fallible;
mod fold;
mod macros;
mod predicate;
mod product;
mod shape;
mod sum;
mod traverse;
mod visit;

pub use composite::{ChildList, Composite, Next, TraverseChildren, traverse_node};
pub use fallible::{
    Fallible, FallibleCombine, TryCombine, TryTraverseChildren, TryVisit, TryVisitNode, try_fold,
    try_fold_with, try_traverse, try_traverse_with,
};
pub use fold::{Fold, fold, fold_with};
pub use predicate::{Arbitrary, Foldable, Traversable};
pub use shape::{Shape, ShapeKind, Tier};
pub use sum::{Variant2, Variant3, Variant4, Variant5, Variant6, Variant7, Variant8};
pub use traverse::{Traverse, traverse, traverse_with};
pub use visit::{Combine, Ignore, Visit, VisitNode};

#[doc(hidden)]
pub mod __private {
    pub use core::marker::PhantomData;
}
