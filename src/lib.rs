//! Shapewalk - static traverse and fold over algebraic data shapes
//!
//! # Overview
//!
//! Shapewalk visits the elements of a value according to its *shape*:
//!
//! - **Products** (tuples, arrays, derived structs): every field, in order
//! - **Sums** (`Result`, `Variant2`..`Variant8`, derived enums): the active
//!   alternative only
//! - **Optionals** (`Option`): the contained value, if present
//! - **Composites** (derived tree nodes): the node itself, with a
//!   continuation the visitor calls to descend into the children
//!
//! Which code runs for which element is decided entirely at compile time.
//! A visitor is an overload set: one `Visit<T, X>` impl per element type
//! it accepts.
//!
//! # Quick Start
//!
//! ```
//! use shapewalk::{Shape, Visit, fold, traverse};
//!
//! #[derive(Shape)]
//! struct Reading {
//!     sensor: &'static str,
//!     celsius: f64,
//!     fault: Option<u16>,
//! }
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl Visit<&'static str> for Log {
//!     fn visit(&mut self, value: &&'static str, _: ()) {
//!         self.0.push(format!("sensor {value}"));
//!     }
//! }
//!
//! impl Visit<f64> for Log {
//!     fn visit(&mut self, value: &f64, _: ()) {
//!         self.0.push(format!("{value:.1}C"));
//!     }
//! }
//!
//! impl Visit<Option<u16>> for Log {
//!     fn visit(&mut self, value: &Option<u16>, _: ()) {
//!         // An optional field is itself traversable.
//!         traverse(value, &mut |code: &u16, ()| self.0.push(format!("fault {code}")));
//!     }
//! }
//!
//! let reading = Reading { sensor: "t1", celsius: 21.5, fault: Some(7) };
//! let mut log = Log::default();
//! traverse(&reading, &mut log);
//! assert_eq!(log.0, ["sensor t1", "21.5C", "fault 7"]);
//!
//! let total = fold(&(1u8, 2u8, 3u8), 0u32, &mut |acc: u32, v: &u8, ()| acc + u32::from(*v));
//! assert_eq!(total, 6);
//! ```
//!
//! # Composite Trees
//!
//! ```
//! use shapewalk::{Composite, Next, TraverseChildren, VisitNode, traverse_with};
//!
//! #[derive(Composite)]
//! struct Dir<C> {
//!     name: &'static str,
//!     #[children]
//!     entries: C,
//! }
//!
//! #[derive(Composite)]
//! struct File {
//!     name: &'static str,
//! }
//!
//! #[derive(Default)]
//! struct Listing(String);
//!
//! impl<C: TraverseChildren<Listing, usize>> VisitNode<Dir<C>, usize> for Listing {
//!     fn visit_node(&mut self, dir: &Dir<C>, next: Next<'_, C>, depth: usize) {
//!         self.0 += &format!("{}{}/\n", "  ".repeat(depth), dir.name);
//!         next.descend(self, depth + 1);
//!     }
//! }
//!
//! impl VisitNode<File, usize> for Listing {
//!     fn visit_node(&mut self, file: &File, _: Next<'_, ()>, depth: usize) {
//!         self.0 += &format!("{}{}\n", "  ".repeat(depth), file.name);
//!     }
//! }
//!
//! let tree = Dir {
//!     name: "src",
//!     entries: (File { name: "lib.rs" }, Dir { name: "bin", entries: [File { name: "cli.rs" }] }),
//! };
//! let mut listing = Listing::default();
//! traverse_with(&tree, &mut listing, 0usize);
//! assert_eq!(listing.0, "src/\n  lib.rs\n  bin/\n    cli.rs\n");
//! ```
//!
//! # One Registration Per Type
//!
//! A derive and a hand-written registration for the same type conflict:
//!
//! ```compile_fail
//! use shapewalk::{Shape, traverse_via};
//!
//! #[derive(Shape)]
//! struct Celsius {
//!     degrees: (f64,),
//! }
//!
//! traverse_via!(impl Celsius => degrees: (f64,));
//! ```
//!
//! Traversing a type with no registration at all fails to compile, while
//! asking whether it is traversable answers `false`:
//!
//! ```compile_fail
//! use shapewalk::{Ignore, traverse};
//!
//! struct Opaque(u8);
//!
//! traverse(&Opaque(1), &mut Ignore);
//! ```
//!
//! ```
//! use shapewalk::is_traversable;
//!
//! struct Opaque(u8);
//!
//! const OPAQUE: bool = is_traversable!(Opaque);
//! assert!(!OPAQUE);
//! ```
//!
//! # Derive Restrictions
//!
//! `Shape` needs to know the active field statically, so unions are
//! rejected:
//!
//! ```compile_fail
//! #[derive(shapewalk::Shape)]
//! union Bits {
//!     int: u32,
//!     float: f32,
//! }
//! ```
//!
//! `Composite` only applies to structs:
//!
//! ```compile_fail
//! #[derive(shapewalk::Composite)]
//! enum Block {
//!     Paragraph,
//!     Break,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(shapewalk::Composite)]
//! union Slot {
//!     index: u32,
//!     weight: f32,
//! }
//! ```
//!
//! and a node has at most one `#[children]` field:
//!
//! ```compile_fail
//! #[derive(shapewalk::Composite)]
//! struct Split<L, R> {
//!     #[children]
//!     left: L,
//!     #[children]
//!     right: R,
//! }
//! ```
//!
//! The same node with a single children field compiles:
//!
//! ```
//! #[derive(shapewalk::Composite)]
//! struct Split<C> {
//!     label: &'static str,
//!     #[children]
//!     halves: C,
//! }
//!
//! const HALVES: bool = shapewalk::is_traversable!(Split<(Split<()>, Split<()>)>);
//! assert!(HALVES);
//! ```
//!
//! # Features
//!
//! - `derive` (default): `#[derive(Shape)]` and `#[derive(Composite)]`
//! - `std`: build `shapewalk-core` against `std` instead of `core` + `alloc`

pub use shapewalk_core::*;

#[cfg(feature = "derive")]
pub use shapewalk_macros::{Composite, Shape};
