//! # Finite integer sets
//!
//! This crate implements [`IntSet`](set::IntSet), a finite set of integers backed by a
//! membership bitmap, together with the algebra taught in a first course on sets:
//! union, difference, intersection, Cartesian products, and subset enumeration.
//!
//! The [`func`] module covers elementary functions: the Heaviside step function and
//! generic composition of unary functions. The [`lesson`] module holds the worked
//! examples printed by the demonstration binary.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod func;
pub mod lesson;
pub mod prelude;
pub mod product;
pub mod set;
mod tests;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;
