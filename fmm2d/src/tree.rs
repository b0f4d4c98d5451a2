//! # Geometric Entities
//!
//! Passive bodies, cells and the root domain consumed by the expansion kernels. Cells reference
//! contiguous spans of a body arena and of a cell arena; building the tree that fills these arenas
//! is the caller's responsibility.
pub mod types;

mod body;
mod cell;
mod domain;
pub mod helpers;

pub use cell::{children_mut_of, parent_and_children_mut, split_pair_mut};
