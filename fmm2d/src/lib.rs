//! # Two Dimensional Laplace Fast Multipole Kernels
//!
//! Truncated complex-plane multipole and local expansions for the free-space two dimensional
//! Laplace kernel, `phi(r) = -q log(r)`, based on \[1\].
//!
//! Notable features of this library are:
//! * The full set of single level field translations, P2M, M2M, M2L, P2L, L2L, M2P and L2P.
//! * Direct evaluation (P2P) used both as a reference and as a near field correction.
//! * A cubic smoothing weight that blends contributions across cell boundaries rather than
//!   partitioning space with a hard cutoff.
//! * Rayon parallel batch evaluation over externally supplied interaction lists.
//!
//! Tree construction and interaction list construction are left to the caller, the library
//! operates on cells and bodies whose geometry is already finalised.
//!
//! ## Example
//! ```
//! use fmm2d::{Body, Cell, Domain, Laplace2dBuilder};
//! use fmm2d::traits::fmm::{Fmm, SourceTranslation, SourceToTargetTranslation, TargetTranslation};
//!
//! let fmm = Laplace2dBuilder::new()
//!     .parameters(8, 1.0)
//!     .unwrap()
//!     .domain(Domain::new([0.0, 0.0], 10.0))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let sources = vec![Body::new(0, [6.5, 0.0], 1.0)];
//! let mut targets = vec![Body::new(0, [-6.5, 0.0], 1.0)];
//!
//! let mut source = Cell::leaf([6.5, 0.0], 2.0, 0..1, fmm.expansion_order());
//! let mut target = Cell::leaf([-6.5, 0.0], 2.0, 0..1, fmm.expansion_order());
//!
//! fmm.p2m(&mut source, &sources);
//! fmm.m2l(&mut target, &source);
//! fmm.l2p(&target, &mut targets);
//!
//! assert!((targets[0].potential + 13f64.ln()).abs() < 1e-8);
//! ```
//!
//! ## References
//! \[1\] Greengard, L., & Rokhlin, V. (1987). A fast algorithm for particle simulations. Journal of Computational Physics, 73(2), 325-348.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod fmm;
pub mod traits;
pub mod tree;

// Public API
#[doc(inline)]
pub use fmm::types::Laplace2dBuilder;
#[doc(inline)]
pub use fmm::types::LaplaceFmm2d;
#[doc(inline)]
pub use fmm::verification::ReferenceScene;
#[doc(inline)]
pub use traits::types::FmmError;
#[doc(inline)]
pub use tree::types::{Body, Cell, Domain};
