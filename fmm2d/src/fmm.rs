//! A two dimensional Laplace fast multipole kernel library.
mod builder;
pub mod constants;
mod direct;
mod eval;
mod field_translation;
pub mod helpers;
pub mod types;
pub mod verification;
mod weight;

pub use types::LaplaceFmm2d;
pub use weight::smoothing_weight;
