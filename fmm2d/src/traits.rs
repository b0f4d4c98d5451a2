//! # Trait Definitions
pub mod fmm;
pub mod general;
pub mod types;
