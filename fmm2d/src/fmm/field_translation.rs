//! Field translations, expansion algebra over the complex plane.
//!
//! A body at offset `z` from an expansion center enters the multipole expansion as the terms
//! `q z^n / n!`, and a local expansion is evaluated as `sum L[n] z^n / n!`. All powers and
//! factorials are built incrementally.
mod source;
mod source_to_target;
mod target;
