//! Data structures for the two dimensional Laplace FMM
use crate::tree::types::Domain;

/// Immutable configuration shared by every kernel invocation, expansion order P, smoothing buffer
/// width D and the root domain. Kernels are implemented as methods on this type.
#[derive(Clone, Debug)]
pub struct LaplaceFmm2d<T> {
    /// The expansion order of the FMM.
    pub expansion_order: usize,

    /// Width of the smoothing buffer.
    pub buffer_width: T,

    /// Root domain, bodies within `buffer_width` of its edge are never faded.
    pub domain: Domain<T>,
}

/// Builder for [`LaplaceFmm2d`], validating each parameter as it is supplied.
#[derive(Clone, Debug, Default)]
pub struct Laplace2dBuilder<T> {
    /// The expansion order of the FMM.
    pub expansion_order: Option<usize>,

    /// Width of the smoothing buffer.
    pub buffer_width: Option<T>,

    /// Root domain.
    pub domain: Option<Domain<T>>,
}

/// Relative L2 error of an approximation against a reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelativeError<T> {
    /// Error in potential, `sqrt(sum (p - p_ref)^2 / sum p_ref^2)`.
    pub potential: T,

    /// Error in force, computed over both force components.
    pub force: T,
}
