//! Data structures for bodies, cells and domains.
use std::ops::Range;

use num_complex::Complex;

/// A point charge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body<T> {
    /// Identifier assigned by whoever populates the scene.
    pub index: usize,

    /// Position in the plane.
    pub position: [T; 2],

    /// Charge.
    pub charge: T,

    /// Accumulated potential, kernels add into it.
    pub potential: T,

    /// Accumulated force, kernels add into it.
    pub force: [T; 2],
}

/// A square region referencing a contiguous span of bodies and a contiguous span of child cells,
/// carrying its multipole and local expansion coefficients.
#[derive(Clone, Debug, Default)]
pub struct Cell<T> {
    /// Center of the cell.
    pub center: [T; 2],

    /// Half width of the cell, also the reference scale of the smoothing buffer.
    pub radius: T,

    /// Span of owned bodies in a body arena.
    pub bodies: Range<usize>,

    /// Span of child cells in a cell arena.
    pub children: Range<usize>,

    /// Multipole expansion coefficients, of length equal to the expansion order.
    pub multipole: Vec<Complex<T>>,

    /// Local expansion coefficients, of length equal to the expansion order.
    pub local: Vec<Complex<T>>,

    /// Indices of source cells interacting with this cell through M2L, supplied externally.
    pub m2l_list: Vec<usize>,

    /// Indices of source cells interacting with this cell through P2P, supplied externally.
    pub p2p_list: Vec<usize>,
}

/// Square root domain, used to detect bodies lying on the outer boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Domain<T> {
    /// Center of the domain.
    pub center: [T; 2],

    /// Half width of the domain.
    pub radius: T,
}
