//! FMM traits
use crate::tree::types::{Body, Cell, Domain};

use super::general::Scalar;

/// Access to the parameters shared by every kernel invocation.
pub trait Fmm
where
    Self::Scalar: Scalar,
{
    /// Floating point type of positions, charges and expansion coefficients.
    type Scalar;

    /// Number of retained expansion terms, P.
    fn expansion_order(&self) -> usize;

    /// Width of the smoothing buffer, D.
    fn buffer_width(&self) -> Self::Scalar;

    /// Root domain, only consulted by the smoothing weight.
    fn domain(&self) -> &Domain<Self::Scalar>;
}

/// Interface for source field translations.
pub trait SourceTranslation
where
    Self: Fmm,
{
    /// Particle to multipole translation, accumulates the multipole expansion of the bodies owned by a
    /// leaf cell about its center.
    ///
    /// # Arguments
    /// * `cell` - Leaf cell with a zeroed multipole expansion of length P.
    /// * `sources` - Source body arena indexed by `cell.bodies`.
    fn p2m(&self, cell: &mut Cell<Self::Scalar>, sources: &[Body<Self::Scalar>]);

    /// Multipole to multipole translation, accumulates the shifted expansions of each child into
    /// the parent.
    ///
    /// # Arguments
    /// * `parent` - Cell with a zeroed multipole expansion of length P.
    /// * `children` - The child cells, already resolved from `parent.children`.
    fn m2m(&self, parent: &mut Cell<Self::Scalar>, children: &[Cell<Self::Scalar>]);
}

/// Interface for source to target field translations.
pub trait SourceToTargetTranslation
where
    Self: Fmm,
{
    /// Multipole to local translation. The centers of `target` and `source` must differ.
    ///
    /// # Arguments
    /// * `target` - Cell receiving the local expansion.
    /// * `source` - Cell holding a populated multipole expansion.
    fn m2l(&self, target: &mut Cell<Self::Scalar>, source: &Cell<Self::Scalar>);

    /// Particle to local translation, the local expansion induced by the bodies of a source cell
    /// computed directly, without going through a multipole expansion.
    ///
    /// # Arguments
    /// * `target` - Cell receiving the local expansion.
    /// * `source` - Cell whose bodies generate the field.
    /// * `sources` - Source body arena indexed by `source.bodies`.
    fn p2l(
        &self,
        target: &mut Cell<Self::Scalar>,
        source: &Cell<Self::Scalar>,
        sources: &[Body<Self::Scalar>],
    );
}

/// Interface for target field translations.
pub trait TargetTranslation
where
    Self: Fmm,
{
    /// Local to local translation, accumulates the parent's local expansion re-centered at each
    /// child.
    ///
    /// # Arguments
    /// * `parent` - Cell with a populated local expansion.
    /// * `children` - The child cells, already resolved from `parent.children`.
    fn l2l(&self, parent: &Cell<Self::Scalar>, children: &mut [Cell<Self::Scalar>]);

    /// Multipole to particle translation, evaluates a source cell's multipole expansion directly at
    /// the bodies of a target cell.
    ///
    /// # Arguments
    /// * `target` - Cell owning the target bodies.
    /// * `targets` - Target body arena indexed by `target.bodies`.
    /// * `source` - Cell holding a populated multipole expansion.
    fn m2p(
        &self,
        target: &Cell<Self::Scalar>,
        targets: &mut [Body<Self::Scalar>],
        source: &Cell<Self::Scalar>,
    );

    /// Local to particle translation, evaluates the local expansion of a cell at the bodies it owns.
    ///
    /// # Arguments
    /// * `cell` - Cell with a populated local expansion.
    /// * `targets` - Target body arena indexed by `cell.bodies`.
    fn l2p(&self, cell: &Cell<Self::Scalar>, targets: &mut [Body<Self::Scalar>]);
}

/// Interface for direct particle to particle evaluation.
pub trait DirectEvaluation
where
    Self: Fmm,
{
    /// Smoothed particle to particle interaction. Each source term is scaled by the source's weight
    /// in `source`, the summed result by the target's weight in `target`.
    ///
    /// # Arguments
    /// * `target` - Cell owning the target bodies.
    /// * `targets` - Target body arena indexed by `target.bodies`.
    /// * `source` - Cell owning the source bodies.
    /// * `sources` - Source body arena indexed by `source.bodies`.
    fn p2p(
        &self,
        target: &Cell<Self::Scalar>,
        targets: &mut [Body<Self::Scalar>],
        source: &Cell<Self::Scalar>,
        sources: &[Body<Self::Scalar>],
    );

    /// Unweighted particle to particle interaction, the exact reference.
    ///
    /// # Arguments
    /// * `target` - Cell owning the target bodies.
    /// * `targets` - Target body arena indexed by `target.bodies`.
    /// * `source` - Cell owning the source bodies.
    /// * `sources` - Source body arena indexed by `source.bodies`.
    fn p2px(
        &self,
        target: &Cell<Self::Scalar>,
        targets: &mut [Body<Self::Scalar>],
        source: &Cell<Self::Scalar>,
        sources: &[Body<Self::Scalar>],
    );
}
