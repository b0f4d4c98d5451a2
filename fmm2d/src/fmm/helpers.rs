//! Helper Functions
use itertools::Itertools;

use crate::{
    fmm::types::RelativeError,
    traits::{general::Scalar, types::FmmError},
    tree::types::{Body, Cell},
};

/// Relative L2 error in potential and force of `approx` measured against `reference`, bodies are
/// compared pairwise in order.
///
/// # Arguments
/// * `approx` - Bodies holding the approximated potential and force.
/// * `reference` - Bodies holding the reference potential and force.
pub fn relative_l2_error<T: Scalar>(
    approx: &[Body<T>],
    reference: &[Body<T>],
) -> Result<RelativeError<T>, FmmError> {
    if approx.len() != reference.len() {
        return Err(FmmError::Failed(format!(
            "cannot compare {} bodies against {} reference bodies",
            approx.len(),
            reference.len()
        )));
    }

    let mut p_dif = T::zero();
    let mut p_nrm = T::zero();
    let mut f_dif = T::zero();
    let mut f_nrm = T::zero();

    for (a, r) in approx.iter().zip_eq(reference.iter()) {
        p_dif += (a.potential - r.potential) * (a.potential - r.potential);
        p_nrm += r.potential * r.potential;
        f_dif += (a.force[0] - r.force[0]) * (a.force[0] - r.force[0])
            + (a.force[1] - r.force[1]) * (a.force[1] - r.force[1]);
        f_nrm += r.force[0] * r.force[0] + r.force[1] * r.force[1];
    }

    if p_nrm == T::zero() || f_nrm == T::zero() {
        return Err(FmmError::Failed(
            "reference potential or force has zero norm".to_string(),
        ));
    }

    Ok(RelativeError {
        potential: (p_dif / p_nrm).sqrt(),
        force: (f_dif / f_nrm).sqrt(),
    })
}

/// Split a body arena into the disjoint mutable spans owned by each of `cells`, so that the spans
/// can be written concurrently. Cells owning no bodies are skipped.
///
/// # Arguments
/// * `cells` - Cells whose body spans are requested.
/// * `bodies` - Body arena indexed by the spans.
pub fn disjoint_body_spans<'a, 'b, T, I>(
    cells: I,
    bodies: &'b mut [Body<T>],
) -> Result<Vec<(&'a Cell<T>, &'b mut [Body<T>])>, FmmError>
where
    T: 'a,
    I: IntoIterator<Item = &'a Cell<T>>,
{
    let sorted = cells
        .into_iter()
        .filter(|c| !c.bodies.is_empty())
        .sorted_by_key(|c| c.bodies.start)
        .collect_vec();

    let mut spans = Vec::with_capacity(sorted.len());
    let mut rest = bodies;
    let mut offset = 0;

    for cell in sorted {
        if cell.bodies.start < offset {
            return Err(FmmError::Failed(format!(
                "body span {:?} overlaps a preceding span ending at {}",
                cell.bodies, offset
            )));
        }
        if cell.bodies.end - offset > rest.len() {
            return Err(FmmError::Failed(format!(
                "body span {:?} exceeds an arena of {} bodies",
                cell.bodies,
                offset + rest.len()
            )));
        }

        let (_, tail) = std::mem::take(&mut rest).split_at_mut(cell.bodies.start - offset);
        let (span, tail) = tail.split_at_mut(cell.bodies.len());
        spans.push((cell, span));
        rest = tail;
        offset = cell.bodies.end;
    }

    Ok(spans)
}
