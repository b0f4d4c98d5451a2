//! End to end verification on a small fixed scene
use log::info;

use crate::{
    fmm::{
        helpers::relative_l2_error,
        types::{LaplaceFmm2d, RelativeError},
    },
    traits::{
        fmm::{DirectEvaluation, SourceToTargetTranslation, SourceTranslation, TargetTranslation},
        general::Scalar,
        types::FmmError,
    },
    tree::types::{Body, Cell},
};

/// A single unit charge at (6.5, 0) seen by a single target at (-6.5, 0) through two source
/// cells, centered at (8, 0) and (4, 0), and two target cells, centered at (-8, 0) and (-4, 0),
/// all of radius 2. The adjacent pair interacts directly, the remaining pairs through M2L.
pub struct ReferenceScene<T>
where
    T: Scalar,
{
    fmm: LaplaceFmm2d<T>,
    sources: Vec<Body<T>>,
    targets: Vec<Body<T>>,
    source_cells: [Cell<T>; 2],
    target_cells: [Cell<T>; 2],
}

impl<T> ReferenceScene<T>
where
    T: Scalar,
{
    /// Lay out the scene for a given configuration.
    ///
    /// # Arguments
    /// * `fmm` - Configuration, the scene assumes its domain encloses (-10, 10) on each axis.
    pub fn new(fmm: LaplaceFmm2d<T>) -> Self {
        let p = fmm.expansion_order;
        // Coordinates in half units
        let x = |halves: usize| T::from_index(halves) / T::from_index(2);
        let zero = T::zero();
        let radius = x(4);

        let sources = vec![Body::new(0, [x(13), zero], T::one())];
        let targets = vec![Body::new(0, [-x(13), zero], T::one())];

        let source_cells = [
            Cell::leaf([x(16), zero], radius, 0..1, p),
            Cell::leaf([x(8), zero], radius, 0..1, p),
        ];
        let target_cells = [
            Cell::leaf([-x(16), zero], radius, 0..1, p),
            Cell::leaf([-x(8), zero], radius, 0..1, p),
        ];

        Self {
            fmm,
            sources,
            targets,
            source_cells,
            target_cells,
        }
    }

    /// Evaluate the scene through the expansions and directly, returning the relative error of
    /// the former against the latter. Each call starts from zeroed expansions and accumulators.
    pub fn run(&mut self) -> Result<RelativeError<T>, FmmError> {
        let fmm = &self.fmm;
        let p = fmm.expansion_order;

        self.targets.iter_mut().for_each(|b| b.reset());
        for cell in self.source_cells.iter_mut().chain(self.target_cells.iter_mut()) {
            cell.reset_expansions(p);
        }

        let [cj, cj2] = &mut self.source_cells;
        let [ci, ci2] = &mut self.target_cells;

        fmm.p2m(cj, &self.sources);
        fmm.p2m(cj2, &self.sources);

        // The adjacent pair (ci2, cj2) is left to the near field
        fmm.m2l(ci, cj);
        fmm.m2l(ci, cj2);
        fmm.m2l(ci2, cj);

        let mut approx = self.targets.clone();
        fmm.l2p(ci, &mut approx);
        fmm.l2p(ci2, &mut approx);
        fmm.p2p(ci2, &mut approx, cj2, &self.sources);

        let mut direct = self.targets.clone();
        fmm.p2px(ci, &mut direct, cj, &self.sources);

        let error = relative_l2_error(&approx, &direct)?;
        info!(
            "P={} relative L2 error, potential {:?}, force {:?}",
            p, error.potential, error.force
        );

        self.targets = approx;
        Ok(error)
    }

    /// Target bodies holding the expansion result of the latest run.
    pub fn targets(&self) -> &[Body<T>] {
        &self.targets
    }
}
