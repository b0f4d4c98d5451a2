//! Batch evaluation over externally supplied interaction lists, parallel over target cells.
use log::trace;
use rayon::prelude::*;

use crate::{
    fmm::{constants::MIN_CELLS_PER_TASK, helpers::disjoint_body_spans, types::LaplaceFmm2d},
    traits::{
        fmm::{SourceToTargetTranslation, SourceTranslation},
        general::Scalar,
        types::FmmError,
    },
    tree::types::{Body, Cell},
};

fn check_list(target: usize, list: &[usize], n_sources: usize) -> Result<(), FmmError> {
    match list.iter().find(|&&j| j >= n_sources) {
        Some(j) => Err(FmmError::Failed(format!(
            "cell {} references source cell {} out of range for {} source cells",
            target, j, n_sources
        ))),
        None => Ok(()),
    }
}

impl<T> LaplaceFmm2d<T>
where
    T: Scalar,
{
    /// Apply P2M to every leaf owning bodies, in parallel over cells.
    ///
    /// # Arguments
    /// * `cells` - Source cell arena, expansions zeroed.
    /// * `sources` - Source body arena.
    pub fn p2m_leaves(&self, cells: &mut [Cell<T>], sources: &[Body<T>]) {
        trace!("P2M over {} cells", cells.len());

        cells
            .par_iter_mut()
            .with_min_len(MIN_CELLS_PER_TASK)
            .filter(|cell| cell.is_leaf() && !cell.bodies.is_empty())
            .for_each(|cell| self.p2m(cell, sources));
    }

    /// Apply M2L from every source cell in each target's `m2l_list`, in parallel over targets.
    ///
    /// # Arguments
    /// * `targets` - Target cell arena, local expansions zeroed or holding earlier contributions.
    /// * `sources` - Source cell arena with populated multipole expansions.
    pub fn m2l_lists(&self, targets: &mut [Cell<T>], sources: &[Cell<T>]) -> Result<(), FmmError> {
        for (i, target) in targets.iter().enumerate() {
            check_list(i, &target.m2l_list, sources.len())?;
        }

        trace!(
            "M2L over {} target cells, {} interactions",
            targets.len(),
            targets.iter().map(|t| t.m2l_list.len()).sum::<usize>()
        );

        targets
            .par_iter_mut()
            .with_min_len(MIN_CELLS_PER_TASK)
            .for_each(|target| {
                let list = std::mem::take(&mut target.m2l_list);
                for &j in list.iter() {
                    self.m2l(target, &sources[j]);
                }
                target.m2l_list = list;
            });

        Ok(())
    }

    /// Apply weighted P2P from every source cell in each target's `p2p_list`, in parallel over
    /// targets. Target cells must own disjoint spans of the target body arena.
    ///
    /// # Arguments
    /// * `target_cells` - Target cell arena.
    /// * `targets` - Target body arena.
    /// * `source_cells` - Source cell arena.
    /// * `sources` - Source body arena.
    pub fn p2p_lists(
        &self,
        target_cells: &[Cell<T>],
        targets: &mut [Body<T>],
        source_cells: &[Cell<T>],
        sources: &[Body<T>],
    ) -> Result<(), FmmError> {
        for (i, target) in target_cells.iter().enumerate() {
            check_list(i, &target.p2p_list, source_cells.len())?;
        }

        let spans = disjoint_body_spans(
            target_cells.iter().filter(|cell| !cell.p2p_list.is_empty()),
            targets,
        )?;
        trace!(
            "P2P over {} target spans, {} bodies",
            spans.len(),
            spans.iter().map(|(cell, _)| cell.n_bodies()).sum::<usize>()
        );

        spans
            .into_par_iter()
            .with_min_len(MIN_CELLS_PER_TASK)
            .for_each(|(cell, span)| {
                for &j in cell.p2p_list.iter() {
                    self.p2p_span(cell, span, &source_cells[j], sources);
                }
            });

        Ok(())
    }

    /// Apply L2P at every leaf owning bodies, in parallel over cells. Leaves must own disjoint
    /// spans of the target body arena.
    ///
    /// # Arguments
    /// * `cells` - Target cell arena with populated local expansions.
    /// * `targets` - Target body arena.
    pub fn l2p_leaves(&self, cells: &[Cell<T>], targets: &mut [Body<T>]) -> Result<(), FmmError> {
        let spans = disjoint_body_spans(cells.iter().filter(|cell| cell.is_leaf()), targets)?;
        trace!(
            "L2P over {} leaves, {} bodies",
            spans.len(),
            spans.iter().map(|(cell, _)| cell.n_bodies()).sum::<usize>()
        );

        spans
            .into_par_iter()
            .with_min_len(MIN_CELLS_PER_TASK)
            .for_each(|(cell, span)| self.l2p_span(cell, span));

        Ok(())
    }
}
