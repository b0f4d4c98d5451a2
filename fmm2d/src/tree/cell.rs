//! Implementation of constructors for cells, and safe split borrows of cell arenas.
use std::ops::Range;

use num_complex::Complex;

use crate::{
    traits::{general::Scalar, types::FmmError},
    tree::types::Cell,
};

impl<T> Cell<T>
where
    T: Scalar,
{
    /// Construct a leaf cell owning a span of bodies, with zeroed expansions.
    ///
    /// # Arguments
    /// * `center` - Center of the cell.
    /// * `radius` - Half width of the cell.
    /// * `bodies` - Span of owned bodies in a body arena.
    /// * `expansion_order` - Length of the multipole and local coefficient arrays.
    pub fn leaf(center: [T; 2], radius: T, bodies: Range<usize>, expansion_order: usize) -> Self {
        Cell {
            center,
            radius,
            bodies,
            children: 0..0,
            multipole: vec![Complex::default(); expansion_order],
            local: vec![Complex::default(); expansion_order],
            m2l_list: Vec::new(),
            p2p_list: Vec::new(),
        }
    }

    /// Construct a cell referencing a span of child cells, with zeroed expansions.
    ///
    /// # Arguments
    /// * `center` - Center of the cell.
    /// * `radius` - Half width of the cell.
    /// * `children` - Span of child cells in a cell arena.
    /// * `expansion_order` - Length of the multipole and local coefficient arrays.
    pub fn parent(
        center: [T; 2],
        radius: T,
        children: Range<usize>,
        expansion_order: usize,
    ) -> Self {
        Cell {
            children,
            ..Cell::leaf(center, radius, 0..0, expansion_order)
        }
    }

    /// Resize both coefficient arrays to `expansion_order` and zero them.
    pub fn reset_expansions(&mut self, expansion_order: usize) {
        self.multipole.clear();
        self.multipole.resize(expansion_order, Complex::default());
        self.local.clear();
        self.local.resize(expansion_order, Complex::default());
    }

    /// A cell without children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of bodies owned by this cell.
    pub fn n_bodies(&self) -> usize {
        self.bodies.len()
    }
}

fn check_index<T>(cells: &[Cell<T>], index: usize) -> Result<(), FmmError> {
    if index >= cells.len() {
        return Err(FmmError::Failed(format!(
            "cell index {} out of range for an arena of {} cells",
            index,
            cells.len()
        )));
    }
    Ok(())
}

fn check_children<T>(cells: &[Cell<T>], parent: usize) -> Result<Range<usize>, FmmError> {
    check_index(cells, parent)?;
    let children = cells[parent].children.clone();

    if children.start > children.end {
        return Err(FmmError::Failed(format!(
            "child span {:?} of cell {} is reversed",
            children, parent
        )));
    }

    if children.end > cells.len() {
        return Err(FmmError::Failed(format!(
            "child span {:?} of cell {} exceeds an arena of {} cells",
            children,
            parent,
            cells.len()
        )));
    }

    if children.contains(&parent) {
        return Err(FmmError::Failed(format!(
            "cell {} lies within its own child span {:?}",
            parent, children
        )));
    }

    Ok(children)
}

/// Borrow a parent mutably alongside its children, as needed by M2M.
///
/// # Arguments
/// * `cells` - Cell arena holding both the parent and its children.
/// * `parent` - Index of the parent cell.
pub fn parent_and_children_mut<T>(
    cells: &mut [Cell<T>],
    parent: usize,
) -> Result<(&mut Cell<T>, &[Cell<T>]), FmmError> {
    let children = check_children(cells, parent)?;

    if parent < children.start {
        let (left, right) = cells.split_at_mut(children.start);
        Ok((&mut left[parent], &right[..children.len()]))
    } else {
        let (left, right) = cells.split_at_mut(parent);
        Ok((&mut right[0], &left[children]))
    }
}

/// Borrow the children of a parent mutably alongside the parent, as needed by L2L.
///
/// # Arguments
/// * `cells` - Cell arena holding both the parent and its children.
/// * `parent` - Index of the parent cell.
pub fn children_mut_of<T>(
    cells: &mut [Cell<T>],
    parent: usize,
) -> Result<(&Cell<T>, &mut [Cell<T>]), FmmError> {
    let children = check_children(cells, parent)?;

    if parent < children.start {
        let (left, right) = cells.split_at_mut(children.start);
        Ok((&left[parent], &mut right[..children.len()]))
    } else {
        let (left, right) = cells.split_at_mut(parent);
        Ok((&right[0], &mut left[children]))
    }
}

/// Borrow a target cell mutably alongside a distinct source cell from the same arena, as needed
/// by M2L and P2L when sources and targets share one tree.
///
/// # Arguments
/// * `cells` - Cell arena.
/// * `target` - Index of the target cell.
/// * `source` - Index of the source cell.
pub fn split_pair_mut<T>(
    cells: &mut [Cell<T>],
    target: usize,
    source: usize,
) -> Result<(&mut Cell<T>, &Cell<T>), FmmError> {
    check_index(cells, target)?;
    check_index(cells, source)?;

    if target == source {
        return Err(FmmError::Failed(format!(
            "cannot borrow cell {} as both target and source",
            target
        )));
    }

    if target < source {
        let (left, right) = cells.split_at_mut(source);
        Ok((&mut left[target], &right[0]))
    } else {
        let (left, right) = cells.split_at_mut(target);
        Ok((&mut right[0], &left[source]))
    }
}
