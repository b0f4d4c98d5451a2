//! Multipole expansion translations
use num_complex::Complex;

use crate::{
    fmm::types::LaplaceFmm2d,
    traits::{fmm::SourceTranslation, general::Scalar},
    tree::types::{Body, Cell},
};

impl<T> SourceTranslation for LaplaceFmm2d<T>
where
    T: Scalar,
{
    fn p2m(&self, cell: &mut Cell<T>, sources: &[Body<T>]) {
        let p = self.expansion_order;
        debug_assert_eq!(cell.multipole.len(), p, "multipole not sized to expansion order");

        for body in sources[cell.bodies.clone()].iter() {
            let dx = [
                body.position[0] - cell.center[0],
                body.position[1] - cell.center[1],
            ];
            let w = self.weight(body, cell);

            let z = Complex::new(dx[0], dx[1]);
            let mut powz = Complex::new(T::one(), T::zero());

            cell.multipole[0] += body.charge * w;
            for n in 1..p {
                // z^n / n!
                powz *= z / T::from_index(n);
                cell.multipole[n] += powz * body.charge * w;
            }
        }
    }

    fn m2m(&self, parent: &mut Cell<T>, children: &[Cell<T>]) {
        let p = self.expansion_order;
        debug_assert_eq!(parent.multipole.len(), p, "multipole not sized to expansion order");

        for child in children.iter() {
            debug_assert_eq!(child.multipole.len(), p);

            let dx = [
                child.center[0] - parent.center[0],
                child.center[1] - parent.center[1],
            ];
            let z = Complex::new(dx[0], dx[1]);

            for k in 0..p {
                let mut powz = Complex::new(T::one(), T::zero());
                parent.multipole[k] += child.multipole[k];
                for n in 1..=k {
                    // z^n / n!
                    powz *= z / T::from_index(n);
                    parent.multipole[k] += child.multipole[k - n] * powz;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        fmm::{helpers::relative_l2_error, types::Laplace2dBuilder},
        traits::fmm::{DirectEvaluation, TargetTranslation},
        tree::{helpers::bodies_fixture, parent_and_children_mut, types::Domain},
    };
    use approx::assert_relative_eq;

    fn fmm(expansion_order: usize) -> LaplaceFmm2d<f64> {
        Laplace2dBuilder::new()
            .parameters(expansion_order, 0.1)
            .unwrap()
            .domain(Domain::new([0.0, 0.0], 100.0))
            .unwrap()
            .build()
            .unwrap()
    }

    /// Four children of a unit parent at the origin, each holding bodies at least a buffer width
    /// clear of every edge so that all weights are one.
    fn quadrants(expansion_order: usize, n_per_child: usize) -> (Vec<Cell<f64>>, Vec<Body<f64>>) {
        let offsets = [[-0.5, -0.5], [0.5, -0.5], [-0.5, 0.5], [0.5, 0.5]];
        let mut cells = vec![Cell::parent([0.0, 0.0], 1.0, 1..5, expansion_order)];
        let mut bodies = Vec::new();

        for (i, offset) in offsets.iter().enumerate() {
            let start = bodies.len();
            for mut body in bodies_fixture(n_per_child, Some(-0.35), Some(0.35), Some(i as u64)) {
                body.index = bodies.len();
                body.position = [body.position[0] + offset[0], body.position[1] + offset[1]];
                body.charge = if body.index % 2 == 0 { 1.0 } else { -0.5 };
                bodies.push(body);
            }
            cells.push(Cell::leaf(*offset, 0.5, start..bodies.len(), expansion_order));
        }
        cells[0].bodies = 0..bodies.len();

        (cells, bodies)
    }

    #[test]
    fn test_p2m_single_body() {
        let fmm = fmm(6);
        let sources = vec![Body::new(0, [1.2, 0.6], 2.0)];
        let mut cell = Cell::leaf([1.0, 0.5], 1.0, 0..1, 6);

        fmm.p2m(&mut cell, &sources);

        let z = Complex::new(0.2, 0.1);
        let mut expected = Complex::new(2.0, 0.0);
        let mut factorial = 1.0;
        for n in 0..6 {
            if n > 0 {
                factorial *= n as f64;
                expected = z.powu(n as u32) * 2.0 / factorial;
            }
            assert_relative_eq!(cell.multipole[n].re, expected.re, epsilon = 1e-15);
            assert_relative_eq!(cell.multipole[n].im, expected.im, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_p2m_accumulates() {
        let fmm = fmm(3);
        let sources = vec![Body::new(0, [0.1, 0.0], 1.0)];
        let mut cell = Cell::leaf([0.0, 0.0], 1.0, 0..1, 3);

        fmm.p2m(&mut cell, &sources);
        fmm.p2m(&mut cell, &sources);

        assert_relative_eq!(cell.multipole[0].re, 2.0);
        assert_relative_eq!(cell.multipole[1].re, 0.2);
        assert_relative_eq!(cell.multipole[2].re, 0.01, epsilon = 1e-16);
    }

    #[test]
    fn test_m2m_matches_p2m() {
        let expansion_order = 12;
        let fmm = fmm(expansion_order);
        let (mut cells, bodies) = quadrants(expansion_order, 25);

        for cell in cells[1..].iter_mut() {
            fmm.p2m(cell, &bodies);
        }

        // Expansion of all bodies directly about the parent center
        let mut direct = cells[0].clone();
        fmm.p2m(&mut direct, &bodies);

        let (parent, children) = parent_and_children_mut(&mut cells, 0).unwrap();
        fmm.m2m(parent, children);

        for (shifted, expected) in parent.multipole.iter().zip(direct.multipole.iter()) {
            assert_relative_eq!(shifted.re, expected.re, epsilon = 1e-12);
            assert_relative_eq!(shifted.im, expected.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_m2m_convergence() {
        let mut errors = Vec::new();

        for expansion_order in [4, 8, 16] {
            let fmm = fmm(expansion_order);
            let (mut cells, sources) = quadrants(expansion_order, 10);

            for cell in cells[1..].iter_mut() {
                fmm.p2m(cell, &sources);
            }
            let (parent, children) = parent_and_children_mut(&mut cells, 0).unwrap();
            fmm.m2m(parent, children);

            // Targets well separated from the parent
            let mut targets = bodies_fixture(20, Some(5.5), Some(6.5), Some(42));
            let target = Cell::leaf([6.0, 6.0], 1.0, 0..targets.len(), expansion_order);
            let mut expected = targets.clone();

            fmm.m2p(&target, &mut targets, &cells[0]);
            fmm.p2px(&target, &mut expected, &cells[0], &sources);

            errors.push(relative_l2_error(&targets, &expected).unwrap());
        }

        for pair in errors.windows(2) {
            assert!(pair[1].potential < pair[0].potential);
            assert!(pair[1].force < pair[0].force);
        }
        assert!(errors[2].potential < 1e-8);
        assert!(errors[2].force < 1e-8);
    }

    #[test]
    fn test_order_one() {
        let fmm = fmm(1);
        let sources = vec![Body::new(0, [0.1, 0.2], 3.0)];
        let mut child = Cell::leaf([0.0, 0.0], 1.0, 0..1, 1);
        fmm.p2m(&mut child, &sources);

        let mut parent = Cell::parent([1.0, 1.0], 2.0, 0..1, 1);
        fmm.m2m(&mut parent, std::slice::from_ref(&child));

        assert_eq!(parent.multipole, vec![Complex::new(3.0, 0.0)]);
    }
}
