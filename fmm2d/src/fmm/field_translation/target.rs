//! Local expansion translations and evaluation at particles
use num_complex::Complex;

use crate::{
    fmm::types::LaplaceFmm2d,
    traits::{fmm::TargetTranslation, general::Scalar},
    tree::types::{Body, Cell},
};

impl<T> TargetTranslation for LaplaceFmm2d<T>
where
    T: Scalar,
{
    fn l2l(&self, parent: &Cell<T>, children: &mut [Cell<T>]) {
        let p = self.expansion_order;
        debug_assert_eq!(parent.local.len(), p, "local not sized to expansion order");

        for child in children.iter_mut() {
            debug_assert_eq!(child.local.len(), p);

            let dx = [
                child.center[0] - parent.center[0],
                child.center[1] - parent.center[1],
            ];
            let z = Complex::new(dx[0], dx[1]);

            for l in 0..p {
                let mut powz = Complex::new(T::one(), T::zero());
                child.local[l] += parent.local[l];
                for k in 1..(p - l) {
                    // z^k / k!
                    powz *= z / T::from_index(k);
                    child.local[l] += parent.local[l + k] * powz;
                }
            }
        }
    }

    fn m2p(&self, target: &Cell<T>, targets: &mut [Body<T>], source: &Cell<T>) {
        let p = self.expansion_order;
        debug_assert_eq!(source.multipole.len(), p, "multipole not sized to expansion order");

        let one = Complex::new(T::one(), T::zero());
        let m = &source.multipole;

        for body in targets[target.bodies.clone()].iter_mut() {
            let w = self.weight(body, target);
            let dx = [
                body.position[0] - source.center[0],
                body.position[1] - source.center[1],
            ];
            debug_assert!(
                dx[0] != T::zero() || dx[1] != T::zero(),
                "M2P target on source center {:?}",
                source.center
            );

            let z = Complex::new(dx[0], dx[1]);
            let inv_z = one / z;

            let mut potential = -m[0] * z.ln();
            let mut gradient = -m[0] * inv_z;
            let mut powzn = inv_z;
            for k in 1..p {
                // (k-1)! / z^k
                potential += m[k] * powzn;
                powzn *= inv_z * T::from_index(k);
                gradient -= m[k] * powzn;
            }

            body.potential += potential.re * w;
            body.force[0] += gradient.re * w;
            body.force[1] -= gradient.im * w;
        }
    }

    fn l2p(&self, cell: &Cell<T>, targets: &mut [Body<T>]) {
        self.l2p_span(cell, &mut targets[cell.bodies.clone()])
    }
}

impl<T> LaplaceFmm2d<T>
where
    T: Scalar,
{
    /// L2P into a slice already cut to the bodies of `cell`, `cell.bodies` is not consulted.
    pub(crate) fn l2p_span(&self, cell: &Cell<T>, bodies: &mut [Body<T>]) {
        let p = self.expansion_order;
        debug_assert_eq!(cell.local.len(), p, "local not sized to expansion order");

        for body in bodies.iter_mut() {
            let w = self.weight(body, cell);
            let dx = [
                body.position[0] - cell.center[0],
                body.position[1] - cell.center[1],
            ];

            let z = Complex::new(dx[0], dx[1]);
            let mut powz = Complex::new(T::one(), T::zero());

            body.potential += cell.local[0].re * w;
            if p > 1 {
                body.force[0] += cell.local[1].re * w;
                body.force[1] -= cell.local[1].im * w;
            }

            for n in 1..p {
                // z^n / n!
                powz *= z / T::from_index(n);
                body.potential += (cell.local[n] * powz).re * w;

                // Force is the gradient of the shifted series
                if n < p - 1 {
                    let term = cell.local[n + 1] * powz;
                    body.force[0] += term.re * w;
                    body.force[1] -= term.im * w;
                }
            }
        }
    }
}
