//! Multipole to local and particle to local translations
use num_complex::Complex;

use crate::{
    fmm::types::LaplaceFmm2d,
    traits::{fmm::SourceToTargetTranslation, general::Scalar},
    tree::types::{Body, Cell},
};

impl<T> SourceToTargetTranslation for LaplaceFmm2d<T>
where
    T: Scalar,
{
    fn m2l(&self, target: &mut Cell<T>, source: &Cell<T>) {
        let p = self.expansion_order;
        debug_assert_eq!(target.local.len(), p, "local not sized to expansion order");
        debug_assert_eq!(source.multipole.len(), p, "multipole not sized to expansion order");

        let dx = [
            target.center[0] - source.center[0],
            target.center[1] - source.center[1],
        ];
        debug_assert!(
            dx[0] != T::zero() || dx[1] != T::zero(),
            "M2L between coincident centers {:?}",
            target.center
        );

        let one = Complex::new(T::one(), T::zero());
        let z = Complex::new(dx[0], dx[1]);
        let inv_z = one / z;

        let m = &source.multipole;
        let l = &mut target.local;

        // Logarithmic term, seen only by the 0th order
        l[0] += -m[0] * z.ln();

        if p > 1 {
            l[0] += m[1] * inv_z;
            let mut powzn = inv_z;
            for k in 2..p {
                // (k-1)! / z^k
                powzn *= inv_z * T::from_index(k - 1);
                l[0] += m[k] * powzn;
            }

            l[1] += -m[0] * inv_z;
            powzn = inv_z;
            for k in 1..p {
                // k! / z^(k+1)
                powzn *= inv_z * T::from_index(k);
                l[1] += -m[k] * powzn;
            }
        }

        let mut cnk = -T::one();
        let mut powznk = one;
        for n in 2..p {
            cnk = -cnk;
            // (n-2)! / z^(n-1)
            powznk *= inv_z;
            let mut powzn = powznk * cnk;
            for k in 0..p {
                // (-1)^n (n+k-1)! / z^(n+k)
                powzn *= inv_z * T::from_index(n + k - 1);
                l[n] += m[k] * powzn;
            }
            powznk *= T::from_index(n - 1);
        }
    }

    fn p2l(&self, target: &mut Cell<T>, source: &Cell<T>, sources: &[Body<T>]) {
        let p = self.expansion_order;
        debug_assert_eq!(target.local.len(), p, "local not sized to expansion order");

        let one = Complex::new(T::one(), T::zero());

        for body in sources[source.bodies.clone()].iter() {
            let w = self.weight(body, source);
            let dx = [
                target.center[0] - body.position[0],
                target.center[1] - body.position[1],
            ];
            debug_assert!(
                dx[0] != T::zero() || dx[1] != T::zero(),
                "P2L source at target center {:?}",
                target.center
            );

            let z = Complex::new(dx[0], dx[1]);
            let inv_z = one / z;
            let qw = body.charge * w;

            target.local[0] += -z.ln() * qw;

            // (-1)^n (n-1)! / z^n
            let mut powzn = -inv_z;
            for n in 1..p {
                target.local[n] += powzn * qw;
                powzn *= -inv_z * T::from_index(n);
            }
        }
    }
}
