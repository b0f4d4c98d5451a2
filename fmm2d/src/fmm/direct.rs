//! Direct particle to particle evaluation of the two dimensional Laplace kernel.
use crate::{
    fmm::types::LaplaceFmm2d,
    traits::{fmm::DirectEvaluation, general::Scalar},
    tree::types::{Body, Cell},
};

/// Accumulate `phi = -q log(r)` and its force at each target from each source, skipping coincident
/// pairs. `source_weight` scales each source term, `target_weight` the summed result.
pub(crate) fn p2p_kernel<T, W, V>(
    targets: &mut [Body<T>],
    sources: &[Body<T>],
    target_weight: W,
    source_weight: V,
) where
    T: Scalar,
    W: Fn(&Body<T>) -> T,
    V: Fn(&Body<T>) -> T,
{
    for target in targets.iter_mut() {
        let mut potential = T::zero();
        let mut force = [T::zero(); 2];
        let wi = target_weight(target);

        for source in sources.iter() {
            let wj = source_weight(source);
            let dx = [
                target.position[0] - source.position[0],
                target.position[1] - source.position[1],
            ];
            let r2 = dx[0] * dx[0] + dx[1] * dx[1];

            // Coincident bodies contribute nothing
            if r2 != T::zero() {
                let inv_r = T::one() / r2.sqrt();
                let log_r = source.charge * inv_r.ln();
                potential += log_r * wj;
                for d in 0..2 {
                    force[d] += dx[d] * source.charge / r2 * wj;
                }
            }
        }

        target.potential += potential * wi;
        for d in 0..2 {
            target.force[d] -= force[d] * wi;
        }
    }
}

impl<T> DirectEvaluation for LaplaceFmm2d<T>
where
    T: Scalar,
{
    fn p2p(
        &self,
        target: &Cell<T>,
        targets: &mut [Body<T>],
        source: &Cell<T>,
        sources: &[Body<T>],
    ) {
        self.p2p_span(target, &mut targets[target.bodies.clone()], source, sources)
    }

    fn p2px(
        &self,
        target: &Cell<T>,
        targets: &mut [Body<T>],
        source: &Cell<T>,
        sources: &[Body<T>],
    ) {
        p2p_kernel(
            &mut targets[target.bodies.clone()],
            &sources[source.bodies.clone()],
            |_| T::one(),
            |_| T::one(),
        )
    }
}

impl<T> LaplaceFmm2d<T>
where
    T: Scalar,
{
    /// Weighted P2P into a slice already cut to the bodies of `target`, `target.bodies` is not
    /// consulted.
    pub(crate) fn p2p_span(
        &self,
        target: &Cell<T>,
        bodies: &mut [Body<T>],
        source: &Cell<T>,
        sources: &[Body<T>],
    ) {
        p2p_kernel(
            bodies,
            &sources[source.bodies.clone()],
            |body| self.weight(body, target),
            |body| self.weight(body, source),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        fmm::types::Laplace2dBuilder,
        tree::{helpers::bodies_fixture, types::Domain},
    };
    use approx::assert_relative_eq;

    fn fmm() -> LaplaceFmm2d<f64> {
        Laplace2dBuilder::new()
            .parameters(4, 0.1)
            .unwrap()
            .domain(Domain::new([0.0, 0.0], 100.0))
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_single_source() {
        let fmm = fmm();
        let q = 2.5;
        let sources = vec![Body::new(0, [1.0, 2.0], q)];
        let mut targets = vec![Body::new(0, [4.0, 6.0], 1.0)];
        let source = Cell::leaf([1.0, 2.0], 1.0, 0..1, 4);
        let target = Cell::leaf([4.0, 6.0], 1.0, 0..1, 4);

        fmm.p2px(&target, &mut targets, &source, &sources);

        let r = 5.0f64;
        assert_relative_eq!(targets[0].potential, -q * r.ln(), epsilon = 1e-14);

        // Force of magnitude q / r along the separation, the accumulator holds its negative
        let magnitude = (targets[0].force[0].powi(2) + targets[0].force[1].powi(2)).sqrt();
        assert_relative_eq!(magnitude, q / r, epsilon = 1e-14);
        assert_relative_eq!(targets[0].force[0], -q * 3.0 / 25.0, epsilon = 1e-14);
        assert_relative_eq!(targets[0].force[1], -q * 4.0 / 25.0, epsilon = 1e-14);
    }

    #[test]
    fn test_coincident_bodies() {
        let fmm = fmm();
        let sources = vec![Body::new(0, [1.0, 1.0], 1.0), Body::new(1, [2.0, 1.0], 1.0)];
        let mut targets = vec![Body::new(0, [1.0, 1.0], 1.0)];
        let source = Cell::leaf([1.5, 1.0], 1.0, 0..2, 4);
        let target = Cell::leaf([1.0, 1.0], 1.0, 0..1, 4);

        fmm.p2px(&target, &mut targets, &source, &sources);

        // Only the source at distance one contributes, log(1) = 0
        assert!(targets[0].potential.is_finite());
        assert_relative_eq!(targets[0].potential, 0.0);
        assert_relative_eq!(targets[0].force[0], 1.0);
        assert_relative_eq!(targets[0].force[1], 0.0);
    }

    #[test]
    fn test_accumulates() {
        let fmm = fmm();
        let sources = vec![Body::new(0, [0.0, 0.0], 1.0)];
        let mut targets = vec![Body::new(0, [2.0, 0.0], 1.0)];
        let source = Cell::leaf([0.0, 0.0], 1.0, 0..1, 4);
        let target = Cell::leaf([2.0, 0.0], 1.0, 0..1, 4);

        fmm.p2px(&target, &mut targets, &source, &sources);
        fmm.p2px(&target, &mut targets, &source, &sources);

        assert_relative_eq!(targets[0].potential, -2.0 * 2f64.ln());
        assert_relative_eq!(targets[0].force[0], -1.0);
    }

    #[test]
    fn test_weighted_matches_unweighted_in_interior() {
        // All bodies further than the buffer width from every cell edge
        let fmm = fmm();
        let sources = bodies_fixture(50, Some(-0.85), Some(0.85), Some(0));
        let targets = bodies_fixture(50, Some(2.15), Some(3.85), Some(1));
        let source = Cell::leaf([0.0, 0.0], 1.0, 0..sources.len(), 4);
        let target = Cell::leaf([3.0, 3.0], 1.0, 0..targets.len(), 4);

        let mut weighted = targets.clone();
        let mut unweighted = targets;
        fmm.p2p(&target, &mut weighted, &source, &sources);
        fmm.p2px(&target, &mut unweighted, &source, &sources);

        for (a, b) in weighted.iter().zip(unweighted.iter()) {
            assert_eq!(a.potential, b.potential);
            assert_eq!(a.force, b.force);
        }
    }

    #[test]
    fn test_weighting_asymmetry() {
        // Source weight applied per term, target weight once to the summed result
        let fmm = fmm();
        let sources = vec![Body::new(0, [0.95, 0.0], 1.0), Body::new(1, [0.0, 0.0], 2.0)];
        let mut targets = vec![Body::new(0, [4.0, 0.0], 1.0)];
        let source = Cell::leaf([0.0, 0.0], 1.0, 0..2, 4);
        let target = Cell::leaf([4.95, 0.0], 1.0, 0..1, 4);

        fmm.p2p(&target, &mut targets, &source, &sources);

        let f = |t: f64| (2.0 + 3.0 * t - t * t * t) / 4.0;
        let ws = f(0.5);
        let wt = f(0.5);
        let expected = wt * (-(3.05f64.ln()) * ws - 2.0 * 4f64.ln());
        assert_relative_eq!(targets[0].potential, expected, epsilon = 1e-12);
    }
}
