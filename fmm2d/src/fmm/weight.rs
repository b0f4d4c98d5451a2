//! Smoothing weight blending body contributions across cell boundaries.
use crate::{
    fmm::types::LaplaceFmm2d,
    traits::general::Scalar,
    tree::types::{Body, Cell, Domain},
};

/// Weight of a body in a cell.
///
/// Along each axis the clear distance from the body to the near edge of the cell is clipped above by
/// `buffer_width`, and forced to `buffer_width` when the body lies within `buffer_width` of the
/// root domain's edge along that axis. Each clipped distance `t`, normalised by `buffer_width`, is
/// passed through the cubic `(2 + 3t - t^3) / 4` and the two axis factors multiplied together.
///
/// The cubic satisfies `f(t) + f(-t) = 1`, so the weights of a body in two abutting cells sum to
/// one whenever it lies within the buffer of their shared edge.
///
/// # Arguments
/// * `body` - The body being weighted.
/// * `cell` - The cell it is weighted in.
/// * `buffer_width` - Width of the smoothing buffer.
/// * `domain` - Root domain.
pub fn smoothing_weight<T: Scalar>(
    body: &Body<T>,
    cell: &Cell<T>,
    buffer_width: T,
    domain: &Domain<T>,
) -> T {
    let two = T::from_index(2);
    let three = T::from_index(3);
    let four = T::from_index(4);

    let mut weight = T::one();
    for d in 0..2 {
        let mut clear = (cell.radius - (body.position[d] - cell.center[d]).abs()).min(buffer_width);

        // Bodies on the outer boundary are never faded
        if domain.radius - (body.position[d] - domain.center[d]).abs() < buffer_width {
            clear = buffer_width;
        }

        debug_assert!(
            clear >= -buffer_width,
            "body at {:?} lies further than the buffer outside cell at {:?}",
            body.position,
            cell.center
        );

        let t = clear / buffer_width;
        weight *= (two + three * t - t * t * t) / four;
    }

    weight
}

impl<T> LaplaceFmm2d<T>
where
    T: Scalar,
{
    /// Smoothing weight of a body in a cell under this configuration, see [`smoothing_weight`].
    pub fn weight(&self, body: &Body<T>, cell: &Cell<T>) -> T {
        smoothing_weight(body, cell, self.buffer_width, &self.domain)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn domain() -> Domain<f64> {
        Domain::new([0.0, 0.0], 10.0)
    }

    #[test]
    fn test_center_of_cell() {
        let cell = Cell::leaf([2.0, -3.0], 2.0, 0..1, 1);
        let body = Body::new(0, [2.0, -3.0], 1.0);
        assert_relative_eq!(smoothing_weight(&body, &cell, 1.0, &domain()), 1.0);
    }

    #[test]
    fn test_outside_edge() {
        // A buffer width outside the right edge, away from the domain boundary
        let cell = Cell::leaf([0.0, 0.0], 2.0, 0..1, 1);
        let body = Body::new(0, [3.0, 0.0], 1.0);
        assert_relative_eq!(smoothing_weight(&body, &cell, 1.0, &domain()), 0.0);

        // On the edge itself each side sees half
        let body = Body::new(0, [2.0, 0.0], 1.0);
        assert_relative_eq!(smoothing_weight(&body, &cell, 1.0, &domain()), 0.5);
    }

    #[test]
    fn test_partition_of_unity() {
        // Abutting cells sharing the edge x = 0
        let left = Cell::leaf([-2.0, 0.0], 2.0, 0..1, 1);
        let right = Cell::leaf([2.0, 0.0], 2.0, 0..1, 1);

        for x in [-0.9, -0.5, -0.1, 0.0, 0.3, 0.75] {
            let body = Body::new(0, [x, 0.5], 1.0);
            let sum = smoothing_weight(&body, &left, 1.0, &domain())
                + smoothing_weight(&body, &right, 1.0, &domain());
            assert_relative_eq!(sum, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_continuity() {
        let cell = Cell::leaf([0.0, 0.0], 2.0, 0..1, 1);
        let h = 1e-7;

        let inside = Body::new(0, [2.0 - h, 0.0], 1.0);
        let outside = Body::new(0, [2.0 + h, 0.0], 1.0);

        let w_inside = smoothing_weight(&inside, &cell, 1.0, &domain());
        let w_outside = smoothing_weight(&outside, &cell, 1.0, &domain());
        assert!((w_inside - w_outside).abs() < 1e-6);
    }

    #[test]
    fn test_domain_boundary() {
        // A cell touching the domain edge, the body in its buffer is not faded
        let cell = Cell::leaf([8.0, 0.0], 2.0, 0..1, 1);
        let body = Body::new(0, [9.9, 0.0], 1.0);
        assert_relative_eq!(smoothing_weight(&body, &cell, 1.0, &domain()), 1.0);

        // Without the domain override the same body would be faded
        let far_domain = Domain::new([0.0, 0.0], 100.0);
        assert!(smoothing_weight(&body, &cell, 1.0, &far_domain) < 0.6);
    }

    #[test]
    fn test_separable() {
        let cell = Cell::leaf([0.0, 0.0], 2.0, 0..1, 1);
        let body = Body::new(0, [1.5, -1.75], 1.0);

        let f = |t: f64| (2.0 + 3.0 * t - t * t * t) / 4.0;
        assert_relative_eq!(
            smoothing_weight(&body, &cell, 1.0, &domain()),
            f(0.5) * f(0.25),
            epsilon = 1e-15
        );
    }
}
