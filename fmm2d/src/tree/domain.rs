//! Constructor for the root Domain.
use itertools::Itertools;

use crate::{
    traits::general::Scalar,
    tree::types::{Body, Domain},
};

impl<T> Domain<T>
where
    T: Scalar,
{
    /// Construct a domain from a user specified center and half width.
    ///
    /// # Arguments
    /// * `center` - Center of the square domain.
    /// * `radius` - Half width of the domain along each axis.
    pub fn new(center: [T; 2], radius: T) -> Self {
        Domain { center, radius }
    }

    /// Compute the square domain enclosing a set of bodies. The domain adds a small threshold
    /// such that no body lies on the actual edge of the domain.
    ///
    /// Returns `None` if `bodies` is empty.
    ///
    /// # Arguments
    /// * `bodies` - Bodies to enclose.
    pub fn from_local_points(bodies: &[Body<T>]) -> Option<Domain<T>> {
        let (min_x, max_x) = bodies
            .iter()
            .map(|b| b.position[0])
            .minmax_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .into_option()?;

        let (min_y, max_y) = bodies
            .iter()
            .map(|b| b.position[1])
            .minmax_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .into_option()?;

        // Want a square box to place everything in
        let side_length = (max_x - min_x).max(max_y - min_y);

        // Pad the box by 0.5% of its side so that no body sits on its edge
        let err_fraction = T::from_index(5) / T::from_index(1000);
        let err = side_length * err_fraction;

        let two = T::from_index(2);
        let center = [(min_x + max_x) / two, (min_y + max_y) / two];
        let radius = side_length / two + err;

        Some(Domain { center, radius })
    }

    /// Whether a position lies in the closed square covered by the domain.
    pub fn contains(&self, position: &[T; 2]) -> bool {
        (0..2).all(|d| (position[d] - self.center[d]).abs() <= self.radius)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::helpers::bodies_fixture;

    #[test]
    fn test_bounds() {
        let n_points = 1000;

        // Points in the unit square
        let bodies = bodies_fixture::<f64>(n_points, None, None, None);
        let domain = Domain::from_local_points(&bodies).unwrap();
        assert!(bodies.iter().all(|b| domain.contains(&b.position)));

        // Points either side of the origin
        let bodies = bodies_fixture::<f64>(n_points, Some(-3.), Some(1.), Some(2));
        let domain = Domain::from_local_points(&bodies).unwrap();
        assert!(bodies.iter().all(|b| domain.contains(&b.position)));
        assert!(domain.radius > 1.9 && domain.radius < 2.1);
    }

    #[test]
    fn test_padding() {
        let bodies = vec![
            Body::<f64>::new(0, [0.0, 0.0], 1.0),
            Body::new(1, [2.0, 1.0], 1.0),
        ];
        let domain = Domain::from_local_points(&bodies).unwrap();

        assert_eq!(domain.center, [1.0, 0.5]);
        assert!(domain.radius > 1.0);

        // No body should lie exactly on the domain edge
        for body in bodies.iter() {
            for d in 0..2 {
                assert!((body.position[d] - domain.center[d]).abs() < domain.radius);
            }
        }
    }

    #[test]
    fn test_empty() {
        assert!(Domain::<f64>::from_local_points(&[]).is_none());
    }
}
