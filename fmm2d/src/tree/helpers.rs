//! Helper functions used in testing, specifically random point and body generators.
use rand::{distributions::uniform::SampleUniform, prelude::*};

use crate::{traits::general::Scalar, tree::types::Body};

/// Points fixture for testing, uniformly samples in each axis from min to max.
///
/// # Arguments
/// * `n_points` - The number of points to sample.
/// * `min` - The minimum coordinate value along each axis, defaults to 0.
/// * `max` - The maximum coordinate value along each axis, defaults to 1.
/// * `seed` - Random seed, defaults to 0.
pub fn points_fixture<T: Scalar + SampleUniform>(
    n_points: usize,
    min: Option<T>,
    max: Option<T>,
    seed: Option<u64>,
) -> Vec<[T; 2]> {
    let seed = seed.unwrap_or(0);
    let mut range = StdRng::seed_from_u64(seed);

    let between = if let (Some(min), Some(max)) = (min, max) {
        rand::distributions::Uniform::from(min..max)
    } else {
        rand::distributions::Uniform::from(T::zero()..T::one())
    };

    (0..n_points)
        .map(|_| [between.sample(&mut range), between.sample(&mut range)])
        .collect()
}

/// Bodies fixture for testing, positions sampled as in [`points_fixture`], with unit charges
/// and indices matching their position in the returned vector.
///
/// # Arguments
/// * `n_points` - The number of bodies to sample.
/// * `min` - The minimum coordinate value along each axis, defaults to 0.
/// * `max` - The maximum coordinate value along each axis, defaults to 1.
/// * `seed` - Random seed, defaults to 0.
pub fn bodies_fixture<T: Scalar + SampleUniform>(
    n_points: usize,
    min: Option<T>,
    max: Option<T>,
    seed: Option<u64>,
) -> Vec<Body<T>> {
    points_fixture(n_points, min, max, seed)
        .into_iter()
        .enumerate()
        .map(|(index, position)| Body::new(index, position, T::one()))
        .collect()
}
