//! Implementation of constructors for bodies.
use crate::{traits::general::Scalar, tree::types::Body};

impl<T> Body<T>
where
    T: Scalar,
{
    /// Construct a body with zeroed potential and force.
    ///
    /// # Arguments
    /// * `index` - Identifier of the body.
    /// * `position` - Position in the plane.
    /// * `charge` - Charge carried by the body.
    pub fn new(index: usize, position: [T; 2], charge: T) -> Self {
        Body {
            index,
            position,
            charge,
            potential: T::zero(),
            force: [T::zero(); 2],
        }
    }

    /// Zero the potential and force accumulators ahead of a fresh pass.
    pub fn reset(&mut self) {
        self.potential = T::zero();
        self.force = [T::zero(); 2];
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reset() {
        let mut body = Body::new(3, [1.0, -2.0], 0.5);
        body.potential = 4.0;
        body.force = [1.0, 2.0];
        body.reset();

        assert_eq!(body.potential, 0.0);
        assert_eq!(body.force, [0.0, 0.0]);
        assert_eq!(body.charge, 0.5);
        assert_eq!(body.index, 3);
    }
}
