//! Useful traits
use std::fmt::Debug;

use num::traits::{Float, NumAssign};

/// Floating point types over which the expansion kernels are defined.
pub trait Scalar
where
    Self: Float + NumAssign + Default + Debug + Send + Sync + 'static,
{
    /// Convert a (small) loop index into this type, used for the factorial recurrences.
    fn from_index(n: usize) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            fn from_index(n: usize) -> Self {
                n as $t
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
