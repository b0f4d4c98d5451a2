//! Builder objects to construct FMMs
use log::{debug, warn};

use crate::{
    fmm::{
        constants::MAX_STABLE_EXPANSION_ORDER,
        types::{Laplace2dBuilder, LaplaceFmm2d},
    },
    traits::{fmm::Fmm, general::Scalar, types::FmmError},
    tree::types::Domain,
};

impl<T> Laplace2dBuilder<T>
where
    T: Scalar,
{
    /// Initialise an empty FMM builder
    pub fn new() -> Self {
        Self {
            expansion_order: None,
            buffer_width: None,
            domain: None,
        }
    }

    /// Set the expansion parameters.
    ///
    /// # Arguments
    /// * `expansion_order` - Number of retained expansion terms, must be at least 1.
    /// * `buffer_width` - Width of the smoothing buffer, must be positive and finite.
    pub fn parameters(mut self, expansion_order: usize, buffer_width: T) -> Result<Self, FmmError> {
        if expansion_order == 0 {
            return Err(FmmError::InvalidParameter(
                "expansion order must be a positive integer".to_string(),
            ));
        }

        if !buffer_width.is_finite() || buffer_width <= T::zero() {
            return Err(FmmError::InvalidParameter(format!(
                "buffer width must be positive and finite, found {:?}",
                buffer_width
            )));
        }

        if expansion_order > MAX_STABLE_EXPANSION_ORDER {
            warn!(
                "Expansion order {} exceeds {}, M2L coefficients may overflow",
                expansion_order, MAX_STABLE_EXPANSION_ORDER
            );
        }

        self.expansion_order = Some(expansion_order);
        self.buffer_width = Some(buffer_width);
        Ok(self)
    }

    /// Set the root domain consulted by the smoothing weight.
    ///
    /// # Arguments
    /// * `domain` - Root domain, its radius must be positive and finite.
    pub fn domain(mut self, domain: Domain<T>) -> Result<Self, FmmError> {
        let finite_center = domain.center.iter().all(|x| x.is_finite());

        if !finite_center || !domain.radius.is_finite() || domain.radius <= T::zero() {
            return Err(FmmError::InvalidParameter(format!(
                "domain must have a finite center and positive finite radius, found {:?}",
                domain
            )));
        }

        self.domain = Some(domain);
        Ok(self)
    }

    /// Finalize the configuration.
    pub fn build(self) -> Result<LaplaceFmm2d<T>, FmmError> {
        let (Some(expansion_order), Some(buffer_width)) = (self.expansion_order, self.buffer_width)
        else {
            return Err(FmmError::Failed(
                "must set expansion parameters before building".to_string(),
            ));
        };

        let Some(domain) = self.domain else {
            return Err(FmmError::Failed(
                "must set a domain before building".to_string(),
            ));
        };

        debug!(
            "Built FMM with expansion order {}, buffer width {:?}, domain {:?}",
            expansion_order, buffer_width, domain
        );

        Ok(LaplaceFmm2d {
            expansion_order,
            buffer_width,
            domain,
        })
    }
}

impl<T> Fmm for LaplaceFmm2d<T>
where
    T: Scalar,
{
    type Scalar = T;

    fn expansion_order(&self) -> usize {
        self.expansion_order
    }

    fn buffer_width(&self) -> T {
        self.buffer_width
    }

    fn domain(&self) -> &Domain<T> {
        &self.domain
    }
}
