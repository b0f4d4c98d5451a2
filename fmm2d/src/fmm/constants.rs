//! Crate wide constants

/// Expansion orders above this value produce factorial scaled M2L coefficients close to the
/// range of `f64`.
pub const MAX_STABLE_EXPANSION_ORDER: usize = 64;

/// Default width of the smoothing buffer.
pub const DEFAULT_BUFFER_WIDTH: f64 = 1.0;

/// Default half width of the reference scene's root domain.
pub const DEFAULT_DOMAIN_RADIUS: f64 = 10.0;

/// Minimum number of target cells processed per rayon task during batch evaluation.
pub(crate) const MIN_CELLS_PER_TASK: usize = 4;
