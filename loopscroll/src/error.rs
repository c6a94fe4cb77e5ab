use thiserror::Error;

/// Errors reported by [`crate::LoopScroll`].
///
/// Geometry errors are detected before any node is created, so a failed `set_content` leaves
/// no half-built pool behind.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoopError {
    #[error("template main size must be positive and finite (got {main})")]
    InvalidTemplateSize { main: f64 },

    #[error("viewport main size must be non-negative and finite (got {main})")]
    InvalidViewportSize { main: f64 },

    #[error("template size plus main spacing must be positive (got {unit_delta})")]
    InvalidUnitDelta { unit_delta: f64 },

    #[error("viewport holds {per_viewport} templates, more than the pool limit of {max}")]
    PoolTooLarge { per_viewport: f64, max: usize },

    #[error("no content has been set")]
    NoContent,
}
