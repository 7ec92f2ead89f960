//! Errors for user-facing parsing.
//!
//! Generation, caching and blending never fail; invalid levels and blend
//! factors are clamped instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeFieldError {
  #[error("unknown pattern `{0}` (expected lattice, fractal, stochastic, spherical or 1-4)")]
  UnknownPattern(String),

  #[error("pattern index {0} out of range (expected 1-4)")]
  PatternIndexOutOfRange(u8),
}
