//! Pattern selector.

use std::fmt;
use std::str::FromStr;

use crate::error::CubeFieldError;
use crate::generators;
use crate::types::CubeField;

/// One of the four cube-field generators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub enum PatternId {
  /// Sparse cubic lattice with periodic gaps.
  #[default]
  Lattice,
  /// Menger-style 21-of-27 subdivision.
  Fractal,
  /// Seeded random lattice occupancy.
  Stochastic,
  /// Perforated spherical shell.
  Spherical,
}

impl PatternId {
  pub const ALL: [PatternId; 4] = [
    PatternId::Lattice,
    PatternId::Fractal,
    PatternId::Stochastic,
    PatternId::Spherical,
  ];

  /// One-based index, matching the number keys users press.
  pub fn index(self) -> u8 {
    match self {
      Self::Lattice => 1,
      Self::Fractal => 2,
      Self::Stochastic => 3,
      Self::Spherical => 4,
    }
  }

  pub fn from_index(index: u8) -> Result<Self, CubeFieldError> {
    match index {
      1 => Ok(Self::Lattice),
      2 => Ok(Self::Fractal),
      3 => Ok(Self::Stochastic),
      4 => Ok(Self::Spherical),
      other => Err(CubeFieldError::PatternIndexOutOfRange(other)),
    }
  }

  pub fn next(self) -> Self {
    match self {
      Self::Lattice => Self::Fractal,
      Self::Fractal => Self::Stochastic,
      Self::Stochastic => Self::Spherical,
      Self::Spherical => Self::Lattice,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::Lattice => "lattice",
      Self::Fractal => "fractal",
      Self::Stochastic => "stochastic",
      Self::Spherical => "spherical",
    }
  }

  /// Run this pattern's generator.
  pub fn generate(self, level: u32) -> CubeField {
    match self {
      Self::Lattice => generators::lattice::generate(level),
      Self::Fractal => generators::fractal::generate(level),
      Self::Stochastic => generators::stochastic::generate(level),
      Self::Spherical => generators::spherical::generate(level),
    }
  }
}

impl fmt::Display for PatternId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for PatternId {
  type Err = CubeFieldError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if let Ok(index) = trimmed.parse::<u8>() {
      return Self::from_index(index);
    }
    Self::ALL
      .into_iter()
      .find(|p| p.name().eq_ignore_ascii_case(trimmed))
      .ok_or_else(|| CubeFieldError::UnknownPattern(trimmed.to_string()))
  }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
