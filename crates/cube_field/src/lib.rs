//! cube_field - Engine independent cube-field generation and level morphing
//!
//! This crate procedurally generates sets of axis-aligned cubes ("cube
//! fields") from an integer level and blends adjacent levels into a smooth,
//! continuous animation.
//!
//! # Features
//!
//! - **Pattern generators**: sparse lattice, Menger-style fractal
//!   subdivision, seeded stochastic lattice and perforated spherical shell
//! - **Level cache**: `(pattern, level)` memoization with optional LRU bound
//!   and a thread-safe wrapper
//! - **Level interpolation**: index-paired lerp with quadratic growth of
//!   surplus cubes
//! - **Morph driver**: eases a continuous level toward a target and samples
//!   the blended field each frame
//!
//! # Example
//!
//! ```
//! use cube_field::{LevelCache, LevelMorph, MorphConfig, PatternId};
//!
//! let mut cache = LevelCache::new();
//! let mut morph = LevelMorph::new(PatternId::Fractal, MorphConfig::default());
//! morph.set_target(2.0);
//!
//! // Each frame
//! morph.advance(1.0 / 60.0);
//! let field = morph.sample(&mut cache);
//! println!("{} cubes, extent {:.2}", field.len(), field.extent());
//! ```

pub mod error;
pub mod pattern;
pub mod types;

// Re-export commonly used items
pub use error::CubeFieldError;
pub use pattern::PatternId;
pub use types::{Cube, CubeField, FALLBACK_EXTENT, FALLBACK_SIZE};

// Pattern generators
pub mod generators;

// Level interpolation
pub mod blend;
pub use blend::blend;

// (pattern, level) memoization
pub mod cache;
pub use cache::{CacheStats, FieldGenerator, LevelCache, LevelKey, Patterns, SharedLevelCache};

// Continuous level driver
pub mod morph;
pub use morph::{LevelCaps, LevelMorph, LevelSpan, MorphConfig};

// Presentation helpers
pub mod animation;
pub mod room;
pub use animation::{animate, JitterConfig};
pub use room::{room_outline, RoomOutline};
