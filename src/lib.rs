#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`StripAnimator`**: Steps one strip's pixel buffer through its current animation mode
//! - **`Mode`**: The closed set of animations a strip can run, with stable numeric codes
//! - **`StripAction`**: One configuration change for a strip (mode plus its parameters)
//! - **`StripCommand`**: An action addressed to a particular strip
//! - **`StripCollection`**: Fixed-capacity set of independent animators addressed by `StripId`
//! - **`colors::hsv_to_color`**: Hue-wheel conversion used to seed rainbows
//!
//! Pixels are `Srgb<u8>` values borrowed from the caller. The animator never
//! allocates and never waits: the caller decides when to call `tick` and
//! pushes the buffer to the hardware afterwards.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod animator;
pub mod collection;
pub mod colors;
pub mod command;
pub mod mode;

pub use animator::{BIT_PATTERN_WIDTH, StripAnimator, StripError};
pub use collection::{CollectionError, StripCollection, StripId};
pub use colors::{BLACK, BLUE, Color, GREEN, OFF, RED, WHITE, hsv_to_color};
pub use command::{StripAction, StripCommand};
pub use mode::{Direction, Mode};
