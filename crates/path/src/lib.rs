#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures and conversions to work with SVG path data.
//!
//! A [`Path`](struct.Path.html) is a sequence of [`Command`](struct.Command.html)s, each of
//! them being one of the ten SVG path commands with its arguments, in absolute or relative
//! coordinates.
//!
//! Paths are immutable values: every conversion produces a new path.
//!
//! This crate is reexported in [pathdata](https://docs.rs/pathdata/).
//!
//! # Examples
//!
//! ```
//! # extern crate pathdata_path;
//! # fn main() {
//! use pathdata_path::{Command, ConversionOptions, Path};
//! use pathdata_path::math::point;
//!
//! let path = Path::new(vec![
//!     Command::move_to(point(10.0, 10.0)),
//!     Command::horizontal_line_to(50.0),
//!     Command::line_to(point(50.0, 30.0)),
//!     Command::close(),
//! ]).unwrap();
//!
//! // Relative commands with shorthands, rounded to 3 decimals.
//! let optimized = path.convert(&ConversionOptions::optimized());
//! assert!(optimized.commands()[1].is_relative());
//! # }
//! ```
//!

pub use pathdata_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod array;
pub mod commands;
pub mod convert;
pub mod coordinates;
pub mod curves;
pub mod options;
pub mod path;
mod path_state;
pub mod shorthands;
pub mod verbose;

#[doc(inline)]
pub use crate::array::ArrayCommand;
#[doc(inline)]
pub use crate::commands::{Command, CommandKind};
#[doc(inline)]
pub use crate::convert::convert;
#[doc(inline)]
pub use crate::options::{ConversionOptions, Pipeline};
#[doc(inline)]
pub use crate::path::Path;
pub use crate::path_state::PathState;
#[doc(inline)]
pub use crate::verbose::VerboseCommand;
pub use crate::geom::ArcFlags;

use thiserror::Error;

/// The errors that can occur when building commands and paths from untrusted data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PathError {
    #[error("a path must contain at least one command")]
    Empty,
    #[error("a path must start with a move-to command, found {0:?}")]
    MissingMoveTo(CommandKind),
    #[error("the {kind:?} command expects {expected} values, got {actual}")]
    Arity {
        kind: CommandKind,
        expected: usize,
        actual: usize,
    },
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
}

pub mod math {
    //! f64 version of the pathdata_geom types used everywhere.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}

/// Rounds a value to a number of fractional digits.
///
/// Negative zero is normalized to zero. Values that would overflow once scaled are
/// returned unchanged.
#[inline]
pub fn round_value(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    (scaled.round() / factor) + 0.0
}

#[test]
fn rounding() {
    assert_eq!(round_value(1.23456, 3), 1.235);
    assert_eq!(round_value(-1.23456, 1), -1.2);
    assert_eq!(round_value(2.5, 0), 3.0);
    assert_eq!(round_value(-0.0001, 2), 0.0);
    assert!(round_value(-0.0001, 2).is_sign_positive());
    assert_eq!(round_value(1e300, 20), 1e300);
}
