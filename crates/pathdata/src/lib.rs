#![deny(bare_trait_objects)]

//! Parse, normalize, optimize and serialize SVG path data in Rust.
//!
//! # Crates
//!
//! This meta-crate (`pathdata`) reexports the following sub-crates for convenience:
//!
//! * **pathdata_geom** - Elliptic arc and bézier curve math: arc center parametrization,
//!   arc to cubic and cubic to quadratic approximations.
//! * **pathdata_path** - Path commands and the conversions between their forms
//!   (absolute/relative, shorthands, curve degrees) driven by `ConversionOptions`.
//! * **pathdata_svg** - The SVG path data parser and serializer.
//!
//! Each `pathdata_<name>` crate is reexported as a `<name>` module in `pathdata`. For example:
//!
//! ```ignore
//! extern crate pathdata_svg;
//! use pathdata_svg::parse;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate pathdata;
//! use pathdata::svg::parse;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Optimizing path data
//!
//! ```
//! use pathdata::path::ConversionOptions;
//! use pathdata::svg::{parse_with_options, to_path_string};
//!
//! let options = ConversionOptions::optimized();
//! let path = parse_with_options("M 10 10 L 50 10 L 50 30 Z", &options).unwrap();
//!
//! assert_eq!(
//!     to_path_string(&path, options.resolve().decimals, true),
//!     "M10 10h40v20z"
//! );
//! ```
//!
//! ## Normalizing path data
//!
//! Normalized paths only contain absolute `M`, `L`, `C` and `Z` commands, which makes them
//! easy to consume.
//!
//! ```
//! use pathdata::path::{CommandKind, ConversionOptions};
//! use pathdata::svg::parse_with_options;
//!
//! let path = parse_with_options(
//!     "m 0 0 h 10 q 5 5 10 0 a 5 5 0 0 1 10 0",
//!     &ConversionOptions::normalized(),
//! ).unwrap();
//!
//! for cmd in path.iter() {
//!     assert!(!cmd.is_relative());
//!     assert!(matches!(
//!         cmd.kind(),
//!         CommandKind::MoveTo | CommandKind::LineTo | CommandKind::CubicCurveTo
//!     ));
//! }
//! ```
//!
//! ## Dealing with invalid path data
//!
//! ```
//! use pathdata::svg::{parse, to_path_string, Diagnostic};
//!
//! // Syntax errors end the path.
//! let path = parse("M 0 0 L 10 10 L 20 # 30 L 40 40").unwrap();
//! assert_eq!(to_path_string(&path, None, false), "M0 0L10 10");
//!
//! // A path that does not start with a move-to is rejected entirely.
//! let err = parse("L 10 10").unwrap_err();
//! assert!(matches!(err.diagnostics[0], Diagnostic::MissingMoveTo { .. }));
//! assert_eq!(to_path_string(&err.path(), None, false), "M0 0L0 0");
//! ```

pub extern crate pathdata_geom;
pub extern crate pathdata_path;
pub extern crate pathdata_svg;

pub use pathdata_geom as geom;
pub use pathdata_path as path;
pub use pathdata_svg as svg;

pub use crate::path::math;
