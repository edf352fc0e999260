#![deny(bare_trait_objects)]

//! Reading and writing the SVG path data syntax.
//!
//! ```
//! # extern crate pathdata_svg;
//! use pathdata_svg::{parse_with_options, to_path_string};
//! use pathdata_svg::path::ConversionOptions;
//!
//! let path = parse_with_options("M 10 10 h 10 v 10 z", &ConversionOptions::DEFAULT).unwrap();
//! assert_eq!(to_path_string(&path, None, false), "M10 10L20 10L20 20Z");
//! ```

pub extern crate pathdata_path as path;

pub mod parser;
pub mod serializer;

#[doc(inline)]
pub use crate::parser::{parse, parse_with_options, Diagnostic, ParseError, PathParser, Source};
#[doc(inline)]
pub use crate::serializer::to_path_string;
