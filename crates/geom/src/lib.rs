#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [pathdata](https://docs.rs/pathdata/).
//!
//! # Overview.
//!
//! This crate implements the maths needed to normalize SVG path data:
//!
//! - lines and line segments,
//! - quadratic and cubic bézier curves,
//! - elliptic arcs in their endpoint (`SvgArc`) and center (`ArcCenterParameters`) forms,
//! - the approximation of cubic bézier curves with sequences of quadratic ones.
//!
//! # Tolerance
//!
//! The tolerance threshold taken as input by the approximation algorithms corresponds
//! to the maximum distance between the original curve and its approximation.
//! The smaller the tolerance is, the more precise the approximation and the more segments
//! are generated.
//!

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

pub mod arc;
pub mod cubic_bezier;
pub mod cubic_to_quadratic;
mod line;
pub mod quadratic_bezier;
pub mod utils;

#[doc(inline)]
pub use crate::arc::{ArcCenterParameters, ArcFlags, InvalidArc, SvgArc};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::{Line, LineSegment};
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const SIX: Self;
        const NINE: Self;

        /// Threshold under which a determinant (or a cross product of tangents)
        /// is considered to be zero.
        const EPSILON: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;
        const NINE: Self = 9.0;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;
        const NINE: Self = 9.0;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
