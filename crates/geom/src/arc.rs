//! Elliptic arc related maths and tools.
//!
//! Arcs are described the way SVG path data does it (`SvgArc`): a start point, an end
//! point, radii, a rotation and two flags selecting one of the four candidate arcs.
//! `ArcCenterParameters` is the equivalent center-based description.

use crate::scalar::{Float, Scalar};
use crate::utils::{signed_angle, wrap_angle};
use crate::{point, vector, Angle, CubicBezierSegment, Point, Vector};

use thiserror::Error;

/// The maximum number of cubic bézier curves per quarter of arc.
pub const MAX_ACCURACY: u32 = 64;

/// An elliptic arc curve segment using the SVG's end-point notation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc<S> {
    pub from: Point<S>,
    pub to: Point<S>,
    pub radii: Vector<S>,
    pub x_rotation: Angle<S>,
    pub flags: ArcFlags,
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arc sweeps, two will represent an arc sweep of greater
    /// than or equal to 180 degrees (the "large-arc"), and two will represent an arc
    /// sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
    /// is true, then one of the two larger arc sweeps will be chosen.
    pub large_arc: bool,
    /// If `sweep` is true, then the arc will be drawn in a "positive-angle" direction
    /// (with the y axis pointing down, clockwise).
    pub sweep: bool,
}

/// The reasons why an arc has no center.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidArc {
    #[error("the radii of the arc must not be zero")]
    ZeroRadius,
    #[error("the start point of the arc must differ from its end point")]
    CoincidentEndpoints,
}

/// The center parametrization of an arc.
///
/// The radii are the ones actually used to draw the arc: they are scaled up when the
/// requested radii are too small to join the two end points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcCenterParameters<S> {
    pub center: Point<S>,
    pub radii: Vector<S>,
    pub x_rotation: Angle<S>,
    /// In `[0, 2*PI)`.
    pub start_angle: Angle<S>,
    /// Negative when the arc is drawn in the negative-angle direction.
    pub delta_angle: Angle<S>,
    /// In `[0, 2*PI)`.
    pub end_angle: Angle<S>,
    /// Same as the sweep flag.
    pub clockwise: bool,
}

impl<S: Scalar> ArcCenterParameters<S> {
    /// Sample the arc at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let angle = self.start_angle.radians + self.delta_angle.radians * t;
        let (sin, cos) = angle.sin_cos();
        self.map_unit_point(cos, sin)
    }

    /// Maps a point of the unit circle onto the ellipse.
    #[inline]
    fn map_unit_point(&self, x: S, y: S) -> Point<S> {
        let (sin, cos) = self.x_rotation.radians.sin_cos();
        let x = x * self.radii.x;
        let y = y * self.radii.y;

        point(
            cos * x - sin * y + self.center.x,
            sin * x + cos * y + self.center.y,
        )
    }
}

// The center computation shared by the center parametrization and the conversion
// to cubic bézier curves.
struct Center<S> {
    center: Point<S>,
    radii: Vector<S>,
    start: S,
    delta: S,
}

impl<S: Scalar> SvgArc<S> {
    /// Computes the center parametrization of the arc.
    ///
    /// See the W3C implementation notes, sections F.6.5 and F.6.6.
    pub fn center_parameters(&self) -> Result<ArcCenterParameters<S>, InvalidArc> {
        let Center {
            center,
            radii,
            start,
            delta,
        } = self.solve_center()?;

        Ok(ArcCenterParameters {
            center,
            radii,
            x_rotation: self.x_rotation,
            start_angle: Angle::radians(wrap_angle(start)),
            delta_angle: Angle::radians(delta),
            end_angle: Angle::radians(wrap_angle(start + delta)),
            clockwise: self.flags.sweep,
        })
    }

    fn solve_center(&self) -> Result<Center<S>, InvalidArc> {
        let mut rx = S::abs(self.radii.x);
        let mut ry = S::abs(self.radii.y);
        if rx == S::ZERO || ry == S::ZERO {
            return Err(InvalidArc::ZeroRadius);
        }

        let (sin_phi, cos_phi) = self.x_rotation.radians.sin_cos();
        let hd = (self.from - self.to) / S::TWO;
        let hs = (self.from.to_vector() + self.to.to_vector()) / S::TWO;

        // F6.5.1
        let p = vector(
            cos_phi * hd.x + sin_phi * hd.y,
            cos_phi * hd.y - sin_phi * hd.x,
        );

        // F6.6 step 3: ensure the radii are large enough.
        let lambda = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
        if lambda > S::ONE {
            let scale = lambda.sqrt();
            rx = rx * scale;
            ry = ry * scale;
        }

        let rxry = rx * ry;
        let rxpy = rx * p.y;
        let rypx = ry * p.x;
        let sum_of_sq = rxpy * rxpy + rypx * rypx;
        if sum_of_sq == S::ZERO {
            return Err(InvalidArc::CoincidentEndpoints);
        }

        // Rounding errors can make the radicand slightly negative after scaling the radii.
        let radicand = S::max((rxry * rxry - sum_of_sq) / sum_of_sq, S::ZERO);
        let sign_coe = if self.flags.large_arc == self.flags.sweep {
            -S::ONE
        } else {
            S::ONE
        };
        let coe = sign_coe * radicand.sqrt();

        // F6.5.2
        let transformed_cx = coe * rxpy / ry;
        let transformed_cy = -coe * rypx / rx;

        // F6.5.3
        let center = point(
            cos_phi * transformed_cx - sin_phi * transformed_cy + hs.x,
            sin_phi * transformed_cx + cos_phi * transformed_cy + hs.y,
        );

        let a = vector((p.x - transformed_cx) / rx, (p.y - transformed_cy) / ry);
        let b = vector((-p.x - transformed_cx) / rx, (-p.y - transformed_cy) / ry);

        // F6.5.5 and F6.5.6
        let start = signed_angle(vector(S::ONE, S::ZERO), a);
        let mut delta = signed_angle(a, b);
        let tau = S::TWO * S::PI();
        if self.flags.sweep && delta < S::ZERO {
            delta += tau;
        } else if !self.flags.sweep && delta > S::ZERO {
            delta -= tau;
        }

        Ok(Center {
            center,
            radii: vector(rx, ry),
            start,
            delta,
        })
    }

    /// Approximates the arc with a sequence of cubic bézier curves.
    ///
    /// The arc is split into segments of roughly 90 degrees, each segment being split
    /// again `accuracy` times (at most `MAX_ACCURACY`). Arcs with a zero radius or equal
    /// end points produce no curve at all.
    ///
    /// Note that an arc sweeping less than 45 degrees rounds to zero segments and
    /// produces no curve either.
    pub fn for_each_cubic_bezier<F>(&self, accuracy: u32, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        let solved = match self.solve_center() {
            Ok(solved) => solved,
            Err(_) => return,
        };

        let quarters = (S::abs(solved.delta) / S::FRAC_PI_2()).round();
        let segments = quarters
            .to_u32()
            .unwrap_or(0)
            .saturating_mul(accuracy.min(MAX_ACCURACY));
        if segments == 0 {
            return;
        }

        let params = ArcCenterParameters {
            center: solved.center,
            radii: solved.radii,
            x_rotation: self.x_rotation,
            start_angle: Angle::radians(solved.start),
            delta_angle: Angle::radians(solved.delta),
            end_angle: Angle::radians(solved.start + solved.delta),
            clockwise: self.flags.sweep,
        };

        let step = solved.delta / S::value(segments as f32);
        // Distance of the control points to the end points on the unit circle.
        let k = S::FOUR / S::THREE * Float::tan(step / S::FOUR);

        let mut from = self.from;
        for i in 0..segments {
            let a1 = solved.start + step * S::value(i as f32);
            let a2 = a1 + step;
            let (sin1, cos1) = a1.sin_cos();
            let (sin2, cos2) = a2.sin_cos();

            let to = if i + 1 == segments {
                self.to
            } else {
                params.map_unit_point(cos2, sin2)
            };

            let curve = CubicBezierSegment {
                from,
                ctrl1: params.map_unit_point(cos1 - sin1 * k, sin1 + cos1 * k),
                ctrl2: params.map_unit_point(cos2 + sin2 * k, sin2 - cos2 * k),
                to,
            };
            cb(&curve);

            from = to;
        }
    }

    /// Approximates the arc with a sequence of cubic bézier curves.
    pub fn to_cubic_beziers(&self, accuracy: u32) -> std::vec::Vec<CubicBezierSegment<S>> {
        let mut curves = std::vec::Vec::new();
        self.for_each_cubic_bezier(accuracy, &mut |curve| curves.push(*curve));

        curves
    }
}

#[cfg(test)]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn half_circle_center() {
    use core::f64::consts::PI;

    let arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(100.0, 0.0),
        radii: vector(50.0, 50.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    let params = arc.center_parameters().unwrap();
    assert!(approx_eq(params.center.x, 50.0));
    assert!(approx_eq(params.center.y, 0.0));
    assert_eq!(params.radii, vector(50.0, 50.0));
    assert!(approx_eq(params.start_angle.radians, PI));
    assert!(approx_eq(params.delta_angle.radians, PI));
    assert!(approx_eq(params.end_angle.radians, 0.0));
    assert!(params.clockwise);

    let arc = SvgArc {
        flags: ArcFlags {
            large_arc: false,
            sweep: false,
        },
        ..arc
    };
    let params = arc.center_parameters().unwrap();
    assert!(approx_eq(params.delta_angle.radians, -PI));
    assert!(approx_eq(params.delta_angle.to_degrees(), -180.0));
    assert!(!params.clockwise);
}

#[test]
fn radii_are_scaled_up() {
    let arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(100.0, 0.0),
        radii: vector(10.0, 10.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags::default(),
    };

    let params = arc.center_parameters().unwrap();
    assert!(approx_eq(params.radii.x, 50.0));
    assert!(approx_eq(params.radii.y, 50.0));
    assert!(approx_eq(params.center.x, 50.0));
}

#[test]
fn invalid_arcs() {
    let arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(100.0, 0.0),
        radii: vector(0.0, 10.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags::default(),
    };
    assert_eq!(arc.center_parameters(), Err(InvalidArc::ZeroRadius));
    assert!(arc.to_cubic_beziers(1).is_empty());

    let arc = SvgArc {
        to: point(0.0, 0.0),
        radii: vector(10.0, 10.0),
        ..arc
    };
    assert_eq!(arc.center_parameters(), Err(InvalidArc::CoincidentEndpoints));
    assert!(arc.to_cubic_beziers(1).is_empty());
}

#[test]
fn quarter_circle_to_cubic() {
    // A quarter of a circle of radius 50 centered at (0, 0).
    let arc = SvgArc {
        from: point(50.0f64, 0.0),
        to: point(0.0, 50.0),
        radii: vector(50.0, 50.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    let params = arc.center_parameters().unwrap();
    assert!(params.center.to_vector().length() < 1e-9);

    let curves = arc.to_cubic_beziers(1);
    assert_eq!(curves.len(), 1);
    assert_eq!(curves[0].from, arc.from);
    assert_eq!(curves[0].to, arc.to);
    let mid = curves[0].sample(0.5);
    assert!((mid.to_vector().length() - 50.0).abs() < 0.01);

    let curves = arc.to_cubic_beziers(3);
    assert_eq!(curves.len(), 3);
    for pair in curves.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    for curve in &curves {
        for i in 0..=10 {
            let p = curve.sample(i as f64 / 10.0);
            assert!((p.to_vector().length() - 50.0).abs() < 0.01);
        }
    }
}

#[test]
fn rotated_ellipse() {
    let arc = SvgArc {
        from: point(10.0f64, 10.0),
        to: point(80.0, 45.0),
        radii: vector(40.0, 20.0),
        x_rotation: Angle::degrees(30.0),
        flags: ArcFlags {
            large_arc: true,
            sweep: false,
        },
    };

    let params = arc.center_parameters().unwrap();
    assert!((params.sample(0.0) - arc.from).length() < 1e-6);
    assert!((params.sample(1.0) - arc.to).length() < 1e-6);
    assert!(params.delta_angle.radians < 0.0);

    let curves = arc.to_cubic_beziers(1);
    assert!(!curves.is_empty());
    assert_eq!(curves.last().unwrap().to, arc.to);
    for curve in &curves {
        let p = curve.sample(0.5);
        let on_arc = (0..=1000)
            .map(|i| (params.sample(i as f64 / 1000.0) - p).length())
            .fold(f64::INFINITY, f64::min);
        assert!(on_arc < 0.5);
    }
}

#[test]
fn small_sweeps_produce_no_curve() {
    let arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(1.0, 0.0),
        radii: vector(100.0, 100.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags::default(),
    };

    assert!(arc.center_parameters().is_ok());
    assert!(arc.to_cubic_beziers(1).is_empty());
}

#[test]
fn accuracy_is_bounded() {
    let arc = SvgArc {
        from: point(0.0f64, 0.0),
        to: point(100.0, 0.0),
        radii: vector(50.0, 50.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags::default(),
    };

    let curves = arc.to_cubic_beziers(u32::MAX / 2 + 1);
    assert_eq!(curves.len(), 2 * MAX_ACCURACY as usize);
    assert_eq!(curves.last().unwrap().to, arc.to);
}
