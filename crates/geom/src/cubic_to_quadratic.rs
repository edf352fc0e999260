//! Approximation of cubic bézier curves with sequences of quadratic ones.
//!
//! The curve is first split at its inflection points. Each piece is then approximated
//! with an increasing number of quadratic curves (from 1 to 8) until the two curves
//! are within the tolerance of each other.

use crate::scalar::Scalar;
use crate::{CubicBezierSegment, Line, LineSegment, Point, QuadraticBezierSegment};

use arrayvec::ArrayVec;

/// The maximum number of quadratic curves used to approximate a single piece
/// of cubic curve (without inflections).
pub const MAX_QUADRATICS_PER_PIECE: usize = 8;

const SAMPLES: usize = 11;

/// Approximates a cubic bézier curve with a sequence of quadratic ones.
///
/// The end points of the sequence are exactly the end points of the cubic curve and
/// consecutive quadratic curves share their end points.
///
/// If no approximation with up to `MAX_QUADRATICS_PER_PIECE` quadratic curves per piece
/// is within the tolerance, the approximation with the maximum number of curves is used.
pub fn cubic_to_quadratics<S: Scalar, F>(
    curve: &CubicBezierSegment<S>,
    tolerance: S,
    cb: &mut F,
) where
    F: FnMut(&QuadraticBezierSegment<S>),
{
    let mut rest = *curve;
    let mut prev_t = S::ZERO;
    for t in curve.inflections() {
        // Parameter of the inflection relative to the remaining part of the curve.
        let local_t = (t - prev_t) / (S::ONE - prev_t);
        let (before, after) = rest.split(local_t);
        approximate_piece(&before, tolerance, cb);
        rest = after;
        prev_t = t;
    }

    approximate_piece(&rest, tolerance, cb);
}

/// Approximates a cubic curve that has no inflection.
fn approximate_piece<S: Scalar, F>(curve: &CubicBezierSegment<S>, tolerance: S, cb: &mut F)
where
    F: FnMut(&QuadraticBezierSegment<S>),
{
    let mut quadratics = ArrayVec::<QuadraticBezierSegment<S>, MAX_QUADRATICS_PER_PIECE>::new();
    for count in 1..=MAX_QUADRATICS_PER_PIECE {
        quadratics.clear();
        let step = S::ONE / S::value(count as f32);
        for i in 0..count {
            let t0 = step * S::value(i as f32);
            let t1 = if i + 1 == count {
                S::ONE
            } else {
                step * S::value((i + 1) as f32)
            };
            quadratics.push(span_approximation(curve, t0, t1));
        }

        if count == MAX_QUADRATICS_PER_PIECE {
            break;
        }

        if count == 1 && doubles_back(curve, &quadratics[0]) {
            continue;
        }

        let close = quadratics.iter().enumerate().all(|(i, quad)| {
            let t0 = step * S::value(i as f32);
            let t1 = if i + 1 == count {
                S::ONE
            } else {
                step * S::value((i + 1) as f32)
            };
            is_span_approximation_close(curve, t0, t1, quad, tolerance)
        });

        if close {
            break;
        }
    }

    for quad in &quadratics {
        cb(quad);
    }
}

/// Approximates the `t0..t1` range of a cubic curve with a single quadratic curve.
///
/// The control point is the intersection of the tangents at both ends of the range,
/// or the middle of the range's end points if the tangents are parallel.
fn span_approximation<S: Scalar>(
    curve: &CubicBezierSegment<S>,
    t0: S,
    t1: S,
) -> QuadraticBezierSegment<S> {
    let from = if t0 == S::ZERO { curve.from } else { curve.sample(t0) };
    let to = if t1 == S::ONE { curve.to } else { curve.sample(t1) };

    let l1 = Line {
        point: from,
        vector: curve.derivative(t0),
    };
    let l2 = Line {
        point: to,
        vector: curve.derivative(t1),
    };

    let ctrl = l1
        .intersection(&l2)
        .unwrap_or_else(|| from.lerp(to, S::HALF));

    QuadraticBezierSegment { from, ctrl, to }
}

/// A single quadratic whose control point lies behind one of the end points of the
/// cubic curve (relative to the cubic's own control points) folds back onto itself.
fn doubles_back<S: Scalar>(
    curve: &CubicBezierSegment<S>,
    quad: &QuadraticBezierSegment<S>,
) -> bool {
    let start = (quad.ctrl - curve.from).dot(curve.ctrl1 - curve.from);
    let end = (quad.ctrl - curve.to).dot(curve.ctrl2 - curve.to);

    start < S::ZERO || end < S::ZERO
}

/// Checks that the two curves are within `tolerance` of each other, in both directions.
///
/// Both curves are sampled and each interior sample of one curve is compared against
/// the polyline formed by the samples of the other curve.
fn is_span_approximation_close<S: Scalar>(
    curve: &CubicBezierSegment<S>,
    t0: S,
    t1: S,
    quad: &QuadraticBezierSegment<S>,
    tolerance: S,
) -> bool {
    let square_tolerance = tolerance * tolerance;

    let mut cubic_points = ArrayVec::<Point<S>, SAMPLES>::new();
    let mut quadratic_points = ArrayVec::<Point<S>, SAMPLES>::new();
    let steps = S::value((SAMPLES - 1) as f32);
    for i in 0..SAMPLES {
        let t = S::value(i as f32) / steps;
        cubic_points.push(curve.sample(t0 + (t1 - t0) * t));
        quadratic_points.push(quad.sample(t));
    }

    is_polyline_close(&cubic_points, &quadratic_points, square_tolerance)
        && is_polyline_close(&quadratic_points, &cubic_points, square_tolerance)
}

fn is_polyline_close<S: Scalar>(
    points: &[Point<S>],
    polyline: &[Point<S>],
    square_tolerance: S,
) -> bool {
    let interior = &points[1..points.len() - 1];
    interior.iter().all(|&p| {
        polyline
            .windows(2)
            .map(|w| {
                LineSegment {
                    from: w[0],
                    to: w[1],
                }
                .square_distance_to_point(p)
            })
            .fold(S::infinity(), S::min)
            <= square_tolerance
    })
}

#[cfg(test)]
use crate::point;

#[test]
fn straight_line_gives_a_single_quadratic() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 10.0),
        ctrl2: point(20.0, 20.0),
        to: point(30.0, 30.0),
    };

    let mut quadratics = std::vec::Vec::new();
    cubic_to_quadratics(&curve, 0.1, &mut |quad| quadratics.push(*quad));

    assert_eq!(quadratics.len(), 1);
    assert_eq!(quadratics[0].from, curve.from);
    assert_eq!(quadratics[0].to, curve.to);
}

#[test]
fn elevated_quadratic_is_recovered() {
    let quadratic = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(50.0, 100.0),
        to: point(100.0, 0.0),
    };

    let quadratics = quadratic.to_cubic().to_quadratics(0.1);

    assert_eq!(quadratics.len(), 1);
    assert!((quadratics[0].ctrl - quadratic.ctrl).length() < 1e-9);
}

#[test]
fn approximation_is_within_tolerance() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    };
    let tolerance = 0.1;

    let quadratics = curve.to_quadratics(tolerance);
    assert!(quadratics.len() > 1);
    assert!(quadratics.len() <= MAX_QUADRATICS_PER_PIECE);
    assert_eq!(quadratics[0].from, curve.from);
    assert_eq!(quadratics.last().unwrap().to, curve.to);

    for pair in quadratics.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }

    // Every quadratic stays close to the cubic curve.
    let reference: std::vec::Vec<_> = (0..=1000).map(|i| curve.sample(i as f64 / 1000.0)).collect();
    for quad in &quadratics {
        for i in 1..10 {
            let p = quad.sample(i as f64 / 10.0);
            let d = reference
                .iter()
                .map(|q| (*q - p).length())
                .fold(f64::INFINITY, f64::min);
            assert!(d < 0.5);
        }
    }
}

#[test]
fn s_curve_is_split_at_its_inflection() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 10.0),
        ctrl2: point(0.0, 10.0),
        to: point(10.0, 20.0),
    };

    let quadratics = curve.to_quadratics(0.1);
    assert!(quadratics.len() >= 2);
    assert_eq!(quadratics[0].from, curve.from);
    assert_eq!(quadratics.last().unwrap().to, curve.to);

    // One of the quadratic curves ends at the inflection point.
    let inflection = curve.sample(0.5);
    assert!(quadratics
        .iter()
        .any(|quad| (quad.to - inflection).length() < 1e-9));
}
