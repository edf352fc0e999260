use crate::scalar::Scalar;
use crate::{CubicBezierSegment, Point};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Elevate this curve to a third order bézier.
    ///
    /// The resulting cubic describes exactly the same curve.
    pub fn to_cubic(&self) -> CubicBezierSegment<S> {
        CubicBezierSegment {
            from: self.from,
            ctrl1: (self.from + self.ctrl.to_vector() * S::TWO) / S::THREE,
            ctrl2: (self.to + self.ctrl.to_vector() * S::TWO) / S::THREE,
            to: self.to,
        }
    }
}

#[test]
fn sample_end_points() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 2.0),
        to: point(2.0, 0.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert_eq!(curve.sample(0.5), point(1.0, 1.0));
}

#[test]
fn elevation_preserves_the_curve() {
    use crate::point;

    let quadratic = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(30.0, 60.0),
        to: point(90.0, 0.0),
    };
    let cubic = quadratic.to_cubic();

    assert_eq!(cubic.ctrl1, point(20.0, 40.0));
    assert_eq!(cubic.ctrl2, point(50.0, 40.0));

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let a = quadratic.sample(t);
        let b = cubic.sample(t);
        assert!((a - b).length() < 1e-9);
    }
}
