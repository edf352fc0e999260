use crate::cubic_to_quadratic::cubic_to_quadratics;
use crate::scalar::Scalar;
use crate::utils::quadratic_polynomial_roots;
use crate::{Point, QuadraticBezierSegment, Vector};
use arrayvec::ArrayVec;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    #[inline]
    fn derivative_coefficients(&self, t: S) -> (S, S, S, S) {
        let t2 = t * t;
        (
            -S::THREE * t2 + S::SIX * t - S::THREE,
            S::NINE * t2 - S::value(12.0) * t + S::THREE,
            -S::NINE * t2 + S::SIX * t,
            S::THREE * t2,
        )
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        let (c0, c1, c2, c3) = self.derivative_coefficients(t);
        self.from.to_vector() * c0
            + self.ctrl1.to_vector() * c1
            + self.ctrl2.to_vector() * c2
            + self.to.to_vector() * c3
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;
        let ctrl1aaa = ctrl1aa + (ctrl2aa - ctrl1aa) * t;

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    /// Parameters of the inflection points of the curve, sorted in increasing order.
    ///
    /// Only the inflections strictly inside the curve are returned, roots closer than
    /// `1e-8` to either end point are ignored.
    pub fn inflections(&self) -> ArrayVec<S, 2> {
        // See www.faculty.idc.ac.il/arik/quality/appendixa.html for an explanation
        // of this approach.
        let pa = self.ctrl1 - self.from;
        let pb = self.ctrl2.to_vector() - (self.ctrl1.to_vector() * S::TWO) + self.from.to_vector();
        let pc = self.to.to_vector() - (self.ctrl2.to_vector() * S::THREE)
            + (self.ctrl1.to_vector() * S::THREE)
            - self.from.to_vector();

        let a = pb.cross(pc);
        let b = pa.cross(pc);
        let c = pa.cross(pb);

        let margin = S::value(1e-8);
        let mut result: ArrayVec<S, 2> = quadratic_polynomial_roots(a, b, c)
            .into_iter()
            .filter(|&t| t > margin && t < S::ONE - margin)
            .collect();

        if result.len() == 2 && result[0] > result[1] {
            result.swap(0, 1);
        }

        result
    }

    /// Approximates the cubic bézier curve with sequence of quadratic ones,
    /// invoking a callback at each step.
    ///
    /// The `tolerance` parameter is the maximum distance allowed between the curve
    /// and its approximation.
    pub fn for_each_quadratic_bezier<F>(&self, tolerance: S, cb: &mut F)
    where
        F: FnMut(&QuadraticBezierSegment<S>),
    {
        cubic_to_quadratics(self, tolerance, cb);
    }

    /// Approximates the cubic bézier curve with sequence of quadratic ones.
    pub fn to_quadratics(&self, tolerance: S) -> std::vec::Vec<QuadraticBezierSegment<S>> {
        let mut result = std::vec::Vec::new();
        self.for_each_quadratic_bezier(tolerance, &mut |quad| result.push(*quad));

        result
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn split_matches_sampling() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 40.0),
        ctrl2: point(60.0, 40.0),
        to: point(70.0, 0.0),
    };

    let (a, b) = curve.split(0.3);
    assert_eq!(a.from, curve.from);
    assert_eq!(b.to, curve.to);
    assert!((a.to - curve.sample(0.3)).length() < 1e-9);
    assert!((a.sample(0.5) - curve.sample(0.15)).length() < 1e-9);
    assert!((b.sample(0.5) - curve.sample(0.65)).length() < 1e-9);
}

#[test]
fn derivative_end_points() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 2.0),
        ctrl2: point(3.0, 2.0),
        to: point(4.0, 0.0),
    };

    assert_eq!(curve.derivative(0.0), (curve.ctrl1 - curve.from) * 3.0);
    assert_eq!(curve.derivative(1.0), (curve.to - curve.ctrl2) * 3.0);
}

#[test]
fn inflection_of_an_s_curve() {
    // Symmetric "S" shape, the inflection is in the middle.
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 10.0),
        ctrl2: point(0.0, 10.0),
        to: point(10.0, 20.0),
    };
    let inflections = curve.inflections();
    assert_eq!(inflections.len(), 1);
    assert!((inflections[0] - 0.5).abs() < 1e-9);
}

#[test]
fn no_inflections() {
    // A simple arch.
    let arch = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };
    assert!(arch.inflections().is_empty());

    // A straight line.
    let line = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 10.0),
        ctrl2: point(20.0, 20.0),
        to: point(30.0, 30.0),
    };
    assert!(line.inflections().is_empty());
}
