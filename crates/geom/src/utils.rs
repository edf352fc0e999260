use crate::scalar::Scalar;
use crate::Vector;
use arrayvec::ArrayVec;

/// Signed angle from `a` to `b`, between -PI and PI.
///
/// The sign follows the cross product of the two vectors, which means that with
/// the y axis pointing downwards a positive angle is a clockwise rotation.
///
/// ex: `signed_angle([1,0], [0,1]) = PI/2`
///     `signed_angle([0,1], [1,0]) = -PI/2`
pub fn signed_angle<S: Scalar>(a: Vector<S>, b: Vector<S>) -> S {
    let norms = (a.square_length() * b.square_length()).sqrt();
    if norms == S::ZERO {
        return S::ZERO;
    }

    // Rounding errors can push the cosine slightly out of [-1, 1].
    let cos = (a.dot(b) / norms).max(-S::ONE).min(S::ONE);
    let angle = cos.acos();

    if a.cross(b) < S::ZERO {
        -angle
    } else {
        angle
    }
}

/// Wraps an angle in radians into [0, 2*PI).
#[inline]
pub fn wrap_angle<S: Scalar>(angle: S) -> S {
    let tau = S::TWO * S::PI();
    let wrapped = angle % tau;
    if wrapped < S::ZERO {
        wrapped + tau
    } else {
        wrapped
    }
}

/// Real roots of `a * t² + b * t + c = 0`.
pub fn quadratic_polynomial_roots<S: Scalar>(a: S, b: S, c: S) -> ArrayVec<S, 2> {
    let mut result = ArrayVec::new();

    if a == S::ZERO {
        if b != S::ZERO {
            result.push(-c / b);
        }
        return result;
    }

    let discriminant = b * b - S::FOUR * a * c;

    if discriminant.abs() < S::EPSILON * S::EPSILON {
        result.push(-b / (S::TWO * a));
        return result;
    }

    if discriminant < S::ZERO {
        return result;
    }

    // This code is derived from https://www2.units.it/ipl/students_area/imm2/files/Numerical_Recipes.pdf page 184.
    // Computing the roots this way avoids precision issues when a, c or both are small.
    let discriminant_sqrt = discriminant.sqrt();
    let sign_b = if b >= S::ZERO { S::ONE } else { -S::ONE };
    let q = -S::HALF * (b + sign_b * discriminant_sqrt);
    result.push(q / a);
    if q != S::ZERO {
        result.push(c / q);
    }

    result
}

#[test]
fn signed_angle_quadrants() {
    use crate::vector;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    assert!(approx_eq(signed_angle(vector(1.0, 0.0), vector(0.0, 1.0)), FRAC_PI_2));
    assert!(approx_eq(signed_angle(vector(0.0, 1.0), vector(1.0, 0.0)), -FRAC_PI_2));
    assert!(approx_eq(signed_angle(vector(1.0, 0.0), vector(-3.0, 0.0)), PI));
    assert!(approx_eq(signed_angle(vector(2.0, 2.0), vector(5.0, 5.0)), 0.0));
    assert_eq!(signed_angle(vector(0.0, 0.0), vector(5.0, 5.0)), 0.0);
}

#[test]
fn wrap_negative_angles() {
    use core::f64::consts::PI;

    assert!((wrap_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
    assert!((wrap_angle(5.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
    assert_eq!(wrap_angle(0.0f64), 0.0);
}

#[test]
fn quadratic_roots() {
    let roots = quadratic_polynomial_roots(1.0f64, -3.0, 2.0);
    let mut roots: std::vec::Vec<f64> = roots.into_iter().collect();
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(roots.len(), 2);
    assert!((roots[0] - 1.0).abs() < 1e-12);
    assert!((roots[1] - 2.0).abs() < 1e-12);

    assert_eq!(quadratic_polynomial_roots(0.0f64, 0.0, 1.0).len(), 0);
    assert_eq!(quadratic_polynomial_roots(0.0f64, 2.0, -1.0).as_slice(), &[0.5]);
    assert_eq!(quadratic_polynomial_roots(1.0f64, 0.0, 1.0).len(), 0);
}
