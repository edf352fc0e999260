use crate::scalar::Scalar;
use crate::{point, Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Returns the point of this segment that is the closest to `p`.
    ///
    /// Degenerate segments (`from == to`) return `from`.
    #[inline]
    pub fn closest_point(&self, p: Point<S>) -> Point<S> {
        let v1 = self.to - self.from;
        let v2 = p - self.from;
        let square_length = v1.dot(v1);
        if square_length == S::ZERO {
            return self.from;
        }

        let t = S::min(S::max(v2.dot(v1) / square_length, S::ZERO), S::ONE);

        self.from + v1 * t
    }

    /// Returned the squared distance to a point.
    ///
    /// Can be useful to avoid a square root when comparing against a
    /// distance that can be squared instead.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        (self.closest_point(p) - p).square_length()
    }
}

/// An infinite line defined by a point and a vector.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line<S> {
    pub point: Point<S>,
    pub vector: Vector<S>,
}

impl<S: Scalar> Line<S> {
    /// Returns the intersection of the two lines, or `None` if they are parallel
    /// (the cross product of their vectors is below `Scalar::EPSILON`).
    pub fn intersection(&self, other: &Self) -> Option<Point<S>> {
        let det = self.vector.cross(other.vector);
        if S::abs(det) <= S::EPSILON {
            // The lines are very close to parallel
            return None;
        }
        let inv_det = S::ONE / det;
        let self_p2 = self.point + self.vector;
        let other_p2 = other.point + other.vector;
        let a = self.point.to_vector().cross(self_p2.to_vector());
        let b = other.point.to_vector().cross(other_p2.to_vector());

        Some(point(
            (b * self.vector.x - a * other.vector.x) * inv_det,
            (b * self.vector.y - a * other.vector.y) * inv_det,
        ))
    }
}

#[test]
fn intersection_of_tangents() {
    use crate::vector;

    let l1 = Line {
        point: point(0.0f64, 0.0),
        vector: vector(1.0, 1.0),
    };
    let l2 = Line {
        point: point(10.0, 0.0),
        vector: vector(-1.0, 1.0),
    };

    let p = l1.intersection(&l2).unwrap();
    assert!((p.x - 5.0).abs() < 1e-9);
    assert!((p.y - 5.0).abs() < 1e-9);

    let parallel = Line {
        point: point(0.0, 3.0),
        vector: vector(2.0, 2.0),
    };
    assert!(l1.intersection(&parallel).is_none());
}

#[test]
fn distance_to_segment() {
    let segment = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(10.0, 0.0),
    };

    assert_eq!(segment.square_distance_to_point(point(5.0, 3.0)), 9.0);
    // Beyond the end points the distance is measured to the closest end point.
    assert_eq!(segment.square_distance_to_point(point(13.0, 4.0)), 25.0);
    assert_eq!(segment.square_distance_to_point(point(-3.0, 0.0)), 9.0);

    let degenerate = LineSegment {
        from: point(1.0f64, 1.0),
        to: point(1.0, 1.0),
    };
    assert_eq!(degenerate.square_distance_to_point(point(4.0, 5.0)), 25.0);
}
