use std::fmt;

use nalgebra::Vector2;

/// Triangle described by its three side lengths.
///
/// Invariant (established by `new`, kept by immutability): each pair of
/// sides strictly sums to more than the third. Under it the Heron radicand
/// in `area` is non-negative, so `area` never fails on a reachable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    side_a: f64,
    side_b: f64,
    side_c: f64,
}

/// Error raised when three lengths cannot form a triangle.
///
/// Carries the offending lengths so callers can report them verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidTriangleError {
    pub side_a: f64,
    pub side_b: f64,
    pub side_c: f64,
}

impl fmt::Display for InvalidTriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no triangle with sides ({}, {}, {}): one side equals or exceeds the sum of the other two",
            self.side_a, self.side_b, self.side_c
        )
    }
}

impl std::error::Error for InvalidTriangleError {}

impl Triangle {
    /// Construct from three side lengths.
    ///
    /// Fails unless the strict triangle inequality holds in all three
    /// directions. There is no separate positivity check; a non-positive
    /// side can never satisfy all three strict inequalities, so such
    /// triples are rejected by the same gate.
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Result<Self, InvalidTriangleError> {
        if !is_valid_triangle(side_a, side_b, side_c) {
            return Err(InvalidTriangleError {
                side_a,
                side_b,
                side_c,
            });
        }
        Ok(Self {
            side_a,
            side_b,
            side_c,
        })
    }

    /// Construct from three vertices; sides are the pairwise distances.
    ///
    /// Collinear or coincident vertices produce a degenerate side triple
    /// and fail the same strict inequality gate as `new`.
    pub fn from_points(
        p1: Vector2<f64>,
        p2: Vector2<f64>,
        p3: Vector2<f64>,
    ) -> Result<Self, InvalidTriangleError> {
        Self::new((p2 - p1).norm(), (p3 - p2).norm(), (p1 - p3).norm())
    }

    #[inline]
    pub fn side_a(&self) -> f64 {
        self.side_a
    }

    #[inline]
    pub fn side_b(&self) -> f64 {
        self.side_b
    }

    #[inline]
    pub fn side_c(&self) -> f64 {
        self.side_c
    }

    /// Area via Heron's formula on the semiperimeter.
    pub fn area(&self) -> f64 {
        let s = (self.side_a + self.side_b + self.side_c) / 2.0;
        (s * (s - self.side_a) * (s - self.side_b) * (s - self.side_c)).sqrt()
    }

    /// Whether the triangle is right-angled.
    ///
    /// Exact comparison: the squared longest side must equal the sum of the
    /// other two squares bit-for-bit. Side triples that are right only up
    /// to rounding (e.g. derived from irrational lengths) report `false`.
    pub fn is_right_triangle(&self) -> bool {
        let mut sides = [self.side_a, self.side_b, self.side_c];
        sides.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        sides[2] * sides[2] == sides[0] * sides[0] + sides[1] * sides[1]
    }
}

/// Strict triangle inequality in all three directions.
#[inline]
fn is_valid_triangle(a: f64, b: f64, c: f64) -> bool {
    a + b > c && a + c > b && b + c > a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_inequality_gates_construction() {
        assert!(Triangle::new(3.0, 4.0, 5.0).is_ok());
        // one violating direction each
        assert!(Triangle::new(5.0, 1.0, 1.0).is_err());
        assert!(Triangle::new(1.0, 5.0, 1.0).is_err());
        assert!(Triangle::new(1.0, 1.0, 5.0).is_err());
    }

    #[test]
    fn degenerate_sum_equals_side_is_rejected() {
        // 1 + 1 = 2 is not strictly greater
        assert!(Triangle::new(1.0, 1.0, 2.0).is_err());
    }

    #[test]
    fn non_positive_sides_never_pass_the_gate() {
        assert!(Triangle::new(0.0, 0.0, 0.0).is_err());
        assert!(Triangle::new(-1.0, 3.0, 3.0).is_err());
        assert!(Triangle::new(3.0, -1.0, 3.0).is_err());
        assert!(Triangle::new(3.0, 3.0, 0.0).is_err());
    }

    #[test]
    fn error_carries_the_offending_sides() {
        let err = Triangle::new(1.0, 1.0, 2.0).unwrap_err();
        assert_eq!(
            err,
            InvalidTriangleError {
                side_a: 1.0,
                side_b: 1.0,
                side_c: 2.0
            }
        );
        assert!(err.to_string().contains("no triangle"));
    }
}
