/// Circle described by its radius alone.
///
/// Construction is unvalidated: any finite or non-finite `f64` is accepted,
/// and a non-positive radius produces a degenerate area instead of an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Area `π r²`.
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}
