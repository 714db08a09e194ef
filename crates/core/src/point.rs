/// A sampled point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub y: f64,
}

impl SamplePoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point as an `[x, y]` array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}
