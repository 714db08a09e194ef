use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    /// An endpoint is NaN or infinite.
    #[error("non-finite endpoint: {value}")]
    NonFinite { value: f64 },
}

/// An ordered interval `[left, right]` known to contain the extremum.
///
/// A zero-width bracket (`left == right`) is valid and describes a
/// degenerate interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Validates and orders the bracket endpoints.
    ///
    /// Endpoints may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns `BoundsError::NonFinite` if either endpoint is NaN or infinite.
    pub fn new(bounds: [f64; 2]) -> Result<Self, BoundsError> {
        let [a, b] = bounds;

        for value in bounds {
            if !value.is_finite() {
                return Err(BoundsError::NonFinite { value });
            }
        }

        Ok(Self {
            left: a.min(b),
            right: a.max(b),
        })
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if both endpoints coincide.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right
    }

    /// Returns true if `x` lies within the closed bracket.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }

    /// Returns the probe pair placed at `ratio` of the width from each end.
    ///
    /// The left probe is `right - ratio * width` and the right probe is
    /// `left + ratio * width`, so a ratio above one half puts the left probe
    /// before the right one.
    #[must_use]
    pub fn probes(&self, ratio: f64) -> [f64; 2] {
        let width = self.width();
        [self.right - ratio * width, self.left + ratio * width]
    }

    /// Returns the bracket `[left, self.right]`.
    #[must_use]
    pub fn shrink_left(self, left: f64) -> Self {
        debug_assert!(left <= self.right, "left bound {left} past right bound");
        Self { left, ..self }
    }

    /// Returns the bracket `[self.left, right]`.
    #[must_use]
    pub fn shrink_right(self, right: f64) -> Self {
        debug_assert!(self.left <= right, "right bound {right} before left bound");
        Self { right, ..self }
    }

    /// Returns the bracket `[left, right]`, narrowing both ends at once.
    #[must_use]
    pub fn shrink_both(self, left: f64, right: f64) -> Self {
        debug_assert!(left <= right, "bounds {left} and {right} out of order");
        Self { left, right }
    }
}
