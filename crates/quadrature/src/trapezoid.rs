use crate::QuadratureError;

/// Integrates `f` over `[a, b]` with the composite trapezoid rule on `n`
/// equal panels.
///
/// Reversed bounds give the negated integral, matching the usual convention.
///
/// # Errors
///
/// Returns an error if `n` is zero or either bound is not finite.
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    for value in [a, b] {
        if !value.is_finite() {
            return Err(QuadratureError::NonFiniteBound { value });
        }
    }
    if n == 0 {
        return Err(QuadratureError::ZeroPanels);
    }

    let h = (b - a) / n as f64;
    let interior: f64 = (1..n).map(|k| f(a + k as f64 * h)).sum();

    Ok(h * (0.5 * (f(a) + f(b)) + interior))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_for_lines() {
        let area = trapezoid(|x| 3.0 * x + 1.0, 0.0, 2.0, 1).unwrap();
        assert_relative_eq!(area, 8.0);
    }

    #[test]
    fn panel_width_divides_the_whole_interval() {
        // Trapezoid error for x^2 is (b - a) h^2 / 6.
        let area = trapezoid(|x| x * x, 0.0, 3.0, 3).unwrap();
        assert_relative_eq!(area, 9.0 + 3.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn reversed_bounds_flip_sign() {
        let forward = trapezoid(f64::exp, 0.0, 1.0, 64).unwrap();
        let backward = trapezoid(f64::exp, 1.0, 0.0, 64).unwrap();
        assert_relative_eq!(forward, -backward, max_relative = 1e-12);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            trapezoid(|x| x, 0.0, 1.0, 0),
            Err(QuadratureError::ZeroPanels)
        );
        assert!(matches!(
            trapezoid(|x| x, f64::NAN, 1.0, 4),
            Err(QuadratureError::NonFiniteBound { .. })
        ));
    }
}
