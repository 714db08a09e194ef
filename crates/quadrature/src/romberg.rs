use tracing::debug;

use crate::{QuadratureError, trapezoid};

/// Largest supported table size.
///
/// The last row evaluates the trapezoid rule on `2^(MAX_ROWS - 1)` panels.
pub const MAX_ROWS: usize = 30;

/// Lower-triangular Romberg extrapolation table.
///
/// Row `k` starts with the trapezoid estimate on `2^k` panels, and entry
/// `j + 1` removes the `h^(2j + 2)` error term from entry `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct RombergTable {
    rows: Vec<Vec<f64>>,
}

impl RombergTable {
    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; a table has at least one row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the filled entries of row `k`, or `None` past the last row.
    #[must_use]
    pub fn row(&self, k: usize) -> Option<&[f64]> {
        self.rows.get(k).map(Vec::as_slice)
    }

    /// Iterates over the rows from coarsest to finest.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the most extrapolated entry, the bottom-right of the table.
    #[must_use]
    pub fn estimate(&self) -> f64 {
        self.rows
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// Estimates the observed order of accuracy of `column`.
    ///
    /// Uses the last three entries of the column:
    /// `log2((I[r-2] - I[r-3]) / (I[r-1] - I[r-2]))`.
    /// The result is not finite when the column has already converged.
    ///
    /// # Errors
    ///
    /// Returns `QuadratureError::ShortColumn` if the table has fewer than
    /// `column + 3` rows.
    pub fn order_of_accuracy(&self, column: usize) -> Result<f64, QuadratureError> {
        let rows = self.len();
        if rows < column + 3 {
            return Err(QuadratureError::ShortColumn { column, rows });
        }

        let coarse = self.rows[rows - 3][column];
        let middle = self.rows[rows - 2][column];
        let fine = self.rows[rows - 1][column];

        Ok(((middle - coarse) / (fine - middle)).log2())
    }
}

/// Integrates `f` over `[a, b]` with a Romberg table of `rows` rows.
///
/// # Errors
///
/// Returns an error if `rows` is outside `1..=MAX_ROWS` or a bound is not
/// finite.
pub fn romberg<F>(f: F, a: f64, b: f64, rows: usize) -> Result<RombergTable, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if rows == 0 || rows > MAX_ROWS {
        return Err(QuadratureError::Rows { rows });
    }

    let mut table: Vec<Vec<f64>> = Vec::with_capacity(rows);
    for k in 0..rows {
        let mut row = Vec::with_capacity(k + 1);
        row.push(trapezoid(&f, a, b, 1 << k)?);

        if let Some(previous) = table.last() {
            for j in 0..k {
                let factor = 4_f64.powi(j as i32 + 1);
                row.push((factor * row[j] - previous[j]) / (factor - 1.0));
            }
        }

        debug!(row = k, entries = ?row, "romberg row");
        table.push(row);
    }

    Ok(RombergTable { rows: table })
}
