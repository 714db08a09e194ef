use thiserror::Error;

/// Errors that can occur during integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum QuadratureError {
    /// An integration bound is NaN or infinite.
    #[error("non-finite integration bound: {value}")]
    NonFiniteBound { value: f64 },

    /// The trapezoid rule was asked for zero panels.
    #[error("trapezoid rule needs at least one panel")]
    ZeroPanels,

    /// The requested table size is outside `1..=max`.
    #[error("romberg table needs between 1 and {max} rows, got {rows}", max = crate::MAX_ROWS)]
    Rows { rows: usize },

    /// The table is too short to estimate the order of a column.
    #[error("order of column {column} needs at least {needed} rows, table has {rows}", needed = .column + 3)]
    ShortColumn { column: usize, rows: usize },
}
