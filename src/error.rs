use thiserror::Error;

pub type Result<T> = std::result::Result<T, WmwError>;

/// Errors raised while evaluating rank-sum tests
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WmwError {
    /// The requested output mode is not one of the eight known value types
    #[error("Unrecognized value type: {0}")]
    InvalidValueType(String),

    /// The matrix has no rows so there is nothing to rank
    #[error("Cannot rank an empty column")]
    EmptyColumn,

    /// Missing values cannot be placed in the ranking
    #[error("Missing value at row {row}")]
    MissingValue { row: usize },

    /// A missing value found while ranking a column of the matrix
    #[error("Missing value at row {row} of column {column}")]
    MissingMatrixValue { row: usize, column: usize },

    /// An index set refers to a row outside of the matrix
    #[error("Index set {set} contains row {index} but the matrix only has {n_rows} rows")]
    IndexOutOfBounds {
        set: usize,
        index: usize,
        n_rows: usize,
    },

    /// The normal approximation has zero variance for these group sizes
    #[error("Degenerate input for normal approximation (n1 = {n1}, n2 = {n2}, n = {n})")]
    DegenerateInput { n1: usize, n2: isize, n: usize },
}

impl WmwError {
    /// Attaches the matrix column to errors raised while ranking a single column
    pub fn at_column(self, column: usize) -> Self {
        match self {
            WmwError::MissingValue { row } => WmwError::MissingMatrixValue { row, column },
            other => other,
        }
    }
}

#[cfg(test)]
mod testing {
    use super::WmwError;

    #[test]
    fn test_at_column() {
        assert_eq!(
            WmwError::MissingValue { row: 2 }.at_column(4),
            WmwError::MissingMatrixValue { row: 2, column: 4 }
        );
        assert_eq!(WmwError::EmptyColumn.at_column(4), WmwError::EmptyColumn);
    }
}
