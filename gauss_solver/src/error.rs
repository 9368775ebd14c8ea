use thiserror::Error;

/// Failures raised while reducing an augmented system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No row from the diagonal position downward carries a nonzero entry
    /// in the pivot column.
    #[error("no unique solution: no nonzero pivot for column {column}")]
    NoUniqueSolution { column: usize },

    /// A coefficient column sums to zero, so elimination is not attempted.
    #[error("coefficient column {column} sums to zero")]
    DegenerateColumn { column: usize },
}

/// Rejected shapes when building an augmented matrix from raw rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("a system needs at least one equation")]
    Empty,

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Problems reading a system written as `a,b,c;d,e,f`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SystemParseError {
    #[error("cell {cell} of row {row} is not an integer: {text:?}")]
    NotAnInteger {
        row: usize,
        cell: usize,
        text: String,
    },

    #[error("cell {cell} of row {row} is beyond +/-2^53: {value}")]
    OutOfRange { row: usize, cell: usize, value: i64 },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
