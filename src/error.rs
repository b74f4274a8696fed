use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("column index {column} in row {row} is out of bounds for width {width}")]
    ColumnOutOfBounds {
        row: usize,
        column: usize,
        width: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<MatrixError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<MatrixError> for Error {
    fn from(inner: MatrixError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
