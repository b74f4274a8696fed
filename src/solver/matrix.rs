use crate::{
    error::{MatrixError, Result},
    solver::engine::{ColumnId, RowId},
};

/// A dense boolean incidence relation between candidate subsets and universe
/// elements.
///
/// Entry `(i, j)` is `true` when subset `i` contains element `j`. The matrix
/// is immutable once constructed; the solver only ever reads it, and every
/// row or column index it reports refers back to this original numbering.
/// Indexing is 0-based throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl IncidenceMatrix {
    /// Builds a matrix from dense boolean rows.
    ///
    /// All rows must have the same length; a ragged input is rejected with
    /// [`MatrixError::RaggedRow`]. Zero rows or zero columns are both valid
    /// shapes.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: columns,
                    actual: row.len(),
                }
                .into());
            }
        }
        let cells = rows.iter().flatten().copied().collect();
        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    /// Builds a matrix from sparse rows, each given as the set of column
    /// indices the row covers.
    ///
    /// An index at or beyond `columns` is rejected with
    /// [`MatrixError::ColumnOutOfBounds`]. Duplicate indices within a row are
    /// harmless.
    pub fn from_row_sets<I, J>(columns: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = ColumnId>,
    {
        let mut cells = Vec::new();
        let mut row_count = 0;
        for (i, set) in rows.into_iter().enumerate() {
            let start = cells.len();
            cells.resize(start + columns, false);
            for column in set {
                if column >= columns {
                    return Err(MatrixError::ColumnOutOfBounds {
                        row: i,
                        column,
                        width: columns,
                    }
                    .into());
                }
                cells[start + column] = true;
            }
            row_count += 1;
        }
        Ok(Self {
            rows: row_count,
            columns,
            cells,
        })
    }

    /// Builds a matrix of the given shape by evaluating `f` at every cell.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(RowId, ColumnId) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(f(row, column));
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// The number of rows (candidate subsets).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns (universe elements).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether row `row` covers column `column`.
    pub fn contains(&self, row: RowId, column: ColumnId) -> bool {
        self.cells[row * self.columns + column]
    }

    /// Iterates over the columns covered by `row`, in ascending order.
    pub fn row_columns(&self, row: RowId) -> impl Iterator<Item = ColumnId> + '_ {
        (0..self.columns).filter(move |&column| self.contains(row, column))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    #[test]
    fn from_rows_builds_rectangular_matrix() {
        let matrix = IncidenceMatrix::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();

        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.columns(), 3);
        assert!(matrix.contains(0, 0));
        assert!(!matrix.contains(0, 1));
        assert!(matrix.contains(1, 1));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = IncidenceMatrix::from_rows(vec![vec![true, false], vec![true]]);

        let Err(Error::Inner { inner, .. }) = result else {
            panic!("expected a ragged row error");
        };
        assert!(matches!(
            *inner,
            MatrixError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn from_row_sets_marks_listed_columns() {
        let matrix = IncidenceMatrix::from_row_sets(4, [vec![0, 2], vec![3]]).unwrap();

        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.columns(), 4);
        assert_eq!(matrix.row_columns(0).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(matrix.row_columns(1).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn from_row_sets_rejects_out_of_bounds_column() {
        let result = IncidenceMatrix::from_row_sets(2, [vec![0], vec![2]]);

        let Err(Error::Inner { inner, .. }) = result else {
            panic!("expected an out-of-bounds error");
        };
        assert!(matches!(
            *inner,
            MatrixError::ColumnOutOfBounds {
                row: 1,
                column: 2,
                width: 2
            }
        ));
    }

    #[test]
    fn degenerate_shapes_are_valid() {
        let no_rows = IncidenceMatrix::from_rows(vec![]).unwrap();
        assert_eq!(no_rows.rows(), 0);
        assert_eq!(no_rows.columns(), 0);

        let no_columns = IncidenceMatrix::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(no_columns.rows(), 2);
        assert_eq!(no_columns.columns(), 0);

        let empty_sets = IncidenceMatrix::from_row_sets(3, Vec::<Vec<usize>>::new()).unwrap();
        assert_eq!(empty_sets.rows(), 0);
        assert_eq!(empty_sets.columns(), 3);
    }

    #[test]
    fn from_fn_evaluates_every_cell() {
        let identity = IncidenceMatrix::from_fn(3, 3, |row, column| row == column);

        for row in 0..3 {
            for column in 0..3 {
                assert_eq!(identity.contains(row, column), row == column);
            }
        }
    }
}
