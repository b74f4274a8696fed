use serde::Serialize;

use crate::solver::{engine::RowId, matrix::IncidenceMatrix};

/// An exact cover found by the solver: the selected rows, in the order they
/// were committed during the search, using the original matrix numbering.
///
/// A cover can be empty — that is the correct answer for a matrix with no
/// columns, where nothing needs covering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cover {
    rows: Vec<RowId>,
}

impl Cover {
    pub(crate) fn new(rows: Vec<RowId>) -> Self {
        Self { rows }
    }

    /// The selected row indices.
    pub fn rows(&self) -> &[RowId] {
        &self.rows
    }

    /// Consumes the cover, returning the selected row indices.
    pub fn into_rows(self) -> Vec<RowId> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checks that the selected rows cover every column of `matrix` exactly
    /// once.
    pub fn covers_exactly(&self, matrix: &IncidenceMatrix) -> bool {
        let mut hits = vec![0usize; matrix.columns()];
        for &row in &self.rows {
            for column in matrix.row_columns(row) {
                hits[column] += 1;
            }
        }
        hits.iter().all(|&count| count == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_exactly_accepts_a_partition() {
        let matrix = IncidenceMatrix::from_row_sets(3, [vec![0, 1], vec![2], vec![1, 2]]).unwrap();

        assert!(Cover::new(vec![0, 1]).covers_exactly(&matrix));
    }

    #[test]
    fn covers_exactly_rejects_gaps_and_overlaps() {
        let matrix = IncidenceMatrix::from_row_sets(3, [vec![0, 1], vec![2], vec![1, 2]]).unwrap();

        // Column 2 uncovered.
        assert!(!Cover::new(vec![0]).covers_exactly(&matrix));
        // Columns 1 and 2 double-covered.
        assert!(!Cover::new(vec![0, 1, 2]).covers_exactly(&matrix));
    }

    #[test]
    fn empty_cover_is_exact_for_zero_columns() {
        let matrix = IncidenceMatrix::from_rows(vec![]).unwrap();

        assert!(Cover::new(vec![]).covers_exactly(&matrix));
    }
}
