use im::Vector;

use crate::solver::{
    engine::{ColumnId, RowId},
    matrix::IncidenceMatrix,
};

/// An immutable window onto an [`IncidenceMatrix`]: the set of rows and
/// columns still in play at one node of the search tree.
///
/// A view never copies or renumbers the matrix. It carries two ordered lists
/// of *original* indices — the live rows and the live columns — and all
/// lookups go through them, so a solution assembled at any recursion depth is
/// already expressed in the caller's numbering. Selecting a row produces a new,
/// narrower view; the parent view is untouched and remains valid for the next
/// branch. The index lists are persistent vectors, so a view is cheap to
/// clone and narrowing shares structure with its parent.
#[derive(Debug, Clone)]
pub struct MatrixView<'m> {
    matrix: &'m IncidenceMatrix,
    live_rows: Vector<RowId>,
    live_columns: Vector<ColumnId>,
}

impl<'m> MatrixView<'m> {
    /// The view covering the whole matrix.
    pub fn full(matrix: &'m IncidenceMatrix) -> Self {
        Self {
            matrix,
            live_rows: (0..matrix.rows()).collect(),
            live_columns: (0..matrix.columns()).collect(),
        }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &'m IncidenceMatrix {
        self.matrix
    }

    /// The number of live rows.
    pub fn row_count(&self) -> usize {
        self.live_rows.len()
    }

    /// The number of live columns.
    pub fn column_count(&self) -> usize {
        self.live_columns.len()
    }

    /// Iterates over the live rows in ascending original order.
    pub fn rows(&self) -> impl Iterator<Item = RowId> + '_ {
        self.live_rows.iter().copied()
    }

    /// Iterates over the live columns in ascending original order.
    pub fn columns(&self) -> impl Iterator<Item = ColumnId> + '_ {
        self.live_columns.iter().copied()
    }

    /// The number of live rows covering `column`.
    pub fn cover_count(&self, column: ColumnId) -> usize {
        self.rows()
            .filter(|&row| self.matrix.contains(row, column))
            .count()
    }

    /// The smallest cover count over the live columns, or `None` if no
    /// columns remain.
    pub fn min_cover_count(&self) -> Option<usize> {
        self.columns().map(|column| self.cover_count(column)).min()
    }

    /// Iterates over the live rows covering `column`, in ascending original
    /// order.
    pub fn covering_rows(&self, column: ColumnId) -> impl Iterator<Item = RowId> + '_ {
        self.rows()
            .filter(move |&row| self.matrix.contains(row, column))
    }

    /// The view that remains after tentatively selecting `row`.
    ///
    /// Every column the row covers is satisfied and leaves the view, and so
    /// does every row covering any of those columns: keeping one would cover
    /// a satisfied column a second time. A row covering none of the removed
    /// columns survives unchanged.
    pub fn select(&self, row: RowId) -> Self {
        let removed: Vec<ColumnId> = self
            .columns()
            .filter(|&column| self.matrix.contains(row, column))
            .collect();
        let live_columns = self
            .columns()
            .filter(|&column| !self.matrix.contains(row, column))
            .collect();
        let live_rows = self
            .rows()
            .filter(|&r| removed.iter().all(|&column| !self.matrix.contains(r, column)))
            .collect();
        Self {
            matrix: self.matrix,
            live_rows,
            live_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn knuth_toy() -> IncidenceMatrix {
        IncidenceMatrix::from_row_sets(
            7,
            [
                vec![0, 3, 6],
                vec![0, 3],
                vec![3, 4, 6],
                vec![2, 4, 5],
                vec![1, 2, 5, 6],
                vec![1, 6],
            ],
        )
        .unwrap()
    }

    #[test]
    fn full_view_spans_the_matrix() {
        let matrix = knuth_toy();
        let view = MatrixView::full(&matrix);

        assert_eq!(view.row_count(), 6);
        assert_eq!(view.column_count(), 7);
        assert_eq!(view.rows().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(view.columns().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn cover_counts_match_the_relation() {
        let matrix = knuth_toy();
        let view = MatrixView::full(&matrix);

        assert_eq!(view.cover_count(0), 2);
        assert_eq!(view.cover_count(3), 3);
        assert_eq!(view.cover_count(6), 4);
        assert_eq!(view.min_cover_count(), Some(2));
        assert_eq!(view.covering_rows(3).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn select_drops_covered_columns_and_conflicting_rows() {
        let matrix = knuth_toy();
        let view = MatrixView::full(&matrix);

        // Selecting row 1 (covering columns 0 and 3) must remove those
        // columns and every row touching them: rows 0, 1 and 2.
        let reduced = view.select(1);
        assert_eq!(reduced.columns().collect::<Vec<_>>(), vec![1, 2, 4, 5, 6]);
        assert_eq!(reduced.rows().collect::<Vec<_>>(), vec![3, 4, 5]);

        // The parent view is unchanged.
        assert_eq!(view.row_count(), 6);
        assert_eq!(view.column_count(), 7);
    }

    #[test]
    fn select_preserves_original_index_order() {
        let matrix = knuth_toy();
        let reduced = MatrixView::full(&matrix).select(1).select(3);

        assert_eq!(reduced.columns().collect::<Vec<_>>(), vec![1, 6]);
        assert_eq!(reduced.rows().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn all_false_rows_survive_every_reduction() {
        let matrix = IncidenceMatrix::from_rows(vec![
            vec![true, true],
            vec![false, false],
            vec![false, true],
        ])
        .unwrap();
        let reduced = MatrixView::full(&matrix).select(0);

        // Row 1 covers nothing, so no reduction can ever exclude it.
        assert_eq!(reduced.rows().collect::<Vec<_>>(), vec![1]);
        assert_eq!(reduced.column_count(), 0);
    }

    #[test]
    fn empty_column_set_reports_no_minimum() {
        let matrix = IncidenceMatrix::from_rows(vec![vec![], vec![]]).unwrap();
        let view = MatrixView::full(&matrix);

        assert_eq!(view.min_cover_count(), None);
    }
}
