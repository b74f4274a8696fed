use crate::solver::{
    engine::{ColumnId, RowId},
    view::MatrixView,
};

/// A trait for strategies that determine the order candidate rows are tried
/// in when branching on a column.
pub trait RowOrderingHeuristic {
    /// Given the current view and the column being branched on, returns the
    /// live rows covering that column in the order they should be tried.
    fn order_rows(&self, view: &MatrixView<'_>, column: ColumnId) -> Vec<RowId>;
}

/// A simple heuristic that tries covering rows in their original order.
pub struct IdentityRowHeuristic;

impl RowOrderingHeuristic for IdentityRowHeuristic {
    fn order_rows(&self, view: &MatrixView<'_>, column: ColumnId) -> Vec<RowId> {
        view.covering_rows(column).collect()
    }
}
