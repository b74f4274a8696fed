use tracing::debug;

use crate::solver::{
    cover::Cover,
    heuristics::{
        column::{ColumnSelectionHeuristic, FewestCoveringRowsHeuristic},
        row::{IdentityRowHeuristic, RowOrderingHeuristic},
    },
    matrix::IncidenceMatrix,
    view::MatrixView,
};

pub type RowId = usize;
pub type ColumnId = usize;

/// Counters collected over one solve call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search tree nodes entered, including the root.
    pub nodes_visited: u64,
    /// Tentative row selections undone after a failed recursion.
    pub backtracks: u64,
    /// Deepest row selection reached.
    pub max_depth: usize,
}

/// The main engine for solving exact cover problems.
///
/// The `SolverEngine` takes an [`IncidenceMatrix`] relating candidate subsets
/// (rows) to universe elements (columns) and searches for a selection of rows
/// covering every column exactly once.
///
/// The search is a depth-first recursive backtracking walk: at each node it
/// branches on a column, tries each row covering it, and narrows the view of
/// the matrix accordingly. It stops at the first cover found.
pub struct SolverEngine {
    column_heuristic: Box<dyn ColumnSelectionHeuristic>,
    row_heuristic: Box<dyn RowOrderingHeuristic>,
}

impl SolverEngine {
    /// Creates a new `SolverEngine` with the given branching heuristics.
    pub fn new(
        column_heuristic: Box<dyn ColumnSelectionHeuristic>,
        row_heuristic: Box<dyn RowOrderingHeuristic>,
    ) -> Self {
        Self {
            column_heuristic,
            row_heuristic,
        }
    }

    /// Attempts to find an exact cover of the given matrix.
    ///
    /// # Returns
    ///
    /// * `Some(cover)` if a selection of rows covers every column exactly
    ///   once. For a matrix with no columns this is the empty cover, whatever
    ///   the row count: there is nothing left to cover.
    /// * `None` if no exact cover exists.
    ///
    /// The matrix is never mutated, and a solve never panics on a well-formed
    /// matrix. With the default heuristics the result is deterministic:
    /// repeated calls on the same matrix return the same cover.
    pub fn solve(&self, matrix: &IncidenceMatrix) -> (Option<Cover>, SearchStats) {
        let mut stats = SearchStats::default();
        debug!(
            rows = matrix.rows(),
            columns = matrix.columns(),
            "starting exact cover search"
        );

        let mut selection = Vec::new();
        let found = self.search(&MatrixView::full(matrix), &mut selection, &mut stats);
        debug!(
            found,
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            "search finished"
        );

        let cover = found.then(|| Cover::new(selection));
        (cover, stats)
    }

    /// One node of the search tree.
    ///
    /// Returns `true` and leaves the committed rows in `selection` on
    /// success; returns `false` with `selection` exactly as it was on entry
    /// otherwise. Every push is paired with a pop on the failing path, so no
    /// tentative choice ever leaks into a sibling branch.
    fn search(
        &self,
        view: &MatrixView<'_>,
        selection: &mut Vec<RowId>,
        stats: &mut SearchStats,
    ) -> bool {
        stats.nodes_visited += 1;
        stats.max_depth = stats.max_depth.max(selection.len());

        // Base case: no columns remain, so every element is covered.
        if view.column_count() == 0 {
            return true;
        }

        // Dead branch: the least-covered column has no covering row left, and
        // no later choice can change that.
        if view.min_cover_count() == Some(0) {
            return false;
        }

        for column in self.column_heuristic.order_columns(view) {
            for row in self.row_heuristic.order_rows(view, column) {
                selection.push(row);
                let reduced = view.select(row);
                if self.search(&reduced, selection, stats) {
                    return true;
                }
                selection.pop();
                stats.backtracks += 1;
            }
        }

        false
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(
            Box::new(FewestCoveringRowsHeuristic),
            Box::new(IdentityRowHeuristic),
        )
    }
}
