//! Defines a collection of standard heuristics for ordering the columns the
//! search branches on.

use std::cell::RefCell;

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::solver::{engine::ColumnId, view::MatrixView};

/// A trait for column-ordering heuristics.
///
/// Implementors decide the order in which the live columns of the current
/// view are branched on. Ordering affects only how quickly a cover is found
/// (and which one is found first), never whether one is found: the search
/// remains exhaustive under any ordering.
pub trait ColumnSelectionHeuristic {
    /// Orders the live columns of `view` for branching.
    ///
    /// # Returns
    ///
    /// Every live column exactly once; the first entry is branched on first.
    fn order_columns(&self, view: &MatrixView<'_>) -> Vec<ColumnId>;
}

/// Orders columns by ascending cover count: the column with the fewest
/// covering rows is branched on first.
///
/// This is a "fail-first" strategy. The most constrained column has the
/// smallest branching factor, and a column nobody covers is discovered
/// immediately rather than after exploring unrelated branches. Ties keep the
/// original column order, so the ordering is deterministic.
pub struct FewestCoveringRowsHeuristic;

impl ColumnSelectionHeuristic for FewestCoveringRowsHeuristic {
    fn order_columns(&self, view: &MatrixView<'_>) -> Vec<ColumnId> {
        let mut columns: Vec<(usize, ColumnId)> = view
            .columns()
            .map(|column| (view.cover_count(column), column))
            .collect();
        // Primary criterion: cover count (ascending)
        // Secondary criterion: original column index (ascending, for tie-breaking)
        columns.sort_by_key(|&(count, column)| (count, column));
        columns.into_iter().map(|(_, column)| column).collect()
    }
}

/// Keeps the columns in their original order.
///
/// This provides a basic, deterministic baseline with no counting work per
/// node; useful for comparison against [`FewestCoveringRowsHeuristic`].
pub struct FirstLiveColumnHeuristic;

impl ColumnSelectionHeuristic for FirstLiveColumnHeuristic {
    fn order_columns(&self, view: &MatrixView<'_>) -> Vec<ColumnId> {
        view.columns().collect()
    }
}

/// Shuffles the live columns with a seedable generator.
///
/// Useful for probing how sensitive an instance is to branching order. The
/// search stays exhaustive, so a cover is still found whenever one exists.
pub struct RandomColumnHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomColumnHeuristic {
    /// Creates a heuristic seeded from the thread-local generator.
    pub fn new() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// Creates a heuristic with a fixed seed, for reproducible orderings.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomColumnHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnSelectionHeuristic for RandomColumnHeuristic {
    fn order_columns(&self, view: &MatrixView<'_>) -> Vec<ColumnId> {
        let mut columns: Vec<ColumnId> = view.columns().collect();
        columns.shuffle(&mut *self.rng.borrow_mut());
        columns
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::matrix::IncidenceMatrix;

    fn staircase() -> IncidenceMatrix {
        // Column cover counts: 3, 1, 2, 1.
        IncidenceMatrix::from_rows(vec![
            vec![true, false, true, false],
            vec![true, true, true, false],
            vec![true, false, false, true],
        ])
        .unwrap()
    }

    #[test]
    fn fewest_covering_rows_orders_by_count_then_index() {
        let matrix = staircase();
        let view = MatrixView::full(&matrix);

        let order = FewestCoveringRowsHeuristic.order_columns(&view);
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn first_live_column_keeps_original_order() {
        let matrix = staircase();
        let view = MatrixView::full(&matrix);

        let order = FirstLiveColumnHeuristic.order_columns(&view);
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn random_ordering_is_a_permutation_of_the_live_columns() {
        let matrix = staircase();
        let view = MatrixView::full(&matrix);

        let mut order = RandomColumnHeuristic::from_seed(7).order_columns(&view);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn seeded_orderings_are_reproducible() {
        let matrix = staircase();
        let view = MatrixView::full(&matrix);

        let first = RandomColumnHeuristic::from_seed(42).order_columns(&view);
        let second = RandomColumnHeuristic::from_seed(42).order_columns(&view);
        assert_eq!(first, second);
    }
}
