//! Tego is a solver for the exact cover problem, built around Knuth's
//! Algorithm X.
//!
//! Given a boolean incidence matrix relating candidate subsets (rows) to
//! universe elements (columns), the solver searches for a selection of rows
//! that covers every column exactly once, or reports that no such selection
//! exists. The search is a recursive backtracking walk over progressively
//! narrower views of the matrix; it operates on the dense relation directly
//! rather than on a linked sparse structure.
//!
//! # Core Concepts
//!
//! - **[`IncidenceMatrix`]**: the immutable boolean relation. Rows and columns
//!   are 0-indexed, and the indices returned in a solution always refer to the
//!   original matrix.
//! - **[`SolverEngine`]**: the search driver. It is configured with a
//!   [`ColumnSelectionHeuristic`] deciding which columns to branch on first,
//!   and a [`RowOrderingHeuristic`] deciding the order candidate rows are
//!   tried in.
//! - **[`Cover`]**: a found solution, an ordered list of original row indices.
//! - **[`Problem`]**: a trait for describing a puzzle as candidates and
//!   constraints; the engine lowers it into an incidence matrix and maps the
//!   cover back to the selected candidates.
//!
//! # Example: Knuth's Toy Instance
//!
//! The classic seven-element instance from the opening of the dancing links
//! paper. Rows are the subsets A–F of `{1..7}`; the unique exact cover is
//! `{B, D, F}`, i.e. rows 1, 3 and 5.
//!
//! ```
//! use tego::solver::engine::SolverEngine;
//! use tego::solver::matrix::IncidenceMatrix;
//!
//! let matrix = IncidenceMatrix::from_row_sets(
//!     7,
//!     [
//!         vec![0, 3, 6],    // A = {1, 4, 7}
//!         vec![0, 3],       // B = {1, 4}
//!         vec![3, 4, 6],    // C = {4, 5, 7}
//!         vec![2, 4, 5],    // D = {3, 5, 6}
//!         vec![1, 2, 5, 6], // E = {2, 3, 6, 7}
//!         vec![1, 6],       // F = {2, 7}
//!     ],
//! )
//! .unwrap();
//!
//! let solver = SolverEngine::default();
//! let (cover, stats) = solver.solve(&matrix);
//!
//! let cover = cover.unwrap();
//! assert!(cover.covers_exactly(&matrix));
//! assert_eq!(cover.into_rows(), vec![1, 3, 5]);
//! assert!(stats.nodes_visited > 0);
//! ```
//!
//! [`IncidenceMatrix`]: solver::matrix::IncidenceMatrix
//! [`SolverEngine`]: solver::engine::SolverEngine
//! [`ColumnSelectionHeuristic`]: solver::heuristics::column::ColumnSelectionHeuristic
//! [`RowOrderingHeuristic`]: solver::heuristics::row::RowOrderingHeuristic
//! [`Cover`]: solver::cover::Cover
//! [`Problem`]: solver::problem::Problem

pub mod error;
pub mod examples;
pub mod solver;
