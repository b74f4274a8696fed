use crate::solver::{
    engine::{SearchStats, SolverEngine},
    matrix::IncidenceMatrix,
};

/// A trait that defines the "frontend" for a specific problem domain.
///
/// This is the primary interface for connecting a concrete puzzle (like
/// Sudoku or Langford pairings) to the generic solver engine. A problem is
/// described as a list of *candidates* (the choices that may enter a
/// solution) and a list of *constraints* (the obligations that must each be
/// met exactly once); `satisfies` relates the two. The engine lowers this
/// description into an incidence matrix — candidates become rows,
/// constraints become columns, both in declaration order — and maps the
/// resulting cover back onto the candidates.
pub trait Problem {
    /// A choice that may be part of a solution.
    ///
    /// For Sudoku this is "value v at cell (r, c)"; for Langford pairings it
    /// is a placement of one value at a pair of slots.
    type Candidate: Clone + std::fmt::Debug;

    /// An obligation that exactly one selected candidate must meet.
    type Constraint: std::fmt::Debug;

    /// Returns the candidates, in a fixed order.
    fn candidates(&self) -> Vec<Self::Candidate>;

    /// Returns the constraints, in a fixed order.
    fn constraints(&self) -> Vec<Self::Constraint>;

    /// Whether selecting `candidate` discharges `constraint`.
    fn satisfies(&self, candidate: &Self::Candidate, constraint: &Self::Constraint) -> bool;
}

/// Lowers a problem into its incidence matrix, returning the candidates in
/// row order alongside it.
pub fn build_matrix<P: Problem>(problem: &P) -> (IncidenceMatrix, Vec<P::Candidate>) {
    let candidates = problem.candidates();
    let constraints = problem.constraints();
    let matrix = IncidenceMatrix::from_fn(candidates.len(), constraints.len(), |row, column| {
        problem.satisfies(&candidates[row], &constraints[column])
    });
    (matrix, candidates)
}

impl SolverEngine {
    /// Solves a [`Problem`], returning the selected candidates.
    ///
    /// `None` means the problem has no solution; a problem with no
    /// constraints is trivially solved by selecting nothing.
    pub fn solve_problem<P: Problem>(&self, problem: &P) -> (Option<Vec<P::Candidate>>, SearchStats) {
        let (matrix, candidates) = build_matrix(problem);
        let (cover, stats) = self.solve(&matrix);
        let selected = cover.map(|cover| {
            cover
                .rows()
                .iter()
                .map(|&row| candidates[row].clone())
                .collect()
        });
        (selected, stats)
    }
}
