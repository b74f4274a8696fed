//! Worked problem frontends that reduce classic puzzles to exact cover.

pub mod langford;
pub mod sudoku;
