//! Global alignment recurrence.
//!
//! ```text
//! cell(0, 0) = 0
//! cell(0, j) = cell(0, j-1) + gap
//! cell(i, 0) = cell(i-1, 0) + gap
//! cell(i, j) = max(
//!     cell(i-1, j-1) + (match if s[i] == t[j] else mismatch),
//!     cell(i-1, j)   + gap,
//!     cell(i, j-1)   + gap,
//! )
//! ```

use crate::{ScoreMatrix, ScoringScheme, Sequence};
use log::debug;

/// Order in which the matrix cells are evaluated. Both orders yield the
/// same matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FillStrategy {
    /// Top-down from the final cell, resolving dependencies on demand.
    Memoized,
    /// Row by row from the origin.
    #[default]
    Iterative,
}

impl FillStrategy {
    /// Fills `matrix` and returns the score at `(|s|, |t|)`.
    ///
    /// Cells already holding a score are trusted and left untouched, so a
    /// second call on the same matrix is a no-op.
    ///
    /// # Panics
    ///
    /// If `matrix` is not `(|s|+1) x (|t|+1)`, or if `scheme` could drive a
    /// score out of the range checked by [`ScoringScheme::check_range`].
    pub fn fill(
        self,
        s: &Sequence,
        t: &Sequence,
        scheme: &ScoringScheme,
        matrix: &mut ScoreMatrix,
    ) -> i32 {
        assert!(
            matrix.rows() == s.len() + 1 && matrix.cols() == t.len() + 1,
            "score matrix is {}x{}, sequences need {}x{}",
            matrix.rows(),
            matrix.cols(),
            s.len() + 1,
            t.len() + 1
        );
        if let Err(e) = scheme.check_range(s.len(), t.len()) {
            panic!("{}", e);
        }
        debug!(
            "filling {}x{} score matrix ({:?})",
            matrix.rows(),
            matrix.cols(),
            self
        );

        match self {
            FillStrategy::Memoized => fill_memoized(s, t, scheme, matrix),
            FillStrategy::Iterative => fill_iterative(s, t, scheme, matrix),
        }

        let score = matrix.last();
        debug!("score matrix filled, optimal score {}", score);
        score
    }
}

/// Fills `matrix` with the default strategy and returns the optimal score.
pub fn score(s: &Sequence, t: &Sequence, scheme: &ScoringScheme, matrix: &mut ScoreMatrix) -> i32 {
    FillStrategy::default().fill(s, t, scheme, matrix)
}

fn fill_iterative(s: &Sequence, t: &Sequence, scheme: &ScoringScheme, matrix: &mut ScoreMatrix) {
    for i in 0..=s.len() {
        for j in 0..=t.len() {
            if !matrix.is_computed(i, j) {
                let value = cell_value(s, t, scheme, matrix, i, j);
                matrix.set(i, j, value);
            }
        }
    }
}

fn fill_memoized(s: &Sequence, t: &Sequence, scheme: &ScoringScheme, matrix: &mut ScoreMatrix) {
    // A cell is only evaluated once every predecessor above it on the stack
    // has been resolved. Each cell pushes its predecessors at most once.
    let mut pending = vec![(s.len(), t.len())];

    while let Some(&(i, j)) = pending.last() {
        if matrix.is_computed(i, j) {
            pending.pop();
            continue;
        }

        let mut ready = true;
        for (pi, pj) in predecessors(i, j).into_iter().flatten() {
            if !matrix.is_computed(pi, pj) {
                pending.push((pi, pj));
                ready = false;
            }
        }

        if ready {
            pending.pop();
            let value = cell_value(s, t, scheme, matrix, i, j);
            matrix.set(i, j, value);
        }
    }
}

/// Cells `(i, j)` depends on: diagonal, up, left.
fn predecessors(i: usize, j: usize) -> [Option<(usize, usize)>; 3] {
    [
        (i > 0 && j > 0).then(|| (i - 1, j - 1)),
        (i > 0).then(|| (i - 1, j)),
        (j > 0).then(|| (i, j - 1)),
    ]
}

fn cell_value(
    s: &Sequence,
    t: &Sequence,
    scheme: &ScoringScheme,
    matrix: &ScoreMatrix,
    i: usize,
    j: usize,
) -> i32 {
    let at = |row, col| {
        let value = matrix.get(row, col);
        assert!(
            value != ScoreMatrix::UNCOMPUTED,
            "cell ({}, {}) read before it was computed",
            row,
            col
        );
        value
    };

    match (i, j) {
        (0, 0) => 0,
        (0, j) => at(0, j - 1) + scheme.gap,
        (i, 0) => at(i - 1, 0) + scheme.gap,
        (i, j) => {
            let diag = at(i - 1, j - 1) + scheme.substitution(s.prefixed(i), t.prefixed(j));
            let up = at(i - 1, j) + scheme.gap;
            let left = at(i, j - 1) + scheme.gap;
            diag.max(up).max(left)
        }
    }
}
