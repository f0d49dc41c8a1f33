use crate::{AlignmentStats, ScoreMatrix, Sequence, DEFAULT_GAP_SYMBOL};
use log::trace;

/// One alignment column, named from the point of view of `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Residue of `t` against a gap in `s`.
    Insertion,
    /// Residue of `s` against a gap in `t`.
    Deletion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned_s: String,
    pub aligned_t: String,
    pub operations: Vec<TracebackOperation>,
    pub stats: AlignmentStats,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Walks a filled [`ScoreMatrix`] from `(|s|, |t|)` back to the origin.
///
/// When several moves reach a cell with the same score the vertical gap is
/// taken first, then the horizontal gap, then the diagonal.
pub struct Traceback<'a> {
    matrix: &'a ScoreMatrix,
    s: &'a Sequence,
    t: &'a Sequence,
    gap_symbol: char,
}

impl<'a> Traceback<'a> {
    /// # Panics
    ///
    /// If the matrix does not match the sequences or is not fully computed.
    pub fn new(matrix: &'a ScoreMatrix, s: &'a Sequence, t: &'a Sequence) -> Self {
        assert!(
            matrix.rows() == s.len() + 1 && matrix.cols() == t.len() + 1,
            "score matrix is {}x{}, sequences need {}x{}",
            matrix.rows(),
            matrix.cols(),
            s.len() + 1,
            t.len() + 1
        );
        assert!(matrix.is_complete(), "traceback over a partially filled score matrix");
        Self {
            matrix,
            s,
            t,
            gap_symbol: DEFAULT_GAP_SYMBOL,
        }
    }

    pub fn with_gap_symbol(mut self, gap_symbol: char) -> Self {
        self.gap_symbol = gap_symbol;
        self
    }

    /// `gap` must be the penalty the matrix was filled with.
    pub fn reconstruct(&self, gap: i32) -> AlignmentResult {
        let capacity = self.s.len() + self.t.len();
        let mut aligned_s = Vec::with_capacity(capacity);
        let mut aligned_t = Vec::with_capacity(capacity);
        let mut operations = Vec::with_capacity(capacity);
        let mut stats = AlignmentStats::default();

        let (mut i, mut j) = (self.s.len(), self.t.len());
        let cell = |i, j| self.matrix.get(i, j);

        while i != 0 || j != 0 {
            let op = if i == 0 {
                TracebackOperation::Insertion
            } else if j == 0 {
                TracebackOperation::Deletion
            } else if cell(i, j) - gap == cell(i - 1, j) {
                TracebackOperation::Deletion
            } else if cell(i, j) - gap == cell(i, j - 1) {
                TracebackOperation::Insertion
            } else if self.s.residue(i) == self.t.residue(j) {
                TracebackOperation::Match
            } else {
                TracebackOperation::Mismatch
            };
            trace!("traceback ({}, {}) -> {:?}", i, j, op);

            match op {
                TracebackOperation::Match | TracebackOperation::Mismatch => {
                    aligned_s.push(self.s.residue(i));
                    aligned_t.push(self.t.residue(j));
                    if op == TracebackOperation::Match {
                        stats.matches += 1;
                    } else {
                        stats.mismatches += 1;
                    }
                    i -= 1;
                    j -= 1;
                }
                TracebackOperation::Deletion => {
                    aligned_s.push(self.s.residue(i));
                    aligned_t.push(self.gap_symbol);
                    stats.gaps += 1;
                    i -= 1;
                }
                TracebackOperation::Insertion => {
                    aligned_s.push(self.gap_symbol);
                    aligned_t.push(self.t.residue(j));
                    stats.gaps += 1;
                    j -= 1;
                }
            }
            operations.push(op);
        }

        // Built back to front.
        operations.reverse();

        AlignmentResult {
            score: self.matrix.last(),
            aligned_s: aligned_s.into_iter().rev().collect(),
            aligned_t: aligned_t.into_iter().rev().collect(),
            operations,
            stats,
        }
    }
}

/// Recovers one optimal alignment of `s` and `t` as two gap-padded strings.
pub fn traceback(matrix: &ScoreMatrix, s: &Sequence, t: &Sequence, gap: i32) -> (String, String) {
    let result = Traceback::new(matrix, s, t).reconstruct(gap);
    (result.aligned_s, result.aligned_t)
}
