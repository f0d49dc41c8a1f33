use crate::Sequence;

/// Dense row-major score table.
///
/// Cells start out as [`ScoreMatrix::UNCOMPUTED`]. Indices outside the
/// declared extents are a caller bug and panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Marker for cells the recurrence has not reached yet. Every fill first
    /// asserts `ScoringScheme::check_range`, which keeps real scores away from it.
    pub const UNCOMPUTED: i32 = i32::MIN;

    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("score matrix of {}x{} cells overflows usize", rows, cols));
        Self {
            data: vec![Self::UNCOMPUTED; cells],
            rows,
            cols,
        }
    }

    /// A `(|s|+1) x (|t|+1)` matrix, ready for a fill.
    pub fn for_sequences(s: &Sequence, t: &Sequence) -> Self {
        Self::new(s.len() + 1, t.len() + 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[self.offset(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }

    pub fn fill(&mut self, value: i32) {
        self.data.fill(value);
    }

    pub fn is_computed(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != Self::UNCOMPUTED
    }

    pub fn is_complete(&self) -> bool {
        self.data.iter().all(|&v| v != Self::UNCOMPUTED)
    }

    /// Bottom-right cell, the optimal score once the matrix is filled.
    pub fn last(&self) -> i32 {
        assert!(!self.data.is_empty(), "empty score matrix has no last cell");
        self.get(self.rows - 1, self.cols - 1)
    }

    pub fn row(&self, row: usize) -> &[i32] {
        assert!(row < self.rows, "row {} out of range (rows = {})", row, self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows, "row {} out of range (rows = {})", row, self.rows);
        assert!(col < self.cols, "column {} out of range (cols = {})", col, self.cols);
        row * self.cols + col
    }
}
