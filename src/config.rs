use crate::{FillStrategy, DEFAULT_GAP_SYMBOL, MAX_MATRIX_CELLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignerConfig {
    pub fill_strategy: FillStrategy,
    pub gap_symbol: char,
    /// Upper bound on `(|s|+1) * (|t|+1)`.
    pub max_cells: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            fill_strategy: FillStrategy::default(),
            gap_symbol: DEFAULT_GAP_SYMBOL,
            max_cells: MAX_MATRIX_CELLS, // 1 GiB of i32 cells
        }
    }
}
