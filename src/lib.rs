//! Global pairwise alignment (Needleman-Wunsch) with a linear gap penalty.
//!
//! ```
//! use nw_aligner::{Aligner, ScoringScheme, Sequence};
//!
//! let aligner = Aligner::new(ScoringScheme::new(1, -1, -1));
//! let result = aligner.align(&Sequence::new("GCATGCU"), &Sequence::new("GATTACA")).unwrap();
//! assert_eq!(result.score, 0);
//! assert_eq!(result.aligned_s.len(), result.aligned_t.len());
//! ```

use log::{info, warn};
use thiserror::Error;

pub mod cli;
pub mod config;
pub mod fill;
pub mod matrix;
pub mod report;
pub mod scoring;
pub mod sequence;
pub mod traceback;

pub use config::AlignerConfig;
pub use fill::{score, FillStrategy};
pub use matrix::ScoreMatrix;
pub use report::MatrixReport;
pub use scoring::{AlignmentScore, AlignmentStats, ScoringScheme};
pub use sequence::Sequence;
pub use traceback::{traceback, AlignmentResult, Traceback, TracebackOperation};

pub const DEFAULT_MATCH: i32 = 1;
pub const DEFAULT_MISMATCH: i32 = -1;
pub const DEFAULT_GAP: i32 = -1;
pub const DEFAULT_GAP_SYMBOL: char = '-';
pub const MAX_MATRIX_CELLS: usize = 1 << 28;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("score matrix of {rows}x{cols} cells exceeds the limit of {limit} cells")]
    MatrixTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },
    #[error("scores may reach magnitude {bound}, above the supported {limit}")]
    ScoreOutOfRange { bound: i64, limit: i64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AlignerError>;

#[derive(Debug, Clone)]
pub struct Aligner {
    scheme: ScoringScheme,
    config: AlignerConfig,
}

impl Aligner {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self {
            scheme,
            config: AlignerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AlignerConfig) -> Result<Self> {
        if config.max_cells == 0 {
            return Err(AlignerError::InvalidConfig(
                "max_cells must be greater than 0".to_string(),
            ));
        }
        self.config = config;
        Ok(self)
    }

    pub fn with_fill_strategy(mut self, strategy: FillStrategy) -> Self {
        self.config.fill_strategy = strategy;
        self
    }

    pub fn with_gap_symbol(mut self, gap_symbol: char) -> Self {
        self.config.gap_symbol = gap_symbol;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Result<Self> {
        if max_cells == 0 {
            return Err(AlignerError::InvalidConfig(
                "max_cells must be greater than 0".to_string(),
            ));
        }
        self.config.max_cells = max_cells;
        Ok(self)
    }

    pub fn scheme(&self) -> &ScoringScheme {
        &self.scheme
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Fills a fresh score matrix and returns it with the optimal score.
    pub fn score(&self, s: &Sequence, t: &Sequence) -> Result<AlignmentScore> {
        self.check_input(s, t)?;

        let mut matrix = ScoreMatrix::for_sequences(s, t);
        let score = self
            .config
            .fill_strategy
            .fill(s, t, &self.scheme, &mut matrix);
        info!(
            "aligned {} x {} residues, optimal score {}",
            s.len(),
            t.len(),
            score
        );

        Ok(AlignmentScore { score, matrix })
    }

    /// Scores `s` against `t` and traces back one optimal alignment.
    pub fn align(&self, s: &Sequence, t: &Sequence) -> Result<AlignmentResult> {
        let AlignmentScore { matrix, .. } = self.score(s, t)?;
        Ok(Traceback::new(&matrix, s, t)
            .with_gap_symbol(self.config.gap_symbol)
            .reconstruct(self.scheme.gap))
    }

    fn check_input(&self, s: &Sequence, t: &Sequence) -> Result<()> {
        let rows = s.len() + 1;
        let cols = t.len() + 1;
        let too_large = rows
            .checked_mul(cols)
            .map_or(true, |cells| cells > self.config.max_cells);
        if too_large {
            warn!("refusing {}x{} score matrix", rows, cols);
            return Err(AlignerError::MatrixTooLarge {
                rows,
                cols,
                limit: self.config.max_cells,
            });
        }

        self.scheme.check_range(s.len(), t.len()).map_err(|e| {
            warn!("{}", e);
            e
        })
    }
}
