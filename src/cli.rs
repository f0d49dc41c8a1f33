use crate::{AlignerConfig, FillStrategy, ScoringScheme, DEFAULT_GAP_SYMBOL, MAX_MATRIX_CELLS};
use clap::Parser;

/// Compute the optimal global alignment of two strings.
#[derive(Parser, Debug)]
#[command(author, about)]
pub struct Cli {
    /// First string.
    pub s: String,

    /// Second string.
    pub t: String,

    /// Score for aligning two equal characters.
    #[arg(value_name = "MATCH", allow_negative_numbers = true)]
    pub match_score: i32,

    /// Score for aligning two different characters.
    #[arg(value_name = "MISMATCH", allow_negative_numbers = true)]
    pub mismatch_score: i32,

    /// Score for aligning a character against a gap.
    #[arg(allow_negative_numbers = true)]
    pub gap: i32,

    /// Order in which the score matrix is filled.
    #[arg(long, value_enum, default_value_t = FillStrategy::Iterative)]
    pub fill: FillStrategy,

    /// Character used for gaps in the aligned strings.
    #[arg(long, default_value_t = DEFAULT_GAP_SYMBOL)]
    pub gap_symbol: char,

    /// Do not print the completed memo table.
    #[arg(long)]
    pub no_matrix: bool,

    /// Refuse inputs whose score matrix has more cells than this.
    #[arg(long, default_value_t = MAX_MATRIX_CELLS)]
    pub max_cells: usize,
}

impl Cli {
    pub fn scheme(&self) -> ScoringScheme {
        ScoringScheme::new(self.match_score, self.mismatch_score, self.gap)
    }

    pub fn config(&self) -> AlignerConfig {
        AlignerConfig {
            fill_strategy: self.fill,
            gap_symbol: self.gap_symbol,
            max_cells: self.max_cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_with_negative_weights() {
        let cli = Cli::try_parse_from(["nw_aligner", "GCATGCU", "GATTACA", "1", "-1", "-1"]).unwrap();
        assert_eq!(cli.s, "GCATGCU");
        assert_eq!(cli.scheme(), ScoringScheme::new(1, -1, -1));
        assert_eq!(cli.config(), AlignerConfig::default());
        assert!(!cli.no_matrix);
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "nw_aligner",
            "",
            "AAA",
            "2",
            "-1",
            "-2",
            "--fill",
            "memoized",
            "--gap-symbol",
            "_",
            "--no-matrix",
        ])
        .unwrap();
        assert_eq!(cli.s, "");
        assert_eq!(cli.fill, FillStrategy::Memoized);
        assert_eq!(cli.config().gap_symbol, '_');
        assert!(cli.no_matrix);
    }

    #[test]
    fn test_missing_weights_rejected() {
        assert!(Cli::try_parse_from(["nw_aligner", "A", "C", "1"]).is_err());
    }

    #[test]
    fn test_non_numeric_weight_rejected() {
        assert!(Cli::try_parse_from(["nw_aligner", "A", "C", "one", "-1", "-1"]).is_err());
    }
}
