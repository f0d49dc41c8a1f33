use crate::{AlignerError, ScoreMatrix, DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH};

/// Largest score magnitude the fill may produce. Half of `i32::MAX` leaves
/// room for one more weight on top of any cell without overflowing.
pub const SCORE_LIMIT: i64 = (i32::MAX / 2) as i64;

/// Linear-gap scoring weights, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch_score: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap,
        }
    }

    /// Diagonal-move weight for a residue pair.
    pub fn substitution(&self, a: char, b: char) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Upper bound on `|cell|` over a `(s_len+1) x (t_len+1)` matrix: every
    /// path to a cell takes at most `s_len + t_len` weighted steps.
    pub fn score_bound(&self, s_len: usize, t_len: usize) -> i64 {
        let weight = [self.match_score, self.mismatch_score, self.gap]
            .iter()
            .map(|w| (*w as i64).abs())
            .max()
            .unwrap_or(0);
        (s_len as i64 + t_len as i64).saturating_mul(weight)
    }

    /// Rejects inputs whose scores could reach the sentinel or overflow.
    pub fn check_range(&self, s_len: usize, t_len: usize) -> Result<(), AlignerError> {
        let bound = self.score_bound(s_len, t_len);
        if bound > SCORE_LIMIT {
            return Err(AlignerError::ScoreOutOfRange {
                bound,
                limit: SCORE_LIMIT,
            });
        }
        Ok(())
    }
}

/// Optimal score together with the filled matrix it was read from.
#[derive(Debug, Clone)]
pub struct AlignmentScore {
    pub score: i32,
    pub matrix: ScoreMatrix,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
}

impl AlignmentStats {
    /// Alignment columns covered by these counts.
    pub fn columns(&self) -> u32 {
        self.matches + self.mismatches + self.gaps
    }

    /// Score of an alignment with these column counts under `scheme`.
    pub fn score(&self, scheme: &ScoringScheme) -> i64 {
        self.matches as i64 * scheme.match_score as i64
            + self.mismatches as i64 * scheme.mismatch_score as i64
            + self.gaps as i64 * scheme.gap as i64
    }
}
