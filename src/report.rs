use crate::{ScoreMatrix, Sequence};
use std::fmt;

const FIELD_WIDTH: usize = 6;
const LEFT_LABEL_WIDTH: usize = 6;
const LEFT_INDEX_WIDTH: usize = 3;

/// Printable memo table: `t` across the top, `s` down the side, both with
/// their sentinel position. Uncomputed cells show as `inf`.
pub struct MatrixReport<'a> {
    matrix: &'a ScoreMatrix,
    s: &'a Sequence,
    t: &'a Sequence,
}

impl<'a> MatrixReport<'a> {
    pub fn new(matrix: &'a ScoreMatrix, s: &'a Sequence, t: &'a Sequence) -> Self {
        assert!(
            matrix.rows() == s.len() + 1 && matrix.cols() == t.len() + 1,
            "score matrix is {}x{}, sequences need {}x{}",
            matrix.rows(),
            matrix.cols(),
            s.len() + 1,
            t.len() + 1
        );
        Self { matrix, s, t }
    }
}

impl fmt::Display for MatrixReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.matrix.cols();

        write!(f, "{:>w$}", ' ', w = LEFT_LABEL_WIDTH)?;
        for col in 0..cols {
            write!(f, "{:>w$}", self.t.prefixed(col), w = FIELD_WIDTH)?;
        }
        writeln!(f)?;

        write!(f, "{:>w$}", ' ', w = LEFT_LABEL_WIDTH)?;
        for col in 0..cols {
            write!(f, "{:>w$}", col, w = FIELD_WIDTH)?;
        }
        writeln!(f)?;

        write!(f, "{:>w$}", '+', w = LEFT_LABEL_WIDTH)?;
        for _ in 0..cols {
            write!(f, "{:>w$}", "---", w = FIELD_WIDTH)?;
        }
        writeln!(f)?;

        for row in 0..self.matrix.rows() {
            write!(f, "{}{:>w$} |", self.s.prefixed(row), row, w = LEFT_INDEX_WIDTH)?;
            for &value in self.matrix.row(row) {
                if value == ScoreMatrix::UNCOMPUTED {
                    write!(f, "{:>w$}", "inf", w = FIELD_WIDTH)?;
                } else {
                    write!(f, "{:>w$}", value, w = FIELD_WIDTH)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fill, ScoringScheme};

    #[test]
    fn test_report_layout() {
        let (s, t) = (Sequence::new("A"), Sequence::new("A"));
        let mut matrix = ScoreMatrix::for_sequences(&s, &t);
        fill::score(&s, &t, &ScoringScheme::new(2, -1, -1), &mut matrix);

        let expected = concat!(
            "                 A\n",
            "           0     1\n",
            "     +   ---   ---\n",
            "   0 |     0    -1\n",
            "A  1 |    -1     2\n",
        );
        assert_eq!(MatrixReport::new(&matrix, &s, &t).to_string(), expected);
    }

    #[test]
    fn test_uncomputed_cells_print_inf() {
        let (s, t) = (Sequence::new(""), Sequence::new("C"));
        let mut matrix = ScoreMatrix::for_sequences(&s, &t);
        matrix.set(0, 0, 0);
        let report = MatrixReport::new(&matrix, &s, &t).to_string();
        assert!(report.ends_with("   0 |     0   inf\n"));
    }

    #[test]
    #[should_panic(expected = "sequences need 3x1")]
    fn test_mismatched_matrix_panics() {
        let (s, t) = (Sequence::new("AC"), Sequence::new(""));
        let matrix = ScoreMatrix::new(1, 3);
        MatrixReport::new(&matrix, &s, &t);
    }
}
