use std::fmt;

/// Placeholder stored at index 0 so that residue `i` is the `i`-th character.
pub const SENTINEL_RESIDUE: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    residues: Vec<char>,
}

impl Sequence {
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        let mut residues = Vec::with_capacity(text.chars().count() + 1);
        residues.push(SENTINEL_RESIDUE);
        residues.extend(text.chars());
        Self { residues }
    }

    /// Number of real residues, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.residues.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Residue at 1-based position `i`.
    pub fn residue(&self, i: usize) -> char {
        assert!(
            i >= 1 && i <= self.len(),
            "residue index {} out of range 1..={}",
            i,
            self.len()
        );
        self.residues[i]
    }

    /// Residue at `i` where index 0 yields the sentinel.
    pub(crate) fn prefixed(&self, i: usize) -> char {
        self.residues[i]
    }

    pub fn residues(&self) -> &[char] {
        &self.residues[1..]
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.residues().iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_access() {
        let seq = Sequence::new("GAT");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.residue(1), 'G');
        assert_eq!(seq.residue(3), 'T');
        assert_eq!(seq.prefixed(0), SENTINEL_RESIDUE);
    }

    #[test]
    fn test_empty_sequence() {
        let seq = Sequence::new("");
        assert!(seq.is_empty());
        assert_eq!(seq.residues(), &[] as &[char]);
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn test_non_ascii_counts_characters() {
        let seq = Sequence::from("héllo");
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.residue(2), 'é');
        assert_eq!(seq.to_string(), "héllo");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_residue_zero_panics() {
        Sequence::new("A").residue(0);
    }
}
