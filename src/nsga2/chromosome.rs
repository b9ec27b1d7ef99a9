//! Binary subset-selection chromosome.
//!
//! Each gene says whether the item at that position is part of the
//! selected subset. Two chromosomes are equal iff their bit sequences are
//! identical, which is what duplicate elimination relies on.

/// A fixed-length bit string encoding a subset of `0..len`.
///
/// # Example
///
/// ```
/// use gdp_nsga2::nsga2::Chromosome;
///
/// let c = Chromosome::from_bits(vec![false, true, false, true]);
/// assert_eq!(c.selected_count(), 2);
/// assert_eq!(c.selected().collect::<Vec<_>>(), vec![1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Wraps an existing bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// An all-false chromosome of length `len`.
    pub fn empty(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Builds a chromosome of length `len` with the given 0-based positions set.
    ///
    /// # Panics
    /// Panics if any index is `>= len`.
    pub fn from_indices(len: usize, indices: &[usize]) -> Self {
        let mut bits = vec![false; len];
        for &i in indices {
            assert!(i < len, "index {i} out of range for chromosome of length {len}");
            bits[i] = true;
        }
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    pub fn get(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Flips the gene at `i`.
    pub fn flip(&mut self, i: usize) {
        self.bits[i] = !self.bits[i];
    }

    /// Number of set genes (population count).
    pub fn selected_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// 0-based positions of the set genes, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bits(bits)
    }
}
