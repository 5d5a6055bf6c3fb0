//! Univariate and pairwise bit-pattern frequency tabulation.

use crate::population::Population;

/// Count, for a set of variable indices, how many solutions exhibit each
/// of the `2^|indices|` binary patterns. Pattern bits are ordered so that
/// the *last* index in `indices` is most significant.
pub fn frequency(pop: &Population, indices: &[usize]) -> Vec<u32> {
    let num_patterns = 1usize << indices.len();
    let mut counts = vec![0u32; num_patterns];

    for solution in pop.iter() {
        let mut pattern = 0usize;
        for (j, &index) in indices.iter().enumerate() {
            if solution.bits.has(index) {
                pattern |= 1 << j;
            }
        }
        counts[pattern] += 1;
    }

    counts
}

/// Dense triangular table of frequency vectors: `table[i][i]` is the
/// length-2 univariate frequency for variable `i`; `table[i][j]` for
/// `j < i` is the length-4 joint frequency for `{i, j}` with `j` as the
/// low-order bit.
pub struct FrequencyTable {
    rows: Vec<Vec<Vec<u32>>>,
}

impl FrequencyTable {
    pub fn build(pop: &Population) -> Self {
        let length = pop.length();
        let mut rows = Vec::with_capacity(length);

        for i in 0..length {
            let mut row = Vec::with_capacity(i + 1);
            for j in 0..i {
                row.push(frequency(pop, &[j, i]));
            }
            row.push(frequency(pop, &[i]));
            rows.push(row);
        }

        FrequencyTable { rows }
    }

    /// Univariate frequency vector (length 2) for variable `i`.
    pub fn univariate(&self, i: usize) -> &[u32] {
        &self.rows[i][i]
    }

    /// Joint frequency vector (length 4) for the pair `{i, j}`,
    /// `j < i`: bit position `j` is the low-order index bit, `i` the
    /// high-order one.
    pub fn pairwise(&self, i: usize, j: usize) -> &[u32] {
        debug_assert!(j < i);
        &self.rows[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitstring::BitString;
    use crate::population::Solution;

    fn pop_from(strings: &[&str]) -> Population {
        let solutions = strings
            .iter()
            .map(|s| Solution::new(BitString::from_text(s).unwrap()))
            .collect();
        Population::from_solutions(solutions)
    }

    #[test]
    fn univariate_sums_to_population_size() {
        let pop = pop_from(&["1010", "1100", "0011", "1111"]);
        let table = FrequencyTable::build(&pop);
        for i in 0..pop.length() {
            let f = table.univariate(i);
            assert_eq!(f.iter().sum::<u32>(), pop.size() as u32);
        }
    }

    #[test]
    fn pairwise_sums_to_population_size() {
        let pop = pop_from(&["1010", "1100", "0011", "1111"]);
        let table = FrequencyTable::build(&pop);
        for i in 0..pop.length() {
            for j in 0..i {
                let f = table.pairwise(i, j);
                assert_eq!(f.len(), 4);
                assert_eq!(f.iter().sum::<u32>(), pop.size() as u32);
            }
        }
    }

    #[test]
    fn frequency_counts_exact_patterns() {
        // position 0 low bit of indices[0], position 1 next: [0,1]
        // "11" -> pos0=1,pos1=1; "00" -> pos0=0,pos1=0 etc.
        let pop = pop_from(&["11", "10", "01", "00"]);
        let f = frequency(&pop, &[0, 1]);
        assert_eq!(f.iter().sum::<u32>(), 4);
        // each of the 4 patterns appears exactly once
        assert!(f.iter().all(|&c| c == 1));
    }
}
