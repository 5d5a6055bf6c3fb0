//! Mutual-information distance matrix over problem variables.

use crate::frequency::FrequencyTable;

/// Entropy of a frequency vector summing to `total`, using natural log and
/// the convention `0 * log 0 := 0`.
fn entropy(freqs: &[u32], total: u32) -> f64 {
    let mut h = 0.0;
    for &f in freqs {
        if f > 0 {
            h += -(f as f64 / total as f64) * ((f as f64).ln() - (total as f64).ln());
        }
    }
    h
}

/// Symmetric `L x L` distance matrix, stored as a lower triangle
/// (`row >= col`). Larger values indicate greater dependency between the
/// corresponding pair of variables.
pub struct DistanceMatrix {
    length: usize,
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Build from a population's triangular frequency table.
    pub fn build(table: &FrequencyTable, length: usize, pop_size: usize) -> Self {
        let mut rows: Vec<Vec<f64>> = (0..length).map(|i| vec![0.0; i + 1]).collect();
        let n = pop_size as u32;

        for i in 0..length {
            for j in 0..i {
                rows[i][j] = entropy(table.pairwise(i, j), n);
            }
            rows[i][i] = entropy(table.univariate(i), n);
        }

        for i in 0..length {
            for j in 0..i {
                rows[i][j] = rows[i][i] + rows[j][j] - rows[i][j];
            }
        }

        DistanceMatrix { length, rows }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i >= j {
            self.rows[i][j]
        } else {
            self.rows[j][i]
        }
    }
}
