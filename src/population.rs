//! Solutions and fixed-size populations of them.

use crate::bitstring::BitString;
use crate::rng::Rng;

/// A candidate bit-string paired with its scalar fitness.
///
/// A fitness of `0.0` denotes "unevaluated"; fitness is otherwise assigned
/// only by an [`crate::evaluator::Evaluator`].
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub bits: BitString,
    pub fitness: f64,
}

impl Solution {
    pub fn new(bits: BitString) -> Self {
        Solution { bits, fitness: 0.0 }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.bits, self.fitness)
    }
}

/// A fixed-size collection of [`Solution`]s, all of the same genome length.
#[derive(Clone, Debug)]
pub struct Population {
    solutions: Vec<Solution>,
}

impl Population {
    /// An unevaluated population of `size` solutions, each a uniformly
    /// random bit-string of the given `length`.
    pub fn new(size: usize, length: usize, rng: &mut Rng) -> Self {
        let mut solutions = Vec::with_capacity(size);
        for _ in 0..size {
            let mut bits = BitString::new(length);
            for pos in 0..length {
                if rng.next_bool() {
                    bits.set(pos);
                }
            }
            solutions.push(Solution::new(bits));
        }
        Population { solutions }
    }

    /// Build a population directly from already-constructed solutions.
    /// Used by the crossover backend to assemble the offspring population.
    pub fn from_solutions(solutions: Vec<Solution>) -> Self {
        Population { solutions }
    }

    pub fn size(&self) -> usize {
        self.solutions.len()
    }

    /// Genome length shared by every solution; `0` for an empty population.
    pub fn length(&self) -> usize {
        self.solutions.first().map(|s| s.bits.len()).unwrap_or(0)
    }

    pub fn get(&self, i: usize) -> &Solution {
        &self.solutions[i]
    }

    pub fn get_mut(&mut self, i: usize) -> &mut Solution {
        &mut self.solutions[i]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    /// `true` when every solution shares the identical bit-string
    /// (premature convergence). Advisory only.
    pub fn converged(&self) -> bool {
        match self.solutions.first() {
            None => true,
            Some(first) => self.solutions.iter().all(|s| s.bits == first.bits),
        }
    }

    pub fn best_fitness(&self) -> f64 {
        self.solutions.iter().map(|s| s.fitness).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean_fitness(&self) -> f64 {
        if self.solutions.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.solutions.iter().map(|s| s.fitness).sum();
        sum / self.solutions.len() as f64
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
