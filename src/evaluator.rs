//! Black-box fitness evaluators.
//!
//! Modeled as a value of a small capability enum rather than a trait object
//! or a global registry, so the driver can hold one by value.

use crate::bitstring::BitString;

/// A fitness function from bit-string to non-negative real, maximization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluator {
    /// Deceptive trap of block size `k`.
    DeceptiveTrap(usize),
    /// Hierarchical if-and-only-if.
    Hiff,
}

impl Evaluator {
    pub fn evaluate(&self, bits: &BitString) -> f64 {
        match self {
            Evaluator::DeceptiveTrap(k) => evaluate_trap(*k, bits),
            Evaluator::Hiff => evaluate_hiff(bits),
        }
    }
}

/// Partition the string into `L/k` disjoint blocks of `k` bits. A block with
/// all `k` bits set contributes `t`; otherwise it contributes `k - t - 1`.
fn evaluate_trap(k: usize, bits: &BitString) -> f64 {
    let mut fitness = 0.0;
    let num_blocks = bits.len() / k;
    for block in 0..num_blocks {
        let mut t = 0;
        for j in 0..k {
            if bits.has(block * k + j) {
                t += 1;
            }
        }
        fitness += if t == k { t as f64 } else { (k - t - 1) as f64 };
    }
    fitness
}

/// Sum, over block sizes `1, 2, 4, ...` up to `len`, the size of every
/// aligned block whose bits are all equal.
fn evaluate_hiff(bits: &BitString) -> f64 {
    let mut fitness = 0.0;
    let mut block_size = 1;
    while block_size <= bits.len() {
        let mut i = 0;
        while i < bits.len() {
            let first = bits.has(i);
            let mut same = true;
            for j in (i + 1)..(i + block_size) {
                if bits.has(j) != first {
                    same = false;
                    break;
                }
            }
            if same {
                fitness += block_size as f64;
            }
            i += block_size;
        }
        block_size *= 2;
    }
    fitness
}
