//! Gene-pool Optimal Mixing (GOM) crossover backends.
//!
//! Modeled as a small capability enum, matching the evaluator's shape
//! (§9 design notes): variants are exercised only through the common
//! `apply` contract so the driver never has to know which one is in play.

use crate::evaluator::Evaluator;
use crate::linkage::Fos;
use crate::population::{Population, Solution};
use crate::rng::Rng;
use crate::Error;

/// Number of attempts to draw a donor distinct from the current solution
/// before giving up and accepting a same-index (no-op) donor.
const DONOR_RETRY_BOUND: usize = 8;

/// Interchangeable crossover backend. `CpuGom` is the reference
/// implementation specified in full; `GpuGom` is a marker reserved for an
/// out-of-scope OpenCL dispatch path this crate does not ship.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrossoverBackend {
    CpuGom,
    GpuGom,
}

impl CrossoverBackend {
    /// `apply(population, fos, rng) -> population'`, purely value-based:
    /// same `N` and `L` in and out, offspring fitnesses assigned by
    /// re-evaluating every accepted candidate.
    pub fn apply(
        &self,
        population: &Population,
        fos: &Fos,
        evaluator: &Evaluator,
        rng: &mut Rng,
    ) -> Result<Population, Error> {
        match self {
            CrossoverBackend::CpuGom => Ok(cpu_gom(population, fos, evaluator, rng)),
            CrossoverBackend::GpuGom => Err(Error::BackendError(
                "GPU crossover backend has no CPU fallback in this build".to_string(),
            )),
        }
    }
}

/// Reference CPU GOM backend: visits solutions in index order, and for
/// each, every non-full-set FOS entry in FOS order, attempting a
/// donor-guided bit-block replacement that is kept only if it does not
/// worsen fitness.
fn cpu_gom(population: &Population, fos: &Fos, evaluator: &Evaluator, rng: &mut Rng) -> Population {
    let n = population.size();
    let length = population.length();
    let mut offspring = Vec::with_capacity(n);

    for index in 0..n {
        let parent = population.get(index);
        let mut child = parent.bits.clone();
        let mut f_child = parent.fitness;

        for node in fos.iter() {
            if node.len() == length {
                continue;
            }

            let donor_index = pick_donor(index, n, rng);
            let donor = population.get(donor_index);

            let mut candidate = child.clone();
            candidate.copy_bits(&donor.bits, node);

            if candidate == child {
                continue;
            }

            let f_candidate = evaluator.evaluate(&candidate);
            if f_candidate >= f_child {
                child = candidate;
                f_child = f_candidate;
            }
        }

        offspring.push(Solution { bits: child, fitness: f_child });
    }

    Population::from_solutions(offspring)
}

fn pick_donor(current: usize, n: usize, rng: &mut Rng) -> usize {
    if n <= 1 {
        return current;
    }
    for _ in 0..DONOR_RETRY_BOUND {
        let candidate = rng.below(n);
        if candidate != current {
            return candidate;
        }
    }
    current
}
