//! Wire formats for a GPU crossover backend (out of scope here, but the
//! formats are pure, side-effect-free transforms a GPU dispatch path can
//! consume without any OpenCL code living in this crate).

use crate::linkage::Fos;
use crate::population::Population;

/// Flatten a FOS into `[num_nodes, (num_masks, (mask_index, mask_bits))*]`
/// 32-bit words. Indices in the same 32-bit block coalesce into one mask.
pub fn flatten_fos(fos: &Fos) -> Vec<u32> {
    let mut out = Vec::with_capacity(1 + fos.len() * 2);
    out.push(fos.len() as u32);

    for node in fos.iter() {
        let mut masks: Vec<(u32, u32)> = Vec::new();
        for &i in node {
            let mask_index = (i >> 5) as u32;
            let bit = 1u32 << (i & 31);
            match masks.last_mut() {
                Some((idx, bits)) if *idx == mask_index => *bits |= bit,
                _ => {
                    if let Some(existing) = masks.iter_mut().find(|(idx, _)| *idx == mask_index) {
                        existing.1 |= bit;
                    } else {
                        masks.push((mask_index, bit));
                    }
                }
            }
        }
        out.push(masks.len() as u32);
        for (mask_index, mask_bits) in masks {
            out.push(mask_index);
            out.push(mask_bits);
        }
    }

    out
}

/// Flatten a population into `ceil(L/32)` little-endian-packed words per
/// solution, in index order.
pub fn flatten_population(population: &Population) -> Vec<u32> {
    let words_per_solution = (population.length() + 31) / 32;
    let mut out = Vec::with_capacity(population.size() * words_per_solution);
    for solution in population.iter() {
        out.extend(solution.bits.to_words());
    }
    out
}
