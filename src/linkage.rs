//! Linkage Tree builder: RNN-chain agglomerative clustering over problem
//! variables, producing a Family of Subsets (FOS) ordered with singletons
//! first and each later entry the union of two earlier, not-yet-merged
//! entries.

use crate::distance::DistanceMatrix;
use crate::rng::Rng;

/// A Family of Subsets, stored as a flat index pool with `(offset, len)`
/// extents per node rather than a vector-of-vectors. This matches the
/// flattened GPU wire format (see [`crate::flatten`]) and avoids one heap
/// allocation per node.
#[derive(Clone, Debug)]
pub struct Fos {
    pool: Vec<usize>,
    extents: Vec<(usize, usize)>,
}

impl Fos {
    fn with_capacity(pool_capacity: usize, node_capacity: usize) -> Self {
        Fos { pool: Vec::with_capacity(pool_capacity), extents: Vec::with_capacity(node_capacity) }
    }

    fn push(&mut self, vars: &[usize]) {
        let offset = self.pool.len();
        self.pool.extend_from_slice(vars);
        self.extents.push((offset, vars.len()));
    }

    /// Number of FOS entries.
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// The variable subset at node `i`, in construction order.
    pub fn node(&self, i: usize) -> &[usize] {
        let (offset, len) = self.extents[i];
        &self.pool[offset..offset + len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.len()).map(move |i| self.node(i))
    }
}

/// Plain symmetric matrix with `get`/`set` normalizing to the lower
/// triangle, mirroring the reference clustering implementation's own
/// matrix helper.
struct SimilarityMatrix {
    data: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    fn new(size: usize) -> Self {
        SimilarityMatrix { data: (0..size).map(|i| vec![0.0; i + 1]).collect() }
    }

    fn get(&self, i: usize, j: usize) -> f64 {
        if i <= j {
            self.data[j][i]
        } else {
            self.data[i][j]
        }
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        if i <= j {
            self.data[j][i] = value;
        } else {
            self.data[i][j] = value;
        }
    }
}

/// Find the index in `0..mpm.len()` nearest to `k` under similarity matrix
/// `s`, breaking ties in favor of the smaller subset.
fn nearest(k: usize, s: &SimilarityMatrix, mpm: &[Vec<usize>]) -> usize {
    let mut best = if k == 0 { 1 } else { 0 };
    for i in 1..mpm.len() {
        if i == k {
            continue;
        }
        let better = s.get(k, i) > s.get(k, best)
            || (s.get(k, i) == s.get(k, best) && mpm[i].len() < mpm[best].len());
        if better {
            best = i;
        }
    }
    best
}

/// Build a pure linkage tree FOS from a population's MI distance matrix.
pub fn build(distances: &DistanceMatrix, length: usize, rng: &mut Rng) -> Fos {
    match length {
        0 => return Fos::with_capacity(0, 0),
        1 => {
            let mut fos = Fos::with_capacity(1, 1);
            fos.push(&[0]);
            return fos;
        }
        2 => {
            let mut fos = Fos::with_capacity(4, 3);
            fos.push(&[0]);
            fos.push(&[1]);
            fos.push(&[0, 1]);
            return fos;
        }
        _ => {}
    }

    let order = rng.permutation(length);
    let mut mpm: Vec<Vec<usize>> = order.iter().map(|&v| vec![v]).collect();

    let mut fos = Fos::with_capacity(length * 4, 2 * length - 1);
    for group in &mpm {
        fos.push(group);
    }

    let mut sim = SimilarityMatrix::new(length);
    for i in 0..mpm.len() {
        for j in 0..mpm.len() {
            if i != j {
                sim.set(i, j, distances.get(mpm[i][0], mpm[j][0]));
            }
        }
        sim.set(i, i, 0.0);
    }

    // chain holds a stack of MPM indices; sized generously since the
    // reference implementation bounds growth defensively at `length + 1`.
    let mut chain = vec![0usize; length + 3];
    let mut end = 0usize;

    loop {
        if end == 0 {
            chain[end] = rng.below(mpm.len());
            end += 1;
        }

        while end < 3 {
            chain[end] = nearest(chain[end - 1], &sim, &mpm);
            end += 1;
        }

        while chain[end - 3] != chain[end - 1] {
            let mut next = nearest(chain[end - 1], &sim, &mpm);
            if sim.get(chain[end - 1], next) == sim.get(chain[end - 1], chain[end - 2])
                && next != chain[end - 2]
            {
                next = chain[end - 2];
            }
            chain[end] = next;
            end += 1;
            if end > length {
                break;
            }
        }

        let (r0, r1) = {
            let (a, b) = (chain[end - 2], chain[end - 1]);
            if a < b {
                (a, b)
            } else {
                (b, a)
            }
        };
        end -= 3;

        let mut merged = mpm[r0].clone();
        merged.extend_from_slice(&mpm[r1]);
        fos.push(&merged);

        let a = mpm[r0].len() as f64;
        let b = mpm[r1].len() as f64;
        let (w0, w1) = (a / (a + b), b / (a + b));

        for i in 0..mpm.len() {
            if i != r0 && i != r1 {
                let updated = w0 * sim.get(i, r0) + w1 * sim.get(i, r1);
                sim.set(i, r0, updated);
            }
        }

        mpm[r0] = merged;

        let last = mpm.len() - 1;
        if r1 < last {
            mpm[r1] = mpm[last].clone();
            for i in 0..r1 {
                let v = sim.get(i, last);
                sim.set(i, r1, v);
            }
            for i in (r1 + 1)..last {
                let v = sim.get(last, i);
                sim.set(r1, i, v);
            }
            for slot in chain.iter_mut().take(end) {
                if *slot == last {
                    *slot = r1;
                    break;
                }
            }
        }

        mpm.truncate(last);

        if mpm.len() == 1 {
            break;
        }
    }

    fos
}
