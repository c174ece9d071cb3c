//! Bounded enumerators for the circuit search: lexicographic stop-set
//! combinations and the capped ordering policy. All caps live here so the
//! budget story is in one place.

/// Orderings tried for circuits of 3 stops or fewer.
pub const SMALL_ORDERING_CAP: usize = 6;
/// Orderings tried for 4- and 5-stop circuits.
pub const MEDIUM_ORDERING_CAP: usize = 8;

/// Lazily yields k-combinations of `0..n` in lexicographic order. The
/// caller bounds it with `take(budget)`.
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance: bump the rightmost index that has room, reset the tail.
        let (n, k) = (self.n, self.k);
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] != i + n - k {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// Produces the stop orderings to evaluate for one stop-set. Small sets get
/// a prefix of the full permutation sequence; 6 stops and up get only the
/// forward order, the reverse order, and one seeded shuffle. A bounded
/// local heuristic, not a global optimum.
pub fn orderings(stops: &[usize], rng: &mut fastrand::Rng) -> Vec<Vec<usize>> {
    let len = stops.len();
    if len <= 5 {
        let cap = if len <= 3 {
            SMALL_ORDERING_CAP
        } else {
            MEDIUM_ORDERING_CAP
        };
        return permutations_capped(stops, cap);
    }

    let forward = stops.to_vec();
    let reverse: Vec<usize> = stops.iter().rev().copied().collect();
    let mut shuffled = stops.to_vec();
    rng.shuffle(&mut shuffled);
    vec![forward, reverse, shuffled]
}

/// First `cap` permutations in input-position order.
fn permutations_capped(items: &[usize], cap: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::with_capacity(cap);
    let mut current = Vec::with_capacity(items.len());
    let mut used = vec![false; items.len()];
    permute_into(items, &mut used, &mut current, cap, &mut out);
    out
}

fn permute_into(
    items: &[usize],
    used: &mut [bool],
    current: &mut Vec<usize>,
    cap: usize,
    out: &mut Vec<Vec<usize>>,
) {
    if out.len() >= cap {
        return;
    }
    if current.len() == items.len() {
        out.push(current.clone());
        return;
    }
    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(items[i]);
        permute_into(items, used, current, cap, out);
        current.pop();
        used[i] = false;
        if out.len() >= cap {
            return;
        }
    }
}
