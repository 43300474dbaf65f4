use crate::graph::network::Network;
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Generates a random directed network with `n` nodes and roughly
/// `edge_factor * n` links. Lengths are whole numbers in `1..=max_length`, so
/// path sums are exact in `f64`.
pub fn generate_random(n: usize, edge_factor: f64, max_length: u32, seed: u64) -> Result<Network<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_links = (edge_factor * n as f64) as usize;
    let mut edges = Vec::with_capacity(num_links);

    if n > 1 {
        for _ in 0..num_links {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                edges.push((u, v, rng.gen_range(1..=max_length.max(1)) as f64));
            }
        }
    }

    Network::from_edges(n, &edges)
}

/// Generates a `width x height` grid where every cell links to its four
/// neighbours in both directions with independent random lengths
pub fn generate_grid(width: usize, height: usize, max_length: u32, seed: u64) -> Result<Network<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let index = |x: usize, y: usize| y * width + x;
    let mut edges = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                edges.push((current, index(x + 1, y), rng.gen_range(1..=max_length.max(1)) as f64));
                edges.push((index(x + 1, y), current, rng.gen_range(1..=max_length.max(1)) as f64));
            }
            if y + 1 < height {
                edges.push((current, index(x, y + 1), rng.gen_range(1..=max_length.max(1)) as f64));
                edges.push((index(x, y + 1), current, rng.gen_range(1..=max_length.max(1)) as f64));
            }
        }
    }

    Network::from_edges(width * height, &edges)
}

/// Generates a Barabási-Albert scale-free network with `n` nodes and `m`
/// links per new node. New nodes link to existing ones and back, so hubs
/// are reachable from everywhere.
pub fn generate_barabasi_albert(n: usize, m: usize, max_length: u32, seed: u64) -> Result<Network<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = m.max(1).min(n.saturating_sub(1).max(1));
    let mut edges = Vec::new();

    if n <= m {
        return Network::from_edges(n, &edges);
    }

    // Complete graph on the first m nodes
    for i in 0..m {
        for j in 0..m {
            if i != j {
                edges.push((i, j, rng.gen_range(1..=max_length.max(1)) as f64));
            }
        }
    }

    // Degree of each node for preferential attachment
    let mut degrees = vec![m.saturating_sub(1).max(1); m];
    let mut total_degree: usize = degrees.iter().sum();

    for i in m..n {
        let mut targets = HashSet::new();

        while targets.len() < m {
            let mut target_value = rng.gen_range(0..total_degree);
            let mut target = 0;
            while target < i && target_value >= degrees[target] {
                target_value -= degrees[target];
                target += 1;
            }

            if target < i && targets.insert(target) {
                edges.push((i, target, rng.gen_range(1..=max_length.max(1)) as f64));
                edges.push((target, i, rng.gen_range(1..=max_length.max(1)) as f64));
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    Network::from_edges(n, &edges)
}
