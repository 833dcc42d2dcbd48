use crate::graph::Graph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const MAX_WEIGHT: i64 = 10;

/// Connected graph on `n` vertices named `"0"..n` with up to `m` edges of weight `1..=10`.
///
/// A random spanning tree comes first, then random extra edges. Self loops are skipped
/// and repeated pairs merge, so the result may have fewer than `m` edges.
pub fn random_graph(n: usize, m: usize, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = random_tree_with(n, &mut rng);

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s == t {
            continue;
        }
        let w = rng.random_range(1..=MAX_WEIGHT);
        graph.add_edge(&s.to_string(), &t.to_string(), w).unwrap();
    }

    graph
}

/// Random weighted tree on `n` vertices named `"0"..n`.
pub fn random_tree(n: usize, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    random_tree_with(n, &mut rng)
}

fn random_tree_with(n: usize, rng: &mut StdRng) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.find_or_create_vertex(&i.to_string()).unwrap();
        if i > 0 {
            let j = rng.random_range(0..i);
            let w = rng.random_range(1..=MAX_WEIGHT);
            graph.add_edge(&i.to_string(), &j.to_string(), w).unwrap();
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_is_connected() {
        for seed in 0..10 {
            let g = random_graph(20, 30, seed);
            assert_eq!(g.vertex_count(), 20);
            assert_eq!(g.component_count(), 1);
        }
    }

    #[test]
    fn test_random_tree_edge_count() {
        let g = random_tree(17, 4);
        assert_eq!(g.edge_count(), 16);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = random_graph(10, 20, 42);
        let b = random_graph(10, 20, 42);
        assert_eq!(a.edge_count(), b.edge_count());
        assert_eq!(a.weight("0", "1"), b.weight("0", "1"));
    }
}
