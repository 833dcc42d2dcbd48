use crate::UnGraph;
use crate::types::Distance;
use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Computes shortest path lengths from `source` to every vertex.
///
/// Returns a vector indexed by node index; `None` marks vertices that are not reachable
/// from `source`. Edge weights are non-negative, which `Graph` enforces on insertion,
/// so Dijkstra's algorithm is exact here.
pub fn shortest_paths(graph: &UnGraph, source: NodeIndex) -> Vec<Option<Distance>> {
    let graph_size = graph.node_count();
    let mut dist: Vec<Option<Distance>> = vec![None; graph_size];
    let mut settled = FixedBitSet::with_capacity(graph_size);
    // (distance, node index) pairs; equal distances pop in node index order
    let mut heap = BinaryHeap::new();

    dist[source.index()] = Some(0);
    heap.push(Reverse((0, source.index())));

    while let Some(Reverse((d, u))) = heap.pop() {
        if settled.put(u) {
            // stale entry, u was settled through a shorter path
            continue;
        }
        for edge in graph.edges(NodeIndex::new(u)) {
            let v = edge.target().index();
            if settled.contains(v) {
                continue;
            }
            let candidate = d + Distance::from(*edge.weight());
            if dist[v].is_none_or(|current| candidate < current) {
                dist[v] = Some(candidate);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    dist
}

/// Returns the vertex with the largest finite distance, together with that distance.
///
/// Ties go to the vertex with the smallest node index. Returns `None` only when no
/// vertex is reachable at all, which cannot happen for a result of [`shortest_paths`].
pub fn farthest(dist: &[Option<Distance>]) -> Option<(NodeIndex, Distance)> {
    dist.iter()
        .enumerate()
        .filter_map(|(v, d)| d.map(|d| (NodeIndex::new(v), d)))
        .fold(None, |best, (v, d)| match best {
            Some((_, best_d)) if best_d >= d => best,
            _ => Some((v, d)),
        })
}

/// Eccentricity of `source`: its largest finite distance to any other vertex.
pub fn eccentricity(graph: &UnGraph, source: NodeIndex) -> Distance {
    farthest(&shortest_paths(graph, source)).map_or(0, |(_, d)| d)
}
