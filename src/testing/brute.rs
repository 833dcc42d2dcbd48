//! Slow reference implementations used to cross-check the real algorithms.

use crate::UnGraph;
use crate::types::Distance;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Tries every 2-coloring.
pub fn brute_is_bipartite(graph: &UnGraph) -> bool {
    let n = graph.node_count();
    (0..1usize << n).any(|mask| {
        graph.edge_references().all(|e| {
            let side = |v: NodeIndex| mask >> v.index() & 1;
            side(e.source()) != side(e.target())
        })
    })
}

/// Number of components once `skip_node` and `skip_edge` are removed.
fn count_components_without(
    graph: &UnGraph,
    skip_node: Option<NodeIndex>,
    skip_edge: Option<EdgeIndex>,
) -> usize {
    let mut visited = vec![false; graph.node_count()];
    let mut count = 0;
    for root in graph.node_indices() {
        if visited[root.index()] || Some(root) == skip_node {
            continue;
        }
        count += 1;
        visited[root.index()] = true;
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            for e in graph.edges(u) {
                let v = e.target();
                if Some(e.id()) == skip_edge || Some(v) == skip_node || visited[v.index()] {
                    continue;
                }
                visited[v.index()] = true;
                stack.push(v);
            }
        }
    }
    count
}

/// Vertices whose removal increases the number of components.
pub fn brute_cut_vertices(graph: &UnGraph) -> Vec<NodeIndex> {
    let base = count_components_without(graph, None, None);
    graph
        .node_indices()
        .filter(|&v| count_components_without(graph, Some(v), None) > base)
        .collect()
}

/// Edges whose removal increases the number of components.
pub fn brute_bridges(graph: &UnGraph) -> Vec<EdgeIndex> {
    let base = count_components_without(graph, None, None);
    graph
        .edge_indices()
        .filter(|&e| count_components_without(graph, None, Some(e)) > base)
        .collect()
}

/// Exact component diameters via Floyd-Warshall, sorted ascending.
pub fn brute_diameters(graph: &UnGraph) -> Vec<Distance> {
    let n = graph.node_count();
    let mut dist = vec![vec![None::<Distance>; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for e in graph.edge_references() {
        let (u, v) = (e.source().index(), e.target().index());
        let w = Some(Distance::from(*e.weight()));
        dist[u][v] = w;
        dist[v][u] = w;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }

    // a component is represented by its smallest vertex
    let mut diameter = vec![None; n];
    for i in 0..n {
        let Some(repr) = (0..n).find(|&j| dist[i][j].is_some()) else {
            continue;
        };
        let ecc = dist[i].iter().flatten().copied().max().unwrap_or(0);
        diameter[repr] = Some(diameter[repr].map_or(ecc, |d: Distance| d.max(ecc)));
    }
    let mut result: Vec<Distance> = diameter.into_iter().flatten().collect();
    result.sort();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_brute_on_path() {
        let mut g = Graph::new();
        g.add_edge("a", "b", 2).unwrap();
        g.add_edge("b", "c", 3).unwrap();
        let ug = g.as_ungraph();
        assert!(brute_is_bipartite(ug));
        assert_eq!(brute_cut_vertices(ug), vec![g.vertex("b").unwrap()]);
        assert_eq!(brute_bridges(ug).len(), 2);
        assert_eq!(brute_diameters(ug), vec![5]);
    }
}
