use crate::UnGraph;
use crate::types::{NamedEdge, Weight};
use fixedbitset::FixedBitSet;
use petgraph::Undirected;
use petgraph::graph::{EdgeIndex, Edges, NodeIndex};
use petgraph::visit::EdgeRef;

/// Cut vertices and bridges of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Biconnectivity {
    /// Vertices whose removal disconnects their component, in node index order.
    pub cut_vertices: Vec<NodeIndex>,
    /// Edges whose removal disconnects their component, in edge index order.
    pub bridges: Vec<EdgeIndex>,
}

/// A vertex on the DFS stack together with the edges it has yet to look at.
struct Frame<'a> {
    node: NodeIndex,
    /// Edge we came through. Skipping the edge instead of the parent vertex keeps
    /// the search correct for any multigraph too.
    parent_edge: Option<EdgeIndex>,
    edges: Edges<'a, Weight, Undirected>,
}

/// Finds cut vertices (articulation points) and bridges with Tarjan's lowpoint DFS.
///
/// The recursion is simulated with an explicit stack of [`Frame`]s; the step after a
/// child returns happens when the child's frame is popped.
///
/// - `preorder[u]` is the discovery time of `u`,
/// - `low[u]` is the smallest discovery time reachable from the subtree of `u` using at
///   most one back edge,
/// - a non-root `u` is a cut vertex iff some child `v` has `low[v] >= preorder[u]`,
/// - a root is a cut vertex iff it has more than one DFS child,
/// - a tree edge `(u, v)` is a bridge iff `low[v] > preorder[u]`.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.node_count(), edges = graph.edge_count()))]
pub fn biconnectivity(graph: &UnGraph) -> Biconnectivity {
    let graph_size = graph.node_count();
    let mut visited = FixedBitSet::with_capacity(graph_size);
    let mut preorder = vec![usize::MAX; graph_size];
    let mut low = vec![usize::MAX; graph_size];
    let mut is_cut = FixedBitSet::with_capacity(graph_size);
    let mut bridges = Vec::new();
    let mut time = 0;
    let mut stack: Vec<Frame<'_>> = Vec::new();

    for root in graph.node_indices() {
        if visited.put(root.index()) {
            continue;
        }
        preorder[root.index()] = time;
        low[root.index()] = time;
        time += 1;
        let mut root_children = 0;
        stack.push(Frame {
            node: root,
            parent_edge: None,
            edges: graph.edges(root),
        });

        while let Some(frame) = stack.last_mut() {
            let u = frame.node.index();
            let parent_edge = frame.parent_edge;

            match frame.edges.next() {
                Some(edge) => {
                    if Some(edge.id()) == parent_edge {
                        continue;
                    }
                    let v = edge.target();
                    if visited.put(v.index()) {
                        // back edge, or the far side of a tree edge to an already finished child
                        low[u] = low[u].min(preorder[v.index()]);
                        continue;
                    }
                    if stack.len() == 1 {
                        root_children += 1;
                    }
                    preorder[v.index()] = time;
                    low[v.index()] = time;
                    time += 1;
                    stack.push(Frame {
                        node: v,
                        parent_edge: Some(edge.id()),
                        edges: graph.edges(v),
                    });
                }
                None => {
                    stack.pop();
                    let (Some(parent), Some(tree_edge)) = (stack.last(), parent_edge) else {
                        // u is the root of this DFS tree
                        if root_children > 1 {
                            is_cut.insert(u);
                        }
                        continue;
                    };
                    let p = parent.node.index();
                    low[p] = low[p].min(low[u]);
                    if parent.parent_edge.is_some() && low[u] >= preorder[p] {
                        is_cut.insert(p);
                    }
                    if low[u] > preorder[p] {
                        bridges.push(tree_edge);
                    }
                }
            }
        }
    }

    bridges.sort();
    let cut_vertices: Vec<NodeIndex> = is_cut.ones().map(NodeIndex::new).collect();
    tracing::debug!(
        cut_vertices = cut_vertices.len(),
        bridges = bridges.len(),
        "biconnectivity computed"
    );
    Biconnectivity {
        cut_vertices,
        bridges,
    }
}

/// Names of all cut vertices, sorted lexicographically and without duplicates.
pub fn find_cut_vertices(graph: &UnGraph) -> Vec<String> {
    let mut names: Vec<String> = biconnectivity(graph)
        .cut_vertices
        .into_iter()
        .map(|v| graph[v].clone())
        .collect();
    names.sort();
    names
}

/// All bridges as name pairs.
///
/// Each pair has the lexicographically smaller name first, and the pairs are sorted
/// by first name, then by second name.
pub fn find_cut_edges(graph: &UnGraph) -> Vec<NamedEdge> {
    let mut pairs: Vec<NamedEdge> = biconnectivity(graph)
        .bridges
        .into_iter()
        .filter_map(|e| graph.edge_endpoints(e))
        .map(|(a, b)| {
            let (a, b) = (graph[a].clone(), graph[b].clone());
            if a <= b { (a, b) } else { (b, a) }
        })
        .collect();
    pairs.sort();
    pairs
}
