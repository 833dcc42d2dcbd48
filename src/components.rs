use crate::UnGraph;
use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::NodeIndexable;

/// Connected components of a graph.
///
/// Components are numbered `0..count` in the order their first vertex appears in
/// `graph.node_indices()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// Maps node index to component id.
    labels: Vec<usize>,
    /// First vertex of every component, which is where its traversal started.
    roots: Vec<NodeIndex>,
}

impl Components {
    /// Number of components.
    pub fn count(&self) -> usize {
        self.roots.len()
    }

    /// Component id of `v`.
    pub fn component_of(&self, v: NodeIndex) -> usize {
        self.labels[v.index()]
    }

    /// Component id of every vertex, indexed by node index.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Root vertex of every component, indexed by component id.
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Vertices grouped by component, each group in node index order.
    pub fn members(&self) -> Vec<Vec<NodeIndex>> {
        let mut groups = vec![Vec::new(); self.count()];
        for (v, &c) in self.labels.iter().enumerate() {
            groups[c].push(NodeIndex::new(v));
        }
        groups
    }
}

/// Labels every vertex with the id of its connected component.
///
/// Uses an explicit stack, so arbitrarily long paths do not exhaust the call stack.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.node_count()))]
pub fn label_components(graph: &UnGraph) -> Components {
    let graph_size = graph.node_count();
    let mut visited = FixedBitSet::with_capacity(graph_size);
    let mut labels = vec![usize::MAX; graph_size];
    let mut roots = Vec::new();
    let mut stack = Vec::new();

    for root in graph.node_indices() {
        if visited.put(root.index()) {
            continue;
        }
        let id = roots.len();
        roots.push(root);
        stack.push(root.index());

        while let Some(u) = stack.pop() {
            labels[u] = id;
            for v in graph.neighbors(graph.from_index(u)).map(|n| n.index()) {
                // `put` returns the previous bit, so every vertex is pushed once
                if !visited.put(v) {
                    stack.push(v);
                }
            }
        }
    }

    tracing::debug!(components = roots.len(), "components labelled");
    Components { labels, roots }
}
