use crate::UnGraph;
use petgraph::visit::NodeIndexable;

/// Side of a vertex in a proper 2-coloring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Returns a proper 2-coloring of the graph, indexed by node index, or `None` if the
/// graph contains an odd cycle.
///
/// The first vertex of every component is put on [`Side::Left`].
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.node_count()))]
pub fn two_coloring(graph: &UnGraph) -> Option<Vec<Side>> {
    let mut color: Vec<Option<Side>> = vec![None; graph.node_count()];
    let mut stack = Vec::new();

    for root in graph.node_indices() {
        if color[root.index()].is_some() {
            continue;
        }
        color[root.index()] = Some(Side::Left);
        stack.push(root.index());

        while let Some(u) = stack.pop() {
            let Some(side) = color[u] else {
                continue;
            };
            for v in graph.neighbors(graph.from_index(u)).map(|n| n.index()) {
                match color[v] {
                    None => {
                        color[v] = Some(side.opposite());
                        stack.push(v);
                    }
                    Some(other) if other == side => {
                        tracing::debug!(u, v, "odd cycle found");
                        return None;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    Some(color.into_iter().flatten().collect())
}

/// Checks whether the graph is bipartite, that is whether it has no odd cycle.
///
/// The empty graph and isolated vertices are bipartite.
pub fn is_bipartite(graph: &UnGraph) -> bool {
    let bipartite = two_coloring(graph).is_some();
    tracing::debug!(bipartite, "bipartite check finished");
    bipartite
}
