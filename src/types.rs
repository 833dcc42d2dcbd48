/// Weight of a single undirected edge. Negative weights are rejected at insertion.
pub type Weight = u32;

/// Length of a shortest path. Wide enough to sum `u32::MAX` weights over any path
/// petgraph can index.
pub type Distance = u64;

/// Weight given to edges that do not state one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Wrapper for petgraph's graph type.
///
/// Node weights are vertex names, edge weights are [`Weight`]s.
pub type UnGraph = petgraph::graph::UnGraph<String, Weight>;

/// A cut edge given by the names of its endpoints, smaller name first.
pub type NamedEdge = (String, String);
