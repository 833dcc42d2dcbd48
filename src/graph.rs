use crate::biconnectivity::{find_cut_edges, find_cut_vertices};
use crate::bipartite::is_bipartite;
use crate::components::label_components;
use crate::diameter::{DiameterMethod, diameters};
use crate::error::{Error, Result};
use crate::types::{Distance, NamedEdge, UnGraph, Weight};
use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Largest vertex count petgraph's default `u32` indices can hold; `u32::MAX` itself is
/// reserved as the end marker.
const MAX_VERTICES: usize = u32::MAX as usize;

/// An undirected weighted graph with named vertices.
///
/// Vertices live in petgraph's dense arena and are looked up by name through a side
/// index, so a name always resolves to the same [`NodeIndex`]. Nothing is ever removed,
/// which keeps indices stable for the whole lifetime of the graph.
///
/// Policies:
/// - a repeated edge between the same pair is merged into the existing one, which keeps
///   the smaller of the two weights,
/// - self loops are rejected,
/// - weights must fit into `0..=u32::MAX`.
///
/// Analyses borrow the graph immutably and keep their traversal state to themselves,
/// so any number of them may run on a shared `&Graph`.
#[derive(Debug, Clone)]
pub struct Graph {
    name: Option<String>,
    graph: UnGraph,
    index: HashMap<String, NodeIndex>,
    vertex_limit: usize,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates an empty, unnamed graph.
    pub fn new() -> Self {
        Self {
            name: None,
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
            vertex_limit: MAX_VERTICES,
        }
    }

    /// Creates an empty graph that refuses to grow beyond `limit` vertices.
    ///
    /// The limit is capped at what petgraph's 32-bit indices can address. Going over it
    /// makes vertex creation fail with [`Error::CapacityExhausted`].
    pub fn with_vertex_limit(limit: usize) -> Self {
        Self {
            vertex_limit: limit.min(MAX_VERTICES),
            ..Self::new()
        }
    }

    /// Name of the graph, if one was declared.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the graph name. Returns `false` and keeps the old one if a name is already set.
    pub fn set_name(&mut self, name: &str) -> bool {
        if self.name.is_some() {
            return false;
        }
        self.name = Some(name.to_owned());
        true
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Underlying petgraph storage. Node weights are the vertex names.
    pub fn as_ungraph(&self) -> &UnGraph {
        &self.graph
    }

    /// Looks up a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn vertex_name(&self, v: NodeIndex) -> Option<&str> {
        self.graph.node_weight(v).map(String::as_str)
    }

    /// Weight of the edge between `a` and `b`, if both exist and are adjacent.
    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        let edge = self.graph.find_edge(self.vertex(a)?, self.vertex(b)?)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Neighbours of `v` together with the weight of the connecting edge.
    pub fn neighbors(&self, v: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.graph.edges(v).map(|e| (e.target(), *e.weight()))
    }

    /// Returns the vertex called `name`, creating an isolated one if it does not exist yet.
    pub fn find_or_create_vertex(&mut self, name: &str) -> Result<NodeIndex> {
        let [v] = self.ensure_vertices([name])?;
        Ok(v)
    }

    /// Resolves every name, creating the missing vertices.
    ///
    /// All fallible work (limit check, index reservation, name copies) happens before the
    /// first vertex is inserted, so on error the graph is left untouched. Names must be
    /// distinct.
    fn ensure_vertices<const N: usize>(&mut self, names: [&str; N]) -> Result<[NodeIndex; N]> {
        let missing = names
            .iter()
            .filter(|&&name| !self.index.contains_key(name))
            .count();
        if missing == 0 {
            return Ok(names.map(|name| self.index[name]));
        }
        if self.graph.node_count() + missing > self.vertex_limit {
            return Err(Error::CapacityExhausted);
        }
        self.index.try_reserve(missing).map_err(|_| Error::Allocation {
            what: "vertex name index",
        })?;

        let mut owned: [Option<String>; N] = [const { None }; N];
        for (slot, name) in owned.iter_mut().zip(names) {
            if self.index.contains_key(name) {
                continue;
            }
            let mut copy = String::new();
            copy.try_reserve_exact(name.len()).map_err(|_| Error::Allocation {
                what: "vertex name",
            })?;
            copy.push_str(name);
            *slot = Some(copy);
        }

        Ok(std::array::from_fn(|i| match owned[i].take() {
            Some(name) => {
                let v = self.graph.add_node(name.clone());
                tracing::trace!(vertex = %name, index = v.index(), "vertex created");
                self.index.insert(name, v);
                v
            }
            None => self.index[names[i]],
        }))
    }

    /// Connects `a` and `b` with an edge of the given weight, creating missing endpoints.
    ///
    /// If the two vertices are already adjacent no new edge is added; the existing one
    /// keeps the minimum of both weights and its index is returned.
    ///
    /// Nothing is modified when an error is returned.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: i64) -> Result<EdgeIndex> {
        let weight = Weight::try_from(weight).map_err(|_| Error::InvalidWeight { weight })?;
        if a == b {
            return Err(Error::SelfLoop {
                vertex: a.to_owned(),
            });
        }

        let existing = self
            .vertex(a)
            .zip(self.vertex(b))
            .and_then(|(u, v)| self.graph.find_edge(u, v));
        if let Some(edge) = existing {
            if let Some(w) = self.graph.edge_weight_mut(edge) {
                if weight < *w {
                    tracing::trace!(a, b, old = *w, new = weight, "duplicate edge, weight lowered");
                    *w = weight;
                }
            }
            return Ok(edge);
        }

        if self.graph.edge_count() >= u32::MAX as usize {
            return Err(Error::CapacityExhausted);
        }
        let [u, v] = self.ensure_vertices([a, b])?;
        Ok(self.graph.add_edge(u, v, weight))
    }

    /// See [`label_components`].
    pub fn component_count(&self) -> usize {
        label_components(&self.graph).count()
    }

    /// See [`is_bipartite`].
    pub fn is_bipartite(&self) -> bool {
        is_bipartite(&self.graph)
    }

    /// See [`diameters`].
    pub fn diameters(&self, method: DiameterMethod) -> Vec<Distance> {
        diameters(&self.graph, method)
    }

    /// See [`find_cut_vertices`].
    pub fn cut_vertices(&self) -> Vec<String> {
        find_cut_vertices(&self.graph)
    }

    /// See [`find_cut_edges`].
    pub fn cut_edges(&self) -> Vec<NamedEdge> {
        find_cut_edges(&self.graph)
    }
}
