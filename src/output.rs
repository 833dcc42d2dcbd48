use crate::biconnectivity::biconnectivity;
use crate::config::AnalysisOptions;
use crate::graph::Graph;
use crate::types::{Distance, NamedEdge, Weight};
use dot::{Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fixedbitset::FixedBitSet;
use petgraph::visit::EdgeRef;
use std::fmt;

/// Results of every structural query on one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: Option<String>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    pub bipartite: bool,
    /// Component diameters, ascending.
    pub diameters: Vec<Distance>,
    /// Cut vertex names, ascending.
    pub cut_vertices: Vec<String>,
    /// Bridges as name pairs, smaller name first, pairs ascending.
    pub cut_edges: Vec<NamedEdge>,
}

impl Report {
    /// Runs all analyses on `graph`.
    #[tracing::instrument(
        level = "debug",
        skip(graph, options),
        fields(name = graph.name(), diameter = %options.diameter)
    )]
    pub fn analyze(graph: &Graph, options: &AnalysisOptions) -> Self {
        Report {
            name: graph.name().map(str::to_owned),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            component_count: graph.component_count(),
            bipartite: graph.is_bipartite(),
            diameters: graph.diameters(options.diameter),
            cut_vertices: graph.cut_vertices(),
            cut_edges: graph.cut_edges(),
        }
    }
}

/// Diameters as space separated integers.
pub fn join_diameters(diameters: &[Distance]) -> String {
    diameters
        .iter()
        .map(Distance::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut vertex names separated by spaces.
pub fn join_cut_vertices(names: &[String]) -> String {
    names.join(" ")
}

/// Cut edges as `a b` pairs, all separated by spaces.
pub fn join_cut_edges(edges: &[NamedEdge]) -> String {
    edges
        .iter()
        .map(|(a, b)| format!("{a} {b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "name: {name}")?;
        }
        writeln!(f, "vertices: {}", self.vertex_count)?;
        writeln!(f, "edges: {}", self.edge_count)?;
        writeln!(f, "components: {}", self.component_count)?;
        writeln!(f, "bipartite: {}", self.bipartite)?;
        writeln!(f, "diameters: {}", join_diameters(&self.diameters))?;
        writeln!(f, "cut vertices: {}", join_cut_vertices(&self.cut_vertices))?;
        writeln!(f, "cut edges: {}", join_cut_edges(&self.cut_edges))
    }
}

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    weight: Weight,
    bridge: bool,
}

struct DotGraph<'a> {
    graph: &'a Graph,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    is_cut: FixedBitSet,
}

impl<'a> Labeller<'a, Node, Edge> for DotGraph<'a> {
    fn graph_id(&self) -> Id<'_> {
        Id::new("G").expect("G is a valid DOT identifier")
    }

    fn node_id(&self, n: &Node) -> Id<'_> {
        Id::new(format!("N{}", n)).expect("N followed by digits is a valid DOT identifier")
    }

    fn node_label(&self, n: &Node) -> LabelText<'a> {
        let name = self
            .graph
            .vertex_name(petgraph::graph::NodeIndex::new(*n))
            .unwrap_or_default();
        LabelText::label(name.to_owned())
    }

    fn edge_label(&self, e: &Edge) -> LabelText<'a> {
        LabelText::label(e.weight.to_string())
    }

    fn node_style(&self, n: &Node) -> Style {
        if self.is_cut.contains(*n) {
            Style::Filled
        } else {
            Style::None
        }
    }

    fn edge_style(&self, e: &Edge) -> Style {
        if e.bridge { Style::Bold } else { Style::Solid }
    }

    fn kind(&self) -> dot::Kind {
        dot::Kind::Graph
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for DotGraph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns the graph in DOT format.
///
/// Labels are vertex names and edge weights. Cut vertices are filled and bridges are
/// bold.
///
/// Intended to be used with `neato`.
pub fn to_dot(graph: &Graph) -> String {
    let ug = graph.as_ungraph();
    let bc = biconnectivity(ug);

    let mut is_cut = FixedBitSet::with_capacity(ug.node_count());
    for v in &bc.cut_vertices {
        is_cut.insert(v.index());
    }
    let mut is_bridge = FixedBitSet::with_capacity(ug.edge_count());
    for e in &bc.bridges {
        is_bridge.insert(e.index());
    }

    let dot_graph = DotGraph {
        graph,
        nodes: ug.node_indices().map(|v| v.index()).collect(),
        edges: ug
            .edge_references()
            .map(|e| Edge {
                source: e.source().index(),
                target: e.target().index(),
                weight: *e.weight(),
                bridge: is_bridge.contains(e.id().index()),
            })
            .collect(),
        is_cut,
    };

    let mut buffer = Vec::new();
    if let Err(e) = dot::render(&dot_graph, &mut buffer) {
        // writing into a Vec never fails
        tracing::error!(error = %e, "DOT rendering failed");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
