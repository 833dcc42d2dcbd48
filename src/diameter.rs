use crate::UnGraph;
use crate::components::label_components;
use crate::shortest_path::{eccentricity, farthest, shortest_paths};
use crate::types::Distance;
use radsort::sort;

/// How component diameters are computed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DiameterMethod {
    /// Two shortest path runs per component: from the component root to its farthest
    /// vertex, then from that vertex outwards.
    ///
    /// Exact on trees. On graphs with cycles it is only a lower bound of the true
    /// diameter.
    #[default]
    TwoPass,
    /// Maximum eccentricity over every vertex of the component. Runs one shortest path
    /// search per vertex.
    Exact,
}

impl std::fmt::Display for DiameterMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiameterMethod::TwoPass => write!(f, "TwoPass"),
            DiameterMethod::Exact => write!(f, "Exact"),
        }
    }
}

/// Returns the weighted diameter of every connected component, sorted ascending.
///
/// An isolated vertex has diameter 0; the empty graph yields an empty vector.
#[tracing::instrument(
    level = "debug",
    skip(graph, method),
    fields(vertices = graph.node_count(), method = %method)
)]
pub fn diameters(graph: &UnGraph, method: DiameterMethod) -> Vec<Distance> {
    let components = label_components(graph);

    let mut result: Vec<Distance> = match method {
        DiameterMethod::TwoPass => components
            .roots()
            .iter()
            .map(|&root| {
                // a root always reaches itself, so `farthest` finds at least the root
                let Some((far, _)) = farthest(&shortest_paths(graph, root)) else {
                    return 0;
                };
                eccentricity(graph, far)
            })
            .collect(),
        DiameterMethod::Exact => components
            .members()
            .into_iter()
            .map(|members| {
                members
                    .into_iter()
                    .map(|v| eccentricity(graph, v))
                    .max()
                    .unwrap_or(0)
            })
            .collect(),
    };

    for (id, d) in result.iter().enumerate() {
        tracing::trace!(component = id, diameter = d, "component diameter");
    }
    sort(&mut result);
    result
}
