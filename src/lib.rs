//! # graph_queries
//!
//! Structural queries on undirected weighted graphs with named vertices:
//! connected components, bipartiteness, component diameters, cut vertices and
//! bridges.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! ```
//! use graph_queries::{AnalysisOptions, Report, input::from_str};
//!
//! let graph = from_str("path\na -- b\nb -- c\nc -- d\n").unwrap();
//! let report = Report::analyze(&graph, &AnalysisOptions::default());
//! assert_eq!(report.component_count, 1);
//! assert_eq!(report.diameters, vec![3]);
//! assert_eq!(report.cut_vertices, vec!["b", "c"]);
//! ```
//!
//! Every analysis keeps its traversal state in buffers of its own, so a shared
//! `&Graph` can be analysed from several threads at once.

pub mod biconnectivity;
pub mod bipartite;
pub mod components;
pub mod config;
pub mod diameter;
pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod shortest_path;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::AnalysisOptions;
pub use diameter::DiameterMethod;
pub use error::{Error, Result};
pub use graph::Graph;
pub use output::Report;
pub use types::UnGraph;
