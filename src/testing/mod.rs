pub(crate) mod brute;
pub(crate) mod graph_enumerator;
pub(crate) mod random_graphs;
