use crate::graph::Graph;

/// Iterates over every simple graph on `n` labelled vertices named `"0"..n`.
///
/// Bit `k` of the mask decides about the `k`-th pair `(i, j)`, `i < j`, in
/// lexicographic order.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        let pairs = n * n.saturating_sub(1) / 2;
        Self {
            n,
            mask: 0,
            last_mask: 1 << pairs,
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = Graph::new();
        for i in 0..self.n {
            graph.find_or_create_vertex(&i.to_string()).unwrap();
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(&i.to_string(), &j.to_string(), 1).unwrap();
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_every_graph() {
        let graphs: Vec<Graph> = GraphEnumeratorState::new(3).collect();
        assert_eq!(graphs.len(), 8);
        assert!(graphs.iter().all(|g| g.vertex_count() == 3));
        assert_eq!(graphs[0].edge_count(), 0);
        assert_eq!(graphs[7].edge_count(), 3);
    }

    #[test]
    fn test_single_vertex() {
        let graphs: Vec<Graph> = GraphEnumeratorState::new(1).collect();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].vertex_count(), 1);
    }
}
