use petgraph::graph::NodeIndex;

use crate::{EdgeLabel, UnGraph, block_cut::get_block_cut_tree};

/// Iterates over every simple graph on `n` labelled vertices, one bit of the mask per vertex pair.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: u64,
    pub last_mask: u64,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * (n - 1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = UnGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = UnGraph::new_undirected();
        for i in 0..self.n {
            graph.add_node(i as u32);
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), EdgeLabel::Real);
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

/// Every biconnected simple graph on `n` labelled vertices, as its only block.
pub(crate) fn biconnected_graphs(n: usize) -> impl Iterator<Item = UnGraph> {
    GraphEnumeratorState::new(n).filter_map(move |graph| {
        let bct = get_block_cut_tree(&graph, NodeIndex::new(0));
        (bct.block_count == 1 && bct.node_count == n).then(|| bct.block(&graph, 0).graph)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_all_graphs() {
        assert_eq!(GraphEnumeratorState::new(3).count(), 8);
        assert_eq!(GraphEnumeratorState::new(4).count(), 64);
    }

    #[test]
    fn test_biconnected_graphs_on_four_vertices() {
        // 3 squares, 6 squares with a chord, K4
        assert_eq!(biconnected_graphs(4).count(), 10);
        assert_eq!(biconnected_graphs(3).count(), 1);
    }
}
