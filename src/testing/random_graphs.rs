use petgraph::graph::NodeIndex;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{EdgeLabel, UnGraph, block_cut::get_block_cut_tree};

/// Random connected loop-free graph: a random spanning tree plus random extra edges,
/// parallel edges allowed.
pub(crate) fn random_graph(n: usize, m: usize, seed: usize) -> UnGraph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = UnGraph::new_undirected();

    for i in 0..n {
        graph.add_node(i as u32);
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), EdgeLabel::Real);
        }
    }

    if n < 2 {
        return graph;
    }
    for _ in n - 1..m {
        let s = rng.random_range(0..n);
        let t = (s + rng.random_range(1..n)) % n;
        graph.add_edge(NodeIndex::new(s), NodeIndex::new(t), EdgeLabel::Real);
    }

    graph
}

/// The block of node 0 in a random graph.
pub(crate) fn random_biconnected_graph(n: usize, m: usize, seed: usize) -> UnGraph {
    let graph = random_graph(n, m, seed);
    let bct = get_block_cut_tree(&graph, NodeIndex::new(0));

    bct.block(&graph, 0).graph
}
