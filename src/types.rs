/// Enum representing the type of edge in a graph.
///
/// Contig graphs and blocks only hold `Real` edges. Skeletons of an SPQR tree
/// hold both, `Virtual` ones standing in for the rest of the block.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeLabel {
    Real,
    Virtual,
}

impl std::fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeLabel::Real => write!(f, "real"),
            EdgeLabel::Virtual => write!(f, "virtual"),
        }
    }
}

/// Wrapper for petgraph's graph type.
///
/// The node weight is always the index of the node one level up:
/// a contig handle in the contig graph and in blocks, a block node in skeletons.
pub type UnGraph = petgraph::graph::UnGraph<u32, EdgeLabel>;

/// Handle of a contig, equal to its node index in the contig graph.
pub type ContigId = u32;
