use petgraph::visit::EdgeRef;

use crate::{ContigId, block_cut::BlockCutTree};

/// Pair of cut vertices bounding a block attached to the rest of the BC-tree at exactly two points.
///
/// Removing both cut vertices separates the inside of the block from the rest,
/// so the pair is reported without decomposing the block.
/// Contigs are returned with the smaller handle first.
pub fn cut_vertex_pair(bc_tree: &BlockCutTree, block: usize) -> Option<(ContigId, ContigId)> {
    let node = bc_tree.block_node(block);
    let mut ends = bc_tree.graph.edges(node).map(|e| {
        let far = if e.source() == node { e.target() } else { e.source() };
        bc_tree.graph[far]
    });

    let a = ends.next()?;
    let b = ends.next()?;
    if ends.next().is_some() {
        return None;
    }

    Some((a.min(b), a.max(b)))
}
