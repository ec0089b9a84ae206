use hashbrown::HashSet;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::{
    ContigId, EdgeLabel,
    block_cut::Block,
    output::{PairOrigin, SeparationPair},
    spqr_tree::{Skeleton, SpqrTree},
    triconnected_blocks::outside_structures::SkeletonKind,
};

fn ordered(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Poles of every virtual edge of the skeleton, in edge order.
fn virtual_poles(skeleton: &Skeleton) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
    skeleton
        .graph
        .edge_references()
        .filter(|e| *e.weight() == EdgeLabel::Virtual)
        .map(|e| (e.source(), e.target()))
}

/// Separation pairs of one skeleton, as pairs of skeleton nodes.
///
/// - Rigid: the poles of every virtual edge.
/// - Parallel: the two poles once, if the bond has at least two virtual edges.
/// - Series: the poles of every virtual edge, then every pair of nodes not joined
///   by a real edge. The poles of a virtual edge are met by both scans.
pub fn skeleton_node_pairs(skeleton: &Skeleton) -> Vec<(NodeIndex, NodeIndex)> {
    match skeleton.kind {
        SkeletonKind::Rigid => virtual_poles(skeleton).collect(),
        SkeletonKind::Parallel => virtual_poles(skeleton).nth(1).into_iter().collect(),
        SkeletonKind::Series => {
            let mut pairs: Vec<(NodeIndex, NodeIndex)> = virtual_poles(skeleton).collect();

            let adjacent: HashSet<(NodeIndex, NodeIndex)> = skeleton
                .graph
                .edge_references()
                .filter(|e| *e.weight() == EdgeLabel::Real)
                .map(|e| ordered(e.source(), e.target()))
                .collect();

            let nodes: Vec<NodeIndex> = skeleton.graph.node_indices().collect();
            for (i, &u) in nodes.iter().enumerate() {
                for &v in &nodes[i + 1..] {
                    if !adjacent.contains(&(u, v)) {
                        pairs.push((u, v));
                    }
                }
            }

            pairs
        }
    }
}

/// Separation pairs of one skeleton of `block`, as contig handles with the smaller one first.
pub fn skeleton_pairs(block: &Block, skeleton: &Skeleton) -> Vec<(ContigId, ContigId)> {
    skeleton_node_pairs(skeleton)
        .into_iter()
        .map(|(u, v)| {
            let a = block.contig(skeleton.block_node(u));
            let b = block.contig(skeleton.block_node(v));
            (a.min(b), a.max(b))
        })
        .collect()
}

/// Applies the skeleton rules to every skeleton of the tree, in tree order.
pub fn block_pairs(block: &Block, spqr_tree: &SpqrTree) -> Vec<SeparationPair> {
    let mut pairs = Vec::new();
    for (i, skeleton) in spqr_tree.skeletons.iter().enumerate() {
        let found = skeleton_pairs(block, skeleton);
        log::trace!(
            "skeleton {} ({}) gives {} pair(s)",
            i,
            skeleton.kind,
            found.len()
        );
        pairs.extend(found.into_iter().map(|contigs| SeparationPair {
            contigs,
            origin: PairOrigin::Skeleton(skeleton.kind),
        }));
    }
    pairs
}
