use petgraph::graph::NodeIndex;

use crate::{
    EdgeLabel, Error, Result, UnGraph,
    triconnected::get_triconnected_components,
    triconnected_blocks::outside_structures::{SkeletonKind, TriconnectedComponents},
};

/// A node of the SPQR tree.
///
/// The weight of a skeleton node is the block node it stands for.
/// Edges are labelled [`EdgeLabel::Real`] for edges of the block and
/// [`EdgeLabel::Virtual`] for the edges shared with a neighbouring skeleton.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub kind: SkeletonKind,
    pub graph: UnGraph,
}

impl Skeleton {
    pub fn block_node(&self, v: NodeIndex) -> NodeIndex {
        NodeIndex::new(self.graph[v] as usize)
    }

    pub fn virtual_edge_count(&self) -> usize {
        self.graph
            .edge_weights()
            .filter(|&&label| label == EdgeLabel::Virtual)
            .count()
    }
}

/// Edge of the SPQR tree, `poles` being the block nodes of the shared virtual edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEdge {
    pub skeletons: (usize, usize),
    pub poles: (NodeIndex, NodeIndex),
}

/// SPQR tree of a block.
///
/// - `skeletons[i]` is the skeleton of tree node `i`.
/// - `adj[i]` holds the ids (into `edges`) of the tree edges incident to node `i`.
#[derive(Debug, Clone, Default)]
pub struct SpqrTree {
    pub skeletons: Vec<Skeleton>,
    pub adj: Vec<Vec<usize>>,
    pub edges: Vec<TreeEdge>,
}

impl SpqrTree {
    fn add_edge(&mut self, u: usize, v: usize, poles: (NodeIndex, NodeIndex)) {
        let id = self.edges.len();
        self.edges.push(TreeEdge {
            skeletons: (u, v),
            poles,
        });
        self.adj[u].push(id);
        self.adj[v].push(id);
    }

    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[u].iter().map(move |&id| {
            let (a, b) = self.edges[id].skeletons;
            if a == u { b } else { a }
        })
    }
}

/// Builds the SPQR tree of a biconnected, loop-free block.
///
/// Each merged triconnected component becomes a skeleton, and two skeletons are
/// joined whenever they share a virtual edge. Blocks with two vertices and fewer
/// than three edges give an empty tree.
pub fn get_spqr_tree(graph: &UnGraph) -> Result<SpqrTree> {
    spqr_tree_from_components(graph.node_count(), &get_triconnected_components(graph))
}

/// Joins the skeletons of the triconnected components of a graph with `node_count` nodes.
///
/// Fails with [`Error::UnclassifiedSkeleton`] on a component whose kind was never decided.
pub fn spqr_tree_from_components(
    node_count: usize,
    tricon: &TriconnectedComponents,
) -> Result<SpqrTree> {
    let mut spqr_tree = SpqrTree {
        skeletons: Vec::with_capacity(tricon.components.len()),
        adj: vec![Vec::new(); tricon.components.len()],
        edges: Vec::new(),
    };

    // first skeleton met for every virtual edge
    let mut owner = vec![None; tricon.edges.len()];
    let mut local = vec![None; node_count];

    for (i, component) in tricon.components.iter().enumerate() {
        let kind = component
            .kind
            .ok_or(Error::UnclassifiedSkeleton { component: i })?;

        let mut skeleton = UnGraph::new_undirected();
        let mut members = Vec::new();
        for &eid in &component.edges {
            let (s, t) = tricon.edges[eid];
            let mut local_of = |v: usize| -> NodeIndex {
                *local[v].get_or_insert_with(|| {
                    members.push(v);
                    skeleton.add_node(v as u32)
                })
            };
            let (ls, lt) = (local_of(s), local_of(t));

            if tricon.is_real_edge(eid) {
                skeleton.add_edge(ls, lt, EdgeLabel::Real);
                continue;
            }
            skeleton.add_edge(ls, lt, EdgeLabel::Virtual);
            if let Some(other) = owner[eid].replace(i) {
                spqr_tree.add_edge(other, i, (NodeIndex::new(s), NodeIndex::new(t)));
            }
        }

        for v in members {
            local[v] = None;
        }

        log::trace!(
            "skeleton {}: {} with {} nodes and {} edges",
            i,
            kind,
            skeleton.node_count(),
            skeleton.edge_count()
        );
        spqr_tree.skeletons.push(Skeleton {
            kind,
            graph: skeleton,
        });
    }

    Ok(spqr_tree)
}

#[cfg(test)]
mod tests {
    use std::mem;

    use petgraph::visit::EdgeRef;

    use super::*;
    use crate::triconnected_blocks::outside_structures::Component;
    use crate::testing::{
        brute::is_split_pair, graph_enumerator::biconnected_graphs,
        random_graphs::random_biconnected_graph,
    };

    fn sorted_pair(a: usize, b: usize) -> (usize, usize) {
        let (mut u, mut v) = (a, b);
        if u > v {
            mem::swap(&mut u, &mut v);
        }
        (u, v)
    }

    /// Checks that gluing the skeletons back along the tree edges gives the block.
    fn same_graphs(og_graph: &UnGraph, spqr_tree: &SpqrTree) -> bool {
        if og_graph.node_count() == 2 && og_graph.edge_count() < 3 {
            return spqr_tree.skeletons.is_empty();
        }

        let k = spqr_tree.skeletons.len();
        assert_eq!(spqr_tree.edges.len(), k - 1);

        let mut vis = vec![false; k];
        let mut stack = vec![0];
        vis[0] = true;
        while let Some(u) = stack.pop() {
            for v in spqr_tree.neighbors(u) {
                if !vis[v] {
                    vis[v] = true;
                    stack.push(v);
                }
            }
        }
        assert!(vis.iter().all(|&x| x));

        let mut real_edges = vec![];
        for skeleton in &spqr_tree.skeletons {
            for e in skeleton.graph.edge_references() {
                let (s, t) = (
                    skeleton.block_node(e.source()).index(),
                    skeleton.block_node(e.target()).index(),
                );
                assert_ne!(s, t, "skeleton with a self-loop");
                if *e.weight() == EdgeLabel::Real {
                    real_edges.push(sorted_pair(s, t));
                }
            }
        }
        real_edges.sort();

        let mut edges_in: Vec<(usize, usize)> = og_graph
            .edge_references()
            .map(|e| sorted_pair(e.source().index(), e.target().index()))
            .collect();
        edges_in.sort();

        real_edges == edges_in
    }

    fn verify_tree_edges(og_graph: &UnGraph, spqr_tree: &SpqrTree) {
        let total_virtual: usize = spqr_tree
            .skeletons
            .iter()
            .map(|s| s.virtual_edge_count())
            .sum();
        assert_eq!(total_virtual, 2 * spqr_tree.edges.len());

        for edge in &spqr_tree.edges {
            let (s, t) = edge.poles;
            assert!(is_split_pair(og_graph, s.index(), t.index()));

            // adjacent bonds and adjacent polygons are merged
            let a = spqr_tree.skeletons[edge.skeletons.0].kind;
            let b = spqr_tree.skeletons[edge.skeletons.1].kind;
            assert!(a == SkeletonKind::Rigid || a != b);
        }
    }

    #[test]
    fn test_square_with_chord() {
        // 0 - 1 - 2 - 3 - 0 with chord 0 - 2: a bond between two triangles
        let mut graph = UnGraph::new_undirected();
        for i in 0..4 {
            graph.add_node(i);
        }
        for (s, t) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)] {
            graph.add_edge(NodeIndex::new(s), NodeIndex::new(t), EdgeLabel::Real);
        }

        let spqr_tree = get_spqr_tree(&graph).unwrap();
        assert!(same_graphs(&graph, &spqr_tree));

        let mut kinds: Vec<char> = spqr_tree.skeletons.iter().map(|s| s.kind.letter()).collect();
        kinds.sort();
        assert_eq!(kinds, vec!['P', 'S', 'S']);
        for edge in &spqr_tree.edges {
            assert_eq!(sorted_pair(edge.poles.0.index(), edge.poles.1.index()), (0, 2));
        }
    }

    #[test]
    fn test_unclassified_component_is_an_error() {
        let mut tricon = TriconnectedComponents {
            components: vec![Component {
                edges: vec![0, 1, 2],
                kind: None,
            }],
            edges: vec![(0, 1), (1, 2), (2, 0)],
            real_edge_count: 3,
        };
        assert!(matches!(
            spqr_tree_from_components(3, &tricon),
            Err(Error::UnclassifiedSkeleton { component: 0 })
        ));

        tricon.components[0].kind = Some(SkeletonKind::Series);
        let spqr_tree = spqr_tree_from_components(3, &tricon).unwrap();
        assert_eq!(spqr_tree.skeletons.len(), 1);
        assert_eq!(spqr_tree.skeletons[0].graph.edge_count(), 3);
        assert!(spqr_tree.edges.is_empty());
    }

    #[test]
    fn test_spqr_tree_light() {
        for i in 0..100 {
            let n = 2 + i / 10;
            let m = 1 + i;

            let in_graph = random_biconnected_graph(n, m, i);
            let spqr_tree = get_spqr_tree(&in_graph).unwrap();
            assert!(same_graphs(&in_graph, &spqr_tree));
            verify_tree_edges(&in_graph, &spqr_tree);
        }
    }

    #[test]
    fn test_spqr_tree_exhaustive_small() {
        for n in 3..=5 {
            for in_graph in biconnected_graphs(n) {
                let spqr_tree = get_spqr_tree(&in_graph).unwrap();
                assert!(same_graphs(&in_graph, &spqr_tree));
                verify_tree_edges(&in_graph, &spqr_tree);
            }
        }
    }

    #[cfg(all(test, not(debug_assertions)))]
    #[test]
    fn test_spqr_tree() {
        for i in 0..1000 {
            let n = 2 + i / 10;
            let m = 1 + i;

            let in_graph = random_biconnected_graph(n, m, i);
            let spqr_tree = get_spqr_tree(&in_graph).unwrap();
            assert!(same_graphs(&in_graph, &spqr_tree));
            verify_tree_edges(&in_graph, &spqr_tree);
        }
    }

    #[cfg(all(test, not(debug_assertions)))]
    #[test]
    fn test_spqr_tree_exhaustive() {
        for n in 6..=7 {
            for in_graph in biconnected_graphs(n) {
                let spqr_tree = get_spqr_tree(&in_graph).unwrap();
                assert!(same_graphs(&in_graph, &spqr_tree));
            }
        }
    }
}
