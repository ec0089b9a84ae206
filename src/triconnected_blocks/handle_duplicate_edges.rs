use radsort::sort_by_key;

use crate::triconnected_blocks::{
    graph_internal::GraphInternal,
    outside_structures::{Component, SkeletonKind},
};

/// Splits every bundle of parallel edges off into a bond.
///
/// Each bundle is replaced by one virtual edge, which also closes the bond.
/// Rebuilds the adjacency lists in both directions, as the graph is not rooted yet.
/// Self-loops are left out of the adjacency lists.
pub(crate) fn handle_duplicate_edges(
    graph: &mut GraphInternal,
    split_components: &mut Vec<Component>,
) {
    let n = graph.n;
    let len = graph.m;

    // endpoints are already ordered (smaller first), radix sort is stable
    sort_by_key(&mut graph.edges, |&(s, t)| (s * n + t) as u64);

    graph.adj = vec![Vec::new(); n];

    let mut i = 0;
    while i < len {
        let (s, t) = graph.edges[i];
        let mut j = i + 1;
        while j < len && graph.edges[j] == (s, t) {
            j += 1;
        }

        if s == t {
            // self-loop, not part of any component
        } else if j - i > 1 {
            let mut bond = Component::new(Some(SkeletonKind::Parallel));

            let evirt = graph.new_edge(s, t, None);
            graph.adj[t].push(evirt);
            bond.push_edge(evirt);

            for eid in i..j {
                bond.take_edge(eid, graph);
            }

            bond.commit(split_components);
        } else {
            graph.adj[s].push(i);
            graph.adj[t].push(i);
        }

        i = j;
    }
}
