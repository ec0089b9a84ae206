use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::UnGraph;

/// Whether the graph minus `s` and `t` is disconnected.
pub(crate) fn disconnects(graph: &UnGraph, s: usize, t: usize) -> bool {
    let n = graph.node_count();
    let mut vis = vec![false; n];
    vis[s] = true;
    vis[t] = true;

    let Some(start) = (0..n).find(|&v| !vis[v]) else {
        return false;
    };
    let mut stack = vec![start];
    vis[start] = true;
    while let Some(u) = stack.pop() {
        for v in graph.neighbors(NodeIndex::new(u)) {
            if !vis[v.index()] {
                vis[v.index()] = true;
                stack.push(v.index());
            }
        }
    }

    vis.iter().any(|&v| !v)
}

/// `{s, t}` is a split pair if it disconnects the graph or is joined by several edges.
pub(crate) fn is_split_pair(graph: &UnGraph, s: usize, t: usize) -> bool {
    let direct = graph
        .edges(NodeIndex::new(s))
        .filter(|e| e.source().index() + e.target().index() - s == t)
        .count();

    disconnects(graph, s, t) || direct > 1
}

/// `res[u][v]` tells whether there are 3 internally vertex-disjoint paths between `u` and `v`,
/// parallel edges counting as separate paths.
pub(crate) fn triconnectivity_matrix(graph: &UnGraph) -> Vec<Vec<bool>> {
    let n = graph.node_count();
    let mut res = vec![vec![false; n]; n];
    // indices from 0 to n-1 are 'ins', rest are 'outs'
    let mut cap = vec![vec![0; n * 2]; n * 2];

    for e in graph.edge_references() {
        let (u, v) = (e.source().index(), e.target().index());
        cap[u + n][v] += 1;
        cap[v + n][u] += 1;
    }
    for u in 0..n {
        cap[u][u + n] += 1;
    }

    fn augment(u: usize, t: usize, cap: &mut Vec<Vec<usize>>, vis: &mut Vec<bool>) -> bool {
        vis[u] = true;
        if u == t {
            return true;
        }
        for v in 0..cap.len() {
            if !vis[v] && cap[u][v] > 0 && augment(v, t, cap, vis) {
                cap[u][v] -= 1;
                cap[v][u] += 1;
                return true;
            }
        }
        false
    }

    for u in 0..n {
        for v in 0..n {
            if u == v {
                continue;
            }
            let mut cap = cap.clone();
            let mut vis = vec![false; 2 * n];
            res[u][v] = (0..3).all(|_| {
                vis.fill(false);
                augment(u + n, v, &mut cap, &mut vis)
            });
        }
    }

    res
}
