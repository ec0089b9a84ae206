use std::mem::swap;

use petgraph::visit::EdgeRef;

use crate::{UnGraph, triconnected_blocks::outside_structures::EdgeType};

/// Working graph of the triconnectivity algorithm.
///
/// Vertices are block node indices. Edges are never deleted from `edges`,
/// removed ones are marked `Killed`, so edge ids stay valid for the components.
#[derive(Debug, Clone)]
pub(crate) struct GraphInternal {
    pub n: usize,
    pub m: usize,
    pub adj: Vec<Vec<usize>>,             // outgoing edge ids once the palm tree is built
    pub edges: Vec<(usize, usize)>,       // (source, target), oriented by the palm tree
    pub edge_type: Vec<Option<EdgeType>>, // None until the palm dfs visits the edge

    pub num: Vec<usize>,

    pub par_edge: Vec<Option<usize>>,
    pub par: Vec<Option<usize>>,
    pub low1: Vec<usize>,
    pub low2: Vec<usize>,
    pub sub: Vec<usize>, // subtree size
    pub deg: Vec<usize>,

    pub high: Vec<Vec<usize>>, // back edges entering a vertex, highest source last
    pub numrev: Vec<usize>,
    pub starts_path: Vec<bool>,
}

impl GraphInternal {
    /// Copies the edges of a block, each stored with its smaller endpoint first.
    pub fn from_block(graph: &UnGraph) -> Self {
        let mut ret = Self::with_vertices(graph.node_count());

        for e in graph.edge_references() {
            let (mut s, mut t) = (e.source().index(), e.target().index());
            if s > t {
                swap(&mut s, &mut t);
            }
            ret.new_edge(s, t, None);
        }

        ret
    }

    pub fn with_vertices(n: usize) -> Self {
        Self {
            n,
            m: 0,
            adj: vec![Vec::new(); n],
            edges: Vec::new(),
            edge_type: Vec::new(),

            num: vec![usize::MAX; n],

            par_edge: vec![None; n],
            par: vec![None; n],
            low1: vec![0; n],
            low2: vec![0; n],
            sub: vec![0; n],
            deg: vec![0; n],

            high: vec![Vec::new(); n],
            numrev: vec![0; n],
            starts_path: Vec::new(),
        }
    }

    /// Adds the edge s -> t to the adjacency list of `s` only.
    pub fn new_edge(&mut self, s: usize, t: usize, put_type: Option<EdgeType>) -> usize {
        let eid = self.edges.len();

        self.edges.push((s, t));
        self.edge_type.push(put_type);
        self.adj[s].push(eid);
        self.starts_path.push(false);
        self.deg[s] += 1;
        self.deg[t] += 1;
        self.m += 1;

        eid
    }

    pub fn remove_edge(&mut self, eid: usize) {
        debug_assert!(self.edge_type[eid] != Some(EdgeType::Killed));

        self.edge_type[eid] = Some(EdgeType::Killed);
        let (s, t) = self.edges[eid];
        self.deg[s] -= 1;
        self.deg[t] -= 1;
    }

    /// Turns a fresh virtual edge s -> t into the tree edge entering `t`.
    pub fn make_tedge(&mut self, eid: usize) {
        debug_assert!(self.edge_type[eid].is_none());

        self.edge_type[eid] = Some(EdgeType::Tree);
        let (s, t) = self.edges[eid];

        self.par_edge[t] = Some(eid);
        self.par[t] = Some(s);
    }

    /// Turns a fresh virtual edge s -> t into a back edge, updating high(t).
    pub fn make_bedge(&mut self, eid: usize) {
        debug_assert!(self.edge_type[eid].is_none());

        self.edge_type[eid] = Some(EdgeType::Back);
        let (s, t) = self.edges[eid];

        if self.get_high(t) < self.num[s] {
            self.high[t].push(eid);
        }
    }

    pub fn get_other_vertex(&self, eid: usize, u: usize) -> usize {
        let (s, t) = self.edges[eid];
        if s == u { t } else { s }
    }

    /// Target of the first alive outgoing edge of `u`, `None` for the root.
    pub fn first_alive(&self, root: usize, u: usize) -> Option<usize> {
        if u == root {
            return None;
        }
        self.adj[u]
            .iter()
            .find(|&&eid| self.edge_type[eid] != Some(EdgeType::Killed))
            .map(|&eid| self.edges[eid].1)
    }

    /// Number of the highest vertex with an alive back edge into `u`, 0 if there is none.
    pub fn get_high(&mut self, u: usize) -> usize {
        while let Some(&eid) = self.high[u].last() {
            if self.edge_type[eid] == Some(EdgeType::Killed) {
                self.high[u].pop();
            } else {
                return self.num[self.get_other_vertex(eid, u)];
            }
        }
        0
    }
}
