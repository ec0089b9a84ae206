use petgraph::visit::EdgeRef;

use crate::{
    UnGraph,
    triconnected_blocks::{
        graph_internal::GraphInternal,
        handle_duplicate_edges::handle_duplicate_edges,
        merge_components::merge_components,
        outside_structures::{Component, EdgeType, SkeletonKind, TriconnectedComponents},
    },
};

/// Triple `(h, a, b)`: the vertices numbered from `a` to `h` may be separated by `{a, b}`.
type Triple = (usize, usize, usize);

/// State of the path search which splits off the components.
struct SplitFinder<'a> {
    root: usize,
    /// Edges with ids at or above are virtual and never visited by the search.
    vedges_cutoff: usize,
    graph: &'a mut GraphInternal,
    estack: Vec<usize>,
    split_components: Vec<Component>,
}

impl SplitFinder<'_> {
    fn find(&mut self, u: usize, tstack: &mut Vec<Triple>) {
        let mut tree_edges_left = self.graph.adj[u]
            .iter()
            .filter(|&&eid| self.graph.edge_type[eid] == Some(EdgeType::Tree))
            .count();

        let mut i = 0;
        while i < self.graph.adj[u].len() {
            let eid = self.graph.adj[u][i];
            if eid >= self.vedges_cutoff {
                break;
            }
            i += 1;

            let to = self.graph.get_other_vertex(eid, u);
            let starts_path = self.graph.starts_path[eid];
            if starts_path {
                self.update_tstack(u, to, eid, tstack);
            }

            if self.graph.edge_type[eid] != Some(EdgeType::Tree) {
                self.estack.push(eid);
                continue;
            }

            let mut path_tstack = Vec::new();
            let inner = if starts_path {
                &mut path_tstack
            } else {
                &mut *tstack
            };

            self.find(to, inner);
            tree_edges_left -= 1;

            // the tree edge might have been replaced by a virtual one meanwhile
            if let Some(par_edge) = self.graph.par_edge[to] {
                self.estack.push(par_edge);
            }

            self.check_type_2(u, to, inner);
            self.check_type_1(u, to, tree_edges_left);
            self.check_highpoint(u, tstack);
        }
    }

    fn update_tstack(&self, u: usize, to: usize, eid: usize, tstack: &mut Vec<Triple>) {
        let graph = &*self.graph;
        let (cutoff, mut max_h, mut last_b) = if graph.edge_type[eid] == Some(EdgeType::Tree) {
            (graph.low1[to], graph.num[to] + graph.sub[to] - 1, graph.num[u])
        } else {
            (graph.num[to], graph.num[u], graph.num[u])
        };

        while let Some(&(h, a, b)) = tstack.last() {
            if a <= cutoff {
                break;
            }
            tstack.pop();
            max_h = max_h.max(h);
            last_b = b;
        }

        tstack.push((max_h, cutoff, last_b));
    }

    fn check_highpoint(&mut self, u: usize, tstack: &mut Vec<Triple>) {
        let high = self.graph.get_high(u);
        let num = self.graph.num[u];

        while let Some(&(h, a, b)) = tstack.last() {
            if a != num && b != num && high > h {
                tstack.pop();
            } else {
                break;
            }
        }
    }

    /// Type-2 pairs `{u, b}`: a part of the subtree of `to` hangs off `u` and `b` only.
    fn check_type_2(&mut self, u: usize, mut to: usize, tstack: &mut Vec<Triple>) {
        if u == self.root {
            return;
        }

        loop {
            let graph = &*self.graph;
            let (h, a, b) = tstack.last().copied().unwrap_or((0, usize::MAX, 0));

            let cond_1 = a == graph.num[u];
            let single_child = if graph.deg[to] == 2 {
                graph
                    .first_alive(self.root, to)
                    .filter(|&x| graph.num[x] > graph.num[to])
            } else {
                None
            };

            if !cond_1 && single_child.is_none() {
                break;
            }
            if cond_1 && graph.par[graph.numrev[b]] == Some(u) {
                tstack.pop();
                continue;
            }

            let mut eab = None;
            let mut evirt;
            if let Some(x) = single_child {
                // `to` lies on a path u - to - x, replaced by the virtual edge u - x
                to = x;
                let mut component = Component::new(Some(SkeletonKind::Series));
                for _ in 0..2 {
                    if let Some(eid) = self.estack.pop() {
                        component.take_edge(eid, self.graph);
                    }
                }
                evirt = self.graph.new_edge(u, to, None);
                component.push_edge(evirt);
                component.commit(&mut self.split_components);

                if let Some(&eid) = self.estack.last() {
                    if self.graph.edges[eid] == (to, u) {
                        self.estack.pop();
                        eab = Some(eid);
                    }
                }
            } else {
                to = self.graph.numrev[b];
                tstack.pop();

                let lo = self.graph.num[u];
                let mut component = Component::new(None);
                while let Some(&eid) = self.estack.last() {
                    let (x, y) = self.graph.edges[eid];
                    let inside = |v: usize| (lo..=h).contains(&self.graph.num[v]);
                    if !(inside(x) && inside(y)) {
                        break;
                    }
                    self.estack.pop();

                    if (x == u && y == to) || (x == to && y == u) {
                        eab = Some(eid);
                    } else {
                        component.take_edge(eid, self.graph);
                    }
                }
                evirt = self.graph.new_edge(u, to, None);
                component.push_edge(evirt);
                component.commit(&mut self.split_components);
            }

            if let Some(eab) = eab {
                evirt = self.bond(eab, evirt, u, to);
            }

            self.estack.push(evirt);
            self.graph.make_tedge(evirt);
        }
    }

    /// Type-1 pair `{low1(to), u}`: the subtree of `to` is attached to the rest only through them.
    fn check_type_1(&mut self, u: usize, to: usize, tree_edges_left: usize) {
        let graph = &*self.graph;
        if !(graph.low2[to] >= graph.num[u]
            && graph.low1[to] < graph.num[u]
            && (graph.par[u] != Some(self.root) || tree_edges_left != 0))
        {
            return;
        }

        let subtree = graph.num[to]..graph.num[to] + graph.sub[to];
        let low_vertex = graph.numrev[graph.low1[to]];

        let mut component = Component::new(None);
        while let Some(&eid) = self.estack.last() {
            let (x, y) = self.graph.edges[eid];
            if !subtree.contains(&self.graph.num[x]) && !subtree.contains(&self.graph.num[y]) {
                break;
            }
            self.estack.pop();
            component.take_edge(eid, self.graph);
        }

        let mut evirt = self.graph.new_edge(u, low_vertex, None);
        component.push_edge(evirt);
        component.commit(&mut self.split_components);

        if let Some(&eid) = self.estack.last() {
            let (x, y) = self.graph.edges[eid];
            if (x == u && y == low_vertex) || (x == low_vertex && y == u) {
                self.estack.pop();
                evirt = self.bond(eid, evirt, u, low_vertex);
            }
        }

        if Some(low_vertex) != self.graph.par[u] {
            self.estack.push(evirt);
            self.graph.make_bedge(evirt);
        } else if let Some(parent_edge) = self.graph.par_edge[u] {
            evirt = self.bond(parent_edge, evirt, low_vertex, u);
            self.graph.make_tedge(evirt);
            self.graph.par_edge[u] = Some(evirt);
        }
    }

    /// Closes a bond of `eid` and the virtual edge `evirt`, returning the new virtual edge s -> t.
    fn bond(&mut self, eid: usize, evirt: usize, s: usize, t: usize) -> usize {
        let mut component = Component::new(Some(SkeletonKind::Parallel));
        component.take_edge(eid, self.graph);
        component.take_edge(evirt, self.graph);

        let evirt = self.graph.new_edge(s, t, None);
        component.push_edge(evirt);
        component.commit(&mut self.split_components);

        evirt
    }
}

/// Computes the triconnected components of a biconnected, loop-free graph.
///
/// # Overview
///
/// A pair of vertices `{s, t}` is a *split pair* if removing both disconnects the graph,
/// or if `s` and `t` are joined by more than one edge. Splitting the graph at a split pair
/// gives split components, each receiving a *virtual* edge `(s, t)` so that the pieces
/// can be glued back along it.
///
/// Splitting as long as possible leaves three kinds of components:
/// - bonds: two vertices and at least three edges ([`SkeletonKind::Parallel`]),
/// - triangles ([`SkeletonKind::Series`]),
/// - simple triconnected graphs ([`SkeletonKind::Rigid`]).
///
/// Adjacent bonds are then merged into bonds, and adjacent triangles into polygons,
/// which makes the decomposition unique.
///
/// Graphs on two vertices are a single bond if they have at least three edges, and
/// have no components otherwise.
///
/// ## Reference
/// - [Hopcroft, J., & Tarjan, R. (1973). Dividing a Graph into Triconnected Components. SIAM Journal on Computing, 2(3), 135–158.](https://epubs.siam.org/doi/10.1137/0202012)
/// - [Gutwenger, C., & Mutzel, P. (2001). A Linear Time Implementation of SPQR-Trees.](https://doi.org/10.1007/3-540-44541-2_8)
pub fn get_triconnected_components(in_graph: &UnGraph) -> TriconnectedComponents {
    let n = in_graph.node_count();
    let m = in_graph.edge_count();

    if n <= 2 {
        let edges: Vec<(usize, usize)> = in_graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        let components = if m >= 3 {
            vec![Component {
                edges: (0..m).collect(),
                kind: Some(SkeletonKind::Parallel),
            }]
        } else {
            Vec::new()
        };
        return TriconnectedComponents {
            components,
            edges,
            real_edge_count: m,
        };
    }

    let root = 0;
    let mut graph = GraphInternal::from_block(in_graph);
    let mut split_components = Vec::new();

    handle_duplicate_edges(&mut graph, &mut split_components);

    // num, low1, low2, sub, par, deg and edge orientation
    graph.run_palm_dfs(root);
    graph.sort_adjacency_lists();
    // high, starts_path and the final numbering
    graph.find_paths(root);

    let mut finder = SplitFinder {
        root,
        vedges_cutoff: graph.edges.len(),
        graph: &mut graph,
        estack: Vec::new(),
        split_components,
    };
    let mut tstack = Vec::new();
    finder.find(root, &mut tstack);

    let mut last = Component::new(None);
    while let Some(eid) = finder.estack.pop() {
        last.take_edge(eid, finder.graph);
    }
    let mut split_components = finder.split_components;
    if !last.edges.is_empty() {
        last.commit(&mut split_components);
    }

    let components = merge_components(graph.edges.len(), split_components);

    TriconnectedComponents {
        components,
        edges: graph.edges,
        real_edge_count: m,
    }
}
