use std::mem;

use crate::triconnected_blocks::{graph_internal::GraphInternal, outside_structures::EdgeType};

impl GraphInternal {
    fn palm_dfs(&mut self, u: usize, time: &mut usize) {
        self.num[u] = *time;
        self.low1[u] = *time;
        self.low2[u] = *time;
        self.sub[u] = 1;
        *time += 1;

        // adjacency lists are not modified during this pass
        for i in 0..self.adj[u].len() {
            let eid = self.adj[u][i];
            if self.edge_type[eid].is_some() {
                continue;
            }

            let to = self.get_other_vertex(eid, u);
            if self.num[to] == usize::MAX {
                self.par_edge[to] = Some(eid);
                self.par[to] = Some(u);
                self.edge_type[eid] = Some(EdgeType::Tree);

                self.palm_dfs(to, time);

                self.sub[u] += self.sub[to];
                if self.low1[to] < self.low1[u] {
                    self.low2[u] = self.low1[u].min(self.low2[to]);
                    self.low1[u] = self.low1[to];
                } else if self.low1[to] == self.low1[u] {
                    self.low2[u] = self.low2[u].min(self.low2[to]);
                } else {
                    self.low2[u] = self.low2[u].min(self.low1[to]);
                }
            } else {
                // back edge, always towards an ancestor
                self.edge_type[eid] = Some(EdgeType::Back);

                if self.num[to] < self.low1[u] {
                    self.low2[u] = self.low1[u];
                    self.low1[u] = self.num[to];
                } else if self.num[to] > self.low1[u] {
                    self.low2[u] = self.low2[u].min(self.num[to]);
                }
            }
        }
    }

    /// Builds the palm tree of the graph rooted at `root`.
    ///
    /// Computes:
    /// - `num[u]` - preorder number of `u`,
    /// - `low1[u]` - the lowest `num` reachable from the subtree of `u` with at most one back edge,
    /// - `low2[u]` - the second lowest such `num`,
    /// - `sub[u]` - the size of the subtree of `u`,
    /// - the parent of every vertex and the type of every edge.
    ///
    /// Afterwards every edge points downwards if it is a tree edge and upwards if it is a back edge.
    pub(crate) fn run_palm_dfs(&mut self, root: usize) {
        let mut time = 0;
        self.palm_dfs(root, &mut time);

        for (eid, edge) in self.edges.iter_mut().enumerate() {
            let reversed = match self.edge_type[eid] {
                Some(EdgeType::Tree) => self.num[edge.0] > self.num[edge.1],
                Some(EdgeType::Back) => self.num[edge.0] < self.num[edge.1],
                _ => false,
            };
            if reversed {
                mem::swap(&mut edge.0, &mut edge.1);
            }
        }
    }
}
