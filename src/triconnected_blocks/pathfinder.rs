use crate::triconnected_blocks::{graph_internal::GraphInternal, outside_structures::EdgeType};

impl GraphInternal {
    fn path_dfs(&mut self, root: usize, u: usize, newnum: &mut [usize], time: &mut usize) {
        for i in 0..self.adj[u].len() {
            let eid = self.adj[u][i];
            let to = self.edges[eid].1;

            // every edge but the first one of a non-root vertex opens a new path
            if i > 0 || u == root {
                self.starts_path[eid] = true;
            }

            if self.edge_type[eid] == Some(EdgeType::Tree) {
                self.path_dfs(root, to, newnum, time);
            } else {
                self.high[to].push(eid);
            }
        }

        newnum[u] = *time;
        *time = time.saturating_sub(1);
    }

    /// Splits the palm tree into paths and renumbers the vertices so that
    /// the children visited first get the highest numbers.
    ///
    /// Fills `starts_path`, `high` and `numrev`, and translates `low1` and `low2`
    /// to the new numbering. Must run after [`GraphInternal::sort_adjacency_lists`].
    pub(crate) fn find_paths(&mut self, root: usize) {
        let mut newnum = vec![0; self.n];
        let mut time = self.n - 1;
        self.path_dfs(root, root, &mut newnum, &mut time);

        let mut num2newnum = vec![0; self.n];
        for u in 0..self.n {
            num2newnum[self.num[u]] = newnum[u];
        }

        for u in 0..self.n {
            self.low1[u] = num2newnum[self.low1[u]];
            self.low2[u] = num2newnum[self.low2[u]];
            self.num[u] = newnum[u];
            self.numrev[self.num[u]] = u;
            // first visited back edge ends up last
            self.high[u].reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::triconnected_blocks::graph_internal::GraphInternal;

    #[test]
    fn test_first_child_gets_highest_numbers() {
        // 0 has two children: 1 (with child 2) and 3, back edges 2 -> 0 and 3 -> 0
        let mut graph = GraphInternal::with_vertices(4);
        for (s, t) in [(0, 1), (1, 2), (0, 2), (0, 3)] {
            let eid = graph.new_edge(s, t, None);
            graph.adj[t].push(eid);
        }
        // 3 needs a second neighbour to be part of a block
        let eid = graph.new_edge(1, 3, None);
        graph.adj[3].push(eid);

        graph.run_palm_dfs(0);
        graph.sort_adjacency_lists();
        graph.find_paths(0);

        assert_eq!(graph.num[0], 0);
        for u in 0..4 {
            assert_eq!(graph.numrev[graph.num[u]], u);
        }
        for u in 1..4 {
            let p = graph.par[u].unwrap();
            assert!(graph.num[p] < graph.num[u]);
        }
        assert!(graph.starts_path[graph.adj[0][0]]);
        assert_eq!(graph.low1[0], 0);
    }
}
