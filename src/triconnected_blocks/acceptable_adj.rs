use radsort::sort_by_key;

use crate::triconnected_blocks::{graph_internal::GraphInternal, outside_structures::EdgeType};

impl GraphInternal {
    fn phi(&self, eid: usize) -> usize {
        let (s, t) = self.edges[eid];
        match self.edge_type[eid] {
            Some(EdgeType::Tree) if self.low2[t] < self.num[s] => 3 * self.low1[t],
            Some(EdgeType::Tree) => 3 * self.low1[t] + 2,
            _ => 3 * self.num[t] + 1,
        }
    }

    /// Rebuilds the adjacency lists so that they only hold outgoing edges,
    /// ordered by `phi` as required by the path search.
    ///
    /// Must run after [`GraphInternal::run_palm_dfs`].
    pub(crate) fn sort_adjacency_lists(&mut self) {
        let mut order: Vec<(usize, usize)> = (0..self.edges.len())
            .filter(|&eid| {
                matches!(
                    self.edge_type[eid],
                    Some(EdgeType::Tree) | Some(EdgeType::Back)
                )
            })
            .map(|eid| (self.phi(eid), eid))
            .collect();

        sort_by_key(&mut order, |&(phi, _)| phi as u64);

        self.adj = vec![Vec::new(); self.n];
        for (_, eid) in order {
            let s = self.edges[eid].0;
            self.adj[s].push(eid);
        }
    }
}
