use crate::UnGraph;
use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

/// Connected components of a graph.
#[derive(Debug, Clone)]
pub struct Components {
    /// Component label of every node, labels are `0..roots.len()`.
    pub label: Vec<usize>,
    /// For each component, the node with the lowest index in it.
    pub roots: Vec<NodeIndex>,
}

impl Components {
    pub fn count(&self) -> usize {
        self.roots.len()
    }
}

/// Labels the connected components of an undirected graph.
///
/// Components are numbered in the order of their lowest node index,
/// so the root of component `i` is the first node labelled `i`.
pub fn connected_components(graph: &UnGraph) -> Components {
    let n = graph.node_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut label = vec![usize::MAX; n];
    let mut roots = Vec::new();
    let mut stack = Vec::new();

    for root in graph.node_indices() {
        if visited.contains(root.index()) {
            continue;
        }

        let id = roots.len();
        roots.push(root);
        visited.insert(root.index());
        stack.push(root);

        while let Some(u) = stack.pop() {
            label[u.index()] = id;
            for v in graph.neighbors(u) {
                if !visited.contains(v.index()) {
                    visited.insert(v.index());
                    stack.push(v);
                }
            }
        }
    }

    Components { label, roots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdgeLabel;

    #[test]
    fn test_empty_graph() {
        let g = UnGraph::new_undirected();
        let cc = connected_components(&g);
        assert_eq!(cc.count(), 0);
        assert!(cc.label.is_empty());
    }

    #[test]
    fn test_two_components() {
        let mut g = UnGraph::new_undirected();
        let a = g.add_node(0);
        let b = g.add_node(1);
        let c = g.add_node(2);
        let d = g.add_node(3);
        let e = g.add_node(4);
        g.add_edge(a, c, EdgeLabel::Real);
        g.add_edge(b, d, EdgeLabel::Real);
        g.add_edge(d, e, EdgeLabel::Real);
        g.add_edge(e, e, EdgeLabel::Real);

        let cc = connected_components(&g);
        assert_eq!(cc.count(), 2);
        assert_eq!(cc.label, vec![0, 1, 0, 1, 1]);
        assert_eq!(cc.roots, vec![a, b]);
    }

    #[test]
    fn test_isolated_node_is_own_component() {
        let mut g = UnGraph::new_undirected();
        let a = g.add_node(0);
        let b = g.add_node(1);
        let c = g.add_node(2);
        g.add_edge(a, b, EdgeLabel::Real);

        let cc = connected_components(&g);
        assert_eq!(cc.count(), 2);
        assert_eq!(cc.roots, vec![a, c]);
    }
}
