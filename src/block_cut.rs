use crate::{ContigId, EdgeLabel, UnGraph};
use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// A biconnected component of a graph, as a standalone subgraph.
///
/// Node weights are copied from the parent graph, so for a block of the contig graph
/// `graph[v]` is the contig that block node `v` stands for.
#[derive(Debug, Clone)]
pub struct Block {
    pub graph: UnGraph,
}

impl Block {
    /// Subgraph of `graph` spanned by `edges`, nodes numbered in order of first appearance.
    pub fn from_edges(graph: &UnGraph, edges: &[EdgeIndex]) -> Self {
        let mut block_graph = UnGraph::new_undirected();
        let mut local: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        for &eid in edges {
            let Some((s, t)) = graph.edge_endpoints(eid) else {
                continue;
            };
            let ls = *local.entry(s).or_insert_with(|| block_graph.add_node(graph[s]));
            let lt = *local.entry(t).or_insert_with(|| block_graph.add_node(graph[t]));
            block_graph.add_edge(ls, lt, EdgeLabel::Real);
        }
        Self { graph: block_graph }
    }

    /// Contig of a block node.
    pub fn contig(&self, v: NodeIndex) -> ContigId {
        self.graph[v]
    }

    /// Contigs of the block, sorted by handle.
    pub fn members(&self) -> Vec<ContigId> {
        let mut members: Vec<ContigId> = self.graph.node_weights().copied().collect();
        members.sort_unstable();
        members
    }

    pub fn is_loop_free(&self) -> bool {
        self.graph.edge_references().all(|e| e.source() != e.target())
    }

    /// Checks that the block is connected and has no cut vertex.
    pub fn is_biconnected(&self) -> bool {
        let n = self.graph.node_count();
        if n <= 1 {
            return true;
        }

        let bct = get_block_cut_tree(&self.graph, NodeIndex::new(0));
        bct.node_count == n && bct.block_count == 1
    }

    /// Reasons for which the block can't be decomposed into an SPQR tree.
    ///
    /// Empty if the block is biconnected, loop-free and has more than 2 edges.
    pub fn spqr_ineligibility(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if !self.is_biconnected() {
            reasons.push("block is not biconnected".to_string());
        }
        let m = self.graph.edge_count();
        if m <= 2 {
            reasons.push(format!("block has {} edge(s), should be more than 2", m));
        }
        if !self.is_loop_free() {
            reasons.push("block is not loop free".to_string());
        }
        reasons
    }

    pub fn is_spqr_eligible(&self) -> bool {
        self.spqr_ineligibility().is_empty()
    }
}

/// Represents the block-cut tree of a connected component, containing blocks, cut vertices, and their relationships.
#[derive(Debug, Clone)]
pub struct BlockCutTree {
    /// Number of blocks in the component.
    pub block_count: usize,
    /// Number of cut vertices in the component.
    pub cut_count: usize,
    /// Number of vertices in the component.
    pub node_count: usize,
    /// Parent graph edges of every block, sorted.
    pub block_edges: Vec<Vec<EdgeIndex>>,
    /// Graph of blocks and cut vertices. Blocks are nodes 0 to block_count - 1, weighted by block id.
    /// Cut vertices are nodes block_count to block_count + cut_count - 1, weighted like in the parent graph.
    pub graph: UnGraph,
    /// Parent graph node of every cut vertex, in BC-tree order.
    pub cut_vertices: Vec<NodeIndex>,
}

impl BlockCutTree {
    pub fn block_node(&self, block: usize) -> NodeIndex {
        NodeIndex::new(block)
    }

    pub fn is_block_node(&self, node: NodeIndex) -> bool {
        node.index() < self.block_count
    }

    /// Parent graph node of a cut vertex node of the tree.
    pub fn cut_vertex(&self, node: NodeIndex) -> Option<NodeIndex> {
        node.index()
            .checked_sub(self.block_count)
            .and_then(|i| self.cut_vertices.get(i).copied())
    }

    /// Builds the subgraph of a block of `graph`, the graph this tree was computed on.
    pub fn block(&self, graph: &UnGraph, block: usize) -> Block {
        Block::from_edges(graph, &self.block_edges[block])
    }
}

/// Per-vertex scratch space of the block-cut tree search, sized for the whole graph
/// and shared by the searches of all its components.
///
/// A search only touches the entries of the vertices it visits and resets them when done,
/// so its cost is the size of its component.
#[derive(Debug, Clone, Default)]
pub struct BlockCutBuilder {
    preorder: Vec<usize>,
    is_cut: Vec<bool>,
    cut_node: Vec<Option<NodeIndex>>,
    block_of: Vec<Option<usize>>,
    vertex_stack: Vec<usize>,
    visited: Vec<usize>,
    time: usize,
}

impl BlockCutBuilder {
    pub fn new(node_count: usize) -> Self {
        let mut builder = Self::default();
        builder.grow(node_count);
        builder
    }

    fn grow(&mut self, node_count: usize) {
        if self.preorder.len() < node_count {
            self.preorder.resize(node_count, usize::MAX);
            self.is_cut.resize(node_count, false);
            self.cut_node.resize(node_count, None);
            self.block_of.resize(node_count, None);
        }
    }

    /// Returns the lowest preorder vertex reachable from subtree of u [lowpoint].
    // block is defined by set of edges, this way cut vertices can belong to many blocks
    fn dfs(
        &mut self,
        graph: &UnGraph,
        u: usize,
        parent: Option<usize>,
        blocks: &mut Vec<Vec<EdgeIndex>>,
    ) -> usize {
        self.preorder[u] = self.time;
        self.time += 1;
        self.visited.push(u);
        let mut low = self.preorder[u];
        let mut is_potential_cut = parent.is_some();
        self.vertex_stack.push(u);

        for v in graph.neighbors(NodeIndex::new(u)).map(|n| n.index()) {
            if self.preorder[v] == usize::MAX {
                let low_v = self.dfs(graph, v, Some(u), blocks);
                low = low.min(low_v);
                if low_v >= self.preorder[u] && is_potential_cut {
                    self.is_cut[u] = true;
                }
                // root becomes a cut vertex once it has a second dfs child
                is_potential_cut = true;
            } else if Some(v) != parent {
                // back edge
                low = low.min(self.preorder[v]);
            }
        }

        if let Some(p) = parent {
            if low >= self.preorder[p] {
                // everything above u on the stack hangs off p only through u
                let mut block = Vec::new();
                while let Some(w) = self.vertex_stack.pop() {
                    // each edge is taken from its endpoint with the larger preorder, self-loops are skipped
                    let preorder = &self.preorder;
                    block.extend(graph.edges(NodeIndex::new(w)).filter_map(|e| {
                        let other = if e.source().index() == w {
                            e.target().index()
                        } else {
                            e.source().index()
                        };
                        (preorder[w] > preorder[other]).then(|| e.id())
                    }));
                    if w == u {
                        break;
                    }
                }
                blocks.push(block);
            }
        }

        low
    }

    /// Self-loops never change biconnectivity, they are added to some block of their vertex.
    fn attach_self_loops(&mut self, graph: &UnGraph, blocks: &mut Vec<Vec<EdgeIndex>>) {
        for (i, block) in blocks.iter().enumerate() {
            for &eid in block {
                if let Some((s, t)) = graph.edge_endpoints(eid) {
                    self.block_of[s.index()].get_or_insert(i);
                    self.block_of[t.index()].get_or_insert(i);
                }
            }
        }

        for &v in &self.visited {
            let node = NodeIndex::new(v);
            let mut loops: Vec<EdgeIndex> = graph
                .edges(node)
                .filter(|e| e.source() == e.target())
                .map(|e| e.id())
                .collect();
            if loops.is_empty() {
                continue;
            }
            loops.sort_unstable();
            loops.dedup();

            match self.block_of[v] {
                Some(i) => blocks[i].extend(loops),
                None => {
                    self.block_of[v] = Some(blocks.len());
                    blocks.push(loops);
                }
            }
        }
    }

    /// Returns the block-cut tree of the connected component of `start`.
    ///
    /// Nodes outside of that component are ignored.
    pub fn build(&mut self, graph: &UnGraph, start: NodeIndex) -> BlockCutTree {
        self.grow(graph.node_count());
        let mut blocks = Vec::new();

        if start.index() < graph.node_count() {
            self.dfs(graph, start.index(), None, &mut blocks);
            self.attach_self_loops(graph, &mut blocks);
        }
        blocks.retain(|block| !block.is_empty());

        let mut block_cut_tree = BlockCutTree {
            block_count: blocks.len(),
            cut_count: 0,
            node_count: self.visited.len(),
            block_edges: Vec::with_capacity(blocks.len()),
            graph: UnGraph::new_undirected(),
            cut_vertices: Vec::new(),
        };

        for i in 0..blocks.len() {
            block_cut_tree.graph.add_node(i as u32);
        }

        let mut cuts: Vec<usize> = self
            .visited
            .iter()
            .copied()
            .filter(|&u| self.is_cut[u])
            .collect();
        cuts.sort_unstable();
        for u in cuts {
            let node = NodeIndex::new(u);
            self.cut_node[u] = Some(block_cut_tree.graph.add_node(graph[node]));
            block_cut_tree.cut_vertices.push(node);
            block_cut_tree.cut_count += 1;
        }

        for (i, mut block) in blocks.into_iter().enumerate() {
            block.sort_unstable();

            let mut members: Vec<usize> = block
                .iter()
                .filter_map(|&eid| graph.edge_endpoints(eid))
                .flat_map(|(s, t)| [s.index(), t.index()])
                .collect();
            members.sort_unstable();
            members.dedup();
            for v in members {
                if let Some(c) = self.cut_node[v] {
                    block_cut_tree
                        .graph
                        .add_edge(NodeIndex::new(i), c, EdgeLabel::Virtual);
                }
            }

            block_cut_tree.block_edges.push(block);
        }

        self.reset();
        block_cut_tree
    }

    fn reset(&mut self) {
        for &v in &self.visited {
            self.preorder[v] = usize::MAX;
            self.is_cut[v] = false;
            self.cut_node[v] = None;
            self.block_of[v] = None;
        }
        self.visited.clear();
        self.vertex_stack.clear();
        self.time = 0;
    }
}

/// Returns the block-cut tree of the connected component of `start`.
///
/// Nodes outside of that component are ignored. Use a [`BlockCutBuilder`] to compute the
/// trees of many components of one graph.
pub fn get_block_cut_tree(graph: &UnGraph, start: NodeIndex) -> BlockCutTree {
    BlockCutBuilder::new(graph.node_count()).build(graph, start)
}
