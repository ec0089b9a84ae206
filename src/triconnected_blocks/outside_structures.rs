use crate::triconnected_blocks::graph_internal::GraphInternal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeType {
    Tree,
    Back,
    Killed,
}

/// Kind of a triconnected component, and of the SPQR tree skeleton built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonKind {
    /// Polygon: a simple cycle of real and virtual edges.
    Series,
    /// Bond: at least three edges between the same two vertices.
    Parallel,
    /// Simple triconnected graph.
    Rigid,
}

impl SkeletonKind {
    pub fn letter(&self) -> char {
        match self {
            SkeletonKind::Series => 'S',
            SkeletonKind::Parallel => 'P',
            SkeletonKind::Rigid => 'R',
        }
    }
}

impl std::fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A split component: a set of edge ids and, once committed, its kind.
#[derive(Debug, Clone)]
pub struct Component {
    pub edges: Vec<usize>,
    pub kind: Option<SkeletonKind>,
}

impl Component {
    /// `None` leaves the kind to be decided by [`Component::commit`].
    pub(crate) fn new(kind: Option<SkeletonKind>) -> Self {
        Self {
            edges: Vec::new(),
            kind,
        }
    }

    /// Adds an edge that stays alive in the graph, i.e. a fresh virtual edge.
    pub(crate) fn push_edge(&mut self, eid: usize) -> &mut Self {
        self.edges.push(eid);
        self
    }

    /// Adds an edge and removes it from the graph.
    pub(crate) fn take_edge(&mut self, eid: usize, graph: &mut GraphInternal) -> &mut Self {
        self.edges.push(eid);
        graph.remove_edge(eid);
        self
    }

    /// Undecided components with at least 4 edges are triconnected, smaller ones are triangles.
    pub(crate) fn commit(mut self, split_components: &mut Vec<Component>) {
        if self.kind.is_none() {
            self.kind = Some(if self.edges.len() >= 4 {
                SkeletonKind::Rigid
            } else {
                SkeletonKind::Series
            });
        }

        split_components.push(self);
    }
}

/// Holds the triconnected components of a graph.
///
/// - `components`: components after merging adjacent bonds and adjacent polygons.
/// - `edges`: endpoints of every edge id, including the virtual edges created while splitting.
/// - `real_edge_count`: ids below it are edges of the input graph, the others are virtual.
#[derive(Debug, Clone)]
pub struct TriconnectedComponents {
    pub components: Vec<Component>,
    pub edges: Vec<(usize, usize)>,
    pub real_edge_count: usize,
}

impl TriconnectedComponents {
    pub fn is_real_edge(&self, eid: usize) -> bool {
        eid < self.real_edge_count
    }
}
