use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use dot::{Edges, GraphWalk, Labeller, Nodes};
use petgraph::visit::EdgeRef;

use crate::{Result, block_cut::Block, input::ContigGraph, spqr_tree::SpqrTree};

type Node = usize;
type Edge = (usize, usize);

struct SpqrDot<'a> {
    spqr_tree: &'a SpqrTree,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for SpqrDot<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("SPQR").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let skeleton = &self.spqr_tree.skeletons[*n];
        dot::LabelText::label(format!(
            "{} {}\nnodes:{} edges:{}",
            skeleton.kind,
            n,
            skeleton.graph.node_count(),
            skeleton.graph.edge_count()
        ))
    }

    fn kind(&self) -> dot::Kind {
        dot::Kind::Graph
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for SpqrDot<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        (0..self.spqr_tree.skeletons.len()).collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.0
    }

    fn target(&self, e: &Edge) -> Node {
        e.1
    }
}

/// Renders the SPQR tree in DOT format, one node per skeleton.
pub fn write_dot<W: Write>(spqr_tree: &SpqrTree, writer: &mut W) -> Result<()> {
    let graph = SpqrDot {
        spqr_tree,
        edges: spqr_tree.edges.iter().map(|e| e.skeletons).collect(),
    };
    dot::render(&graph, writer)?;
    Ok(())
}

/// Lists every skeleton: its index and kind, then for each of its nodes the edges
/// leaving it followed by the node and its contig.
pub fn write_info<W: Write>(
    contigs: &ContigGraph,
    block: &Block,
    spqr_tree: &SpqrTree,
    writer: &mut W,
) -> Result<()> {
    for (i, skeleton) in spqr_tree.skeletons.iter().enumerate() {
        writeln!(writer, "{}\t{}", i, skeleton.kind)?;

        let names: Vec<&str> = skeleton
            .graph
            .node_indices()
            .map(|v| contigs.name(block.contig(skeleton.block_node(v))))
            .collect();
        for v in skeleton.graph.node_indices() {
            let leaving = skeleton
                .graph
                .edges(v)
                .filter(|e| skeleton.graph.edge_endpoints(e.id()).is_some_and(|(s, _)| s == v));
            for e in leaving {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    e.weight(),
                    names[v.index()],
                    names[e.target().index()]
                )?;
            }
            writeln!(writer, "{}\t{}", v.index(), names[v.index()])?;
        }
    }
    Ok(())
}

/// Writes `component_<n>.info` and `spqr<n>.dot` for every decomposed block,
/// `n` counting the decomposed blocks of the whole run from 1.
#[derive(Debug, Clone)]
pub struct DecompositionDumper {
    directory: PathBuf,
    counter: usize,
}

impl DecompositionDumper {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
            counter: 0,
        }
    }

    /// Number of blocks dumped so far.
    pub fn count(&self) -> usize {
        self.counter
    }

    pub fn dump(&mut self, contigs: &ContigGraph, block: &Block, spqr_tree: &SpqrTree) -> Result<()> {
        self.counter += 1;

        let info_path = self.directory.join(format!("component_{}.info", self.counter));
        let mut info = BufWriter::new(File::create(&info_path)?);
        write_info(contigs, block, spqr_tree, &mut info)?;
        info.flush()?;

        let dot_path = self.directory.join(format!("spqr{}.dot", self.counter));
        let mut dot_file = BufWriter::new(File::create(&dot_path)?);
        write_dot(spqr_tree, &mut dot_file)?;
        dot_file.flush()?;

        log::debug!(
            "Dumped decomposition {} to {} and {}",
            self.counter,
            info_path.display(),
            dot_path.display()
        );
        Ok(())
    }
}
