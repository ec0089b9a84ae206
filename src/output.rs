use std::io::Write;

use crate::{ContigId, Result, input::ContigGraph, triconnected_blocks::outside_structures::SkeletonKind};

/// Rule which produced a separation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairOrigin {
    /// The block touches the rest of the BC-tree at exactly two cut vertices.
    CutShortcut,
    Skeleton(SkeletonKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparationPair {
    /// Contig handles, smaller first.
    pub contigs: (ContigId, ContigId),
    pub origin: PairOrigin,
}

/// Everything found in one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPairs {
    pub component: usize,
    pub block: usize,
    /// Contigs of the block, sorted by handle.
    pub members: Vec<ContigId>,
    pub pairs: Vec<SeparationPair>,
}

/// Collects the per-block results in processing order.
#[derive(Debug, Clone, Default)]
pub struct PairAggregator {
    blocks: Vec<BlockPairs>,
}

impl PairAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks without pairs are dropped.
    pub fn push(&mut self, block_pairs: BlockPairs) {
        if !block_pairs.pairs.is_empty() {
            self.blocks.push(block_pairs);
        }
    }

    pub fn blocks(&self) -> &[BlockPairs] {
        &self.blocks
    }

    pub fn pair_count(&self) -> usize {
        self.blocks.iter().map(|b| b.pairs.len()).sum()
    }

    /// All pairs with the members of their block.
    pub fn pairs(&self) -> impl Iterator<Item = (&SeparationPair, &[ContigId])> {
        self.blocks
            .iter()
            .flat_map(|b| b.pairs.iter().map(move |p| (p, b.members.as_slice())))
    }

    /// Writes one line per pair: `contigA<TAB>contigB<TAB>member1<TAB>member2...`
    pub fn write_tsv<W: Write>(&self, graph: &ContigGraph, mut writer: W) -> Result<()> {
        for (pair, members) in self.pairs() {
            let (a, b) = pair.contigs;
            write!(writer, "{}\t{}", graph.name(a), graph.name(b))?;
            for &member in members {
                write!(writer, "\t{}", graph.name(member))?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}
