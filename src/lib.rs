//! # contig_spqr
//!
//! Finds separation pairs of a contig linkage graph: pairs of contigs whose
//! joint removal disconnects a part of the graph.
//!
//! The graph is split into connected components, every component into blocks
//! ([`block_cut`]), and every eligible block is decomposed into an SPQR tree
//! ([`spqr_tree`]). The pairs are read off the skeletons of the tree
//! ([`separation`]) and off the cut vertices bounding a block ([`shortcut`]).
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).

pub mod block_cut;
pub mod components;
pub mod config;
pub mod dump;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod separation;
pub mod shortcut;
pub mod spqr_tree;
pub mod triconnected;
pub mod triconnected_blocks;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
pub use triconnected_blocks::outside_structures::SkeletonKind;
pub use types::ContigId;
pub use types::EdgeLabel;
pub use types::UnGraph;
