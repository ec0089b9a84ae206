use std::{
    fs::File,
    io::BufWriter,
};

use log::{debug, info};

use crate::{
    Result,
    block_cut::BlockCutBuilder,
    components::connected_components,
    config::Config,
    dump::DecompositionDumper,
    input::{ContigGraph, from_file},
    output::{BlockPairs, PairAggregator, PairOrigin, SeparationPair},
    separation::block_pairs,
    shortcut::cut_vertex_pair,
    spqr_tree::get_spqr_tree,
};

/// Finds the separation pairs of every block of every connected component.
///
/// For each block, in BC-tree order:
/// 1. the pair of bounding cut vertices, if the block has exactly two of them,
/// 2. if the block is eligible, the pairs read off its SPQR tree.
///
/// Ineligible blocks only get step 1. Each decomposed block is dumped when a dumper is given.
pub fn find_separation_pairs(
    contigs: &ContigGraph,
    mut dumper: Option<&mut DecompositionDumper>,
) -> Result<PairAggregator> {
    let components = connected_components(&contigs.graph);
    info!("Connected components: {}", components.count());

    let mut aggregator = PairAggregator::new();
    let mut builder = BlockCutBuilder::new(contigs.graph.node_count());
    for (c, &root) in components.roots.iter().enumerate() {
        let bct = builder.build(&contigs.graph, root);
        debug!(
            "Component {}: {} block(s), {} cut vertex(es)",
            c, bct.block_count, bct.cut_count
        );

        for b in 0..bct.block_count {
            // only the block being processed is materialised
            let block = bct.block(&contigs.graph, b);
            let mut pairs = Vec::new();

            if let Some(pair) = cut_vertex_pair(&bct, b) {
                debug!(
                    "Block {} of component {} is bounded by {} and {}",
                    b,
                    c,
                    contigs.name(pair.0),
                    contigs.name(pair.1)
                );
                pairs.push(SeparationPair {
                    contigs: pair,
                    origin: PairOrigin::CutShortcut,
                });
            }

            let reasons = block.spqr_ineligibility();
            if reasons.is_empty() {
                let spqr_tree = get_spqr_tree(&block.graph)?;
                debug!(
                    "Block {} of component {}: {} node(s), {} edge(s), {} skeleton(s)",
                    b,
                    c,
                    block.graph.node_count(),
                    block.graph.edge_count(),
                    spqr_tree.skeletons.len()
                );
                if let Some(dumper) = dumper.as_deref_mut() {
                    dumper.dump(contigs, &block, &spqr_tree)?;
                }
                pairs.extend(block_pairs(&block, &spqr_tree));
            } else {
                debug!(
                    "Skipping SPQR tree of block {} of component {}: {}",
                    b,
                    c,
                    reasons.join(", ")
                );
            }

            aggregator.push(BlockPairs {
                component: c,
                block: b,
                members: block.members(),
                pairs,
            });
        }
    }

    info!("Separation pairs: {}", aggregator.pair_count());
    Ok(aggregator)
}

/// Reads the link file, finds the separation pairs and writes them to the output file.
pub fn run(config: &Config) -> Result<PairAggregator> {
    let contigs = from_file(&config.oriented_graph)?;

    let mut dumper = config.dump_directory().map(DecompositionDumper::new);
    let aggregator = find_separation_pairs(&contigs, dumper.as_mut())?;

    let output_path = config.output_path();
    let writer = BufWriter::new(File::create(&output_path)?);
    aggregator.write_tsv(&contigs, writer)?;
    info!("Pairs written to {}", output_path.display());

    Ok(aggregator)
}
