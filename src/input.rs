use crate::{ContigId, EdgeLabel, Error, Result, UnGraph};
use hashbrown::HashMap;
use log::{debug, info, warn};
use petgraph::graph::NodeIndex;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;

/// One oriented link between two contigs.
///
/// Only the contig names are used by the decomposition, the rest is carried along.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub contig_a: String,
    pub orientation_a: String,
    pub contig_b: String,
    pub orientation_b: String,
    pub mean: f64,
    pub stdev: f64,
    pub bundle_size: i64,
}

/// Reads the integer at the start of `field`, like a stream extraction would:
/// an optional sign and at least one digit, anything after them ignored.
fn leading_integer(field: &str) -> Option<i64> {
    let sign = usize::from(field.starts_with(['+', '-']));
    let digits = field[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(field.len(), |end| sign + end);
    if digits == sign {
        return None;
    }
    field[..digits].parse().ok()
}

impl FromStr for Link {
    type Err = Error;

    /// Parses `contigA orientA contigB orientB mean stdev bundleSize`.
    ///
    /// Anything after the seventh field is ignored, and so is anything after the leading
    /// integer of the bundle size (`12.0` reads as 12).
    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().take(7).collect();
        if fields.len() < 7 {
            return Err(Error::MalformedLink(format!(
                "expected 7 fields, found {}",
                fields.len()
            )));
        }

        let number = |i: usize, what: &str| -> Result<f64> {
            fields[i]
                .parse()
                .map_err(|_| Error::MalformedLink(format!("{} '{}' is not a number", what, fields[i])))
        };

        Ok(Link {
            contig_a: fields[0].to_string(),
            orientation_a: fields[1].to_string(),
            contig_b: fields[2].to_string(),
            orientation_b: fields[3].to_string(),
            mean: number(4, "mean")?,
            stdev: number(5, "stdev")?,
            bundle_size: leading_integer(fields[6]).ok_or_else(|| {
                Error::MalformedLink(format!("bundle size '{}' is not an integer", fields[6]))
            })?,
        })
    }
}

/// Reads link records until the end of input or the first malformed record.
///
/// <div class="warning">
///
/// > A malformed record ends the ingestion: it and every line after it are ignored,
/// > even if they are valid. An empty line counts as malformed.
///
/// </div>
pub fn read_links<R: BufRead>(reader: R) -> Result<Vec<Link>> {
    let mut links = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        match line.parse::<Link>() {
            Ok(link) => links.push(link),
            Err(e) => {
                warn!("Stopped reading links at line {}: {}", i + 1, e);
                break;
            }
        }
    }

    Ok(links)
}

/// Undirected graph of contigs, one node per distinct contig name.
///
/// Node `i` has weight `i`, its name is `names[i]`.
/// Edge `i` was created from `links[i]`.
#[derive(Debug, Clone)]
pub struct ContigGraph {
    pub graph: UnGraph,
    pub names: Vec<String>,
    pub ids: HashMap<String, ContigId>,
    pub links: Vec<Link>,
}

impl ContigGraph {
    /// Builds the graph in two passes: every contig is registered before any edge is added.
    pub fn from_links(links: Vec<Link>) -> Self {
        let mut contigs = ContigGraph {
            graph: UnGraph::new_undirected(),
            names: Vec::new(),
            ids: HashMap::new(),
            links: Vec::new(),
        };

        for link in &links {
            contigs.register(&link.contig_a);
            contigs.register(&link.contig_b);
        }

        for link in &links {
            let a = contigs.ids[link.contig_a.as_str()];
            let b = contigs.ids[link.contig_b.as_str()];
            contigs
                .graph
                .add_edge(NodeIndex::new(a as usize), NodeIndex::new(b as usize), EdgeLabel::Real);
        }
        contigs.links = links;

        info!("Nodes: {}", contigs.graph.node_count());
        info!("Edges: {}", contigs.graph.edge_count());

        contigs
    }

    fn register(&mut self, name: &str) -> ContigId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.graph.node_count() as ContigId;
        self.graph.add_node(id);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        debug!("Registered contig {} as {}", name, id);
        id
    }

    /// Name of the contig with the given handle.
    pub fn name(&self, id: ContigId) -> &str {
        &self.names[id as usize]
    }

    /// Handle of the contig with the given name, if it was seen.
    pub fn handle(&self, name: &str) -> Option<ContigId> {
        self.ids.get(name).copied()
    }
}

/// Reads a contig graph from a link file.
///
/// One link per line, seven whitespace-separated fields:
/// ```text
/// contig_1 + contig_2 - 1520.5 210.0 12
/// contig_2 - contig_3 + 880.0 95.5 4
/// ```
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ContigGraph> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(ContigGraph::from_links(read_links(reader)?))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<ContigGraph> {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    Ok(ContigGraph::from_links(read_links(reader)?))
}
