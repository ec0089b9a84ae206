use std::path::{Path, PathBuf};

/// Settings of one run over a link file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Link list to read.
    pub oriented_graph: PathBuf,
    /// Name of the pair file, relative to `directory`.
    pub output: PathBuf,
    /// Directory receiving the pair file and the decomposition dumps.
    pub directory: PathBuf,
    pub dump: bool,
}

impl Config {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(oriented_graph: P, output: Q) -> Self {
        Self {
            oriented_graph: oriented_graph.into(),
            output: output.into(),
            directory: PathBuf::from("."),
            dump: true,
        }
    }

    /// `directory` joined with `output`.
    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.output)
    }

    pub fn dump_directory(&self) -> Option<&Path> {
        self.dump.then_some(self.directory.as_path())
    }
}
