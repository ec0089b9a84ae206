use std::{path::PathBuf, thread};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use contig_spqr::{config::Config, pipeline};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, LevelFilter, TermLogger, TerminalMode};

/// The depth-first searches recurse once per contig.
const WORKER_STACK_SIZE: usize = 1 << 30;

#[derive(Parser)]
#[clap(
    name = "contig-spqr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Finds separation pairs of a contig linkage graph from its block-cut and SPQR trees."
)]
struct CliOptions {
    #[clap(short = 'l', long, help = "The link list, one oriented link per line")]
    pub oriented_graph: PathBuf,

    #[clap(short, long, help = "The file name of the separation pairs")]
    pub output: PathBuf,

    #[clap(
        short,
        long,
        default_value = ".",
        help = "The directory receiving the output and the decomposition dumps"
    )]
    pub directory: PathBuf,

    #[clap(long, help = "Do not write component_<n>.info and spqr<n>.dot files")]
    pub no_dump: bool,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

impl CliOptions {
    fn config(&self) -> Config {
        Config {
            oriented_graph: self.oriented_graph.clone(),
            output: self.output.clone(),
            directory: self.directory.clone(),
            dump: !self.no_dump,
        }
    }
}

fn main() {
    std::process::exit(match run() {
        Ok(()) => 0,
        Err(e) => {
            error!("{:?}", e);
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = CliOptions::parse();
    initialise_logging(options.log_level);

    let config = options.config();
    let worker = thread::Builder::new()
        .name("contig-spqr".to_string())
        .stack_size(WORKER_STACK_SIZE)
        .spawn(move || {
            pipeline::run(&config).with_context(|| {
                format!(
                    "Failed to find separation pairs of {} into {}",
                    config.oriented_graph.display(),
                    config.output_path().display()
                )
            })
        })
        .context("Failed to start the worker thread")?;

    worker
        .join()
        .map_err(|_| anyhow!("The worker thread panicked"))??;

    info!("Done");
    Ok(())
}
