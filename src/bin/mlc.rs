use clap::Parser;
use log::info;
use mlc_sssp::graph::load_network;
use mlc_sssp::{AllPairs, AllPairsShortestPaths, ApspConfig, Discipline, Network, ScanStats};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mlc")]
#[command(about = "All-pairs shortest paths with modified label-correcting algorithms")]
#[command(version)]
struct Cli {
    /// Node file, node id in the first column
    #[arg(long, default_value = "data/node.csv")]
    nodes: PathBuf,

    /// Link file: link id, from node id, to node id, length
    #[arg(long, default_value = "data/link.csv")]
    links: PathBuf,

    /// Algorithm: dij, deq, fifo or fw
    #[arg(short, long, default_value = "deq")]
    method: String,

    /// Scan eligible list overriding the method's default
    #[arg(long)]
    discipline: Option<String>,

    /// Field delimiter of both input files
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Compute rows on all cores
    #[arg(long)]
    parallel: bool,

    /// Skip the negative link length check
    #[arg(long)]
    no_length_check: bool,

    /// Write both matrices to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// JSON layout of the written matrices, keyed by user-defined node ids
#[derive(Serialize)]
struct Report<'a> {
    method: String,
    discipline: Discipline,
    stats: ScanStats,
    nodes: Vec<&'a str>,
    distances: Vec<Vec<Option<f64>>>,
    predecessors: Vec<Vec<Option<&'a str>>>,
}

impl<'a> Report<'a> {
    fn new(network: &'a Network<f64>, config: &ApspConfig, result: &AllPairs<f64>) -> Self {
        let nodes: Vec<&str> = network.nodes().iter().map(|n| n.uid.as_str()).collect();
        let distances: Vec<Vec<Option<f64>>> = result
            .rows()
            .map(|(dist, _)| dist.iter().map(|d| d.is_finite().then_some(*d)).collect())
            .collect();
        let predecessors: Vec<Vec<Option<&str>>> = result
            .rows()
            .map(|(_, pred)| pred.iter().map(|p| p.map(|id| nodes[id])).collect())
            .collect();

        Report {
            method: config.method.to_string(),
            discipline: result.discipline(),
            stats: result.stats(),
            nodes,
            distances,
            predecessors,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let delimiter = u8::try_from(cli.delimiter)?;

    let network: Network<f64> = load_network(&cli.nodes, &cli.links, delimiter)?;

    let mut config = ApspConfig::from_method_name(&cli.method)?
        .with_parallel(cli.parallel)
        .with_length_check(!cli.no_length_check);
    if let Some(name) = &cli.discipline {
        config = config.with_discipline(name.parse()?);
    }

    let driver = AllPairsShortestPaths::new(config);
    let result = driver.run(&network)?;

    let n = result.node_count();
    let reachable = result
        .rows()
        .map(|(dist, _)| dist.iter().filter(|d| d.is_finite()).count())
        .sum::<usize>();
    info!(
        "{} of {} ordered node pairs connected; {} scans, {} relaxations",
        reachable,
        n * n,
        result.stats().scans,
        result.stats().relaxations
    );

    if let Some(path) = &cli.output {
        let report = Report::new(&network, driver.config(), &result);
        serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), &report)?;
        info!("wrote matrices to {}", path.display());
    }

    Ok(())
}
