use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use emst::{read_points, write_dot, write_tree, Emst, EmstError, EmstParams, ForestAlgorithm, TreeFormat};
use log::{error, info};

/// Reads a point set, computes its Euclidean minimum spanning tree and prints its arcs followed
/// by the total cost.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File holding the point count followed by one `x y` pair per point. Reads stdin if absent.
    input: Option<PathBuf>,

    /// Also writes the tree as a Graphviz document to this file.
    #[arg(short, long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Component tracking algorithm used while merging subtrees.
    #[arg(short, long, value_enum, default_value_t = Algorithm::LinearScan)]
    algorithm: Algorithm,
}

/// Command line names for `ForestAlgorithm`, kept here so the library does not depend on clap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    LinearScan,
    UnionFind,
}

impl From<Algorithm> for ForestAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::LinearScan => ForestAlgorithm::LinearScan,
            Algorithm::UnionFind => ForestAlgorithm::UnionFind,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("fatal error: {e}");
        eprintln!("ERROR: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), EmstError> {
    let points: Vec<emst::Point<f64>> = match &args.input {
        Some(path) => read_points(File::open(path)?)?,
        None => read_points(io::stdin().lock())?,
    };
    info!("read {} points", points.len());

    let params = EmstParams::builder()
        .forest_algorithm(args.algorithm.into())
        .build();
    let tree = Emst::new(&points, params).compute()?;

    if let Some(path) = &args.dot {
        let mut writer = BufWriter::new(File::create(path)?);
        write_dot(&mut writer, tree.points(), tree.arcs())?;
        writer.flush()?;
        info!("wrote DOT graph to {}", path.display());
    }

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_tree(&mut stdout, &tree, &TreeFormat::default())?;
    stdout.flush()?;
    Ok(())
}
