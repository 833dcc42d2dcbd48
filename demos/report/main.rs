//! Prints every structural query for a graph file.
//!
//! `cargo run --example report -- demos/assets/triangles.graph`
//!
//! `RUST_LOG=graph_queries=debug` shows what each analysis found.

use clap::Parser;
use graph_queries::input::{from_file, from_reader};
use graph_queries::output::to_dot;
use graph_queries::{AnalysisOptions, DiameterMethod, Report};
use std::io::stdin;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(about = "Structural queries on an undirected weighted graph")]
struct Args {
    /// Graph file, `-` reads standard input
    input: PathBuf,

    /// Compute true diameters instead of the two-pass estimate
    #[arg(long)]
    exact_diameter: bool,

    /// Print the graph in DOT format instead of the report
    #[arg(long)]
    dot: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let graph = if args.input.as_os_str() == "-" {
        from_reader(stdin().lock())
    } else {
        from_file(&args.input)
    };
    let graph = match graph {
        Ok(graph) => graph,
        Err(e) => {
            tracing::error!(input = %args.input.display(), error = %e, "cannot read graph");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.dot {
        print!("{}", to_dot(&graph));
        return ExitCode::SUCCESS;
    }

    let method = if args.exact_diameter {
        DiameterMethod::Exact
    } else {
        DiameterMethod::TwoPass
    };
    let options = AnalysisOptions::default().with_diameter(method);
    print!("{}", Report::analyze(&graph, &options));
    ExitCode::SUCCESS
}
