use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tego::solver::{
    engine::SolverEngine,
    heuristics::{
        column::{
            ColumnSelectionHeuristic, FewestCoveringRowsHeuristic, FirstLiveColumnHeuristic,
            RandomColumnHeuristic,
        },
        row::IdentityRowHeuristic,
    },
    matrix::IncidenceMatrix,
    stats::render_stats_table,
};

/// Solve an exact cover instance.
///
/// The instance file is JSON: `{"columns": C, "rows": [[...], ...]}`, where
/// each row lists the 0-based column indices it covers.
#[derive(Debug, Parser)]
#[command(name = "tego", version)]
struct Cli {
    /// Path to the instance file.
    input: PathBuf,

    /// Column ordering used for branching.
    #[arg(long, value_enum, default_value = "fewest-rows")]
    heuristic: Heuristic,

    /// Seed for the random heuristic.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a table of search statistics.
    #[arg(long)]
    stats: bool,

    /// Emit the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Heuristic {
    /// Branch on the column with the fewest covering rows first.
    FewestRows,
    /// Branch on columns in their original order.
    FirstColumn,
    /// Branch on columns in a shuffled order.
    Random,
}

#[derive(Debug, Deserialize)]
struct Instance {
    columns: usize,
    rows: Vec<Vec<usize>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let instance: Instance =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", cli.input.display()))?;
    let matrix = IncidenceMatrix::from_row_sets(instance.columns, instance.rows)?;

    let column_heuristic: Box<dyn ColumnSelectionHeuristic> = match cli.heuristic {
        Heuristic::FewestRows => Box::new(FewestCoveringRowsHeuristic),
        Heuristic::FirstColumn => Box::new(FirstLiveColumnHeuristic),
        Heuristic::Random => Box::new(match cli.seed {
            Some(seed) => RandomColumnHeuristic::from_seed(seed),
            None => RandomColumnHeuristic::new(),
        }),
    };
    let solver = SolverEngine::new(column_heuristic, Box::new(IdentityRowHeuristic));
    let (cover, stats) = solver.solve(&matrix);

    if cli.json {
        println!("{}", serde_json::to_string(&cover)?);
    } else {
        match &cover {
            Some(cover) => println!("exact cover: rows {:?}", cover.rows()),
            None => println!("no exact cover exists"),
        }
    }
    if cli.stats {
        println!("{}", render_stats_table(&stats));
    }

    Ok(())
}
