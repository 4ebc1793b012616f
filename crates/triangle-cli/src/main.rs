use clap::Parser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use triangle_core::interchange::ProgramNode;
use triangle_core::printer::print_program;
use triangle_core::{
    Arena, AstBuilder, CliOverrides, CompilationError, ConsoleDiagnosticHandler,
    DiagnosticHandler, LiteralCounter, OptimizationLevel, Optimizer, OptimizerConfig,
};

const DEFAULT_CONFIG: &str = "triangle.yaml";

/// triangle-opt - loop-invariant hoisting for Triangle programs
#[derive(Parser, Debug, Clone)]
#[command(name = "triangle-opt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// AST documents to optimise (JSON, or YAML with a .yaml/.yml extension)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to a configuration file (default: ./triangle.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Optimization level (O0, O1, O2)
    #[arg(short = 'O', long = "opt-level", value_name = "LEVEL")]
    level: Option<OptimizationLevel>,

    /// Disable loop-invariant hoisting
    #[arg(long)]
    no_hoist: bool,

    /// Print literal counts and pass summaries for each file
    #[arg(long)]
    stats: bool,

    /// Write a default triangle.yaml to the current directory
    #[arg(long)]
    init: bool,

    /// Plain diagnostics without terminal styling
    #[arg(long)]
    no_pretty: bool,
}

/// Everything printed for one input file
struct FileReport {
    path: PathBuf,
    program: String,
    stats: Option<serde_json::Value>,
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug shows every hoisted expression
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.init {
        OptimizerConfig::init_file(Path::new(DEFAULT_CONFIG))?;
        println!("Created {}", DEFAULT_CONFIG);
        return Ok(());
    }

    let config = load_config(&cli)?;
    if cli.files.is_empty() {
        anyhow::bail!("No input files specified. Use --help for usage information.");
    }

    info!(
        "Optimising {} file(s) at {}",
        cli.files.len(),
        config.optimization_level
    );
    debug!("Configuration: {:?}", config);

    let handler: Arc<dyn DiagnosticHandler> =
        Arc::new(ConsoleDiagnosticHandler::new(config.pretty));
    let results: Vec<Result<FileReport, CompilationError>> = cli
        .files
        .par_iter()
        .map(|path| process_file(path, &config, handler.clone(), cli.stats))
        .collect();

    let many = cli.files.len() > 1;
    let mut failures = 0;
    for (path, result) in cli.files.iter().zip(results) {
        match result {
            Ok(report) => {
                if many {
                    println!("== {} ==", report.path.display());
                }
                println!("{}", report.program);
                if let Some(stats) = report.stats {
                    println!("{}", stats);
                }
            }
            Err(err) => {
                failures += 1;
                eprintln!("error: {}: {}", path.display(), err);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed", failures, cli.files.len());
    }
    Ok(())
}

/// Configuration file (explicit, or ./triangle.yaml if present) with CLI flags on top
fn load_config(cli: &Cli) -> anyhow::Result<OptimizerConfig> {
    let mut config = match &cli.config {
        Some(path) => OptimizerConfig::from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config file: {}", e))?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG);
            if default_path.exists() {
                OptimizerConfig::from_file(default_path)
                    .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", DEFAULT_CONFIG, e))?
            } else {
                OptimizerConfig::default()
            }
        }
    };

    config.merge_with_cli(CliOverrides {
        optimization_level: cli.level,
        hoist_loop_invariants: cli.no_hoist.then_some(false),
        pretty: cli.no_pretty.then_some(false),
    });
    Ok(config)
}

/// Load, optimise and print one file in its own arena
fn process_file(
    path: &Path,
    config: &OptimizerConfig,
    handler: Arc<dyn DiagnosticHandler>,
    with_stats: bool,
) -> Result<FileReport, CompilationError> {
    debug!("Processing {}", path.display());
    let node = ProgramNode::from_file(path)?;

    let arena = Arena::new();
    let program = node.lower(&AstBuilder::new(&arena))?;
    let before = LiteralCounter::count(program);

    let mut optimizer = Optimizer::new(config, handler);
    let optimised = optimizer.optimize(program, &arena);

    let stats = with_stats.then(|| {
        let passes: Vec<_> = optimizer
            .summaries()
            .into_iter()
            .map(|(name, summary)| serde_json::json!({ "pass": name, "summary": summary }))
            .collect();
        serde_json::json!({
            "literals": before,
            "unchanged": triangle_core::ast::same_node(optimised, program),
            "passes": passes,
        })
    });

    Ok(FileReport {
        path: path.to_path_buf(),
        program: print_program(optimised),
        stats,
    })
}
