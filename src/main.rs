//! pathmap CLI - flat path lists to visual project trees.
//!
//! This is the command-line entry point for pathmap. It orchestrates the
//! full pipeline:
//!
//! 1. Config: resolve input/output paths from flags, pathmap.toml, defaults
//! 2. Loading: read the path list, tolerating a leading byte-order mark
//! 3. Tree Building: merge shared path prefixes into one hierarchy
//! 4. Rendering: write the connector-prefixed listing to the output file
//!
//! Design philosophy:
//! - The output file carries only the tree (or the read-failure diagnostic);
//!   progress and stats go to stderr
//! - A failed input read is reported through the output file and the run
//!   terminates normally, so downstream consumers always find fresh content
//! - Deterministic output: same tree, same bytes

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use pathmap::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
use pathmap::{build_tree, load_path_list, TreeRenderer};

/// Render a flat path list as a box-drawing project tree
///
/// pathmap reads one slash-delimited relative path per line from the input
/// file and writes a nested tree listing to the output file. Shared path
/// prefixes merge; siblings render in sorted order.
///
/// Examples:
///   pathmap                          # temp_file_list.txt -> project_tree.txt
///   pathmap files.txt -o tree.txt    # explicit input and output
///   pathmap --root sub/project -v    # config discovery from another root
#[derive(Parser, Debug)]
#[command(name = "pathmap")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Input file with one path per line
    ///
    /// Blank lines are ignored and a leading UTF-8 byte-order mark is
    /// tolerated. Overrides the `input` key from pathmap.toml /
    /// pyproject.toml. Default: temp_file_list.txt
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file for the rendered tree
    ///
    /// Fully overwritten on each run. Overrides the `output` key from
    /// pathmap.toml / pyproject.toml. Default: project_tree.txt
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Root directory for config discovery and relative paths
    ///
    /// pathmap looks for pathmap.toml here, then for a [tool.pathmap]
    /// section in pyproject.toml, walking upward like ruff. Relative
    /// input/output paths resolve against this directory.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Verbose output
    ///
    /// Shows progress messages on stderr during execution:
    ///   "Loaded 1234 paths"
    ///   "Built tree: 56 top-level entries"
    /// The output file itself is never affected.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show statistics
    ///
    /// Prints counts and a time breakdown on stderr at the end:
    ///   - Paths loaded
    ///   - Tree nodes
    ///   - Lines rendered
    ///   - Total time
    #[arg(long)]
    pub stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

/// Execute the full pathmap pipeline
///
/// A read failure on the input file is not an error at this level: it is
/// converted into a one-line diagnostic that replaces the output file's
/// content, and the run terminates normally. A write failure on the output
/// file propagates (there is no fallback channel for results).
fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let root = cli.root.canonicalize().map_err(|e| {
        anyhow::anyhow!(
            "Failed to resolve root path '{}': {}",
            cli.root.display(),
            e
        )
    })?;

    // Load configuration from pathmap.toml or pyproject.toml
    let file_config = Config::load(&root);

    if cli.verbose {
        eprintln!("🌳 pathmap v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("📂 Root: {}", root.display());
        eprintln!("{}", file_config.display_summary());
    }

    // Precedence: CLI flag > config file > built-in default.
    // join() keeps absolute overrides intact and anchors relative ones
    // at the root.
    let input = root.join(
        cli.input
            .clone()
            .or_else(|| file_config.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
    );
    let output = root.join(
        cli.output
            .clone()
            .or_else(|| file_config.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    );

    // ══════════════════════════════════════════════════════════════════════
    // Stage 1: Load the path list
    // ══════════════════════════════════════════════════════════════════════
    let paths = match load_path_list(&input) {
        Ok(paths) => paths,
        Err(e) => {
            // The diagnostic replaces the tree entirely, so a failed read
            // never leaves stale output behind.
            let diagnostic = format!("Error reading input: {}", e);
            std::fs::write(&output, &diagnostic)?;

            if cli.verbose {
                eprintln!("⚠️  {}", diagnostic);
                eprintln!("✓ Wrote diagnostic to {}", output.display());
            }
            return Ok(());
        }
    };

    if cli.verbose {
        eprintln!("✓ Loaded {} paths ({:.2?})", paths.len(), start.elapsed());
    }

    // ══════════════════════════════════════════════════════════════════════
    // Stage 2: Merge paths into the hierarchy
    // ══════════════════════════════════════════════════════════════════════
    let build_start = Instant::now();
    let tree = build_tree(&paths);

    if cli.verbose {
        eprintln!(
            "✓ Built tree: {} top-level entries ({:.2?})",
            tree.children.len(),
            build_start.elapsed()
        );
    }

    // ══════════════════════════════════════════════════════════════════════
    // Stage 3: Render and write
    // ══════════════════════════════════════════════════════════════════════
    let render_start = Instant::now();
    let rendered = TreeRenderer::new().render(&tree);
    std::fs::write(&output, &rendered)?;

    if cli.verbose {
        eprintln!(
            "✓ Rendered {} lines ({:.2?})",
            rendered.lines().count(),
            render_start.elapsed()
        );
        eprintln!("✓ Wrote {}", output.display());
    }

    if cli.stats {
        eprintln!(
            "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\
             ## Statistics\n\
             Paths loaded: {}\n\
             Tree nodes: {}\n\
             Lines rendered: {}\n\
             Total time: {:.2?}",
            paths.len(),
            tree.count(),
            rendered.lines().count(),
            start.elapsed()
        );
    }

    Ok(())
}
