use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mcc_rule_tree::{
    build_forest, group_by_mcc, load_rules, render_groups, MccKey, RenderOptions, RuleTreeError,
    DEFAULT_HIERARCHY,
};

/// Show a JSON Lines rule file as a tree grouped by MCC and condition fields.
#[derive(Debug, Parser)]
#[command(name = "rule-tree", version, about)]
struct Cli {
    /// Rule file, one JSON rule object per line.
    file: PathBuf,

    /// Only show these MCC groups (`NO_MCC` selects rules without an MCC).
    #[arg(long = "mcc", value_name = "CODE")]
    mcc: Vec<String>,

    /// Collapse nodes at this depth and below (0 collapses the roots).
    #[arg(long, value_name = "DEPTH")]
    collapse: Option<usize>,

    /// Condition fields to group by, outermost first.
    #[arg(long, value_name = "FIELD", value_delimiter = ',')]
    hierarchy: Option<Vec<String>>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Hide error messages under leaf nodes.
    #[arg(long)]
    no_errors: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("mcc_rule_tree=debug")
    } else {
        EnvFilter::new("mcc_rule_tree=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), RuleTreeError> {
    let parsed = load_rules(&cli.file)?;
    info!(
        records = parsed.records.len(),
        dropped = parsed.failures.len(),
        file = %cli.file.display(),
        "loaded rules"
    );

    let mut groups = group_by_mcc(&parsed.records);
    if !cli.mcc.is_empty() {
        let keys: Vec<MccKey> = cli.mcc.iter().map(|code| MccKey::from(code.as_str())).collect();
        groups = groups.select(&keys);
    }

    let hierarchy: Vec<String> = cli
        .hierarchy
        .unwrap_or_else(|| DEFAULT_HIERARCHY.iter().map(|f| (*f).to_owned()).collect());

    match cli.format {
        OutputFormat::Text => {
            let options = RenderOptions {
                collapse_depth: cli.collapse,
                show_errors: !cli.no_errors,
            };
            print!("{}", render_groups(&groups, &hierarchy, &options));
        }
        OutputFormat::Json => {
            let forest = build_forest(&groups, &hierarchy);
            println!("{}", serde_json::to_string_pretty(&forest)?);
        }
    }
    Ok(())
}
