mod inspect;
mod reconcile;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use catmatch_extract::RuleTable;

#[derive(Debug, Parser)]
#[command(name = "catmatch")]
#[command(about = "Reconciles scraped product listings against a reference catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Match scraped listings from a JSON file against the catalog.
    Reconcile {
        /// Path to the scraped-listings JSON file (array of products).
        input: PathBuf,

        /// Where to write the match-report JSON.
        #[arg(long, default_value = "matches.json")]
        output: PathBuf,

        /// Override the configured similarity threshold.
        #[arg(long)]
        threshold: Option<f64>,

        /// Built-in rule table used to backfill specs for listings that
        /// arrive with a description but no extracted attributes.
        #[arg(long, value_enum, default_value_t = Domain::Cpu)]
        domain: Domain,

        /// Score and report only; skip all database writes.
        #[arg(long)]
        dry_run: bool,
    },

    /// Run the spec extractor over a description and print the attribute map.
    Extract {
        description: String,

        #[arg(long, value_enum, default_value_t = Domain::Cpu)]
        domain: Domain,

        /// YAML rule file overriding the built-in table.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

/// Product domain selecting a built-in extraction rule table.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Domain {
    Cpu,
    Laptop,
}

impl Domain {
    fn rule_table(self) -> RuleTable {
        match self {
            Domain::Cpu => RuleTable::cpu(),
            Domain::Laptop => RuleTable::laptop(),
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Reconcile {
            input,
            output,
            threshold,
            domain,
            dry_run,
        } => reconcile::run(&input, &output, threshold, domain.rule_table(), dry_run).await,
        Commands::Extract {
            description,
            domain,
            rules,
        } => {
            init_tracing("info");
            inspect::run(&description, domain.rule_table(), rules.as_deref())
        }
    }
}
