//! The batch reconciliation driver: listings file in, match report out.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use catmatch_core::{load_app_config_from_env, MatchReport, ScrapedProduct};
use catmatch_db::PoolConfig;
use catmatch_engine::find_best_match;
use catmatch_extract::{extract, load_rules, RuleTable};

/// Runs one reconciliation batch.
///
/// The catalog snapshot is taken once for the whole batch. A catalog-read
/// failure aborts the batch with an error; a failure while matching or
/// persisting a single listing is logged and the batch continues, so one bad
/// listing never blocks the rest.
pub async fn run(
    input: &Path,
    output: &Path,
    threshold: Option<f64>,
    default_table: RuleTable,
    dry_run: bool,
) -> anyhow::Result<()> {
    let config = load_app_config_from_env().context("loading configuration")?;
    crate::init_tracing(&config.log_level);

    let mut match_config = config.match_config;
    if let Some(threshold) = threshold {
        match_config.threshold = threshold;
        match_config.validate().context("invalid --threshold")?;
    }

    let table = match &config.rules_path {
        Some(path) => load_rules(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => default_table,
    };

    let listings = read_listings(input)?;
    tracing::info!(listings = listings.len(), input = %input.display(), "loaded scraped listings");

    let pool = catmatch_db::connect_pool(&config.database_url, PoolConfig::from_env())
        .await
        .context("connecting to database")?;
    catmatch_db::ping(&pool)
        .await
        .context("database health check failed")?;

    let catalog = catmatch_db::fetch_catalog(&pool)
        .await
        .context("reading catalog")?;
    tracing::info!(entries = catalog.len(), "catalog snapshot loaded");

    let mut reports: Vec<MatchReport> = Vec::new();
    for mut product in listings {
        if product.specs.is_empty() && !product.description.is_empty() {
            product.specs = extract(&product.description, &table);
        }

        if !dry_run {
            if let Err(error) = catmatch_db::insert_scraped_product(&pool, &product).await {
                tracing::error!(%error, scraped = %product.name, "failed to store scraped listing");
            }
        }

        match find_best_match(&product, &catalog, &match_config) {
            Some(result) => {
                tracing::info!(
                    scraped = %product.name,
                    matched = %result.entry.name,
                    score = format_args!("{:.2}", result.score),
                    "matched"
                );
                let report = MatchReport {
                    scraped_product: product,
                    database_match: result.entry,
                    similarity_score: result.score,
                };
                if !dry_run {
                    if let Err(error) = catmatch_db::insert_match_report(&pool, &report).await {
                        tracing::error!(
                            %error,
                            scraped = %report.scraped_product.name,
                            "failed to persist match"
                        );
                    }
                }
                reports.push(report);
            }
            None => {
                tracing::warn!(scraped = %product.name, "no match found");
            }
        }
    }

    write_report(output, &reports)?;
    tracing::info!(
        matched = reports.len(),
        output = %output.display(),
        "reconciliation complete"
    );
    Ok(())
}

fn read_listings(path: &Path) -> anyhow::Result<Vec<ScrapedProduct>> {
    let file =
        File::open(path).with_context(|| format!("opening listings file {}", path.display()))?;
    parse_listings(BufReader::new(file))
        .with_context(|| format!("parsing listings file {}", path.display()))
}

fn parse_listings<R: std::io::Read>(reader: R) -> Result<Vec<ScrapedProduct>, serde_json::Error> {
    serde_json::from_reader(reader)
}

fn write_report(path: &Path, reports: &[MatchReport]) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating report file {}", path.display()))?;
    serde_json::to_writer_pretty(file, reports).context("serializing match report")?;
    Ok(())
}
