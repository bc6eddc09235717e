//! The `extract` subcommand: run the spec extractor over one description,
//! useful when tuning rule tables.

use std::path::Path;

use anyhow::Context;

use catmatch_extract::{extract, load_rules, RuleTable};

pub fn run(
    description: &str,
    default_table: RuleTable,
    rules_path: Option<&Path>,
) -> anyhow::Result<()> {
    let table = match rules_path {
        Some(path) => load_rules(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => default_table,
    };

    let specs = extract(description, &table);
    println!("{}", serde_json::to_string_pretty(&specs)?);
    Ok(())
}
