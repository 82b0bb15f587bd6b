use std::path::PathBuf;

use clap::Parser;
use pivotgraph::data_catalog::{pivot_options, DataModelConfig, Pivot};

/// PivotGraph - Data-model inspection for a fraud-rules engine
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the data-model file (YAML or JSON, by extension)
    #[arg(long)]
    schema: PathBuf,

    /// Table id to list pivot options for; omit to list the model's tables
    #[arg(long)]
    table: Option<String>,

    /// Print pivot options as a JSON array instead of text
    #[arg(long)]
    json: bool,

    /// Only run structural validation of the data model
    #[arg(long)]
    validate: bool,
}

fn main() {
    // Initialize logger - defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match DataModelConfig::from_file(&cli.schema) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", cli.schema.display(), e);
            std::process::exit(1);
        }
    };
    let model = match config.into_data_model() {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Invalid data model in {}: {}", cli.schema.display(), e);
            std::process::exit(1);
        }
    };

    if cli.validate {
        println!("OK: {} tables", model.table_count());
        return;
    }

    let table_id = match cli.table {
        Some(table_id) => table_id,
        None => {
            for table in model.tables() {
                println!(
                    "{}\t{}\t{} fields, {} links",
                    table.id,
                    table.name,
                    table.fields.len(),
                    table.links_to_single.len()
                );
            }
            return;
        }
    };

    let table = match model.get_table(&table_id) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let pivots = pivot_options(table, &model);
    if cli.json {
        match serde_json::to_string_pretty(&pivots) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize pivot options: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for pivot in &pivots {
            let kind = match pivot {
                Pivot::Field(_) => "field",
                Pivot::Link(_) => "link",
            };
            println!("{}\t{}\t{}", kind, pivot.id(), pivot.display_value());
        }
    }
}
