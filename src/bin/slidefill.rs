//! slidefill: build slide decks from a content plan and a template library.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use slidefill::assembler::{build_from_plan_text, rebuild_from_saved_plan, AssemblyReport};
use slidefill::catalog::Catalog;
use slidefill::host::{DeckStore, JsonFileStore, OpenMode};
use slidefill::{inspect, BuilderConfig, Dispatcher};

#[derive(Parser)]
#[command(name = "slidefill")]
#[command(
    author,
    version,
    about = "Fill library template slides from a content plan",
    long_about = None
)]
struct Cli {
    /// Library deck (overrides SLIDEFILL_LIBRARY)
    #[arg(short, long, global = true)]
    library: Option<PathBuf>,

    /// Output deck (overrides SLIDEFILL_OUTPUT)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the output deck from a content plan file and keep the plan for rebuilds
    Build {
        /// Content plan JSON
        plan: PathBuf,
    },

    /// Build the output deck again from the last saved plan
    Rebuild,

    /// Print the named shapes of every library slide
    Inspect {
        /// Print a draft binding entry for this template id instead
        #[arg(long, value_name = "ID")]
        scaffold: Option<u32>,
    },

    /// Cross-check the template catalog against the built-in bindings
    Check,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut config = BuilderConfig::from_env();
    if let Some(library) = cli.library {
        config.library_path = library;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    match cli.command {
        Commands::Build { plan } => {
            let raw = fs::read_to_string(&plan)
                .with_context(|| format!("Failed to read content plan {}", plan.display()))?;
            let report = build_from_plan_text(&config, &raw).context("Deck assembly failed")?;
            print_report(&report);
        }
        Commands::Rebuild => {
            if !config.plan_path.exists() {
                bail!(
                    "{} not found; build from a content plan first",
                    config.plan_path.display()
                );
            }
            let report = rebuild_from_saved_plan(&config).context("Deck rebuild failed")?;
            print_report(&report);
        }
        Commands::Inspect { scaffold } => {
            let library = JsonFileStore::new()
                .open(&config.library_path, OpenMode::ReadOnly)
                .with_context(|| {
                    format!("Failed to open library {}", config.library_path.display())
                })?;
            match scaffold {
                Some(id) => {
                    let draft = inspect::scaffold_template(&library, id)
                        .with_context(|| format!("Cannot scaffold template {id}"))?;
                    print!("{draft}");
                }
                None => print!("{}", inspect::outline(&library)),
            }
        }
        Commands::Check => {
            let catalog = Catalog::load(&config.catalog_path).with_context(|| {
                format!("Failed to load catalog {}", config.catalog_path.display())
            })?;
            let report = catalog.check_against(&Dispatcher::default());
            for id in &report.unbound {
                println!("error: template {id} is selectable but has no bindings");
            }
            for (id, slot) in &report.unread_slots {
                println!("warning: template {id} declares slot '{slot}' that no binding reads");
            }
            if !report.is_ok() {
                bail!("{} selectable templates cannot be built", report.unbound.len());
            }
            println!("{} selectable templates, all bound", catalog.selectable().count());
        }
    }
    Ok(())
}

fn print_report(report: &AssemblyReport) {
    println!(
        "{}: {} slides, {} fields written, {} skipped",
        report.output_path.display(),
        report.slide_count,
        report.written(),
        report.skipped()
    );
}
