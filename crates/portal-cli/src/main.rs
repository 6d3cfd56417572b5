mod group;
mod inspect;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "portal-cli")]
#[command(about = "Group catalogue products into size/weight variant families")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Group a product list read from a JSON file or stdin
    Group {
        /// JSON file holding an array of products or an object with a
        /// `products` array; reads stdin when omitted or `-`
        #[arg(long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Fetch every catalogue page from the configured API and group it
    Fetch {
        #[arg(long)]
        brand: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Free-text search over product names
        #[arg(long)]
        search: Option<String>,

        /// Backend sort key, passed through verbatim
        #[arg(long)]
        sort: Option<String>,

        /// Only products flagged as new
        #[arg(long)]
        new_only: bool,

        /// Page size; defaults to `PORTAL_CATALOGUE_PER_PAGE`
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        per_page: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show how individual product names are normalized
    Inspect {
        /// Product names to inspect
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, Args)]
struct OutputArgs {
    /// Print a flat product list (group members first) instead of groups
    #[arg(long)]
    flatten: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = portal_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Group { input, output } => group::run_group(input.as_deref(), output.flatten)?,
        Commands::Fetch {
            brand,
            category,
            search,
            sort,
            new_only,
            per_page,
            output,
        } => {
            let query = portal_catalogue::CatalogueQuery {
                per_page: per_page.unwrap_or(config.catalogue_per_page),
                brand,
                category,
                search,
                sort,
                new_only,
                ..portal_catalogue::CatalogueQuery::default()
            };
            group::run_fetch(&config, &query, output.flatten).await?;
        }
        Commands::Inspect { names } => inspect::run_inspect(&names),
    }

    Ok(())
}
