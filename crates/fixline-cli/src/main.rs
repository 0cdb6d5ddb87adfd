//! Fixline CLI
//!
//! Terminal front door to the routing and intake pipeline: classify a
//! complaint text, file a full submission, or inspect the catalog.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use fixline_catalog::{CatalogSeed, CategoryCatalog, MemoryCatalog};
use fixline_core::Priority;
use fixline_intake::{IntakeService, NewComplaint};
use fixline_routing::CategoryRouter;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Route {
            department,
            title,
            description,
            catalog,
            verbose,
        } => {
            init_tracing(verbose);
            let catalog = load_catalog(catalog.as_deref())?;
            let department_id = resolve_department(&catalog, &department)?;

            let router = CategoryRouter::new(Arc::new(catalog))?;
            let prediction = router.predict(&department_id, &title, &description).await?;

            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }

        Commands::Submit {
            department,
            title,
            description,
            category,
            priority,
            catalog,
            verbose,
        } => {
            init_tracing(verbose);
            let catalog = load_catalog(catalog.as_deref())?;
            let department_id = resolve_department(&catalog, &department)?;

            let priority: Priority = priority
                .parse()
                .map_err(|e| anyhow!("invalid --priority: {}", e))?;

            let mut complaint =
                NewComplaint::new(title, description, department_id).with_priority(priority);
            if let Some(category_id) = category {
                complaint = complaint.with_category(category_id);
            }

            let service = IntakeService::new(Arc::new(catalog))?;
            let ticket = service.submit(complaint).await?;

            println!("{}", serde_json::to_string_pretty(&ticket)?);
        }

        Commands::Catalog { catalog, verbose } => {
            init_tracing(verbose);
            let catalog = load_catalog(catalog.as_deref())?;

            for department in catalog.departments().await? {
                println!(
                    "{} ({}) — escalates after {}h",
                    department.name, department.slug, department.escalate_after_hrs
                );
                for category in catalog.categories_in(&department.id).await? {
                    println!("  {} ({})", category.name, category.slug);
                }
            }
        }
    }

    Ok(())
}

/// Load the catalog from a seed file, or fall back to the campus default
fn load_catalog(path: Option<&Path>) -> Result<MemoryCatalog> {
    let seed = match path {
        Some(path) => CatalogSeed::from_file(path)
            .with_context(|| format!("failed to load catalog seed {}", path.display()))?,
        None => CatalogSeed::campus_default(),
    };

    let catalog = seed.build()?;
    info!(
        departments = catalog.department_count(),
        categories = catalog.category_count(),
        "catalog ready"
    );
    Ok(catalog)
}

/// Resolve a department slug to its id, failing loudly on typos
fn resolve_department(catalog: &MemoryCatalog, slug: &str) -> Result<String> {
    catalog
        .department_by_slug(slug)
        .map(|d| d.id.clone())
        .ok_or_else(|| anyhow!("unknown department slug: {}", slug))
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("fixline=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fixline=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
