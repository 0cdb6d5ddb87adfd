use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fixline")]
#[command(author, version, about = "Campus complaint routing and intake")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Route a complaint text and print the prediction
    Route {
        /// Department slug (e.g. water, internet)
        #[arg(short, long)]
        department: String,

        /// Complaint title
        #[arg(short, long)]
        title: String,

        /// Complaint description
        #[arg(long)]
        description: String,

        /// Catalog seed file (YAML); built-in campus seed if omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Submit a complaint through the full intake pipeline
    Submit {
        /// Department slug
        #[arg(short, long)]
        department: String,

        /// Complaint title
        #[arg(short, long)]
        title: String,

        /// Complaint description
        #[arg(long)]
        description: String,

        /// Explicit category id (skips auto-routing)
        #[arg(long)]
        category: Option<String>,

        /// Priority: LOW, MEDIUM, HIGH, or URGENT
        #[arg(short, long, default_value = "MEDIUM")]
        priority: String,

        /// Catalog seed file (YAML); built-in campus seed if omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the departments and categories in the catalog
    Catalog {
        /// Catalog seed file (YAML); built-in campus seed if omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
