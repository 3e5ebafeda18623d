//! CLI module for product-api
//!
//! Provides the command-line interface for running the server and
//! preparing the database.

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Product API - CRUD REST service for a single product table
#[derive(Parser, Debug)]
#[command(name = "product-api")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PRODUCT_API_HOST                Bind address (default: 127.0.0.1)
    PRODUCT_API_PORT                Listen port (default: 5000)
    PRODUCT_API_DATABASE_URL        SQLite URL (default: db.sqlite next to the binary)
    PRODUCT_API_DB_MAX_CONNECTIONS  Connection pool size (default: 5)
    PRODUCT_API_LOG_LEVEL           Log filter (default: info)
    PRODUCT_API_LOG_DIR             Directory for JSON log files (optional)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve(serve::ServeArgs),
    /// Create the database and apply migrations, then exit
    Migrate(migrate::MigrateArgs),
}
