//! Product API Server Entry Point

use clap::Parser;
use product_api::cli::{serve::ServeArgs, Cli, Commands};
use product_api::common::error::ApiError;
use product_api::config::{DatabaseConfig, LogConfig};
use product_api::{db, logging, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // guardはプロセス終了まで保持する（drop時にファイルログをフラッシュ）
    let _log_guard = match logging::init(&LogConfig::from_env()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Migrate(args)) => product_api::cli::migrate::execute(&args).await,
        Some(Commands::Serve(args)) => run_server(args).await,
        // サブコマンドなしは環境変数のみでserve
        None => run_server(ServeArgs::default()).await,
    };

    if let Err(e) = result {
        tracing::error!("Fatal: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_server(args: ServeArgs) -> Result<(), ApiError> {
    let server_config = args.server_config();
    let db_config = DatabaseConfig::from_env().with_url(args.database_url);

    info!(
        database_url = %db_config.url,
        max_connections = db_config.max_connections,
        "Initializing database"
    );
    let pool = db::migrations::initialize_database(&db_config.url, db_config.max_connections).await?;

    let state = AppState::new(pool.clone());
    let result = server::run(state, &server_config.bind_addr()).await;

    pool.close().await;
    result
}
