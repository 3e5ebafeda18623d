//! migrate サブコマンド
//!
//! データベースファイルを作成してマイグレーションを適用し、終了します。

use crate::common::error::ApiError;
use crate::config::DatabaseConfig;
use clap::Args;

/// migrate サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct MigrateArgs {
    /// SQLite database URL
    #[arg(long)]
    pub database_url: Option<String>,
}

/// マイグレーションを実行
pub async fn execute(args: &MigrateArgs) -> Result<(), ApiError> {
    let config = DatabaseConfig::from_env().with_url(args.database_url.clone());
    let pool = crate::db::migrations::initialize_database(&config.url, 1).await?;
    pool.close().await;
    tracing::info!(database_url = %config.url, "Database is up to date");
    Ok(())
}
