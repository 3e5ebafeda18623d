//! データベース初期化とマイグレーション実行

use crate::common::error::{ApiError, CommonError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// 同時書き込み時に `SQLITE_BUSY` を返すまでの待機時間
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLiteデータベース接続プールを作成してマイグレーションを実行
///
/// データベースファイルと親ディレクトリが存在しない場合は作成する。
///
/// # Arguments
/// * `database_url` - データベースURL（例: "sqlite:data/db.sqlite"）
/// * `max_connections` - プールの最大接続数
///
/// # Returns
/// * `Ok(SqlitePool)` - 初期化済みデータベースプール
/// * `Err(ApiError)` - 初期化失敗
pub async fn initialize_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, ApiError> {
    if !database_url.starts_with("sqlite:") {
        return Err(CommonError::Config(format!(
            "Unsupported database URL scheme (expected sqlite:): {}",
            database_url
        ))
        .into());
    }
    if max_connections == 0 {
        return Err(CommonError::Config(
            "Database max connections must be at least 1".to_string(),
        )
        .into());
    }
    ensure_parent_dir(database_url)?;

    let mut options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ApiError::Database(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);
    if !is_in_memory(database_url) {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    tracing::info!(database_url = %database_url, "Connecting to database");

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| ApiError::Database(format!("Failed to connect to database: {}", e)))?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// マイグレーションを実行（sqlx::migrate!マクロを使用）
///
/// # Arguments
/// * `pool` - データベース接続プール
///
/// # Returns
/// * `Ok(())` - マイグレーション成功
/// * `Err(ApiError)` - マイグレーション失敗
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), ApiError> {
    tracing::info!("Running database migrations");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| ApiError::Database(format!("Failed to run migrations: {}", e)))?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// SQLiteファイルはディレクトリが存在しないと作成できないため、先に作成しておく
fn ensure_parent_dir(database_url: &str) -> Result<(), ApiError> {
    let Some(path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    // `sqlite::memory:` のような特殊指定はスキップ
    if path.starts_with(':') {
        return Ok(());
    }

    // `sqlite://` 形式に備えてスラッシュを1組だけ除去し、クエリ部分を除外
    let normalized = path.strip_prefix("//").unwrap_or(path);
    let path_without_params = normalized.split('?').next().unwrap_or(normalized);
    let db_path = Path::new(path_without_params);
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::Database(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
