//! ロギング初期化ユーティリティ
//!
//! 標準出力への人間向けログと、任意でディレクトリ配下への日次ローテーションJSONログを出力する。

use crate::common::error::CommonError;
use crate::config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// JSONログファイル名のプレフィックス（`product-api.log.YYYY-MM-DD`）
pub const LOG_FILE_PREFIX: &str = "product-api.log";

/// フィルタ文字列を検証してEnvFilterを構築する
pub fn build_filter(level: &str) -> Result<EnvFilter, CommonError> {
    EnvFilter::try_new(level)
        .map_err(|e| CommonError::Config(format!("Invalid log filter '{}': {}", level, e)))
}

/// グローバルなtracing subscriberを初期化する
///
/// ファイル出力を有効にした場合は返された`WorkerGuard`をプロセス終了まで保持すること。
/// drop時にバッファがフラッシュされる。
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, CommonError> {
    let filter = build_filter(&config.level)?;

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| {
                CommonError::Config(format!(
                    "Failed to create log directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()
        .map_err(|e| CommonError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
