//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to legacy variable names, plus the typed configuration structs built on
//! top of them.

use std::path::PathBuf;

/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// デフォルトのリッスンポート
pub const DEFAULT_PORT: u16 = 5000;

/// デフォルトのDBファイル名（実行ファイルと同じディレクトリに置く）
pub const DEFAULT_DATABASE_FILE: &str = "db.sqlite";

/// デフォルトのプール最大接続数
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Get an environment variable with fallback to a legacy name
///
/// If the preferred variable name is set, returns its value.
/// If only the legacy variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use product_api::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("PRODUCT_API_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Unparseable values are logged and replaced by `default`.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    match get_env_with_fallback(new_name, old_name) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    "Environment variable '{}' has invalid value '{}', using default",
                    new_name,
                    raw
                );
                default
            }
        },
        None => default,
    }
}

/// HTTPサーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// リッスンポート
    pub port: u16,
}

impl ServerConfig {
    /// 環境変数から読み込む
    pub fn from_env() -> Self {
        let host = get_env_with_fallback_or("PRODUCT_API_HOST", "HOST", DEFAULT_HOST);
        let port = get_env_with_fallback_parse("PRODUCT_API_PORT", "PORT", DEFAULT_PORT);
        Self { host, port }
    }

    /// CLI引数から構築する
    pub fn from_args(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// データベース設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite接続URL
    pub url: String,
    /// プールの最大接続数
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// 環境変数から読み込む
    pub fn from_env() -> Self {
        let url = get_env_with_fallback("PRODUCT_API_DATABASE_URL", "DATABASE_URL")
            .unwrap_or_else(default_database_url);
        let max_connections = get_env_with_fallback_parse(
            "PRODUCT_API_DB_MAX_CONNECTIONS",
            "PRODUCT_API_DB_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        );
        Self {
            url,
            max_connections,
        }
    }

    /// URLだけ差し替える（CLIの `--database-url` 用）
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        self
    }
}

/// ロギング設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// tracingフィルタ文字列
    pub level: String,
    /// JSONログファイルの出力先（未設定ならファイル出力なし）
    pub dir: Option<PathBuf>,
}

impl LogConfig {
    /// 環境変数から読み込む
    pub fn from_env() -> Self {
        // RUST_LOG は非推奨名ではなく標準の既定値
        let level = std::env::var("PRODUCT_API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let dir = std::env::var("PRODUCT_API_LOG_DIR").ok().map(PathBuf::from);
        Self { level, dir }
    }
}

/// 実行ファイルと同じディレクトリにある `db.sqlite` を指すURL
///
/// 実行ファイルの場所が取得できない場合はカレントディレクトリを使う。
pub fn default_database_url() -> String {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    format!("sqlite:{}", dir.join(DEFAULT_DATABASE_FILE).display())
}
