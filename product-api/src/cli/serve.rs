//! serve サブコマンド
//!
//! APIサーバーを起動します。

use clap::Args;

/// serve サブコマンドの引数
///
/// 未指定のフラグは環境変数（`config`）の値を使う。
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// SQLite database URL
    #[arg(long)]
    pub database_url: Option<String>,
}

impl ServeArgs {
    /// 環境変数由来の設定にCLIフラグを上書きする
    pub fn server_config(&self) -> crate::config::ServerConfig {
        let env = crate::config::ServerConfig::from_env();
        crate::config::ServerConfig::from_args(
            self.host.clone().unwrap_or(env.host),
            self.port.unwrap_or(env.port),
        )
    }
}
