//! ログ初期化
//!
//! 出力は標準エラー。優先順位: RUST_LOG → --verbose → 設定ファイルの log_level

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { configured_level };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    // 二重初期化（テスト等）は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
