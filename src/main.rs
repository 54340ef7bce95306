use clap::Parser;
use pcb_advisor::{chat, cli, config, error, logging, render};
use pcb_advisor_common::{format_recommendation, recommend, UserCriteria};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{AdvisorError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load();
    let log_level = loaded.as_ref().map(|c| c.log_level.as_str()).unwrap_or("warn");
    logging::init(cli.verbose, log_level);

    // 壊れた設定ファイルでも config サブコマンドは動かす
    let config = Config::recover(loaded, matches!(cli.command, Commands::Config { .. }))?;

    // 設定ファイルの形式が壊れていてもmarkdownで続行する
    let configured_format: OutputFormat = config.default_format.parse().unwrap_or_else(|e| {
        tracing::warn!("{}", e);
        OutputFormat::default()
    });

    match cli.command {
        Commands::Chat { plain, transcript, format } => {
            let path = config.resolve_catalog_path(cli.catalog.as_deref());
            let catalog = config::load_catalog(path.as_deref())?;
            let format = format.unwrap_or(configured_format);

            let history = if plain {
                let stdin = std::io::stdin();
                chat::run_scripted(&catalog, format, stdin.lock(), std::io::stdout())?
            } else {
                println!("🔧 PCB Advisor\n");
                chat::run_interactive(&catalog, format)?
            };

            if let Some(path) = transcript {
                history.save(&path)?;
                println!("✔ 会話履歴を保存: {}", path.display());
            }
        }

        Commands::Recommend { pcb_type, application, price, format } => {
            let path = config.resolve_catalog_path(cli.catalog.as_deref());
            let catalog = config::load_catalog(path.as_deref())?;

            let criteria = UserCriteria {
                pcb_type,
                application,
                price_tier: price,
            };
            let views: Vec<_> = recommend(&catalog, &criteria)
                .iter()
                .map(format_recommendation)
                .collect();

            let output = render::render_recommendations(&views, format.unwrap_or(configured_format))?;
            println!("{}", output);
        }

        Commands::Catalog { format } => {
            let path = config.resolve_catalog_path(cli.catalog.as_deref());
            let catalog = config::load_catalog(path.as_deref())?;

            let output = match format.unwrap_or(configured_format) {
                // 読み込み可能なカタログファイルとして出力
                OutputFormat::Json => catalog.to_json()?,
                other => render::render_catalog(catalog.get_all(), other)?,
            };
            println!("{}", output);
        }

        Commands::Show { name, format } => {
            let path = config.resolve_catalog_path(cli.catalog.as_deref());
            let catalog = config::load_catalog(path.as_deref())?;

            let record = catalog
                .find(&name)
                .ok_or_else(|| AdvisorError::RecordNotFound(name.clone()))?;
            println!("{}", render::render_record(record, format.unwrap_or(configured_format))?);
        }

        Commands::Config { set_catalog, clear_catalog, set_format, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                config.set_catalog_path(path)?;
                println!("✔ カタログを設定しました");
            }

            if clear_catalog {
                config.catalog_path = None;
                config.save()?;
                println!("✔ 組み込みカタログに戻しました");
            }

            if let Some(format) = set_format {
                config.default_format = format.to_string();
                config.save()?;
                println!("✔ 出力形式を設定しました: {}", format);
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                match config.resolve_catalog_path(cli.catalog.as_deref()) {
                    Some(path) => println!("  カタログ: {}", path.display()),
                    None => println!("  カタログ: 組み込み"),
                }
                println!("  出力形式: {}", config.default_format);
                println!("  ログレベル: {}", config.log_level);
            }
        }
    }

    Ok(())
}
