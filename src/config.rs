use crate::error::{AdvisorError, Result};
use pcb_advisor_common::Catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "PCB_ADVISOR_CATALOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_format() -> String {
    "markdown".into()
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_format: default_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読み込み失敗時の扱い
    ///
    /// `allow_default` が真なら既定値で続行する（configサブコマンドで修復するため）
    pub fn recover(loaded: Result<Self>, allow_default: bool) -> Result<Self> {
        match loaded {
            Ok(config) => Ok(config),
            Err(e) if allow_default => {
                tracing::warn!("設定ファイルを読み込めません。既定値で続行します: {}", e);
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdvisorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pcb-advisor").join("config.json"))
    }

    /// 使用するカタログファイル
    ///
    /// 優先順位: 引数 → 環境変数 → 設定ファイル（なければ組み込みカタログ）
    pub fn resolve_catalog_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }

        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.catalog_path.clone()
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(AdvisorError::CatalogNotFound(path.display().to_string()));
        }
        // 保存前に読み込めることを確認
        Catalog::from_file(&path)?;
        self.catalog_path = Some(path);
        self.save()
    }
}

/// カタログを読み込む（パス未指定なら組み込み）
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(AdvisorError::CatalogNotFound(path.display().to_string()));
            }
            Ok(Catalog::from_file(path)?)
        }
        None => {
            tracing::debug!("using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}
