use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pcb-advisor")]
#[command(about = "対話式PCB選定アドバイザー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（省略時は設定ファイル・組み込みカタログ）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 3つの質問に答えて推薦を受ける
    Chat {
        /// 標準入力から1行ずつ回答を読む（パイプ用）
        #[arg(long)]
        plain: bool,

        /// 会話履歴をJSONで保存
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// 出力形式 (markdown/text/json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// 条件を直接指定して推薦（既定値の補完なし）
    Recommend {
        /// PCBタイプ
        #[arg(short = 't', long = "type")]
        pcb_type: Option<String>,

        /// 用途
        #[arg(short, long)]
        application: Option<String>,

        /// 価格帯 (Low/Moderate/High)
        #[arg(short, long)]
        price: Option<String>,

        /// 出力形式 (markdown/text/json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// カタログ一覧を表示
    Catalog {
        /// 出力形式 (markdown/text/json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// カタログの1件を表示
    Show {
        /// レコード名（完全一致）
        #[arg(required = true)]
        name: String,

        /// 出力形式 (markdown/text/json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のカタログファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// カタログ設定を解除（組み込みに戻す）
        #[arg(long)]
        clear_catalog: bool,

        /// 既定の出力形式を設定
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use markdown, text, or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
