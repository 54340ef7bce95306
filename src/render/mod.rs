pub mod markdown;
pub mod text;

use crate::cli::OutputFormat;
use crate::error::Result;
use pcb_advisor_common::{PcbRecord, RecommendationView};

/// 推薦結果を描画する
///
/// 空の場合はJSONなら `[]`、それ以外は一致なしメッセージ
pub fn render_recommendations(views: &[RecommendationView], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(markdown::recommendations(views)),
        OutputFormat::Text => Ok(text::recommendations(views)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(views)?),
    }
}

pub fn render_catalog(records: &[PcbRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(markdown::catalog(records)),
        OutputFormat::Text => Ok(text::catalog(records)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

pub fn render_record(record: &PcbRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(markdown::record(record)),
        OutputFormat::Text => Ok(text::record(record)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
    }
}
