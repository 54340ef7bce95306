//! 表示用レコードへの変換
//!
//! マークアップは扱わない。描画は呼び出し側の責務。

use crate::types::MatchResult;
use serde::{Deserialize, Serialize};

/// 表示用の推薦結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    pub name: String,
    /// 一致率（%）
    pub score: u32,
    pub image_ref: String,
    pub category: String,
    pub price_tier: String,
    pub description: String,
    pub reasons: Vec<String>,
}

pub fn format_recommendation(result: &MatchResult<'_>) -> RecommendationView {
    let record = result.record;
    RecommendationView {
        name: record.name.clone(),
        score: result.score,
        image_ref: record.image_ref.clone(),
        category: record.category.clone(),
        price_tier: record.price_tier.clone(),
        description: record.description.clone(),
        reasons: result.reasons.clone(),
    }
}
