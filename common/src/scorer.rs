//! 採点モジュール
//!
//! 条件ごとに独立した加点方式。大文字小文字は区別しない。
//! - タイプ: カテゴリへの部分一致で +30
//! - 用途: 用途リストの先頭から走査し、最初の部分一致で +30
//! - 価格帯: 完全一致で +40

use crate::types::{MatchResult, PcbRecord, UserCriteria};

pub const TYPE_WEIGHT: u32 = 30;
pub const APPLICATION_WEIGHT: u32 = 30;
pub const PRICE_WEIGHT: u32 = 40;

/// 全条件一致時のスコア
pub const PERFECT_SCORE: u32 = TYPE_WEIGHT + APPLICATION_WEIGHT + PRICE_WEIGHT;

/// 1件のレコードを採点する
pub fn score<'a>(record: &'a PcbRecord, criteria: &UserCriteria) -> MatchResult<'a> {
    let mut total = 0;
    let mut reasons = Vec::new();

    if let Some(pcb_type) = criteria.pcb_type() {
        if contains_ignore_case(&record.category, pcb_type) {
            total += TYPE_WEIGHT;
            reasons.push(format!("Matches {} type", pcb_type));
        }
    }

    if let Some(application) = criteria.application() {
        // 理由に載るのは最初に一致した用途のみ
        if let Some(matched) = record
            .applications
            .iter()
            .find(|app| contains_ignore_case(app, application))
        {
            total += APPLICATION_WEIGHT;
            reasons.push(format!("Suitable for {}", matched));
        }
    }

    if let Some(price_tier) = criteria.price_tier() {
        if price_tier.to_lowercase() == record.price_tier.to_lowercase() {
            total += PRICE_WEIGHT;
            reasons.push(format!("Matches {} price range", price_tier));
        }
    }

    MatchResult {
        record,
        score: total,
        reasons,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
