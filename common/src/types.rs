//! 推薦ロジックの型定義
//!
//! - PcbRecord: カタログの1件（読み込み後は不変）
//! - UserCriteria: 対話で集めた選定条件
//! - MatchResult: 1件分の採点結果（推薦リクエストごとに再計算）

use serde::{Deserialize, Serialize};

/// カタログに登録されたPCB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcbRecord {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub applications: Vec<String>,
    pub price_tier: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_ref: String,
}

/// ユーザーの選定条件
///
/// 空文字列は未指定と同じ扱いになる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCriteria {
    pub pcb_type: Option<String>,
    pub application: Option<String>,
    pub price_tier: Option<String>,
}

impl UserCriteria {
    pub fn new(
        pcb_type: impl Into<String>,
        application: impl Into<String>,
        price_tier: impl Into<String>,
    ) -> Self {
        Self {
            pcb_type: Some(pcb_type.into()),
            application: Some(application.into()),
            price_tier: Some(price_tier.into()),
        }
    }

    pub fn pcb_type(&self) -> Option<&str> {
        non_empty(&self.pcb_type)
    }

    pub fn application(&self) -> Option<&str> {
        non_empty(&self.application)
    }

    pub fn price_tier(&self) -> Option<&str> {
        non_empty(&self.price_tier)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// 採点結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub record: &'a PcbRecord,
    pub score: u32,
    pub reasons: Vec<String>,
}

impl MatchResult<'_> {
    pub fn is_perfect(&self) -> bool {
        self.score == crate::scorer::PERFECT_SCORE
    }
}
