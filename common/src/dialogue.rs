//! 対話コントローラ
//!
//! タイプ → 用途 → 価格帯 の順に質問する有限状態機械。
//! 不正・空の回答は差し戻さず、既定値を代入して次へ進む。
//! セッション状態は呼び出し側が保持し、submit_answer に渡して受け取る。

use crate::catalog::Catalog;
use crate::engine::recommend;
use crate::prompts::{
    APPLICATION_QUESTION, DEFAULT_APPLICATION, DEFAULT_PRICE_TIER, DEFAULT_TYPE, PRICE_QUESTION,
    TYPE_QUESTION, VALID_PRICE_TIERS, VALID_TYPES,
};
use crate::types::{MatchResult, UserCriteria};
use serde::{Deserialize, Serialize};

/// 対話の状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    #[default]
    AskType,
    AskApplication,
    AskPrice,
    Done,
}

impl DialogueState {
    /// この状態で提示する質問（Doneはなし）
    pub fn question(&self) -> Option<&'static str> {
        match self {
            DialogueState::AskType => Some(TYPE_QUESTION),
            DialogueState::AskApplication => Some(APPLICATION_QUESTION),
            DialogueState::AskPrice => Some(PRICE_QUESTION),
            DialogueState::Done => None,
        }
    }
}

impl std::fmt::Display for DialogueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogueState::AskType => write!(f, "ask_type"),
            DialogueState::AskApplication => write!(f, "ask_application"),
            DialogueState::AskPrice => write!(f, "ask_price"),
            DialogueState::Done => write!(f, "done"),
        }
    }
}

/// 1セッション分の状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub state: DialogueState,
    pub criteria: UserCriteria,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最初の質問
    pub fn opening_prompt() -> &'static str {
        TYPE_QUESTION
    }

    pub fn is_done(&self) -> bool {
        self.state == DialogueState::Done
    }
}

/// 1ターン分の応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<'a> {
    /// 次の質問
    Prompt(&'static str),
    /// 推薦結果（セッションにつき1回だけ）
    Recommendations {
        criteria: UserCriteria,
        matches: Vec<MatchResult<'a>>,
    },
    /// 推薦済みセッションへの入力
    Finished,
}

/// 回答を1つ受け取り、次の状態と応答を返す
pub fn submit_answer<'a>(session: Session, catalog: &'a Catalog, raw: &str) -> (Session, Reply<'a>) {
    // 回答は加工せずに判定・保存する
    let lowered = raw.to_lowercase();
    let Session { state, mut criteria } = session;

    match state {
        DialogueState::AskType => {
            let pcb_type = if VALID_TYPES.contains(&lowered.as_str()) {
                capitalize(&lowered)
            } else {
                tracing::debug!(input = raw, "unrecognized type, using default");
                DEFAULT_TYPE.to_string()
            };
            criteria.pcb_type = Some(pcb_type);
            advance(criteria, DialogueState::AskApplication)
        }
        DialogueState::AskApplication => {
            let application = if raw.is_empty() {
                tracing::debug!("empty application, using default");
                DEFAULT_APPLICATION.to_string()
            } else {
                raw.to_string()
            };
            criteria.application = Some(application);
            advance(criteria, DialogueState::AskPrice)
        }
        DialogueState::AskPrice => {
            let price_tier = if VALID_PRICE_TIERS.contains(&lowered.as_str()) {
                capitalize(&lowered)
            } else {
                tracing::debug!(input = raw, "unrecognized price tier, using default");
                DEFAULT_PRICE_TIER.to_string()
            };
            criteria.price_tier = Some(price_tier);

            let matches = recommend(catalog, &criteria);
            tracing::debug!(?criteria, matches = matches.len(), "session complete");

            // 推薦後は条件を破棄する
            let next = Session {
                state: DialogueState::Done,
                criteria: UserCriteria::default(),
            };
            (next, Reply::Recommendations { criteria, matches })
        }
        DialogueState::Done => (
            Session {
                state: DialogueState::Done,
                criteria,
            },
            Reply::Finished,
        ),
    }
}

fn advance<'a>(criteria: UserCriteria, next: DialogueState) -> (Session, Reply<'a>) {
    tracing::debug!(state = %next, "dialogue advanced");
    let prompt = next.question().unwrap_or(TYPE_QUESTION);
    (Session { state: next, criteria }, Reply::Prompt(prompt))
}

/// 先頭のみ大文字、残りは小文字にする
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
