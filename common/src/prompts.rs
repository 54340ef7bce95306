//! 対話で使う語彙と文言
//!
//! CLIの各出力形式で共有される:
//! - VALID_TYPES / VALID_PRICE_TIERS: 受け付ける回答（小文字）
//! - DEFAULT_*: 不正・空の回答時に代入する値
//! - *_QUESTION: 各ステップの質問文

/// PCBタイプとして受け付ける回答
pub const VALID_TYPES: &[&str] = &["basic", "advanced", "flexible", "complex"];

/// 価格帯として受け付ける回答
pub const VALID_PRICE_TIERS: &[&str] = &["low", "moderate", "high"];

pub const DEFAULT_TYPE: &str = "Basic";
pub const DEFAULT_APPLICATION: &str = "Medical";
pub const DEFAULT_PRICE_TIER: &str = "Low";

pub const TYPE_QUESTION: &str =
    "What type of PCB are you interested in? (e.g., Basic, Advanced, Flexible, Complex)";

pub const APPLICATION_QUESTION: &str =
    "What applications are you focusing on? (e.g., Medical, Consumer electronics, Power sensors, etc.)";

pub const PRICE_QUESTION: &str = "What price range are you looking for? (Low, Moderate, High)";

pub const RECOMMENDATION_HEADER: &str =
    "Here are some PCB recommendations based on your preferences:";

pub const NO_MATCH_MESSAGE: &str =
    "Sorry, no PCBs matched your preferences. Try adjusting your inputs.";

pub const FINISHED_MESSAGE: &str =
    "This session already produced its recommendations. Start a new session to ask again.";
