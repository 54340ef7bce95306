//! PCB Advisor Common Library
//!
//! CLIと他のフロントエンドで共有されるカタログ・採点・対話ロジック

pub mod types;
pub mod error;
pub mod prompts;
pub mod catalog;
pub mod scorer;
pub mod engine;
pub mod dialogue;
pub mod format;

pub use types::{MatchResult, PcbRecord, UserCriteria};
pub use error::{Error, Result};
pub use catalog::Catalog;
pub use scorer::score;
pub use engine::recommend;
pub use dialogue::{submit_answer, DialogueState, Reply, Session};
pub use format::{format_recommendation, RecommendationView};

