//! 推薦エンジン
//!
//! 全レコードを採点し、満点のものがあればそれだけを名前順で返す。
//! 満点がなければ部分一致をスコア降順で返す（同点はカタログ順）。

use crate::catalog::Catalog;
use crate::scorer::{score, PERFECT_SCORE};
use crate::types::{MatchResult, UserCriteria};

/// 条件に合うレコードを推薦順に並べて返す
///
/// # Returns
/// 一致なしの場合は空のVec（エラーではない）
pub fn recommend<'a>(catalog: &'a Catalog, criteria: &UserCriteria) -> Vec<MatchResult<'a>> {
    let mut perfect = Vec::new();
    let mut partial = Vec::new();

    for record in catalog.get_all() {
        let result = score(record, criteria);
        if result.score == PERFECT_SCORE {
            perfect.push(result);
        } else if result.score > 0 {
            partial.push(result);
        }
    }

    tracing::debug!(
        perfect = perfect.len(),
        partial = partial.len(),
        "scored {} records",
        catalog.len()
    );

    if !perfect.is_empty() {
        perfect.sort_by(|a, b| a.record.name.cmp(&b.record.name));
        return perfect;
    }

    // sort_by は安定ソートなので同点はカタログ順のまま
    partial.sort_by(|a, b| b.score.cmp(&a.score));
    partial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PcbRecord;

    fn record(name: &str, category: &str, applications: &[&str], price_tier: &str) -> PcbRecord {
        PcbRecord {
            name: name.into(),
            category: category.into(),
            applications: applications.iter().map(|a| a.to_string()).collect(),
            price_tier: price_tier.into(),
            description: String::new(),
            image_ref: String::new(),
        }
    }

    fn names<'a>(results: &'a [MatchResult<'_>]) -> Vec<&'a str> {
        results.iter().map(|r| r.record.name.as_str()).collect()
    }

    #[test]
    fn test_complex_medical_high_single_perfect_match() {
        let catalog = Catalog::builtin();
        let results = recommend(&catalog, &UserCriteria::new("Complex", "Medical", "High"));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.name, "Multi-Layer PCBs");
        assert_eq!(results[0].score, 100);
        assert_eq!(results[0].reasons.len(), 3);
        assert_eq!(results[0].reasons[1], "Suitable for Medical equipment");
    }

    #[test]
    fn test_unknown_criteria_yields_empty() {
        let catalog = Catalog::builtin();
        let results = recommend(&catalog, &UserCriteria::new("Unknown", "Nonexistent", "Unknown"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_perfect_matches_sorted_by_name() {
        let catalog = Catalog::from_records(vec![
            record("Zeta", "Basic", &["Relays"], "Low"),
            record("Partial", "Basic", &["Toys"], "Low"),
            record("Alpha", "Basic", &["Relays"], "Low"),
        ])
        .unwrap();

        let results = recommend(&catalog, &UserCriteria::new("Basic", "Relays", "Low"));
        // 満点があれば部分一致は含めない
        assert_eq!(names(&results), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_partial_ties_keep_catalog_order() {
        let catalog = Catalog::from_records(vec![
            record("C", "Rigid", &["Relays"], "Low"),
            record("B", "Basic", &["Toys"], "High"),
            record("A", "Rigid", &["Relays"], "Low"),
            record("D", "Rigid", &["Toys"], "High"),
        ])
        .unwrap();

        let criteria = UserCriteria::new("Basic", "Relays", "Low");
        let results = recommend(&catalog, &criteria);

        // C, A: 用途+価格=70 / B: タイプ=30 / D: 0点は除外
        assert_eq!(names(&results), vec!["C", "A", "B"]);
        assert_eq!(
            results.iter().map(|r| r.score).collect::<Vec<_>>(),
            vec![70, 70, 30]
        );
    }

    #[test]
    fn test_partial_sorted_descending() {
        let catalog = Catalog::builtin();
        let results = recommend(&catalog, &UserCriteria::new("Basic", "Mobile", "Moderate"));

        assert!(!results.is_empty());
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|r| r.score > 0 && r.score < 100));
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let catalog = Catalog::builtin();
        let criteria = UserCriteria::new("Flexible", "Mobile", "Moderate");

        let first = recommend(&catalog, &criteria);
        let second = recommend(&catalog, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_criteria_yields_empty() {
        let catalog = Catalog::builtin();
        assert!(recommend(&catalog, &UserCriteria::default()).is_empty());
    }
}
