//! 推薦の総合テスト
//!
//! 組み込みカタログに対する採点・並び順・対話の一連の流れを検証

use pcb_advisor_common::{
    format_recommendation, recommend, submit_answer, Catalog, DialogueState, PcbRecord, Reply, Session,
    UserCriteria,
};

fn record(name: &str, category: &str, applications: &[&str], price_tier: &str) -> PcbRecord {
    PcbRecord {
        name: name.into(),
        category: category.into(),
        applications: applications.iter().map(|a| a.to_string()).collect(),
        price_tier: price_tier.into(),
        description: format!("{} description", name),
        image_ref: format!("{}.jpg", name),
    }
}

/// Complex / Medical / High は Multi-Layer PCBs のみが満点
#[test]
fn test_complex_medical_high() {
    let catalog = Catalog::builtin();
    let results = recommend(&catalog, &UserCriteria::new("Complex", "Medical", "High"));

    assert_eq!(results.len(), 1);
    let view = format_recommendation(&results[0]);
    assert_eq!(view.name, "Multi-Layer PCBs");
    assert_eq!(view.category, "Complex");
    assert_eq!(view.score, 100);
    assert_eq!(
        view.reasons,
        vec![
            "Matches Complex type",
            "Suitable for Medical equipment",
            "Matches High price range",
        ]
    );
}

/// どれにも一致しない条件は空
#[test]
fn test_nothing_matches() {
    let catalog = Catalog::builtin();
    let results = recommend(&catalog, &UserCriteria::new("Unknown", "Nonexistent", "Unknown"));
    assert!(results.is_empty());
}

/// 満点同士は挿入順に関係なく名前順
#[test]
fn test_perfect_tie_break_alphabetical() {
    let forward = Catalog::from_records(vec![
        record("Beta", "Flexible", &["Cameras"], "Moderate"),
        record("Alpha", "Flexible", &["Cameras"], "Moderate"),
    ])
    .unwrap();
    let reversed = Catalog::from_records(vec![
        record("Alpha", "Flexible", &["Cameras"], "Moderate"),
        record("Beta", "Flexible", &["Cameras"], "Moderate"),
    ])
    .unwrap();

    let criteria = UserCriteria::new("Flexible", "Cameras", "Moderate");
    for catalog in [&forward, &reversed] {
        let names: Vec<_> = recommend(catalog, &criteria)
            .iter()
            .map(|r| r.record.name.clone())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }
}

/// 部分一致の同点はカタログ順を保つ
#[test]
fn test_partial_tie_break_catalog_order() {
    let catalog = Catalog::from_records(vec![
        record("Zulu", "Rigid", &["Radar"], "High"),
        record("Alpha", "Rigid", &["Radar"], "High"),
        record("Mike", "Rigid", &["Radar"], "High"),
    ])
    .unwrap();

    let results = recommend(&catalog, &UserCriteria::new("Basic", "Sonar", "High"));
    let names: Vec<_> = results.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, vec!["Zulu", "Alpha", "Mike"]);
    assert!(results.iter().all(|r| r.score == 40));
}

/// 対話の各ステップで不正入力は既定値になり、最後に推薦が返る
#[test]
fn test_dialogue_end_to_end_with_defaults() {
    let catalog = Catalog::builtin();

    let (session, reply) = submit_answer(Session::new(), &catalog, "???");
    assert_eq!(session.state, DialogueState::AskApplication);
    assert_eq!(session.criteria.pcb_type.as_deref(), Some("Basic"));
    assert!(matches!(reply, Reply::Prompt(_)));

    let (session, _) = submit_answer(session, &catalog, "");
    assert_eq!(session.criteria.application.as_deref(), Some("Medical"));

    let (session, reply) = submit_answer(session, &catalog, "premium");
    assert!(session.is_done());

    match reply {
        Reply::Recommendations { criteria, matches } => {
            assert_eq!(criteria, UserCriteria::new("Basic", "Medical", "Low"));
            let names: Vec<_> = matches.iter().map(|m| m.record.name.as_str()).collect();
            assert_eq!(names, vec!["Single Sided PCBs", "Multi-Layer PCBs", "Rigid-Flex PCBs"]);
        }
        other => panic!("推薦が返らない: {:?}", other),
    }
}

/// 回答は前後の空白も含めてそのまま扱う
#[test]
fn test_dialogue_answers_are_not_trimmed() {
    let catalog = Catalog::builtin();

    let (session, _) = submit_answer(Session::new(), &catalog, " complex ");
    assert_eq!(session.criteria.pcb_type.as_deref(), Some("Basic"));

    let (session, _) = submit_answer(session, &catalog, "   ");
    assert_eq!(session.criteria.application.as_deref(), Some("   "));

    let (_, reply) = submit_answer(session, &catalog, "low");
    match reply {
        Reply::Recommendations { matches, .. } => {
            let ranked: Vec<_> = matches.iter().map(|m| (m.record.name.as_str(), m.score)).collect();
            assert_eq!(ranked, vec![("Single Sided PCBs", 70)]);
        }
        other => panic!("推薦が返らない: {:?}", other),
    }
}
