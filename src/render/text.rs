//! プレーンテキスト出力（端末表示用）

use pcb_advisor_common::prompts::{NO_MATCH_MESSAGE, RECOMMENDATION_HEADER};
use pcb_advisor_common::{PcbRecord, RecommendationView};

pub fn recommendations(views: &[RecommendationView]) -> String {
    if views.is_empty() {
        return NO_MATCH_MESSAGE.to_string();
    }

    let mut out = format!("{}\n\n", RECOMMENDATION_HEADER);
    for (i, view) in views.iter().enumerate() {
        out.push_str(&format!("{}. {} ({}%)\n", i + 1, view.name, view.score));
        out.push_str(&format!("   Type: {}  Price: {}\n", view.category, view.price_tier));
        out.push_str(&format!("   Image: {}\n", view.image_ref));
        out.push_str(&format!("   {}\n", view.description));
        for reason in &view.reasons {
            out.push_str(&format!("   ✓ {}\n", reason));
        }
        out.push('\n');
    }
    out
}

pub fn catalog(records: &[PcbRecord]) -> String {
    let width = records.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    records
        .iter()
        .map(|r| format!("{:<width$}  {:<9} {:<8} {}\n", r.name, r.category, r.price_tier, r.applications.join(", ")))
        .collect()
}

pub fn record(record: &PcbRecord) -> String {
    format!(
        "{}\n  Type: {}\n  Price: {}\n  Applications: {}\n  Image: {}\n\n  {}\n",
        record.name,
        record.category,
        record.price_tier,
        record.applications.join(", "),
        record.image_ref,
        record.description
    )
}
