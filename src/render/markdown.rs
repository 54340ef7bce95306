//! Markdown出力（チャット表示用）

use pcb_advisor_common::prompts::{NO_MATCH_MESSAGE, RECOMMENDATION_HEADER};
use pcb_advisor_common::{PcbRecord, RecommendationView};

pub fn recommendations(views: &[RecommendationView]) -> String {
    if views.is_empty() {
        return NO_MATCH_MESSAGE.to_string();
    }

    let mut out = format!("{}\n", RECOMMENDATION_HEADER);
    for view in views {
        out.push_str(&recommendation(view));
        out.push('\n');
    }
    out
}

pub fn recommendation(view: &RecommendationView) -> String {
    let reasons: String = view
        .reasons
        .iter()
        .map(|reason| format!("- ✓ {}\n", reason))
        .collect();

    format!(
        "### PCB Recommendation: **{name}**\n\
         🔍 **Match Score:** {score}%\n\n\
         ![PCB Image]({image})\n\n\
         #### 🔧 Key Details:\n\
         - **Type:** {category}\n\
         - **Price:** {price}\n\n\
         #### 📋 Description:\n\
         {description}\n\n\
         #### 🤔 Why This PCB?\n\
         {reasons}",
        name = view.name,
        score = view.score,
        image = view.image_ref,
        category = view.category,
        price = view.price_tier,
        description = view.description,
        reasons = reasons,
    )
}

pub fn catalog(records: &[PcbRecord]) -> String {
    let mut out = String::from("| Name | Type | Price | Applications |\n|---|---|---|---|\n");
    for r in records {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            r.name,
            r.category,
            r.price_tier,
            r.applications.join(", ")
        ));
    }
    out
}

pub fn record(record: &PcbRecord) -> String {
    let applications: String = record
        .applications
        .iter()
        .map(|a| format!("- {}\n", a))
        .collect();

    format!(
        "### {}\n\n![PCB Image]({})\n\n- **Type:** {}\n- **Price:** {}\n\n#### Applications:\n{}\n#### 📋 Description:\n{}\n",
        record.name, record.image_ref, record.category, record.price_tier, applications, record.description
    )
}
